//! Persistent session record
//!
//! Three values survive the process: the high score, the last session's final
//! score, and how that session ended. They live in one JSON file under the
//! platform data directory. Reads are tolerant: a missing, unreadable, or
//! malformed file loads as an empty record. Writes are synchronous and
//! fire-and-forget; a failed write never interrupts play.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::core::OutcomeSink;
use crate::types::SessionOutcome;

/// The on-disk record. Field names match the persisted keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "highScore", default)]
    pub high_score: u32,
    #[serde(rename = "lastScore", default)]
    pub last_score: u32,
    #[serde(rename = "resultType", default, skip_serializing_if = "Option::is_none")]
    pub result_type: Option<String>,
}

impl SessionRecord {
    pub fn outcome(&self) -> Option<SessionOutcome> {
        self.result_type.as_deref().and_then(SessionOutcome::from_str)
    }
}

/// File-backed score store.
pub struct ScoreStore {
    path: PathBuf,
    record: SessionRecord,
}

impl ScoreStore {
    /// Open the store at the platform default location.
    pub fn open_default() -> Self {
        Self::open(default_path())
    }

    /// Open the store at an explicit path, loading whatever is there.
    pub fn open(path: PathBuf) -> Self {
        let record = load_record(&path);
        Self { path, record }
    }

    pub fn high_score(&self) -> u32 {
        self.record.high_score
    }

    pub fn record(&self) -> &SessionRecord {
        &self.record
    }

    /// Re-read the record from disk. The results screen renders from the
    /// persisted values, not from live game state.
    pub fn reload(&mut self) -> &SessionRecord {
        self.record = load_record(&self.path);
        &self.record
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.record)?)?;
        Ok(())
    }
}

impl OutcomeSink for ScoreStore {
    fn record_high_score(&mut self, high_score: u32) {
        // The persisted high score never decreases.
        if high_score <= self.record.high_score {
            return;
        }
        self.record.high_score = high_score;
        let _ = self.save();
    }

    fn record_outcome(&mut self, last_score: u32, outcome: SessionOutcome) {
        self.record.last_score = last_score;
        self.record.result_type = Some(outcome.as_str().to_string());
        let _ = self.save();
    }
}

fn load_record(path: &Path) -> SessionRecord {
    let Ok(contents) = fs::read_to_string(path) else {
        return SessionRecord::default();
    };
    serde_json::from_str(&contents).unwrap_or_default()
}

fn default_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tui-breakout")
        .join("session.json")
}
