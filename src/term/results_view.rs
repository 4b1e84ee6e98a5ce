//! ResultsView: end screen rendered from the persisted session record.
//!
//! The game screen never renders this; after a terminal transition the frame
//! loop re-reads the store and hands the record here, mirroring a separate
//! results page that only sees what was persisted.

use crate::store::SessionRecord;
use crate::term::fb::{CellStyle, FrameBuffer};
use crate::term::game_view::Viewport;
use crate::types::{Rgb, SessionOutcome};

pub struct ResultsView;

impl ResultsView {
    pub fn render(record: &SessionRecord, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (banner, banner_fg) = match record.outcome() {
            Some(SessionOutcome::Clear) => ("ALL CLEAR", Rgb::new(90, 220, 120)),
            _ => ("GAME OVER", Rgb::new(220, 80, 80)),
        };

        let mid_y = viewport.height / 2;
        put_centered(
            &mut fb,
            mid_y.saturating_sub(3),
            banner,
            CellStyle {
                fg: banner_fg,
                bg: Rgb::new(0, 0, 0),
                bold: true,
            },
        );

        let value = CellStyle::default();
        put_centered(
            &mut fb,
            mid_y.saturating_sub(1),
            &format!("SCORE       {}", record.last_score),
            value,
        );
        put_centered(
            &mut fb,
            mid_y,
            &format!("HIGH SCORE  {}", record.high_score),
            value,
        );

        put_centered(
            &mut fb,
            mid_y.saturating_add(2),
            "R: play again   Q: quit",
            CellStyle {
                fg: Rgb::new(130, 130, 130),
                bg: Rgb::new(0, 0, 0),
                bold: false,
            },
        );

        fb
    }
}

fn put_centered(fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
    let w = text.chars().count() as u16;
    let x = fb.width().saturating_sub(w) / 2;
    fb.put_str(x, y, text, style);
}
