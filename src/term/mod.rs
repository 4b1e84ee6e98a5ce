//! Terminal rendering module.
//!
//! `fb` and `canvas` are pure data; `game_view`/`results_view` map state into
//! framebuffers; `renderer` owns the real terminal.

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod results_view;

pub use canvas::PixelCanvas;
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use results_view::ResultsView;
