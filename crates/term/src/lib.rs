//! Terminal rendering for grid games.
//!
//! A small, game-oriented rendering layer: views draw snapshots into a
//! framebuffer, and the renderer flushes only the changed runs of cells to the
//! terminal. No widget toolkit is involved.
//!
//! Board cells are drawn 2 columns wide by default so squares look square in
//! most terminal fonts; tic-tac-toe uses 3 so the cursor can bracket a mark.

pub mod fb;
pub mod frontend;
pub mod game_view;
pub mod renderer;

pub use grid_arcade_core as core;
pub use grid_arcade_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use frontend::TerminalFrontend;
pub use game_view::{GridView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
