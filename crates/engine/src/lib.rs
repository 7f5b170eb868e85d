//! Game engine and session driver.
//!
//! [`GridGameEngine`] picks a game from a [`GameConfig`] and forwards the
//! [`GridGame`] calls to it. [`Session`] runs the fixed-cadence loop: it draws
//! through a [`FrameSink`], waits for input on an [`InputPoll`] until the tick
//! deadline, then advances the game. Neither seam knows about terminals, so
//! the loop runs the same under tests as in the binary.

pub mod driver;
pub mod engine;

pub use grid_arcade_core as core;
pub use grid_arcade_types as types;

pub use driver::{Command, FrameSink, InputPoll, Session, SessionConfig, SessionSummary};
pub use engine::GridGameEngine;

#[doc(no_inline)]
pub use grid_arcade_core::{GameConfig, GridGame, GridSnapshot};
