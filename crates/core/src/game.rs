//! The grid game state machine shared by every variant.

use crate::snapshot::GridSnapshot;
use crate::types::{GameKind, GameStatus, Intent};

/// A bounded-grid game advanced one tick at a time.
///
/// Implementations are pure in-memory state machines: no I/O, no timing, no
/// threads. A driver records input with [`GridGame::set_intent`], advances with
/// [`GridGame::tick`] at its own cadence, and draws from a snapshot.
pub trait GridGame {
    fn kind(&self) -> GameKind;

    /// Rebuild the round from scratch. Dimensions are clamped to what the
    /// variant supports, so this never fails.
    fn reset(&mut self, width: u16, height: u16);

    /// Record the input for the next tick. Never advances the game.
    fn set_intent(&mut self, intent: Intent);

    /// Apply the pending intent exactly once and return the resulting status.
    fn tick(&mut self) -> GameStatus;

    fn status(&self) -> GameStatus;

    fn score(&self) -> u32;

    /// Refresh `out` from the current state.
    fn snapshot_into(&self, out: &mut GridSnapshot);

    fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

/// Pause handling shared by every variant.
///
/// Returns `Some(status)` when the tick is fully consumed by pause logic:
/// the game is terminal, a pause toggle was pending, or the game is paused.
pub(crate) fn resolve_pause(status: &mut GameStatus, pending: Option<Intent>) -> Option<GameStatus> {
    if status.is_terminal() {
        return Some(*status);
    }
    match (pending, *status) {
        (Some(Intent::TogglePause), GameStatus::Running) => {
            *status = GameStatus::Paused;
            Some(*status)
        }
        (Some(Intent::TogglePause), GameStatus::Paused) => {
            *status = GameStatus::Running;
            Some(*status)
        }
        (_, GameStatus::Paused) => Some(*status),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, PlayerId};

    #[test]
    fn test_pause_toggles_both_ways() {
        let mut status = GameStatus::Running;
        assert_eq!(
            resolve_pause(&mut status, Some(Intent::TogglePause)),
            Some(GameStatus::Paused)
        );
        assert_eq!(
            resolve_pause(&mut status, Some(Intent::TogglePause)),
            Some(GameStatus::Running)
        );
    }

    #[test]
    fn test_paused_swallows_other_intents() {
        let mut status = GameStatus::Paused;
        assert_eq!(
            resolve_pause(&mut status, Some(Intent::Steer(Direction::Up))),
            Some(GameStatus::Paused)
        );
        assert_eq!(resolve_pause(&mut status, None), Some(GameStatus::Paused));
    }

    #[test]
    fn test_running_falls_through() {
        let mut status = GameStatus::Running;
        assert_eq!(resolve_pause(&mut status, Some(Intent::Commit)), None);
        assert_eq!(resolve_pause(&mut status, None), None);
    }

    #[test]
    fn test_terminal_never_changes() {
        let mut status = GameStatus::Won(PlayerId::Two);
        assert_eq!(
            resolve_pause(&mut status, Some(Intent::TogglePause)),
            Some(GameStatus::Won(PlayerId::Two))
        );
        assert_eq!(status, GameStatus::Won(PlayerId::Two));
    }
}
