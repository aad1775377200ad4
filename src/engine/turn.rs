//! The per-turn movement rule.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CellKind};

/// What happened on one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// Value rolled.
    pub roll: u32,
    /// Position after moving, before any redirect.
    pub landed: usize,
    /// Position at the end of the turn.
    pub position: usize,
    /// The redirect taken, if the player landed on a ladder or snake.
    pub redirect: Option<CellKind>,
}

impl TurnResult {
    /// Check if this turn reached or passed the end of a board of `board_size`.
    #[must_use]
    pub fn is_win(&self, board_size: usize) -> bool {
        self.landed >= board_size
    }
}

impl std::fmt::Display for TurnResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player rolled: {}, new position: {}", self.roll, self.landed)?;
        if let Some(kind) = self.redirect {
            write!(f, "\nNew position after {}: {}", kind, self.position)?;
        }
        Ok(())
    }
}

/// Move a player at `position` by `roll` and apply at most one redirect.
///
/// Landing at or past the end of the board wins; that cell is never looked
/// up. Otherwise a ladder or snake on the landing cell moves the player to
/// its destination, and the destination's own kind is ignored.
#[must_use]
pub fn resolve_turn(board: &Board, position: usize, roll: u32) -> TurnResult {
    let landed = position.saturating_add(roll as usize);

    let redirect = if board.is_win(landed) {
        None
    } else {
        board[landed].redirect()
    };

    TurnResult {
        roll,
        landed,
        position: redirect.map_or(landed, |(_, dest)| dest),
        redirect: redirect.map(|(kind, _)| kind),
    }
}
