//! A single-player game as a lazy sequence of turns.
//!
//! ## Termination
//!
//! Every roll moves the player forward by at least one cell before any
//! redirect, so a game on a finite board ends with probability 1. It is not
//! structurally bounded: a board full of snakes can keep a player busy for a
//! long time. Callers that need a hard limit stop pulling turns, e.g. with
//! [`Iterator::take`].
//!
//! ```
//! use snakes_ladders::core::BoardConfig;
//! use snakes_ladders::engine::{play_game, GameStatus, ScriptedDice};
//!
//! let board = BoardConfig::new(10).with_link(2, 8).build().unwrap();
//! let record = play_game(&board, ScriptedDice::new([2, 5])).run().unwrap();
//!
//! assert_eq!(record.status, GameStatus::Won);
//! assert_eq!(record.turns.len(), 2);
//! assert_eq!(record.turns[0].position, 8);
//! ```

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::dice::DiceSource;
use super::turn::{resolve_turn, TurnResult};
use crate::board::{Board, CellKind};
use crate::core::GameError;

/// Where a game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Still rolling.
    #[default]
    Playing,
    /// The player reached or passed the end of the board.
    Won,
}

/// Start a new game on `board`, drawing rolls from `dice`.
///
/// The player starts off the board at position 0. Each call starts a fresh
/// game; the board is never modified.
pub fn play_game<D: DiceSource>(board: &Board, dice: D) -> Game<'_, D> {
    Game::new(board, dice)
}

/// An in-progress game.
///
/// Iterating yields one `Ok(TurnResult)` per turn. Iteration ends after the
/// winning turn, or after a single `Err` if the dice run dry.
#[derive(Debug)]
pub struct Game<'a, D> {
    board: &'a Board,
    dice: D,
    position: usize,
    turns_played: u64,
    status: GameStatus,
    failed: bool,
}

impl<'a, D: DiceSource> Game<'a, D> {
    #[must_use]
    pub fn new(board: &'a Board, dice: D) -> Self {
        Self {
            board,
            dice,
            position: 0,
            turns_played: 0,
            status: GameStatus::Playing,
            failed: false,
        }
    }

    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Current player position. Past the end of the board once won.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn turns_played(&self) -> u64 {
        self.turns_played
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Play one turn.
    ///
    /// Returns `Ok(None)` if the game is already won.
    pub fn step(&mut self) -> Result<Option<TurnResult>, GameError> {
        if self.status == GameStatus::Won {
            return Ok(None);
        }

        let turn = self.turns_played + 1;
        let roll = self
            .dice
            .roll()
            .ok_or(GameError::ExhaustedDiceSource { turn })?;

        let result = resolve_turn(self.board, self.position, roll);
        self.position = result.position;
        self.turns_played = turn;

        trace!(
            turn,
            roll,
            landed = result.landed,
            position = result.position,
            redirect = ?result.redirect,
            "turn"
        );

        if result.is_win(self.board.size()) {
            self.status = GameStatus::Won;
            debug!(turns = turn, position = self.position, "player wins");
        }

        Ok(Some(result))
    }

    /// Play until the game is won.
    pub fn run(mut self) -> Result<GameRecord, GameError> {
        let turns = self.by_ref().collect::<Result<Vec<_>, _>>()?;
        Ok(GameRecord {
            turns,
            status: self.status,
        })
    }

    /// Give back the dice, e.g. to continue a seeded stream in another game.
    pub fn into_dice(self) -> D {
        self.dice
    }
}

impl<D: DiceSource> Iterator for Game<'_, D> {
    type Item = Result<TurnResult, GameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.step() {
            Ok(result) => result.map(Ok),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

impl<D: DiceSource> FusedIterator for Game<'_, D> {}

/// A finished game, suitable for replay output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub turns: Vec<TurnResult>,
    pub status: GameStatus,
}

impl GameRecord {
    /// Position after the last turn, or 0 if no turn was played.
    #[must_use]
    pub fn final_position(&self) -> usize {
        self.turns.last().map_or(0, |t| t.position)
    }

    #[must_use]
    pub fn ladders_climbed(&self) -> usize {
        self.count_redirects(CellKind::Ladder)
    }

    #[must_use]
    pub fn snakes_hit(&self) -> usize {
        self.count_redirects(CellKind::Snake)
    }

    fn count_redirects(&self, kind: CellKind) -> usize {
        self.turns
            .iter()
            .filter(|t| t.redirect == Some(kind))
            .count()
    }
}
