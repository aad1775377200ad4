//! # snakes-ladders
//!
//! A single-player Snakes and Ladders engine.
//!
//! ## Design Principles
//!
//! 1. **Derived classification**: A link is a ladder if it points forward
//!    and a snake if it points back. Nothing else is trusted.
//!
//! 2. **Immutable board**: The board is validated and built once, then only
//!    read. Replaying a game needs nothing but the board and the dice.
//!
//! 3. **Visible termination**: A game is a lazy, fused iterator of turns
//!    that ends on a win, not an infinite loop with a hidden break.
//!
//! ## Modules
//!
//! - `core`: Errors, board configuration, deterministic RNG
//! - `board`: Cell kinds, the board table, board construction
//! - `engine`: Dice sources, the per-turn rule, the game sequence
//!
//! ```
//! use snakes_ladders::{play_game, BoardConfig, GameStatus, RandomDice};
//!
//! let board = BoardConfig::standard().build().unwrap();
//! let record = play_game(&board, RandomDice::seeded(7)).run().unwrap();
//! assert_eq!(record.status, GameStatus::Won);
//! ```

pub mod board;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, ConfigurationError, GameError, GameRng, GameRngState, Link, STANDARD_BOARD_SIZE,
};

pub use crate::board::{build_board, Board, BoardCell, CellKind};

pub use crate::engine::{
    play_game, resolve_turn, DiceSource, Game, GameRecord, GameStatus, RandomDice, ScriptedDice,
    TurnResult, DIE_SIDES,
};
