//! Core types: errors, board configuration, RNG.
//!
//! Everything the board and the turn engine share lives here.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BoardConfig, Link, STANDARD_BOARD_SIZE};
pub use error::{ConfigurationError, GameError};
pub use rng::{GameRng, GameRngState};
