//! Turn engine: dice sources, the movement rule, and the game loop.
//!
//! ## Components
//!
//! - [`DiceSource`]: where rolls come from (seeded RNG, script, closure)
//! - [`resolve_turn`]: one roll applied to one position
//! - [`Game`]: a lazy, fused sequence of [`TurnResult`]s ending on a win

mod dice;
mod game;
mod turn;

pub use dice::{DiceSource, RandomDice, ScriptedDice, DIE_SIDES};
pub use game::{play_game, Game, GameRecord, GameStatus};
pub use turn::{resolve_turn, TurnResult};
