//! Board table: cells, classification and construction.
//!
//! A board is built once from a [`BoardConfig`](crate::core::BoardConfig)
//! and is read-only afterwards. Each cell is `Plain`, a `Ladder` or a
//! `Snake`; the kind is derived from the link's endpoints, never supplied.

mod builder;
mod cell;
mod table;

pub use builder::build_board;
pub use cell::{BoardCell, CellKind};
pub use table::Board;
