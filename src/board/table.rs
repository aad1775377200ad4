//! The immutable board table.

use serde::{Deserialize, Serialize};

use super::builder::build_board;
use super::cell::{BoardCell, CellKind};
use crate::core::{BoardConfig, ConfigurationError, Link};

/// An ordered, read-only table of cells indexed `0..size`.
///
/// Index 0 is the start cell and `size - 1` the winning cell. Reaching or
/// passing `size` wins the game.
///
/// Serializes as its [`BoardConfig`]; deserializing goes back through
/// [`build_board`], so a loaded board is validated like a built one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardConfig", into = "BoardConfig")]
pub struct Board {
    cells: Vec<BoardCell>,
}

impl Board {
    pub(crate) fn from_cells(cells: Vec<BoardCell>) -> Self {
        Self { cells }
    }

    /// Number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Index of the last cell.
    #[must_use]
    pub fn winning_cell(&self) -> usize {
        self.cells.len() - 1
    }

    /// Check if a position is at or beyond the end of the board.
    #[must_use]
    pub fn is_win(&self, position: usize) -> bool {
        position >= self.cells.len()
    }

    /// Get a cell, or `None` if `index` is off the board.
    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&BoardCell> {
        self.cells.get(index)
    }

    #[must_use]
    pub fn cells(&self) -> &[BoardCell] {
        &self.cells
    }

    /// Ladders as `(source, destination)` pairs, in board order.
    pub fn ladders(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.links_of(CellKind::Ladder)
    }

    /// Snakes as `(source, destination)` pairs, in board order.
    pub fn snakes(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.links_of(CellKind::Snake)
    }

    /// Links whose destination is itself a ladder or snake.
    ///
    /// Play never follows more than one redirect per turn, so on a board that
    /// yields anything here the second hop is simply ignored.
    pub fn chained_redirects(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| cell.destination().map(|dest| (index, dest)))
            .filter(|&(_, dest)| self.cells[dest].is_special())
    }

    fn links_of(&self, kind: CellKind) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(index, cell)| match cell.redirect() {
                Some((k, dest)) if k == kind => Some((index, dest)),
                _ => None,
            })
    }
}

impl TryFrom<BoardConfig> for Board {
    type Error = ConfigurationError;

    fn try_from(config: BoardConfig) -> Result<Self, Self::Error> {
        build_board(config.board_size, &config.links)
    }
}

impl From<Board> for BoardConfig {
    fn from(board: Board) -> Self {
        let links = board
            .cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                cell.destination()
                    .map(|dest| Link::new(index as i64, dest as i64))
            });
        BoardConfig::new(board.size() as i64).with_links(links)
    }
}

impl std::ops::Index<usize> for Board {
    type Output = BoardCell;

    fn index(&self, index: usize) -> &BoardCell {
        &self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board() {
        let board = BoardConfig::standard().build().unwrap();

        assert_eq!(board.size(), 100);
        assert_eq!(board.winning_cell(), 99);
        assert_eq!(board.ladders().count(), 10);
        assert_eq!(board.snakes().count(), 10);
        assert_eq!(board.ladders().next(), Some((2, 38)));
        assert_eq!(board.snakes().last(), Some((99, 80)));
    }

    #[test]
    fn test_standard_board_has_no_chains() {
        let board = BoardConfig::standard().build().unwrap();
        assert_eq!(board.chained_redirects().count(), 0);
    }

    #[test]
    fn test_is_win() {
        let board = build_board(10, &[]).unwrap();
        assert!(!board.is_win(9));
        assert!(board.is_win(10));
        assert!(board.is_win(15));
    }

    #[test]
    fn test_serde_round_trip() {
        let board = BoardConfig::standard().build().unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
    }

    #[test]
    fn test_deserialize_validates() {
        // Destination past the end of a one-cell board
        let result = serde_json::from_str::<Board>(r#"{"board_size": 1, "links": [[0, 50]]}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Board>(r#"{"board_size": 0}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<Board>(r#"{"board_size": 4, "links": [[1, 1]]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_cell_lookup() {
        let board = build_board(10, &[Link::new(7, 3)]).unwrap();
        assert!(board.cell(10).is_none());
        assert_eq!(board[7].destination(), Some(3));
    }
}
