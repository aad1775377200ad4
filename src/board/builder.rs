//! Board construction from a link list.

use rustc_hash::FxHashSet;
use tracing::debug;

use super::cell::BoardCell;
use super::table::Board;
use crate::core::{ConfigurationError, Link};

/// Build a board of `board_size` cells from an ordered link list.
///
/// Every cell starts plain. Each link classifies its *source* cell as a
/// ladder or snake by comparing endpoints; destination cells are left as
/// they are.
///
/// Links are validated in order and the first problem found is returned:
/// source range, destination range, self link, then duplicate source.
///
/// ```
/// use snakes_ladders::board::{build_board, CellKind};
/// use snakes_ladders::core::Link;
///
/// let board = build_board(10, &[Link::new(2, 8), Link::new(7, 3)]).unwrap();
/// assert_eq!(board.cell(2).unwrap().kind(), CellKind::Ladder);
/// assert_eq!(board.cell(7).unwrap().kind(), CellKind::Snake);
/// assert_eq!(board.cell(8).unwrap().kind(), CellKind::Plain);
/// ```
pub fn build_board(board_size: i64, links: &[Link]) -> Result<Board, ConfigurationError> {
    if board_size <= 0 {
        return Err(ConfigurationError::NonPositiveBoardSize(board_size));
    }

    let size = usize::try_from(board_size)
        .map_err(|_| ConfigurationError::BoardTooLarge(board_size))?;
    let mut cells: Vec<BoardCell> = Vec::new();
    cells
        .try_reserve_exact(size)
        .map_err(|_| ConfigurationError::BoardTooLarge(board_size))?;
    cells.resize(size, BoardCell::plain());

    let in_range = |cell: i64| (0..board_size).contains(&cell);
    let mut seen = FxHashSet::default();

    for link in links {
        if !in_range(link.source) {
            return Err(ConfigurationError::SourceOutOfRange {
                cell: link.source,
                board_size,
            });
        }
        if !in_range(link.destination) {
            return Err(ConfigurationError::DestinationOutOfRange {
                cell: link.source,
                destination: link.destination,
                board_size,
            });
        }
        if link.source == link.destination {
            return Err(ConfigurationError::SelfLink(link.source));
        }
        if !seen.insert(link.source) {
            return Err(ConfigurationError::DuplicateSource(link.source));
        }

        let source = link.source as usize;
        cells[source] = BoardCell::linked(source, link.destination as usize);
    }

    let board = Board::from_cells(cells);
    debug!(
        size = board.size(),
        ladders = board.ladders().count(),
        snakes = board.snakes().count(),
        "built board"
    );
    Ok(board)
}
