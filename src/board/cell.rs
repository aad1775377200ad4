//! Board cells and their classification.

use serde::{Deserialize, Serialize};

/// What happens when a player lands on a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// No redirect.
    #[default]
    Plain,
    /// Moves the player forward.
    Ladder,
    /// Moves the player back.
    Snake,
}

impl CellKind {
    /// Classify a link by comparing its endpoints.
    ///
    /// Forward links are ladders and backward links are snakes. Whatever the
    /// configuration author meant, the magnitudes decide. Equal endpoints are
    /// `Plain`; the board builder rejects them before they get here.
    #[must_use]
    pub fn classify(source: usize, destination: usize) -> Self {
        match destination.cmp(&source) {
            std::cmp::Ordering::Greater => CellKind::Ladder,
            std::cmp::Ordering::Less => CellKind::Snake,
            std::cmp::Ordering::Equal => CellKind::Plain,
        }
    }

    /// Check if this is a ladder or a snake.
    #[must_use]
    pub fn is_special(self) -> bool {
        !matches!(self, CellKind::Plain)
    }
}

impl std::fmt::Display for CellKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CellKind::Plain => "Plain",
            CellKind::Ladder => "Ladder",
            CellKind::Snake => "Snake",
        };
        f.write_str(name)
    }
}

/// One position on the board.
///
/// A plain cell has no destination; ladders and snakes always have one.
/// Cells only come out of the board builder, so they serialize but never
/// deserialize on their own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BoardCell {
    kind: CellKind,
    destination: Option<usize>,
}

impl BoardCell {
    /// A cell with no redirect.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            kind: CellKind::Plain,
            destination: None,
        }
    }

    /// A cell at `index` that sends the player to `destination`.
    #[must_use]
    pub fn linked(index: usize, destination: usize) -> Self {
        match CellKind::classify(index, destination) {
            CellKind::Plain => Self::plain(),
            kind => Self {
                kind,
                destination: Some(destination),
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    #[must_use]
    pub fn destination(&self) -> Option<usize> {
        self.destination
    }

    /// The redirect applied on landing, if any.
    #[must_use]
    pub fn redirect(&self) -> Option<(CellKind, usize)> {
        self.destination.map(|dest| (self.kind, dest))
    }

    #[must_use]
    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }
}
