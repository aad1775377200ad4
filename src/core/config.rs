//! Board configuration.
//!
//! A board is described by its size and an ordered list of links, each
//! naming a source cell and the cell a player is moved to on landing there.
//! The list is ordered so that validation errors are reported
//! deterministically, independent of any map's iteration order.
//!
//! Values are signed at this boundary so that negative input can be
//! rejected by [`build_board`](crate::board::build_board) instead of being
//! unrepresentable.

use serde::{Deserialize, Serialize};

use super::error::ConfigurationError;
use crate::board::{build_board, Board};

/// Size of the reference board.
pub const STANDARD_BOARD_SIZE: i64 = 100;

/// Ladders of the reference board, low -> high.
const STANDARD_LADDERS: [(i64, i64); 10] = [
    (2, 38),
    (7, 14),
    (8, 31),
    (15, 26),
    (21, 42),
    (28, 84),
    (36, 44),
    (51, 67),
    (71, 91),
    (78, 98),
];

/// Snakes of the reference board, high -> low.
const STANDARD_SNAKES: [(i64, i64); 10] = [
    (16, 6),
    (46, 25),
    (49, 11),
    (62, 19),
    (64, 60),
    (74, 53),
    (89, 68),
    (92, 88),
    (95, 75),
    (99, 80),
];

/// A single source -> destination link.
///
/// Serialized as a two-element array `[source, destination]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Link {
    /// Cell that triggers the redirect.
    pub source: i64,
    /// Cell the player ends up on.
    pub destination: i64,
}

impl Link {
    /// Create a new link.
    #[must_use]
    pub const fn new(source: i64, destination: i64) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl From<(i64, i64)> for Link {
    fn from((source, destination): (i64, i64)) -> Self {
        Self::new(source, destination)
    }
}

impl From<Link> for (i64, i64) {
    fn from(link: Link) -> Self {
        (link.source, link.destination)
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

/// Complete board configuration.
///
/// ```
/// use snakes_ladders::core::BoardConfig;
///
/// let config = BoardConfig::new(10)
///     .with_link(2, 8)
///     .with_link(7, 3);
///
/// let board = config.build().unwrap();
/// assert_eq!(board.size(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of cells, indexed `0..board_size`.
    pub board_size: i64,

    /// Links in declaration order.
    #[serde(default)]
    pub links: Vec<Link>,
}

impl BoardConfig {
    /// Create a configuration with no links.
    #[must_use]
    pub fn new(board_size: i64) -> Self {
        Self {
            board_size,
            links: Vec::new(),
        }
    }

    /// The reference 100-cell board with 10 ladders and 10 snakes.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_BOARD_SIZE)
            .with_links(STANDARD_LADDERS)
            .with_links(STANDARD_SNAKES)
    }

    /// Add a link.
    #[must_use]
    pub fn with_link(mut self, source: i64, destination: i64) -> Self {
        self.links.push(Link::new(source, destination));
        self
    }

    /// Add several links, keeping their order.
    #[must_use]
    pub fn with_links<I, L>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Link>,
    {
        self.links.extend(links.into_iter().map(Into::into));
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// Expected shape: `{"board_size": 100, "links": [[2, 38], [16, 6]]}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this configuration to JSON.
    pub fn to_json(&self) -> Result<String, ConfigurationError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validate and build the board.
    pub fn build(&self) -> Result<Board, ConfigurationError> {
        build_board(self.board_size, &self.links)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_config() {
        let config = BoardConfig::standard();
        assert_eq!(config.board_size, 100);
        assert_eq!(config.links.len(), 20);

        let ladders = config
            .links
            .iter()
            .filter(|l| l.destination > l.source)
            .count();
        assert_eq!(ladders, 10);
    }

    #[test]
    fn test_builder_keeps_order() {
        let config = BoardConfig::new(10)
            .with_link(7, 3)
            .with_links([(2, 8), (5, 1)]);

        assert_eq!(
            config.links,
            vec![Link::new(7, 3), Link::new(2, 8), Link::new(5, 1)]
        );
    }

    #[test]
    fn test_from_json() {
        let config = BoardConfig::from_json(r#"{"board_size": 10, "links": [[2, 8], [7, 3]]}"#)
            .unwrap();
        assert_eq!(config, BoardConfig::new(10).with_link(2, 8).with_link(7, 3));
    }

    #[test]
    fn test_from_json_without_links() {
        let config = BoardConfig::from_json(r#"{"board_size": 12}"#).unwrap();
        assert_eq!(config.board_size, 12);
        assert!(config.links.is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = BoardConfig::from_json(r#"{"board_size": "big"}"#).unwrap_err();
        assert!(matches!(err, ConfigurationError::Parse(_)));
    }

    #[test]
    fn test_oversized_json_board() {
        let config = BoardConfig::from_json(r#"{"board_size": 9223372036854775807}"#).unwrap();
        assert!(matches!(
            config.build(),
            Err(ConfigurationError::BoardTooLarge(i64::MAX))
        ));
    }

    #[test]
    fn test_json_shape() {
        let json = BoardConfig::new(5).with_link(1, 3).to_json().unwrap();
        assert_eq!(json, r#"{"board_size":5,"links":[[1,3]]}"#);
    }

    #[test]
    fn test_link_display() {
        assert_eq!(format!("{}", Link::new(16, 6)), "16 -> 6");
    }
}
