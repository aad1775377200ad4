//! Error types for board construction and play.
//!
//! Both kinds are fatal to the operation that raised them. The library never
//! retries or substitutes defaults; callers fix the input and start again.

/// A malformed board configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("board size must be positive, got {0}")]
    NonPositiveBoardSize(i64),

    #[error("board size {0} is too large to allocate")]
    BoardTooLarge(i64),

    #[error("link source {cell} is outside the board [0, {board_size})")]
    SourceOutOfRange { cell: i64, board_size: i64 },

    #[error("link {cell} -> {destination} points outside the board [0, {board_size})")]
    DestinationOutOfRange {
        cell: i64,
        destination: i64,
        board_size: i64,
    },

    #[error("cell {0} links to itself")]
    SelfLink(i64),

    #[error("cell {0} is the source of more than one link")]
    DuplicateSource(i64),

    #[error("invalid board configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure while a game is being played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("dice source exhausted on turn {turn}")]
    ExhaustedDiceSource { turn: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_messages() {
        let err = ConfigurationError::SourceOutOfRange {
            cell: 100,
            board_size: 100,
        };
        assert_eq!(
            err.to_string(),
            "link source 100 is outside the board [0, 100)"
        );

        assert_eq!(
            ConfigurationError::SelfLink(7).to_string(),
            "cell 7 links to itself"
        );
    }

    #[test]
    fn test_game_error_message() {
        let err = GameError::ExhaustedDiceSource { turn: 3 };
        assert_eq!(err.to_string(), "dice source exhausted on turn 3");
    }
}
