//! Error types for board operations.

use std::fmt;

/// Error type for square addressing failures.
///
/// Selecting an empty square or asking for moves that do not exist is
/// not an error; those cases yield empty results instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Flat index outside 0..64
    IndexOutOfRange { index: usize },
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "Index {index} out of range (must be 0-63)")
            }
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range() {
        let err = SquareError::IndexOutOfRange { index: 64 };
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_rank_bounds() {
        let err = SquareError::RankOutOfBounds { rank: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_file_bounds() {
        let err = SquareError::FileOutOfBounds { file: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "z9".to_string(),
        };
        assert!(err.to_string().contains("z9"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = SquareError::IndexOutOfRange { index: 70 };
        let err2 = SquareError::IndexOutOfRange { index: 70 };
        assert_eq!(err1, err2);
    }

    #[test]
    fn test_error_clone() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
