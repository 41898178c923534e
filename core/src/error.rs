use alloc::string::String;
use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unrecognized cell value {value:?} at ({row}, {col})")]
    UnknownMarker {
        row: usize,
        col: usize,
        value: String,
    },
    #[error("Mine and empty markers must differ, both are {0:?}")]
    ConflictingMarkers(char),
    #[error("Marker {0:?} cannot be whitespace or a digit")]
    InvalidMarker(char),
    #[error("Invalid coordinates {0:?}")]
    InvalidCoords(Coord2),
}

impl ScanError {
    /// Whether the error describes malformed input that no retry can fix.
    pub const fn is_invalid_input(&self) -> bool {
        match self {
            Self::RaggedRow { .. } => true,
            Self::UnknownMarker { .. } => true,
            Self::ConflictingMarkers(_) => true,
            Self::InvalidMarker(_) => true,
            Self::InvalidCoords(_) => false,
        }
    }
}

pub type Result<T> = core::result::Result<T, ScanError>;
