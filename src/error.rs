//! Error types
//!
//! Validation failures and unknown names are reported to the user and leave
//! the board untouched. Storage and JSON failures come from the backend.

/// Input that was rejected before any state changed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Snapshot name must not be empty")]
    EmptyName,

    #[error(
        "Snapshot \"{name}\" is {saved_width}x{saved_height} but the board is {width}x{height}"
    )]
    DimensionMismatch {
        name: String,
        saved_width: usize,
        saved_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Malformed snapshot data: {0}")]
    Malformed(String),
}

/// Crate-wide error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No snapshot named \"{0}\"")]
    NotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse error classes, used to pick the notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Storage(_) | Error::Json(_) => ErrorKind::Storage,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(
            Error::from(ValidationError::EmptyName).kind(),
            ErrorKind::Validation
        );
        assert_eq!(Error::NotFound("x".into()).kind(), ErrorKind::NotFound);
        assert_eq!(Error::Storage("quota".into()).kind(), ErrorKind::Storage);
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = ValidationError::DimensionMismatch {
            name: "glider".into(),
            saved_width: 10,
            saved_height: 8,
            width: 20,
            height: 16,
        };
        assert_eq!(
            err.to_string(),
            "Snapshot \"glider\" is 10x8 but the board is 20x16"
        );
    }
}
