// src/error/types.rs
use thiserror::Error;

/// Errors that abort a whole import call.
///
/// Record-level rejections never surface here; they become report lines.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("XML payload error: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("XML syntax error: {0}")]
    XmlSyntax(#[from] quick_xml::Error),

    #[error("Expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    #[error("JSON payload error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_root_message() {
        let err = AppError::UnexpectedRoot {
            expected: "Plays".to_string(),
            found: "Casts".to_string(),
        };
        assert_eq!(err.to_string(), "Expected root element <Plays>, found <Casts>");
    }
}
