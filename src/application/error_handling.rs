// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors to a category and a process exit code
// - Never changes the error message itself
// - Record-level rejections never get here; only whole-call failures do

use crate::error::AppError;

/// Error categories reported by the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// The payload could not be decoded (65, EX_DATAERR)
    Payload,

    /// Database/persistence error (74, EX_IOERR)
    Database,

    /// File system error (66, EX_NOINPUT)
    FileSystem,

    /// Other/unknown error (70, EX_SOFTWARE)
    Internal,
}

impl ErrorType {
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::Xml(_)
            | AppError::XmlSyntax(_)
            | AppError::UnexpectedRoot { .. }
            | AppError::Serialization(_) => ErrorType::Payload,
            AppError::Database(_) | AppError::Pool(_) => ErrorType::Database,
            AppError::Io(_) => ErrorType::FileSystem,
            AppError::Other(_) => ErrorType::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ErrorType::Payload => 65,
            ErrorType::FileSystem => 66,
            ErrorType::Internal => 70,
            ErrorType::Database => 74,
        }
    }
}

/// Exit code for a failed command
pub fn exit_code(error: &AppError) -> u8 {
    ErrorType::from_app_error(error).exit_code()
}
