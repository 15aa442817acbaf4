use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    // The catalog document could not be read, parsed or written.
    Database {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn missing_field(field: &str, operation: &str, location: &str) -> LibraryError {
        LibraryError::validation(
            format!("'{}' is required in the request {} when calling '{}'.", field, location, operation).as_str(),
            Some(field.to_string()))
    }

    pub fn book_not_found<T: Display>(id: T) -> LibraryError {
        LibraryError::not_found(format!("Could not find a book with an id of {}", id).as_str())
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::runtime(
            format!("io failure {}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {}", err).as_str())
    }
}

// Reason codes are only shown by `Debug`.
impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Database { message, .. } => write!(f, "{}", message),
            LibraryError::NotFound { message } => write!(f, "{}", message),
            LibraryError::Validation { message, .. } => write!(f, "{}", message),
            LibraryError::Serialization { message } => write!(f, "{}", message),
            LibraryError::Runtime { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog store and services.
pub type LibraryResult<T> = Result<T, LibraryError>;
