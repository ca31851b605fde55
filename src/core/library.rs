use std::cmp;
use std::fmt;
use std::fmt::{Display, Formatter};
use crate::books::domain::isbn::IsbnError;

#[derive(Debug, Clone, PartialEq)]
pub enum LibraryError {
    InvalidIsbn(IsbnError),
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
        index: Option<i64>,
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
    pub fn not_found(message: &str, index: Option<i64>) -> LibraryError {
        LibraryError::NotFound { message: message.to_string(), index }
    }

    pub fn book_not_found(index: i64) -> LibraryError {
        LibraryError::not_found(format!("Book with id {} not found", index).as_str(), Some(index))
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
}

impl From<IsbnError> for LibraryError {
    fn from(err: IsbnError) -> Self {
        LibraryError::InvalidIsbn(err)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(format!("invalid book payload: {}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::InvalidIsbn(err) => {
                write!(f, "{}", err)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MAX_LIMIT: i64 = 100;

// PaginationParams is built fresh for every query; out of range input is clamped
// rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaginationParams {
    pub skip: usize,
    pub limit: usize,
}

impl PaginationParams {
    pub fn new(skip: i64, limit: i64) -> Self {
        PaginationParams {
            skip: cmp::max(0, skip) as usize,
            limit: limit.clamp(1, MAX_LIMIT) as usize,
        }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        PaginationParams::new(0, DEFAULT_LIMIT)
    }
}

// It defines abstraction for paginated result
#[derive(Debug, Clone)]
pub struct PaginatedResult<T> {
    // offset into the filtered records
    pub skip: usize,
    // page size
    pub limit: usize,
    // number of records matching the filter, before paging
    pub total: usize,
    // list of records
    pub records: Vec<T>,
}

impl<T> PaginatedResult<T> {
    pub(crate) fn new(pagination: PaginationParams, total: usize, records: Vec<T>) -> Self {
        PaginatedResult {
            skip: pagination.skip,
            limit: pagination.limit,
            total,
            records,
        }
    }

    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> PaginatedResult<U> {
        PaginatedResult {
            skip: self.skip,
            limit: self.limit,
            total: self.total,
            records: self.records.iter().map(f).collect(),
        }
    }
}
