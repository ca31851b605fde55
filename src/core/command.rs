use std::fmt;
use std::fmt::{Display, Formatter};
use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, PartialEq)]
pub enum CommandError {
    Access {
        message: String,
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

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::InvalidIsbn(err) => {
                CommandError::Validation { message: err.to_string(), reason_code: Some(err.reason_code()) }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::NotFound { message, .. } => {
                CommandError::NotFound { message }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Access { message } => {
                write!(f, "{}", message)
            }
            CommandError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CommandError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            CommandError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CommandError::Runtime { message, .. } => {
                write!(f, "{}", message)
            }
        }
    }
}
