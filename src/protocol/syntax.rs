//! Syntax errors
//!
//! Raised when a command line has the wrong shape. A syntax error aborts
//! only the command that caused it.

use thiserror::Error;

/// The typed argument that failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CardBarCode,
    Pin,
    BookId,
    PhoneNumber,
}

/// Why an argument was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    NotANumber,
    OutOfRange,
}

/// A malformed command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Syntax Error: Please enter a valid command!")]
    UnknownCommand(String),

    /// Token count (command included) differs from the command's arity
    #[error("Syntax Error: Please enter a valid command!")]
    ArgumentCount { expected: usize, found: usize },

    /// The argument at `position` (1-based, after the command) is invalid
    #[error("{message}")]
    InvalidArgument {
        position: usize,
        field: Field,
        problem: Problem,
        message: &'static str,
    },
}

impl SyntaxError {
    /// Build an `InvalidArgument` with its user-facing message
    pub fn invalid(position: usize, field: Field, problem: Problem) -> Self {
        let message = match (field, problem) {
            (Field::CardBarCode, Problem::NotANumber) => {
                "ERROR: input for cardBarCode was not an integer."
            }
            (Field::CardBarCode, Problem::OutOfRange) => {
                "ERROR: input for cardBarCode was not a correct bar code."
            }
            (Field::Pin, Problem::NotANumber) => "ERROR: The pin MUST be a NUMBER.",
            (Field::Pin, Problem::OutOfRange) => "ERROR: Input for pin is invalid.",
            (Field::BookId, _) => "ERROR: The input for bookId MUST be a NUMBER.",
            (Field::PhoneNumber, _) => "Error: The phone number MUST be a NUMBER.",
        };

        Self::InvalidArgument {
            position,
            field,
            problem,
            message,
        }
    }

    /// Legacy position marker: 0 for the command or its arity, N for the
    /// Nth argument
    pub fn position(&self) -> usize {
        match self {
            Self::UnknownCommand(_) | Self::ArgumentCount { .. } => 0,
            Self::InvalidArgument { position, .. } => *position,
        }
    }

    /// The offending field, if an argument was at fault
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            _ => None,
        }
    }

    /// Human-readable hint appended after the message
    pub fn qualifier(&self) -> String {
        match self {
            Self::UnknownCommand(_) => String::new(),
            Self::ArgumentCount { .. } => " Arguments count is incorrect.".to_string(),
            Self::InvalidArgument { position, .. } => format!(
                " Argument number {} within your command line is invalid.",
                position
            ),
        }
    }
}
