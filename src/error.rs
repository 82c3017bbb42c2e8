//! Error types for Shelfmark
//!
//! Provides a unified error type for all library operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::BookId;
use crate::members::CardBarCode;
use crate::protocol::SyntaxError;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Unified error type for Shelfmark operations
#[derive(Debug, Error)]
pub enum ShelfError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ERROR: File {} could not be accessed: {source}", .path.display())]
    BookFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ERROR: Incorrectly formatted line {line}: {content:?}")]
    MalformedBookLine { line: usize, content: String },

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Error: this book identifier didn't match any of our books identifiers.")]
    BookNotFound(BookId),

    #[error("Error: this card bar code didn't match any of our records.")]
    SubscriberNotFound(CardBarCode),

    // -------------------------------------------------------------------------
    // State Conflicts
    // -------------------------------------------------------------------------
    #[error(
        "You cannot remove a non available book. This book has been checked out by the \
         subscriber n° {borrower} and is not yet returned."
    )]
    BookCheckedOut { id: BookId, borrower: CardBarCode },

    #[error("You have already checked out {title} book.")]
    AlreadyCheckedOut { title: String },

    #[error("Sorry, {title} is not available.")]
    NotAvailable { title: String },

    #[error("Checkout Failed: You cannot check out more than {limit} books.")]
    CheckoutLimit { limit: usize },

    #[error("Sorry, you cannot return this book. It is not in your checked out list.")]
    NotHeld(BookId),

    // -------------------------------------------------------------------------
    // Resource Exhaustion
    // -------------------------------------------------------------------------
    #[error("Error: CANNOT create a new subscriber. No more card can be issued.")]
    CardCodesExhausted,

    // -------------------------------------------------------------------------
    // Authentication Errors
    // -------------------------------------------------------------------------
    #[error("ERROR: Password incorrect!")]
    IncorrectPassword,

    #[error("Error: Incorrect PIN.")]
    IncorrectPin,

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
