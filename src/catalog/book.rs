//! Book record
//!
//! Passive record with identity and an availability lock.

use super::BookId;
use crate::members::CardBarCode;

/// A book in the library catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,

    /// Card bar code of the current borrower; `None` means available
    borrower: Option<CardBarCode>,
}

impl Book {
    /// Create an available book with the given id
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            borrower: None,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// Card bar code of the borrower, if checked out
    pub fn borrower(&self) -> Option<CardBarCode> {
        self.borrower
    }

    /// Record `borrower` as the holder if the book is available.
    ///
    /// Does nothing when the book is already checked out. Returns whether
    /// the borrower was recorded.
    pub fn borrow(&mut self, borrower: CardBarCode) -> bool {
        if !self.is_available() {
            return false;
        }
        self.borrower = Some(borrower);
        true
    }

    /// Clear the borrower unconditionally
    pub fn release(&mut self) {
        self.borrower = None;
    }

    pub fn is_available(&self) -> bool {
        self.borrower.is_none()
    }
}
