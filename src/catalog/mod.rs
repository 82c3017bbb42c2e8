//! Catalog Module
//!
//! Book records held by the library.
//!
//! ## Availability
//! A book is available exactly when it has no borrower. The borrower is the
//! card bar code of the subscriber holding it and is set only while the book
//! is checked out.

mod book;

pub use book::Book;

use std::fmt;

/// Unique, immutable identifier of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(pub i64);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
