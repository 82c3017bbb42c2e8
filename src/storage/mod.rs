//! Storage Module
//!
//! Flat text persistence for the book catalog.
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ title:author\n                         │
//! │ title:author\n                         │
//! │ ... (one line per book, catalog order) │
//! └────────────────────────────────────────┘
//! ```
//!
//! - Blank lines and lines equal to `:` are skipped on load
//! - Lines are split at the first colon; both fields are trimmed
//! - Colons inside a title are not escaped, so such titles do not survive
//!   a save/load cycle intact
//! - Ids are not persisted; loaded books get fresh ids

mod book_file;

pub use book_file::{load_books, read_books, save_books, write_books, BookRecord};
