//! Command definitions
//!
//! Parsed, validated commands for each menu.

use std::path::PathBuf;

use crate::catalog::BookId;
use crate::members::{CardBarCode, Pin};

/// Commands accepted before anyone logs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MainCommand {
    /// Enter the librarian menu
    LoginLibrarian { password: String },

    /// Enter the subscriber menu
    LoginSubscriber { card: CardBarCode, pin: Pin },

    /// Leave the application
    Exit,
}

/// Commands accepted in the librarian menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibrarianCommand {
    AddBook {
        title: String,
        author: String,
    },
    AddSubscriber {
        name: String,
        pin: Pin,
        address: String,
        phone_number: String,
    },
    /// Check out a book on behalf of a subscriber
    CheckoutBook { card: CardBarCode, book: BookId },
    /// Return a book on behalf of a subscriber
    ReturnBook { card: CardBarCode, book: BookId },
    ShowSubscriber { card: CardBarCode },
    ShowCheckedOut { card: CardBarCode },
    ListBooks,
    RemoveBook { book: BookId },
    LoadBooks { path: PathBuf },
    SaveBooks { path: PathBuf },
    Logout,
}

/// Commands accepted in the subscriber menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriberCommand {
    CheckoutBook { book: BookId },
    ReturnBook { book: BookId },
    SearchByTitle { title: String },
    SearchByAuthor { author: String },
    ListCheckedOut,
    ListReturned,
    UpdateAddress { address: String },
    UpdatePhoneNumber { phone_number: String },
    Logout,
}
