//! Subscriber record
//!
//! A card holder who checks out and returns books.
//!
//! ## Holdings
//! - `checked_out`: current holdings, no duplicates, bounded by the limit
//!   passed to `checkout_book`
//! - `returned`: append-only history, may repeat a book returned twice

use super::{CardBarCode, Pin};
use crate::catalog::{Book, BookId};
use crate::error::{Result, ShelfError};
use crate::sequence::CardCodeSequence;

/// A library subscriber
#[derive(Debug, Clone)]
pub struct Subscriber {
    card_bar_code: CardBarCode,
    pin: Pin,
    name: String,
    address: String,
    phone_number: String,

    checked_out: Vec<BookId>,
    returned: Vec<BookId>,
}

impl Subscriber {
    /// Create a subscriber, taking the next card bar code from `codes`.
    ///
    /// Fails with `CardCodesExhausted` when no code is left. The PIN is
    /// stored as given; callers validate it.
    pub fn new(
        codes: &mut CardCodeSequence,
        name: impl Into<String>,
        pin: Pin,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self> {
        let card_bar_code = codes.allocate()?;

        Ok(Self {
            card_bar_code,
            pin,
            name: name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
            checked_out: Vec::new(),
            returned: Vec::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn card_bar_code(&self) -> CardBarCode {
        self.card_bar_code
    }

    pub fn pin(&self) -> Pin {
        self.pin
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn set_phone_number(&mut self, phone_number: impl Into<String>) {
        self.phone_number = phone_number.into();
    }

    /// Ids of books currently held, in checkout order
    pub fn checked_out(&self) -> &[BookId] {
        &self.checked_out
    }

    /// Ids of books returned so far, oldest first
    pub fn returned(&self) -> &[BookId] {
        &self.returned
    }

    pub fn is_book_checked_out(&self, id: BookId) -> bool {
        self.checked_out.contains(&id)
    }

    pub fn is_book_returned(&self, id: BookId) -> bool {
        self.returned.contains(&id)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Check out `book`, holding at most `limit` books.
    ///
    /// Refusals are checked in order: already held by this subscriber, held
    /// by someone else, limit reached. A refusal leaves all state untouched.
    pub fn checkout_book(&mut self, book: &mut Book, limit: usize) -> Result<()> {
        if !book.is_available() {
            if self.is_book_checked_out(book.id()) {
                return Err(ShelfError::AlreadyCheckedOut {
                    title: book.title().to_string(),
                });
            }
            return Err(ShelfError::NotAvailable {
                title: book.title().to_string(),
            });
        }

        if self.checked_out.len() >= limit {
            return Err(ShelfError::CheckoutLimit { limit });
        }

        self.checked_out.push(book.id());
        book.borrow(self.card_bar_code);
        Ok(())
    }

    /// Return `book` if this subscriber holds it.
    ///
    /// Moves the id from the checked-out set to the returned history and
    /// makes the book available again.
    pub fn return_book(&mut self, book: &mut Book) -> Result<()> {
        let Some(pos) = self.checked_out.iter().position(|id| *id == book.id()) else {
            return Err(ShelfError::NotHeld(book.id()));
        };

        self.checked_out.remove(pos);
        self.returned.push(book.id());
        book.release();
        Ok(())
    }
}
