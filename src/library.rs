//! Library Module
//!
//! The aggregate that owns books, subscribers and the librarian.
//!
//! ## Responsibilities
//! - Look up books and subscribers by identifier
//! - Add and remove books, issue subscriber cards
//! - Route checkouts and returns between subscribers and books
//! - Authenticate the librarian and subscribers
//! - Save and load the catalog in the flat book file format

use std::path::Path;

use crate::catalog::{Book, BookId};
use crate::config::Config;
use crate::error::{Result, ShelfError};
use crate::members::{CardBarCode, Librarian, Pin, Subscriber};
use crate::sequence::{BookIdSequence, CardCodeSequence};
use crate::storage;

/// A single library with its catalog and subscribers
///
/// Books and subscribers are kept in insertion order. A book id appears in
/// the checked-out set of at most one subscriber, and only while that book
/// carries the subscriber's card bar code as borrower.
#[derive(Debug)]
pub struct Library {
    address: String,
    librarian: Librarian,
    max_books_checked_out: usize,

    books: Vec<Book>,
    subscribers: Vec<Subscriber>,

    book_ids: BookIdSequence,
    card_codes: CardCodeSequence,
}

impl Library {
    /// Create an empty library from `config`
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            address = %config.library_address,
            librarian = %config.librarian_username,
            "Library created"
        );

        let card_codes = CardCodeSequence::starting_at(config.first_card_bar_code)?;
        Ok(Self::from_parts(config, card_codes))
    }

    /// Create with the given address and librarian credentials
    ///
    /// Uses defaults for everything else
    pub fn with_librarian(
        address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        let config = Config::builder()
            .library_address(address)
            .librarian_username(username)
            .librarian_password(password)
            .build();

        Self::from_parts(config, CardCodeSequence::new())
    }

    fn from_parts(config: Config, card_codes: CardCodeSequence) -> Self {
        Self {
            address: config.library_address,
            librarian: Librarian::new(config.librarian_username, config.librarian_password),
            max_books_checked_out: config.max_books_checked_out,
            books: Vec::new(),
            subscribers: Vec::new(),
            book_ids: BookIdSequence::new(),
            card_codes,
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Find a book by id
    pub fn find_book(&self, id: BookId) -> Result<&Book> {
        self.books
            .iter()
            .find(|book| book.id() == id)
            .ok_or(ShelfError::BookNotFound(id))
    }

    /// Find a subscriber by card bar code
    pub fn find_subscriber(&self, card: CardBarCode) -> Result<&Subscriber> {
        self.subscribers
            .iter()
            .find(|sub| sub.card_bar_code() == card)
            .ok_or(ShelfError::SubscriberNotFound(card))
    }

    /// All books whose title matches, ignoring case
    pub fn find_books_by_title(&self, title: &str) -> Vec<&Book> {
        let needle = title.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.title().to_lowercase() == needle)
            .collect()
    }

    /// All books whose author matches, ignoring case
    pub fn find_books_by_author(&self, author: &str) -> Vec<&Book> {
        let needle = author.to_lowercase();
        self.books
            .iter()
            .filter(|book| book.author().to_lowercase() == needle)
            .collect()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Add a book under the next id
    pub fn add_book(&mut self, title: impl Into<String>, author: impl Into<String>) -> BookId {
        let id = self.book_ids.allocate();
        let book = Book::new(id, title, author);

        tracing::info!(book_id = %id, title = %book.title(), "Book added");
        self.books.push(book);
        id
    }

    /// Remove an available book
    ///
    /// Fails if the book does not exist or is checked out.
    pub fn remove_book(&mut self, id: BookId) -> Result<Book> {
        let pos = self
            .books
            .iter()
            .position(|book| book.id() == id)
            .ok_or(ShelfError::BookNotFound(id))?;

        if let Some(borrower) = self.books[pos].borrower() {
            tracing::debug!(book_id = %id, %borrower, "Refused to remove checked out book");
            return Err(ShelfError::BookCheckedOut { id, borrower });
        }

        let book = self.books.remove(pos);
        tracing::info!(book_id = %id, "Book removed");
        Ok(book)
    }

    /// Issue a card to a new subscriber
    ///
    /// Fails with `CardCodesExhausted` once the card range is used up.
    pub fn add_subscriber(
        &mut self,
        name: impl Into<String>,
        pin: Pin,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<CardBarCode> {
        let subscriber =
            Subscriber::new(&mut self.card_codes, name, pin, address, phone_number)
                .inspect_err(|e| tracing::warn!("Could not issue subscriber card: {}", e))?;

        let card = subscriber.card_bar_code();
        tracing::info!(card = %card, name = %subscriber.name(), "Subscriber card issued");
        self.subscribers.push(subscriber);
        Ok(card)
    }

    /// Check out book `id` for subscriber `card`
    ///
    /// The book is looked up first, then the subscriber.
    pub fn checkout_book(&mut self, card: CardBarCode, id: BookId) -> Result<()> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id() == id)
            .ok_or(ShelfError::BookNotFound(id))?;
        let subscriber = self
            .subscribers
            .iter_mut()
            .find(|sub| sub.card_bar_code() == card)
            .ok_or(ShelfError::SubscriberNotFound(card))?;

        match subscriber.checkout_book(book, self.max_books_checked_out) {
            Ok(()) => {
                tracing::info!(%card, book_id = %id, "Book checked out");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(%card, book_id = %id, "Checkout refused: {}", e);
                Err(e)
            }
        }
    }

    /// Return book `id` for subscriber `card`
    pub fn return_book(&mut self, card: CardBarCode, id: BookId) -> Result<()> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.id() == id)
            .ok_or(ShelfError::BookNotFound(id))?;
        let subscriber = self
            .subscribers
            .iter_mut()
            .find(|sub| sub.card_bar_code() == card)
            .ok_or(ShelfError::SubscriberNotFound(card))?;

        match subscriber.return_book(book) {
            Ok(()) => {
                tracing::info!(%card, book_id = %id, "Book returned");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(%card, book_id = %id, "Return refused: {}", e);
                Err(e)
            }
        }
    }

    /// Update a subscriber's address
    pub fn update_address(&mut self, card: CardBarCode, address: impl Into<String>) -> Result<()> {
        self.subscriber_mut(card)?.set_address(address);
        tracing::debug!(%card, "Address updated");
        Ok(())
    }

    /// Update a subscriber's phone number
    pub fn update_phone_number(
        &mut self,
        card: CardBarCode,
        phone_number: impl Into<String>,
    ) -> Result<()> {
        self.subscriber_mut(card)?.set_phone_number(phone_number);
        tracing::debug!(%card, "Phone number updated");
        Ok(())
    }

    fn subscriber_mut(&mut self, card: CardBarCode) -> Result<&mut Subscriber> {
        self.subscribers
            .iter_mut()
            .find(|sub| sub.card_bar_code() == card)
            .ok_or(ShelfError::SubscriberNotFound(card))
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Check the librarian password
    pub fn authenticate_librarian(&self, password: &str) -> Result<()> {
        if self.librarian.check_password(password) {
            tracing::info!(librarian = %self.librarian.username(), "Librarian logged in");
            Ok(())
        } else {
            tracing::debug!("Librarian password rejected");
            Err(ShelfError::IncorrectPassword)
        }
    }

    /// Check a subscriber's card bar code and PIN
    pub fn authenticate_subscriber(&self, card: CardBarCode, pin: Pin) -> Result<&Subscriber> {
        let subscriber = self.find_subscriber(card)?;
        if subscriber.pin() != pin {
            tracing::debug!(%card, "Subscriber PIN rejected");
            return Err(ShelfError::IncorrectPin);
        }

        tracing::info!(%card, "Subscriber logged in");
        Ok(subscriber)
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write every book as a `title:author` line to `path`
    pub fn save_books(&self, path: &Path) -> Result<usize> {
        let count = storage::save_books(
            path,
            self.books.iter().map(|book| (book.title(), book.author())),
        )
        .inspect_err(|e| tracing::warn!(path = %path.display(), "Save failed: {}", e))?;

        tracing::info!(path = %path.display(), count, "Books saved");
        Ok(count)
    }

    /// Add every book listed in `path`, in file order
    ///
    /// Nothing is added if the file cannot be read or holds a malformed line.
    pub fn load_books(&mut self, path: &Path) -> Result<Vec<BookId>> {
        let records = storage::load_books(path)
            .inspect_err(|e| tracing::warn!(path = %path.display(), "Load failed: {}", e))?;

        let ids: Vec<BookId> = records
            .into_iter()
            .map(|record| self.add_book(record.title, record.author))
            .collect();

        tracing::info!(path = %path.display(), count = ids.len(), "Books loaded");
        Ok(ids)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Street address of this library
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn librarian(&self) -> &Librarian {
        &self.librarian
    }

    /// All books in insertion order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// All subscribers in insertion order
    pub fn subscribers(&self) -> &[Subscriber] {
        &self.subscribers
    }

    /// Per-subscriber checkout limit
    pub fn max_books_checked_out(&self) -> usize {
        self.max_books_checked_out
    }
}
