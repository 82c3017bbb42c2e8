//! Session state machine
//!
//! `step` takes the current state and one input line and returns the next
//! state plus the lines to show the user. It never performs I/O itself.

use super::report::{catalog_lines, personal_info_lines, subscriber_book_lines};
use crate::error::ShelfError;
use crate::library::Library;
use crate::members::CardBarCode;
use crate::protocol::{
    parse_librarian_command, parse_main_command, parse_subscriber_command, LibrarianCommand,
    MainCommand, SubscriberCommand, SyntaxError,
};

const NO_BOOKS_FOUND: &str = "No books found.";
const NO_SEARCH_MATCH: &str = "No books match your search.";
const NO_CHECKED_OUT: &str = "No books checked out by this subscriber";
const NO_RETURNED: &str = "No books returned by this subscriber";

/// Which menu is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nobody logged in
    MainMenu,

    /// Librarian logged in
    Librarian,

    /// Subscriber with this card logged in
    Subscriber(CardBarCode),

    /// Application finished; further input is ignored
    Exited,
}

/// Outcome of feeding one line to the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: SessionState,
    pub output: Vec<String>,
}

impl Transition {
    fn stay(state: SessionState, output: Vec<String>) -> Self {
        Self {
            next: state,
            output,
        }
    }

    fn to(next: SessionState) -> Self {
        Self {
            next,
            output: Vec::new(),
        }
    }
}

/// Feed one input line to the machine in `state`
pub fn step(library: &mut Library, state: SessionState, line: &str) -> Transition {
    let transition = match state {
        SessionState::MainMenu => step_main(library, line),
        SessionState::Librarian => step_librarian(library, line),
        SessionState::Subscriber(card) => step_subscriber(library, card, line),
        SessionState::Exited => Transition::to(SessionState::Exited),
    };

    if transition.next != state {
        tracing::debug!(from = ?state, to = ?transition.next, "Session transition");
    }

    transition
}

fn syntax_lines(err: &SyntaxError) -> Vec<String> {
    tracing::debug!(position = err.position(), "Syntax error: {}", err);
    vec![format!("{}{}", err, err.qualifier())]
}

fn error_lines(err: &ShelfError) -> Vec<String> {
    match err {
        ShelfError::Syntax(syntax) => syntax_lines(syntax),
        other => vec![other.to_string()],
    }
}

// =============================================================================
// Main Menu
// =============================================================================

fn step_main(library: &mut Library, line: &str) -> Transition {
    let command = match parse_main_command(line) {
        Ok(cmd) => cmd,
        Err(e) => return Transition::stay(SessionState::MainMenu, syntax_lines(&e)),
    };

    match command {
        MainCommand::LoginLibrarian { password } => {
            match library.authenticate_librarian(&password) {
                Ok(()) => Transition::to(SessionState::Librarian),
                Err(e) => Transition::stay(SessionState::MainMenu, error_lines(&e)),
            }
        }
        MainCommand::LoginSubscriber { card, pin } => {
            match library.authenticate_subscriber(card, pin) {
                Ok(_) => Transition::to(SessionState::Subscriber(card)),
                Err(e) => Transition::stay(SessionState::MainMenu, error_lines(&e)),
            }
        }
        MainCommand::Exit => Transition::to(SessionState::Exited),
    }
}

// =============================================================================
// Librarian Menu
// =============================================================================

fn step_librarian(library: &mut Library, line: &str) -> Transition {
    let command = match parse_librarian_command(line) {
        Ok(cmd) => cmd,
        Err(e) => return Transition::stay(SessionState::Librarian, syntax_lines(&e)),
    };

    if command == LibrarianCommand::Logout {
        return Transition::to(SessionState::MainMenu);
    }

    Transition::stay(SessionState::Librarian, run_librarian(library, command))
}

fn run_librarian(library: &mut Library, command: LibrarianCommand) -> Vec<String> {
    match command {
        LibrarianCommand::AddBook { title, author } => {
            library.add_book(title.clone(), author);
            vec![format!(
                "Book with Title {} is successfully added to the library.",
                title
            )]
        }
        LibrarianCommand::AddSubscriber {
            name,
            pin,
            address,
            phone_number,
        } => match library.add_subscriber(name.clone(), pin, address, phone_number) {
            Ok(card) => vec![format!(
                "Library card with bar code {} is successfully issued to the new subscriber {}.",
                card, name
            )],
            Err(e) => error_lines(&e),
        },
        LibrarianCommand::CheckoutBook { card, book } => {
            match library.checkout_book(card, book) {
                Ok(()) => vec![format!("Book {} checked out for subscriber {}.", book, card)],
                Err(e) => error_lines(&e),
            }
        }
        LibrarianCommand::ReturnBook { card, book } => match library.return_book(card, book) {
            Ok(()) => vec![format!("Book {} returned for subscriber {}.", book, card)],
            Err(e) => error_lines(&e),
        },
        LibrarianCommand::ShowSubscriber { card } => match library.find_subscriber(card) {
            Ok(sub) => personal_info_lines(sub),
            Err(e) => error_lines(&e),
        },
        LibrarianCommand::ShowCheckedOut { card } => match library.find_subscriber(card) {
            Ok(sub) => subscriber_book_lines(library, sub.checked_out(), NO_CHECKED_OUT),
            Err(e) => error_lines(&e),
        },
        LibrarianCommand::ListBooks => catalog_lines(library.books(), NO_BOOKS_FOUND),
        LibrarianCommand::RemoveBook { book } => match library.remove_book(book) {
            Ok(removed) => vec![format!(
                "Book {} ({}) is removed from the library.",
                removed.id(),
                removed.title()
            )],
            Err(e) => error_lines(&e),
        },
        LibrarianCommand::LoadBooks { path } => match library.load_books(&path) {
            Ok(ids) => {
                let mut lines: Vec<String> = ids
                    .iter()
                    .filter_map(|id| library.find_book(*id).ok())
                    .map(|book| {
                        format!(
                            "Book with Title {} is successfully added to the library.",
                            book.title()
                        )
                    })
                    .collect();
                lines.push(format!("{} books loaded from {}.", ids.len(), path.display()));
                lines
            }
            Err(e) => error_lines(&e),
        },
        LibrarianCommand::SaveBooks { path } => match library.save_books(&path) {
            Ok(count) => vec![format!("{} books saved to {}.", count, path.display())],
            Err(e) => error_lines(&e),
        },
        LibrarianCommand::Logout => Vec::new(),
    }
}

// =============================================================================
// Subscriber Menu
// =============================================================================

fn step_subscriber(library: &mut Library, card: CardBarCode, line: &str) -> Transition {
    let state = SessionState::Subscriber(card);

    let command = match parse_subscriber_command(line) {
        Ok(cmd) => cmd,
        Err(e) => return Transition::stay(state, syntax_lines(&e)),
    };

    if command == SubscriberCommand::Logout {
        return Transition::to(SessionState::MainMenu);
    }

    Transition::stay(state, run_subscriber(library, card, command))
}

fn run_subscriber(
    library: &mut Library,
    card: CardBarCode,
    command: SubscriberCommand,
) -> Vec<String> {
    match command {
        SubscriberCommand::CheckoutBook { book } => match library.checkout_book(card, book) {
            Ok(()) => vec![format!("Book {} checked out.", book)],
            Err(e) => error_lines(&e),
        },
        SubscriberCommand::ReturnBook { book } => match library.return_book(card, book) {
            Ok(()) => vec![format!("Book {} returned.", book)],
            Err(e) => error_lines(&e),
        },
        SubscriberCommand::SearchByTitle { title } => {
            catalog_lines(library.find_books_by_title(&title), NO_SEARCH_MATCH)
        }
        SubscriberCommand::SearchByAuthor { author } => {
            catalog_lines(library.find_books_by_author(&author), NO_SEARCH_MATCH)
        }
        SubscriberCommand::ListCheckedOut => match library.find_subscriber(card) {
            Ok(sub) => subscriber_book_lines(library, sub.checked_out(), NO_CHECKED_OUT),
            Err(e) => error_lines(&e),
        },
        SubscriberCommand::ListReturned => match library.find_subscriber(card) {
            Ok(sub) => subscriber_book_lines(library, sub.returned(), NO_RETURNED),
            Err(e) => error_lines(&e),
        },
        SubscriberCommand::UpdateAddress { address } => {
            match library.update_address(card, address) {
                Ok(()) => vec!["Address successfully updated.".to_string()],
                Err(e) => error_lines(&e),
            }
        }
        SubscriberCommand::UpdatePhoneNumber { phone_number } => {
            match library.update_phone_number(card, phone_number) {
                Ok(()) => vec!["Phone number successfully updated.".to_string()],
                Err(e) => error_lines(&e),
            }
        }
        SubscriberCommand::Logout => Vec::new(),
    }
}

// =============================================================================
// Session
// =============================================================================

/// Holds the current state between lines
#[derive(Debug, Clone)]
pub struct Session {
    state: SessionState,
}

impl Session {
    /// Start at the main menu
    pub fn new() -> Self {
        Self {
            state: SessionState::MainMenu,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Exited
    }

    /// Feed one line and move to the next state
    pub fn handle_line(&mut self, library: &mut Library, line: &str) -> Vec<String> {
        let transition = step(library, self.state, line);
        self.state = transition.next;
        transition.output
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
