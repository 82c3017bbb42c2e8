//! Command parser
//!
//! Turns one input line into a typed command for the current menu.
//!
//! Parsing happens in three steps:
//! 1. Split the line on whitespace
//! 2. Look up the command token and check the token count
//! 3. Parse the typed arguments (card bar codes, PINs, book ids, phones)

use std::path::PathBuf;

use super::{Field, LibrarianCommand, MainCommand, Problem, SubscriberCommand, SyntaxError};
use crate::catalog::BookId;
use crate::members::{CardBarCode, Pin, PIN_MAX, PIN_MIN};

// =============================================================================
// Tokens and Arity
// =============================================================================

/// Split a command line into whitespace-separated tokens
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Check that `tokens` holds exactly `expected` tokens (command included)
pub fn check_argument_count(tokens: &[&str], expected: usize) -> Result<(), SyntaxError> {
    if tokens.len() != expected {
        return Err(SyntaxError::ArgumentCount {
            expected,
            found: tokens.len(),
        });
    }
    Ok(())
}

// =============================================================================
// Typed Arguments
// =============================================================================

/// Parse a card bar code; must be an integer inside the issuable range
pub fn parse_card_bar_code(token: &str, position: usize) -> Result<CardBarCode, SyntaxError> {
    let value: i64 = token
        .parse()
        .map_err(|_| SyntaxError::invalid(position, Field::CardBarCode, Problem::NotANumber))?;

    if !CardBarCode::is_valid(value) {
        return Err(SyntaxError::invalid(
            position,
            Field::CardBarCode,
            Problem::OutOfRange,
        ));
    }

    Ok(CardBarCode(value as u32))
}

/// Parse a 4-digit PIN in [1000, 9999]
pub fn parse_pin(token: &str, position: usize) -> Result<Pin, SyntaxError> {
    let value: i64 = token
        .parse()
        .map_err(|_| SyntaxError::invalid(position, Field::Pin, Problem::NotANumber))?;

    if !(PIN_MIN as i64..=PIN_MAX as i64).contains(&value) {
        return Err(SyntaxError::invalid(position, Field::Pin, Problem::OutOfRange));
    }

    Ok(Pin(value as u16))
}

/// Parse a book id; any integer is accepted
pub fn parse_book_id(token: &str, position: usize) -> Result<BookId, SyntaxError> {
    token
        .parse()
        .map(BookId)
        .map_err(|_| SyntaxError::invalid(position, Field::BookId, Problem::NotANumber))
}

/// Check that a phone number is integer-representable; the text is kept as is
pub fn parse_phone_number(token: &str, position: usize) -> Result<String, SyntaxError> {
    token
        .parse::<i64>()
        .map(|_| token.to_string())
        .map_err(|_| SyntaxError::invalid(position, Field::PhoneNumber, Problem::NotANumber))
}

// =============================================================================
// Menu Parsers
// =============================================================================

/// Parse a main menu line
pub fn parse_main_command(line: &str) -> Result<MainCommand, SyntaxError> {
    let tokens = tokenize(line);
    let head = tokens.first().copied().unwrap_or("");

    match head {
        "1" => {
            check_argument_count(&tokens, 2)?;
            Ok(MainCommand::LoginLibrarian {
                password: tokens[1].to_string(),
            })
        }
        "2" => {
            check_argument_count(&tokens, 3)?;
            Ok(MainCommand::LoginSubscriber {
                card: parse_card_bar_code(tokens[1], 1)?,
                pin: parse_pin(tokens[2], 2)?,
            })
        }
        "3" => {
            check_argument_count(&tokens, 1)?;
            Ok(MainCommand::Exit)
        }
        other => Err(SyntaxError::UnknownCommand(other.to_string())),
    }
}

/// Parse a librarian menu line; the command token is case-insensitive
pub fn parse_librarian_command(line: &str) -> Result<LibrarianCommand, SyntaxError> {
    let tokens = tokenize(line);
    let head = tokens
        .first()
        .map(|t| t.to_ascii_uppercase())
        .unwrap_or_default();

    match head.as_str() {
        "1" => {
            check_argument_count(&tokens, 3)?;
            Ok(LibrarianCommand::AddBook {
                title: tokens[1].to_string(),
                author: tokens[2].to_string(),
            })
        }
        "2" => {
            check_argument_count(&tokens, 5)?;
            Ok(LibrarianCommand::AddSubscriber {
                name: tokens[1].to_string(),
                pin: parse_pin(tokens[2], 2)?,
                address: tokens[3].to_string(),
                phone_number: parse_phone_number(tokens[4], 4)?,
            })
        }
        "3" => {
            check_argument_count(&tokens, 3)?;
            Ok(LibrarianCommand::CheckoutBook {
                card: parse_card_bar_code(tokens[1], 1)?,
                book: parse_book_id(tokens[2], 2)?,
            })
        }
        "4" => {
            check_argument_count(&tokens, 3)?;
            Ok(LibrarianCommand::ReturnBook {
                card: parse_card_bar_code(tokens[1], 1)?,
                book: parse_book_id(tokens[2], 2)?,
            })
        }
        "5" => {
            check_argument_count(&tokens, 2)?;
            Ok(LibrarianCommand::ShowSubscriber {
                card: parse_card_bar_code(tokens[1], 1)?,
            })
        }
        "6" => {
            check_argument_count(&tokens, 2)?;
            Ok(LibrarianCommand::ShowCheckedOut {
                card: parse_card_bar_code(tokens[1], 1)?,
            })
        }
        "7" => {
            check_argument_count(&tokens, 1)?;
            Ok(LibrarianCommand::ListBooks)
        }
        "8" => {
            check_argument_count(&tokens, 2)?;
            Ok(LibrarianCommand::RemoveBook {
                book: parse_book_id(tokens[1], 1)?,
            })
        }
        "L" => {
            check_argument_count(&tokens, 2)?;
            Ok(LibrarianCommand::LoadBooks {
                path: PathBuf::from(tokens[1]),
            })
        }
        "S" => {
            check_argument_count(&tokens, 2)?;
            Ok(LibrarianCommand::SaveBooks {
                path: PathBuf::from(tokens[1]),
            })
        }
        "9" => {
            check_argument_count(&tokens, 1)?;
            Ok(LibrarianCommand::Logout)
        }
        _ => Err(SyntaxError::UnknownCommand(
            tokens.first().copied().unwrap_or("").to_string(),
        )),
    }
}

/// Parse a subscriber menu line
pub fn parse_subscriber_command(line: &str) -> Result<SubscriberCommand, SyntaxError> {
    let tokens = tokenize(line);
    let head = tokens.first().copied().unwrap_or("");

    match head {
        "1" => {
            check_argument_count(&tokens, 2)?;
            Ok(SubscriberCommand::CheckoutBook {
                book: parse_book_id(tokens[1], 1)?,
            })
        }
        "2" => {
            check_argument_count(&tokens, 2)?;
            Ok(SubscriberCommand::ReturnBook {
                book: parse_book_id(tokens[1], 1)?,
            })
        }
        "3" => {
            check_argument_count(&tokens, 2)?;
            Ok(SubscriberCommand::SearchByTitle {
                title: tokens[1].to_string(),
            })
        }
        "4" => {
            check_argument_count(&tokens, 2)?;
            Ok(SubscriberCommand::SearchByAuthor {
                author: tokens[1].to_string(),
            })
        }
        "5" => {
            check_argument_count(&tokens, 1)?;
            Ok(SubscriberCommand::ListCheckedOut)
        }
        "6" => {
            check_argument_count(&tokens, 1)?;
            Ok(SubscriberCommand::ListReturned)
        }
        "7" => {
            check_argument_count(&tokens, 2)?;
            Ok(SubscriberCommand::UpdateAddress {
                address: tokens[1].to_string(),
            })
        }
        "8" => {
            check_argument_count(&tokens, 2)?;
            Ok(SubscriberCommand::UpdatePhoneNumber {
                phone_number: parse_phone_number(tokens[1], 1)?,
            })
        }
        "9" => {
            check_argument_count(&tokens, 1)?;
            Ok(SubscriberCommand::Logout)
        }
        other => Err(SyntaxError::UnknownCommand(other.to_string())),
    }
}
