//! Protocol Module
//!
//! Defines the text command language of the three menus.
//!
//! ## Line Format
//! ```text
//! ┌──────────┬───────┬───────┬─────┐
//! │ Command  │ Arg 1 │ Arg 2 │ ... │   (tokens separated by whitespace)
//! └──────────┴───────┴───────┴─────┘
//! ```
//!
//! ### Main Menu (case-sensitive)
//! - `1 <password>`             login as librarian
//! - `2 <card bar code> <pin>`  login as subscriber
//! - `3`                        exit
//!
//! ### Librarian Menu (case-insensitive)
//! - `1 <title> <author>`, `2 <name> <pin> <address> <phone>`,
//!   `3 <card> <book>`, `4 <card> <book>`, `5 <card>`, `6 <card>`, `7`,
//!   `8 <book>`, `L <file>`, `S <file>`, `9` (logout)
//!
//! ### Subscriber Menu (case-sensitive)
//! - `1 <book>`, `2 <book>`, `3 <title>`, `4 <author>`, `5`, `6`,
//!   `7 <address>`, `8 <phone>`, `9` (logout)
//!
//! Every command has a fixed token count (command included). A line with
//! any other count is rejected before its arguments are looked at.

mod command;
mod parse;
mod syntax;

pub use command::{LibrarianCommand, MainCommand, SubscriberCommand};
pub use parse::{
    check_argument_count, parse_book_id, parse_card_bar_code, parse_librarian_command,
    parse_main_command, parse_phone_number, parse_pin, parse_subscriber_command, tokenize,
};
pub use syntax::{Field, Problem, SyntaxError};
