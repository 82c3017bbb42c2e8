//! Members Module
//!
//! The people a library knows about: subscribers (card holders who borrow
//! books) and the single librarian who manages the catalog.

mod librarian;
mod subscriber;

pub use librarian::Librarian;
pub use subscriber::Subscriber;

use std::fmt;

/// First card bar code that can be issued
pub const CARD_BAR_CODE_INIT: u32 = 2019000001;

/// Upper bound of the card bar code range
pub const CARD_BAR_CODE_LAST: u32 = 2019999999;

/// Default number of books one subscriber may hold
pub const MAX_BOOKS_CHECKED_OUT: usize = 10;

/// Smallest valid PIN (leading digit non-zero)
pub const PIN_MIN: u16 = 1000;

/// Largest valid PIN
pub const PIN_MAX: u16 = 9999;

/// Unique subscriber identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardBarCode(pub u32);

impl CardBarCode {
    /// Whether `code` falls inside the issuable range
    pub fn is_valid(code: i64) -> bool {
        (CARD_BAR_CODE_INIT as i64..=CARD_BAR_CODE_LAST as i64).contains(&code)
    }
}

impl fmt::Display for CardBarCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 4-digit personal identification number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin(pub u16);
