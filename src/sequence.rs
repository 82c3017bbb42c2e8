//! Identifier sequences
//!
//! Book ids and card bar codes are handed out by sequences owned by the
//! library, so two libraries never share counters.

use crate::catalog::BookId;
use crate::error::{Result, ShelfError};
use crate::members::{CardBarCode, CARD_BAR_CODE_INIT, CARD_BAR_CODE_LAST};

/// Hands out book ids starting at 1
#[derive(Debug, Clone)]
pub struct BookIdSequence {
    next: i64,
}

impl BookIdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next id
    pub fn allocate(&mut self) -> BookId {
        let id = BookId(self.next);
        self.next += 1;
        id
    }

    /// Id the next call to `allocate` returns
    pub fn peek(&self) -> BookId {
        BookId(self.next)
    }
}

impl Default for BookIdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands out card bar codes from a bounded range
///
/// Allocation fails once the counter reaches `CARD_BAR_CODE_LAST`; codes are
/// never reused.
#[derive(Debug, Clone)]
pub struct CardCodeSequence {
    next: u32,
}

impl CardCodeSequence {
    /// Start at `CARD_BAR_CODE_INIT`
    pub fn new() -> Self {
        Self {
            next: CARD_BAR_CODE_INIT,
        }
    }

    /// Start at an arbitrary code inside the valid range
    pub fn starting_at(next: u32) -> Result<Self> {
        if !(CARD_BAR_CODE_INIT..=CARD_BAR_CODE_LAST).contains(&next) {
            return Err(ShelfError::Config(format!(
                "card bar code {} outside [{}, {}]",
                next, CARD_BAR_CODE_INIT, CARD_BAR_CODE_LAST
            )));
        }
        Ok(Self { next })
    }

    /// Take the next card bar code
    pub fn allocate(&mut self) -> Result<CardBarCode> {
        if self.next >= CARD_BAR_CODE_LAST {
            return Err(ShelfError::CardCodesExhausted);
        }

        let code = CardBarCode(self.next);
        self.next += 1;
        Ok(code)
    }

    /// Number of codes still available
    pub fn remaining(&self) -> u32 {
        CARD_BAR_CODE_LAST - self.next
    }
}

impl Default for CardCodeSequence {
    fn default() -> Self {
        Self::new()
    }
}
