//! Configuration for Shelfmark
//!
//! Centralized configuration with sensible defaults.

use crate::error::{Result, ShelfError};
use crate::members::{CARD_BAR_CODE_INIT, CARD_BAR_CODE_LAST};

/// Main configuration for a Shelfmark library instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Library Configuration
    // -------------------------------------------------------------------------
    /// Street address of the library
    pub library_address: String,

    // -------------------------------------------------------------------------
    // Librarian Configuration
    // -------------------------------------------------------------------------
    /// Username of the single librarian
    pub librarian_username: String,

    /// Password required to enter the librarian menu
    pub librarian_password: String,

    // -------------------------------------------------------------------------
    // Subscriber Configuration
    // -------------------------------------------------------------------------
    /// Max books a subscriber may hold at once
    pub max_books_checked_out: usize,

    /// Card bar code handed to the first subscriber.
    /// Must lie within [CARD_BAR_CODE_INIT, CARD_BAR_CODE_LAST].
    pub first_card_bar_code: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_address: "Madison, WI".to_string(),
            librarian_username: "april".to_string(),
            librarian_password: "abc".to_string(),
            max_books_checked_out: 10,
            first_card_bar_code: CARD_BAR_CODE_INIT,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configured values can back a library
    pub fn validate(&self) -> Result<()> {
        if !(CARD_BAR_CODE_INIT..=CARD_BAR_CODE_LAST).contains(&self.first_card_bar_code) {
            return Err(ShelfError::Config(format!(
                "first card bar code {} outside [{}, {}]",
                self.first_card_bar_code, CARD_BAR_CODE_INIT, CARD_BAR_CODE_LAST
            )));
        }

        if self.max_books_checked_out == 0 {
            return Err(ShelfError::Config(
                "max books checked out must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the library street address
    pub fn library_address(mut self, address: impl Into<String>) -> Self {
        self.config.library_address = address.into();
        self
    }

    /// Set the librarian username
    pub fn librarian_username(mut self, username: impl Into<String>) -> Self {
        self.config.librarian_username = username.into();
        self
    }

    /// Set the librarian password
    pub fn librarian_password(mut self, password: impl Into<String>) -> Self {
        self.config.librarian_password = password.into();
        self
    }

    /// Set the per-subscriber checkout limit
    pub fn max_books_checked_out(mut self, count: usize) -> Self {
        self.config.max_books_checked_out = count;
        self
    }

    /// Set the card bar code of the first subscriber
    pub fn first_card_bar_code(mut self, code: u32) -> Self {
        self.config.first_card_bar_code = code;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
