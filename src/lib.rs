//! # Shelfmark
//!
//! An in-memory book library manager with:
//! - A catalog of books with checkout locks
//! - Subscribers with bounded checkout sets and return history
//! - A single password-protected librarian
//! - A text-menu command interpreter modelled as a state machine
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Console Runner                           │
//! │               (one line in, report lines out)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │              Session State Machine + Parser                  │
//! │        (MainMenu / Librarian / Subscriber / Exited)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Library                               │
//! │          (books, subscribers, librarian, sequences)          │
//! └──────────┬───────────────────────────────────┬──────────────┘
//!            │                                   │
//!            ▼                                   ▼
//!   ┌─────────────────┐                 ┌─────────────────┐
//!   │ Catalog/Members │                 │     Storage     │
//!   │   (records)     │                 │ (title:author)  │
//!   └─────────────────┘                 └─────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod sequence;
pub mod catalog;
pub mod members;
pub mod storage;
pub mod protocol;
pub mod library;
pub mod session;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ShelfError, Result};
pub use config::Config;
pub use library::Library;
pub use session::{Console, Session, SessionState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Shelfmark
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
