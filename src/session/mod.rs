//! Session Module
//!
//! The interactive side of the library: a state machine over the three
//! menus and a console runner that feeds it one line at a time.
//!
//! ## States
//! ```text
//!                 1 <password>
//!   ┌──────────┐ ─────────────▶ ┌──────────────────┐
//!   │          │ ◀───────────── │ LibrarianSession │
//!   │          │       9        └──────────────────┘
//!   │ MainMenu │  2 <card> <pin>
//!   │          │ ─────────────▶ ┌──────────────────┐
//!   │          │ ◀───────────── │ SubscriberSession│
//!   └────┬─────┘       9        └──────────────────┘
//!        │ 3
//!        ▼
//!   ┌──────────┐
//!   │  Exited  │
//!   └──────────┘
//! ```
//!
//! A malformed command never leaves the current state.

mod console;
mod menu;
mod report;
mod state;

pub use console::{Console, PROMPT};
pub use menu::{goodbye_banner, menu_for};
pub use report::{catalog_lines, personal_info_lines, subscriber_book_lines};
pub use state::{step, Session, SessionState, Transition};
