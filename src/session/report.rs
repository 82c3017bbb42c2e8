//! Report formatting
//!
//! Turns library state into output lines.

use crate::catalog::{Book, BookId};
use crate::library::Library;
use crate::members::Subscriber;

/// Catalog listing with availability, one line per book
///
/// `empty` is returned as the only line when there are no books.
pub fn catalog_lines<'a, I>(books: I, empty: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a Book>,
{
    let lines: Vec<String> = books
        .into_iter()
        .map(|book| {
            format!(
                "<Book ID>: {} <Title>: {} <Author>: {} <Is Available>: {}",
                book.id(),
                book.title(),
                book.author(),
                book.is_available()
            )
        })
        .collect();

    if lines.is_empty() {
        vec![empty.to_string()]
    } else {
        lines
    }
}

/// A subscriber's checked-out or returned list
///
/// Ids no longer in the catalog (returned, then removed) are still listed.
pub fn subscriber_book_lines(library: &Library, ids: &[BookId], empty: &str) -> Vec<String> {
    if ids.is_empty() {
        return vec![empty.to_string()];
    }

    ids.iter()
        .map(|id| match library.find_book(*id) {
            Ok(book) => format!(
                "Book ID: {} Title: {} Author: {}",
                book.id(),
                book.title(),
                book.author()
            ),
            Err(_) => format!("Book ID: {} (no longer in the library)", id),
        })
        .collect()
}

/// Personal information block
pub fn personal_info_lines(subscriber: &Subscriber) -> Vec<String> {
    vec![
        format!(
            "Personal information of the subscriber: {}",
            subscriber.card_bar_code()
        ),
        format!("  Name: {}", subscriber.name()),
        format!("  Address: {}", subscriber.address()),
        format!("  Phone number: {}", subscriber.phone_number()),
    ]
}
