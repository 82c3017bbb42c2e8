//! Parser Tests
//!
//! Tests for tokenizing, arity checks, typed arguments and the three menu
//! command tables.

use std::path::PathBuf;

use rstest::rstest;
use shelfmark::catalog::BookId;
use shelfmark::members::{CardBarCode, Pin};
use shelfmark::protocol::{
    check_argument_count, parse_book_id, parse_card_bar_code, parse_librarian_command,
    parse_main_command, parse_phone_number, parse_pin, parse_subscriber_command, tokenize, Field,
    LibrarianCommand, MainCommand, Problem, SubscriberCommand, SyntaxError,
};

// =============================================================================
// Tokens and Arity
// =============================================================================

#[test]
fn test_tokenize_collapses_whitespace() {
    assert_eq!(tokenize("  3   2019000001\t12 \n"), vec!["3", "2019000001", "12"]);
    assert!(tokenize("   ").is_empty());
}

#[test]
fn test_check_argument_count() {
    assert!(check_argument_count(&["1", "a", "b"], 3).is_ok());

    let err = check_argument_count(&["1", "a"], 3).unwrap_err();
    assert_eq!(err, SyntaxError::ArgumentCount { expected: 3, found: 2 });
    assert_eq!(err.position(), 0);
    assert_eq!(err.qualifier(), " Arguments count is incorrect.");
}

// =============================================================================
// Typed Arguments
// =============================================================================

#[rstest]
#[case("2019000001", 2019000001)]
#[case("2019999999", 2019999999)]
#[case("2019500000", 2019500000)]
fn test_parse_card_bar_code_valid(#[case] token: &str, #[case] expected: u32) {
    assert_eq!(parse_card_bar_code(token, 1).unwrap(), CardBarCode(expected));
}

#[rstest]
#[case("Head", Problem::NotANumber)]
#[case("", Problem::NotANumber)]
#[case("2019000000", Problem::OutOfRange)]
#[case("2020000000", Problem::OutOfRange)]
#[case("-2019000001", Problem::OutOfRange)]
#[case("99999999999", Problem::OutOfRange)]
fn test_parse_card_bar_code_invalid(#[case] token: &str, #[case] problem: Problem) {
    let err = parse_card_bar_code(token, 1).unwrap_err();
    assert_eq!(err.position(), 1);
    assert_eq!(err.field(), Some(Field::CardBarCode));
    assert!(matches!(err, SyntaxError::InvalidArgument { problem: p, .. } if p == problem));
}

#[test]
fn test_card_bar_code_messages_differ_by_problem() {
    let not_number = parse_card_bar_code("abc", 1).unwrap_err().to_string();
    let out_of_range = parse_card_bar_code("1", 1).unwrap_err().to_string();

    assert_eq!(not_number, "ERROR: input for cardBarCode was not an integer.");
    assert_eq!(out_of_range, "ERROR: input for cardBarCode was not a correct bar code.");
}

#[rstest]
#[case("1000", 1000)]
#[case("1234", 1234)]
#[case("9999", 9999)]
fn test_parse_pin_valid(#[case] token: &str, #[case] expected: u16) {
    assert_eq!(parse_pin(token, 2).unwrap(), Pin(expected));
}

#[rstest]
#[case("12", Problem::OutOfRange)]
#[case("12345", Problem::OutOfRange)]
#[case("0999", Problem::OutOfRange)]
#[case("-1234", Problem::OutOfRange)]
#[case("abcd", Problem::NotANumber)]
#[case("12.5", Problem::NotANumber)]
fn test_parse_pin_invalid(#[case] token: &str, #[case] problem: Problem) {
    let err = parse_pin(token, 2).unwrap_err();
    assert_eq!(err.position(), 2);
    assert_eq!(err.field(), Some(Field::Pin));
    assert!(matches!(err, SyntaxError::InvalidArgument { problem: p, .. } if p == problem));
}

#[test]
fn test_short_pin_message() {
    let err = parse_pin("12", 2).unwrap_err();
    assert_eq!(err.to_string(), "ERROR: Input for pin is invalid.");
    assert_eq!(
        err.qualifier(),
        " Argument number 2 within your command line is invalid."
    );
}

#[rstest]
#[case("1", 1)]
#[case("0", 0)]
#[case("-4", -4)]
#[case("123456789012", 123456789012)]
fn test_parse_book_id_accepts_any_integer(#[case] token: &str, #[case] expected: i64) {
    assert_eq!(parse_book_id(token, 1).unwrap(), BookId(expected));
}

#[test]
fn test_parse_book_id_rejects_text() {
    let err = parse_book_id("dead", 2).unwrap_err();
    assert_eq!(err.position(), 2);
    assert_eq!(err.field(), Some(Field::BookId));
}

#[test]
fn test_parse_phone_number() {
    assert_eq!(parse_phone_number("8479517423", 4).unwrap(), "8479517423");

    let err = parse_phone_number("847-951", 4).unwrap_err();
    assert_eq!(err.position(), 4);
    assert_eq!(err.field(), Some(Field::PhoneNumber));
}

// =============================================================================
// Main Menu
// =============================================================================

#[test]
fn test_main_menu_commands() {
    assert_eq!(
        parse_main_command("1 abc").unwrap(),
        MainCommand::LoginLibrarian {
            password: "abc".to_string()
        }
    );
    assert_eq!(
        parse_main_command("2 2019000001 1234").unwrap(),
        MainCommand::LoginSubscriber {
            card: CardBarCode(2019000001),
            pin: Pin(1234)
        }
    );
    assert_eq!(parse_main_command("3").unwrap(), MainCommand::Exit);
}

#[rstest]
#[case("3 now")]
#[case("1")]
#[case("1 a b")]
#[case("2 2019000001")]
fn test_main_menu_wrong_arity(#[case] line: &str) {
    let err = parse_main_command(line).unwrap_err();
    assert!(matches!(err, SyntaxError::ArgumentCount { .. }));
    assert_eq!(err.position(), 0);
}

#[rstest]
#[case("")]
#[case("4")]
#[case("L file")]
fn test_main_menu_unknown_command(#[case] line: &str) {
    let err = parse_main_command(line).unwrap_err();
    assert!(matches!(err, SyntaxError::UnknownCommand(_)));
    assert_eq!(err.qualifier(), "");
}

#[test]
fn test_main_menu_bad_pin_position() {
    let err = parse_main_command("2 2019000001 12").unwrap_err();
    assert_eq!(err.position(), 2);
}

// =============================================================================
// Librarian Menu
// =============================================================================

#[test]
fn test_librarian_commands() {
    assert_eq!(
        parse_librarian_command("1 Deal Mark").unwrap(),
        LibrarianCommand::AddBook {
            title: "Deal".to_string(),
            author: "Mark".to_string()
        }
    );
    assert_eq!(
        parse_librarian_command("2 Art 1234 Madison 8479517423").unwrap(),
        LibrarianCommand::AddSubscriber {
            name: "Art".to_string(),
            pin: Pin(1234),
            address: "Madison".to_string(),
            phone_number: "8479517423".to_string()
        }
    );
    assert_eq!(
        parse_librarian_command("3 2019000001 1").unwrap(),
        LibrarianCommand::CheckoutBook {
            card: CardBarCode(2019000001),
            book: BookId(1)
        }
    );
    assert_eq!(parse_librarian_command("7").unwrap(), LibrarianCommand::ListBooks);
    assert_eq!(
        parse_librarian_command("8 4").unwrap(),
        LibrarianCommand::RemoveBook { book: BookId(4) }
    );
    assert_eq!(parse_librarian_command("9").unwrap(), LibrarianCommand::Logout);
}

#[test]
fn test_librarian_command_token_is_case_insensitive() {
    assert_eq!(
        parse_librarian_command("l books.txt").unwrap(),
        LibrarianCommand::LoadBooks {
            path: PathBuf::from("books.txt")
        }
    );
    assert_eq!(
        parse_librarian_command("S books.txt").unwrap(),
        LibrarianCommand::SaveBooks {
            path: PathBuf::from("books.txt")
        }
    );
}

#[test]
fn test_librarian_checkout_wrong_arity() {
    let err = parse_librarian_command("3 2019000001").unwrap_err();
    assert_eq!(err, SyntaxError::ArgumentCount { expected: 3, found: 2 });
    assert_eq!(err.position(), 0);
}

#[test]
fn test_librarian_return_validates_card_bar_code() {
    let err = parse_librarian_command("4 1 1").unwrap_err();
    assert_eq!(err.position(), 1);
    assert_eq!(err.field(), Some(Field::CardBarCode));
}

#[test]
fn test_librarian_add_subscriber_bad_arguments() {
    assert_eq!(
        parse_librarian_command("2 Art 12 Madison 8479517423")
            .unwrap_err()
            .position(),
        2
    );
    assert_eq!(
        parse_librarian_command("2 Art 1234 Madison phone")
            .unwrap_err()
            .position(),
        4
    );
}

#[test]
fn test_librarian_logout_with_argument_is_rejected() {
    assert!(matches!(
        parse_librarian_command("9 now"),
        Err(SyntaxError::ArgumentCount { .. })
    ));
}

// =============================================================================
// Subscriber Menu
// =============================================================================

#[test]
fn test_subscriber_commands() {
    assert_eq!(
        parse_subscriber_command("1 3").unwrap(),
        SubscriberCommand::CheckoutBook { book: BookId(3) }
    );
    assert_eq!(
        parse_subscriber_command("3 Dune").unwrap(),
        SubscriberCommand::SearchByTitle {
            title: "Dune".to_string()
        }
    );
    assert_eq!(
        parse_subscriber_command("4 Herbert").unwrap(),
        SubscriberCommand::SearchByAuthor {
            author: "Herbert".to_string()
        }
    );
    assert_eq!(parse_subscriber_command("6").unwrap(), SubscriberCommand::ListReturned);
    assert_eq!(
        parse_subscriber_command("8 5551234").unwrap(),
        SubscriberCommand::UpdatePhoneNumber {
            phone_number: "5551234".to_string()
        }
    );
}

#[test]
fn test_subscriber_menu_has_no_file_commands() {
    assert!(matches!(
        parse_subscriber_command("l file"),
        Err(SyntaxError::UnknownCommand(_))
    ));
}

#[test]
fn test_subscriber_bad_phone_number() {
    let err = parse_subscriber_command("8 call-me").unwrap_err();
    assert_eq!(err.to_string(), "Error: The phone number MUST be a NUMBER.");
    assert_eq!(err.position(), 1);
}
