//! Menu banners

use super::SessionState;

const RULE: &str = "--------------------------------------------------------";

const MAIN_OPTIONS: &[&str] = &[
    "[1 <password>] Login as a librarian",
    "[2 <card bar code> <4-digits pin>] Login as a Subscriber",
    "[3] Exit",
];

const LIBRARIAN_OPTIONS: &[&str] = &[
    "[1 <title> <author>] Add new Book",
    "[2 <name> <pin> <address> <phone number>] Add new subscriber",
    "[3 <card bar code> <book ID>] Check out a Book for a subscriber",
    "[4 <card bar code> <book ID>] Return a Book for a subscriber",
    "[5 <card bar code>] Display Personal Info of a Subscriber",
    "[6 <card bar code>] Display Books Checked out by a Subscriber",
    "[7] Display All Books",
    "[8 <book ID>] Remove a Book",
    "[L <filename.data>] Load list of Books from filename.data",
    "[S <filename.data>] Save list of Books to filename.data",
    "[9] Logout",
];

const SUBSCRIBER_OPTIONS: &[&str] = &[
    "[1 <book ID>] Check out a book",
    "[2 <book ID>] Return a book",
    "[3 <title>] Search a Book by title",
    "[4 <author>] Search a Book by author",
    "[5] Print list of books checked out",
    "[6] Print history of returned books",
    "[7 <address>] Update address",
    "[8 <phone number>] Update phone number",
    "[9] Logout",
];

fn banner(title: &str, options: &[&str]) -> String {
    let mut out = format!("\n{RULE}\n{title}\n{RULE}\nEnter one of the following options:\n");
    for option in options {
        out.push_str(option);
        out.push('\n');
    }
    out.push_str(RULE);
    out
}

/// Menu shown before reading a line in `state`; empty once exited
pub fn menu_for(state: &SessionState) -> String {
    match state {
        SessionState::MainMenu => banner(
            "     Welcome to our Book Library Management System",
            MAIN_OPTIONS,
        ),
        SessionState::Librarian => banner("    Welcome to Librarian's Space", LIBRARIAN_OPTIONS),
        SessionState::Subscriber(_) => {
            banner("    Welcome to Subscriber's Space", SUBSCRIBER_OPTIONS)
        }
        SessionState::Exited => String::new(),
    }
}

/// Printed once when the application ends
pub fn goodbye_banner() -> String {
    format!("\n{RULE}\n       Thanks for Using our Book Library App!!!!\n{RULE}")
}
