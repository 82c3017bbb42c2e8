//! Librarian credentials

/// The one librarian of a library
#[derive(Debug, Clone)]
pub struct Librarian {
    username: String,
    password: String,
}

impl Librarian {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Exact, case-sensitive comparison
    pub fn check_password(&self, password: &str) -> bool {
        self.password == password
    }
}
