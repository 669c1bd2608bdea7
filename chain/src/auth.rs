//! Credential check for the console gate.
//!
//! Plain string equality against one configured pair. There is no hashing,
//! lockout or rate limiting; the console simply asks again.

use crate::config::{DEFAULT_PASSWORD, DEFAULT_USERNAME};

/// The username/password pair the console accepts.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

// Keeps the password out of debug logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// True only when both `username` and `password` match `valid` exactly.
pub fn authenticate(username: &str, password: &str, valid: &Credentials) -> bool {
    username == valid.username && password == valid.password
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pair_is_accepted() {
        assert!(authenticate("username", "password", &Credentials::default()));
    }

    #[test]
    fn any_single_character_change_is_rejected() {
        let valid = Credentials::default();
        let candidates = [
            ("usernamE", "password"),
            ("username", "passwort"),
            ("username ", "password"),
            ("sername", "password"),
            ("username", "Password"),
            ("", "password"),
            ("username", ""),
        ];
        for (user, pass) in candidates {
            assert!(!authenticate(user, pass, &valid), "{user:?}/{pass:?} accepted");
        }
    }

    #[test]
    fn swapped_fields_are_rejected() {
        assert!(!authenticate("password", "username", &Credentials::default()));
    }

    #[test]
    fn custom_pair() {
        let valid = Credentials::new("plant-7", "s3cret");
        assert!(authenticate("plant-7", "s3cret", &valid));
        assert!(!authenticate("username", "password", &valid));
    }

    #[test]
    fn debug_hides_password() {
        let shown = format!("{:?}", Credentials::new("alice", "hunter2"));
        assert!(shown.contains("alice"));
        assert!(!shown.contains("hunter2"));
    }
}
