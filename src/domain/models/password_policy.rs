//! Password Policy
//!
//! Rules a new driver's password must satisfy before it is hashed.

use once_cell::sync::Lazy;

use crate::shared::errors::DomainError;

static COMMON_PASSWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "password", "password1", "password123", "12345678", "123456789", "1234567890",
        "qwerty123", "qwertyuiop", "iloveyou", "sunshine", "princess", "football",
        "baseball", "welcome1", "admin123", "letmein1", "trustno1", "abc12345",
        "passw0rd", "11111111", "00000000", "monkey123", "dragon123", "master123",
    ]
});

/// Password strength rules
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 8 }
    }
}

impl PasswordPolicy {
    #[must_use]
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Check `password` for the account named `username`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::WeakPassword` listing every rule that failed.
    pub fn check(&self, password: &str, username: &str) -> Result<(), DomainError> {
        let mut problems = Vec::new();

        if password.chars().count() < self.min_length {
            problems.push(format!(
                "This password is too short. It must contain at least {} characters.",
                self.min_length
            ));
        }

        if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
            problems.push("This password is entirely numeric.".to_string());
        }

        let lowered = password.to_lowercase();
        if COMMON_PASSWORDS.contains(&lowered.as_str()) {
            problems.push("This password is too common.".to_string());
        }

        let username = username.to_lowercase();
        if !username.is_empty() && lowered.contains(&username) {
            problems.push("The password is too similar to the username.".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(DomainError::WeakPassword(problems))
        }
    }
}
