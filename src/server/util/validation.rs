//! Request validation rules.
//!
//! [`Validator`] collects every failed rule for a request so the client gets the
//! full list in one 400 response instead of fixing fields one at a time.

use crate::{model::api::FieldErrorDto, server::error::validation::ValidationError};

/// Accumulates field errors for a single request.
#[derive(Default)]
pub struct Validator {
    errors: Vec<FieldErrorDto>,
}

impl Validator {
    /// Creates an empty validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) -> &mut Self {
        if !ok {
            self.errors.push(FieldErrorDto::new(field, message));
        }
        self
    }

    /// Checks that `value` has between `min` and `max` characters inclusive.
    pub fn length(&mut self, field: &str, value: &str, min: usize, max: usize) -> &mut Self {
        let len = value.chars().count();
        if len < min || len > max {
            let message = if min == 0 {
                format!("Must be at most {} characters", max)
            } else {
                format!("Must be between {} and {} characters", min, max)
            };
            self.errors.push(FieldErrorDto::new(field, message));
        }
        self
    }

    /// Returns the collected errors, if any.
    pub fn finish(&mut self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError(std::mem::take(&mut self.errors)))
        }
    }
}

/// Email must have a non-empty local part, an `@`, and a dot somewhere after it.
pub fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty())
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Username is 3 to 20 ASCII letters, digits or underscores.
pub fn is_valid_username(username: &str) -> bool {
    (3..=20).contains(&username.len())
        && username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Password is at least 6 characters with one digit and one uppercase letter.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 6
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_uppercase())
}
