//! Field validators for user payloads.
//!
//! Each rule pairs one field with one predicate and one message. All rules
//! run for every payload so the caller sees every problem at once.

use thiserror::Error;

use crate::models::{UserInput, UserPayload};

pub const FIRST_NAME_MESSAGE: &str = "Invalid firstName field: The field firstName should not contain digits or symbols and must not be empty";
pub const LAST_NAME_MESSAGE: &str = "Invalid lastName field: The field lastName should not contain digits or symbols and must not be empty";
pub const EMAIL_MESSAGE: &str =
    "Invalid email field: The field email must be a valid email address";
pub const PASSWORD_MESSAGE: &str = "Invalid password: Password must be at least 8 characters long, contain at least one uppercase letter, one lowercase letter, one special character, and one digit.";

const MIN_PASSWORD_LENGTH: usize = 8;
const PASSWORD_SYMBOLS: &str = "@#$%^&+=!";

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every rule that failed for one payload, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|e| e.message.to_owned()).collect()
    }
}

/// Letters `a-z` and `A-Z` only, at least one of them.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphabetic())
}

/// At least 8 characters with a digit, a lowercase letter, an uppercase
/// letter and one of `@#$%^&+=!`, and no whitespace.
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
        && !password.chars().any(char::is_whitespace)
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

struct FieldRule {
    field: &'static str,
    value: fn(&UserPayload) -> Option<&str>,
    check: fn(&str) -> bool,
    message: &'static str,
}

fn first_name(payload: &UserPayload) -> Option<&str> {
    payload.first_name.as_deref()
}

fn last_name(payload: &UserPayload) -> Option<&str> {
    payload.last_name.as_deref()
}

fn email(payload: &UserPayload) -> Option<&str> {
    payload.email.as_deref()
}

fn password(payload: &UserPayload) -> Option<&str> {
    payload.password.as_deref()
}

const USER_RULES: [FieldRule; 4] = [
    FieldRule {
        field: "firstName",
        value: first_name,
        check: is_valid_name,
        message: FIRST_NAME_MESSAGE,
    },
    FieldRule {
        field: "lastName",
        value: last_name,
        check: is_valid_name,
        message: LAST_NAME_MESSAGE,
    },
    FieldRule {
        field: "email",
        value: email,
        check: is_valid_email,
        message: EMAIL_MESSAGE,
    },
    FieldRule {
        field: "password",
        value: password,
        check: is_valid_password,
        message: PASSWORD_MESSAGE,
    },
];

impl UserPayload {
    /// Runs every rule and converts into a [`UserInput`] when all pass.
    pub fn validate(self) -> Result<UserInput, ValidationErrors> {
        let errors: Vec<FieldError> = USER_RULES
            .iter()
            .filter(|rule| !(rule.value)(&self).is_some_and(rule.check))
            .map(|rule| FieldError {
                field: rule.field,
                message: rule.message,
            })
            .collect();

        if !errors.is_empty() {
            return Err(ValidationErrors(errors));
        }

        Ok(UserInput {
            id: self.id,
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            password: self.password.unwrap_or_default(),
        })
    }
}
