// src/domain/contact.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_NAME_CHARS: usize = 200;
const MAX_MESSAGE_CHARS: usize = 5000;
const MAX_PHONE_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value: String = value.into();
        let value = value.trim().to_string();
        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| DomainError::Validation("email must contain '@'".into()))?;

        if local.is_empty() || domain.contains('@') {
            return Err(DomainError::Validation("email address is malformed".into()));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(DomainError::Validation("email domain is malformed".into()));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::Validation("email cannot contain whitespace".into()));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: EmailAddress,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: &str,
        email: &str,
        phone: Option<&str>,
        message: &str,
    ) -> DomainResult<Self> {
        let name = required("name", name, MAX_NAME_CHARS)?;
        let email = EmailAddress::new(email)?;
        let message = required("message", message, MAX_MESSAGE_CHARS)?;

        let phone = match phone.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) if p.chars().count() > MAX_PHONE_CHARS => {
                return Err(DomainError::Validation(format!(
                    "phone cannot exceed {MAX_PHONE_CHARS} characters"
                )));
            }
            Some(p) => Some(p.to_string()),
            None => None,
        };

        Ok(Self {
            name,
            email,
            phone,
            message,
        })
    }
}

fn required(field: &str, value: &str, max_chars: usize) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    if trimmed.chars().count() > max_chars {
        return Err(DomainError::Validation(format!(
            "{field} cannot exceed {max_chars} characters"
        )));
    }
    Ok(trimmed.to_string())
}
