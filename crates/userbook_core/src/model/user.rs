//! User contact record.
//!
//! # Responsibility
//! - Define the persisted contact shape (`id`, `name`, `email`, `phone`).
//! - Provide field-presence validation used before any store write.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - The store itself never re-validates; callers run `validate()` first.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned row identifier.
pub type UserId = i64;

/// Identifier carried by records that were never inserted.
pub const UNSAVED_USER_ID: UserId = 0;

/// Contact record persisted in the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Text fields that must be present on every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Name,
    Email,
    Phone,
}

impl UserField {
    /// Column name in the `users` table.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// Validation error for user field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyField(UserField),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{} cannot be empty", field.as_str()),
        }
    }
}

impl Error for UserValidationError {}

impl UserRecord {
    /// Creates an unsaved record with trimmed field values.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self::with_id(UNSAVED_USER_ID, name, email, phone)
    }

    /// Creates a record bound to an existing row id, trimming field values.
    ///
    /// Used by the edit flow, where identity already exists in the store.
    pub fn with_id(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: trimmed(name.into()),
            email: trimmed(email.into()),
            phone: trimmed(phone.into()),
        }
    }

    /// Returns whether the store has assigned an id to this record.
    pub fn is_persisted(&self) -> bool {
        self.id > UNSAVED_USER_ID
    }

    /// Checks that name, email and phone are all non-blank.
    ///
    /// Reports the first empty field in name/email/phone order.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        for (field, value) in [
            (UserField::Name, &self.name),
            (UserField::Email, &self.email),
            (UserField::Phone, &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(UserValidationError::EmptyField(field));
            }
        }
        Ok(())
    }
}

fn trimmed(value: String) -> String {
    let trimmed = value.trim();
    if trimmed.len() == value.len() {
        value
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{UserField, UserRecord, UserValidationError, UNSAVED_USER_ID};

    #[test]
    fn new_record_is_unsaved_and_trimmed() {
        let user = UserRecord::new("  Ana ", "ana@x.com\n", " 555-0001");
        assert_eq!(user.id, UNSAVED_USER_ID);
        assert!(!user.is_persisted());
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@x.com");
        assert_eq!(user.phone, "555-0001");
    }

    #[test]
    fn validate_reports_first_empty_field() {
        let user = UserRecord::new("Ana", "   ", "");
        assert_eq!(
            user.validate(),
            Err(UserValidationError::EmptyField(UserField::Email))
        );
        assert_eq!(
            UserValidationError::EmptyField(UserField::Phone).to_string(),
            "phone cannot be empty"
        );
    }

    #[test]
    fn validate_accepts_filled_record_without_format_checks() {
        let user = UserRecord::with_id(7, "Bo", "not-an-email", "x");
        assert!(user.validate().is_ok());
        assert!(user.is_persisted());
    }
}
