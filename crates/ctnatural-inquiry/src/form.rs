//! Inquiry form fields and the required-field contract.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A field of the inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    Message,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Company, Field::Message];

    /// The form control name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::Message => "message",
        }
    }

    /// Whether the form marks this field `required`.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Company)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a field name that is not part of the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct FieldError(pub String);

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            // The form labels the company field "Organization"
            "company" | "organization" => Ok(Field::Company),
            "message" => Ok(Field::Message),
            other => Err(FieldError(other.to_string())),
        }
    }
}

/// Current values of the inquiry form.
///
/// Values are stored exactly as entered; nothing is trimmed or escaped until
/// a `mailto:` link is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub message: String,
}

/// Errors from the required-field contract.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill out the {0} field")]
    Missing(Field),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl ValidationError {
    /// The field the error refers to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Missing(field) => *field,
            ValidationError::InvalidEmail => Field::Email,
        }
    }
}

// WHATWG "valid e-mail address", the check behind <input type="email">
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Invalid email regex")
});

impl InquiryForm {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Message => &self.message,
        }
    }

    /// Overwrite a field with `value`, verbatim.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::Message => self.message = value,
        }
    }

    /// Check the required fields and the email format.
    ///
    /// Fields are checked in form order and the first failure is returned.
    /// Required means non-empty; whitespace counts as a value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for field in Field::ALL {
            if field.is_required() && self.get(field).is_empty() {
                return Err(ValidationError::Missing(field));
            }

            if field == Field::Email && !EMAIL_RE.is_match(&self.email) {
                return Err(ValidationError::InvalidEmail);
            }
        }

        Ok(())
    }

    /// Plain-text email body.
    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCompany: {}\n\n{}",
            self.name, self.email, self.company, self.message
        )
    }
}
