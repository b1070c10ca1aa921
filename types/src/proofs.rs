//! Validated input text.
//!
//! Panels accept free-form text from the input line, but every committed
//! entity (a sent message, a generation prompt) must carry non-blank text.
//! Validation happens once, at construction; holders of a [`NonEmptyText`]
//! never re-check.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Text that is guaranteed to contain at least one non-whitespace character.
///
/// The original string is stored as typed, including surrounding whitespace;
/// only the emptiness check trims.
///
/// # Serde
///
/// Serializes as a plain JSON string. Deserialization re-validates and fails
/// on blank input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyText(String);

#[derive(Debug, Error)]
#[error("input text must not be blank")]
pub struct EmptyTextError;

impl NonEmptyText {
    pub fn new(value: impl Into<String>) -> Result<Self, EmptyTextError> {
        let value = value.into();
        if value.trim().is_empty() {
            Err(EmptyTextError)
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for NonEmptyText {
    type Error = EmptyTextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for NonEmptyText {
    type Error = EmptyTextError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyText> for String {
    fn from(value: NonEmptyText) -> Self {
        value.0
    }
}

impl std::ops::Deref for NonEmptyText {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::NonEmptyText;

    #[test]
    fn rejects_blank_input() {
        assert!(NonEmptyText::new("").is_err());
        assert!(NonEmptyText::new("   \t\n").is_err());
    }

    #[test]
    fn preserves_original_text() {
        let text = NonEmptyText::new("  hello  ").expect("non-blank");
        assert_eq!(text.as_str(), "  hello  ");
    }

    #[test]
    fn serde_round_trip_validates() {
        let text = NonEmptyText::new("prompt").expect("non-blank");
        let json = serde_json::to_string(&text).expect("serialize");
        assert_eq!(json, "\"prompt\"");
        assert!(serde_json::from_str::<NonEmptyText>("\"  \"").is_err());
    }
}
