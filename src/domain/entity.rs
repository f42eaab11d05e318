//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all keyed records.
//! Every entity carries a generated string identifier.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Core trait for all keyed domain records
pub trait Entity: Sized + Send + Sync + Clone {
    /// Returns the entity's unique identifier
    fn id(&self) -> &str;
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors surfaced to callers of guarded operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Verification required: {0}")]
    Unverified(String),
}

/// Stored records from older sessions use `""` for "no value".
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Free-text fields the provider sometimes fills with a bare number
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "empty_as_none")]
        image: Option<String>,
    }

    #[test]
    fn test_empty_strings_read_as_none() {
        let h: Holder = serde_json::from_str(r#"{"image": ""}"#).unwrap();
        assert_eq!(h.image, None);
        let h: Holder = serde_json::from_str(r#"{"image": null}"#).unwrap();
        assert_eq!(h.image, None);
        let h: Holder = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(h.image, None);
        let h: Holder = serde_json::from_str(r#"{"image": "https://x/y.png"}"#).unwrap();
        assert_eq!(h.image.as_deref(), Some("https://x/y.png"));
    }

    #[derive(Deserialize)]
    struct Amount {
        #[serde(default, deserialize_with = "text_or_number")]
        amount: String,
    }

    #[test]
    fn test_text_or_number() {
        let a: Amount = serde_json::from_str(r#"{"amount": 5000}"#).unwrap();
        assert_eq!(a.amount, "5000");
        let a: Amount = serde_json::from_str(r#"{"amount": "Up to $1,000"}"#).unwrap();
        assert_eq!(a.amount, "Up to $1,000");
        let a: Amount = serde_json::from_str(r#"{"amount": null}"#).unwrap();
        assert_eq!(a.amount, "");
        let a: Amount = serde_json::from_str("{}").unwrap();
        assert_eq!(a.amount, "");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::Conflict("page 1 already supported".into()).to_string(),
            "Conflict: page 1 already supported"
        );
    }
}
