//! Record Identity and Field Values
//!
//! Storage-neutral building blocks shared by every catalog entity.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Newtype wrapper for record IDs providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Create a new random RecordId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RecordId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for RecordId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value)?))
    }
}

/// A typed column value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Uuid(Uuid),
    Text(String),
    OptionalText(Option<String>),
    Integer(i32),
}

impl From<RecordId> for FieldValue {
    fn from(id: RecordId) -> Self {
        Self::Uuid(id.0)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        Self::OptionalText(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Uuid(value) => write!(f, "{value}"),
            Self::Text(value) | Self::OptionalText(Some(value)) => f.write_str(value),
            Self::OptionalText(None) => f.write_str("NULL"),
            Self::Integer(value) => write!(f, "{value}"),
        }
    }
}

/// How a filter compares its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    /// Case-insensitive substring
    Contains,
}

/// One listing filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    pub column: &'static str,
    pub value: FieldValue,
    pub mode: MatchMode,
}

impl FilterClause {
    #[must_use]
    pub fn exact(column: &'static str, value: impl Into<FieldValue>) -> Self {
        Self {
            column,
            value: value.into(),
            mode: MatchMode::Exact,
        }
    }

    #[must_use]
    pub fn contains(column: &'static str, value: impl Into<String>) -> Self {
        Self {
            column,
            value: FieldValue::Text(value.into()),
            mode: MatchMode::Contains,
        }
    }
}

/// Keep only the non-blank optional filters
pub(crate) fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_new() {
        let id1 = RecordId::new();
        let id2 = RecordId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_record_id_try_from_str() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = RecordId::try_from(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
        assert!(RecordId::try_from("nope").is_err());
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("abc").to_string(), "abc");
        assert_eq!(FieldValue::from(Option::<String>::None).to_string(), "NULL");
        assert_eq!(FieldValue::from(12).to_string(), "12");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some(&"  shop ".to_string())), Some("shop"));
        assert_eq!(non_blank(Some(&"   ".to_string())), None);
        assert_eq!(non_blank(None), None);
    }
}
