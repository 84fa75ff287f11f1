//! A single semantic cell value.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

/// One row value of a [`Field`](crate::frame::Field).
///
/// `Value::Null` is the null sentinel: the vector builder appends a physical
/// null wherever it sees it, and decoding reads physical nulls back as it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Missing value.
    #[default]
    Null,
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Boolean(bool),
    /// Point in time (UTC).
    Time(DateTime<Utc>),
    /// UTF-8 text.
    String(String),
}

impl Value {
    /// Returns `true` for the null sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Time(_) => "time",
            Value::String(_) => "string",
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// The timestamp payload, if this is a time.
    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Time(v) => Some(*v),
            _ => None,
        }
    }

    /// The text payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Number(v) => write!(f, "{v}"),
            Value::Boolean(v) => write!(f, "{v}"),
            Value::Time(v) => f.write_str(&v.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::String(v) => f.write_str(v),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Time(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn option_none_becomes_null() {
        let v: Value = Option::<f64>::None.into();
        assert!(v.is_null());
        let v: Value = Some(2.5).into();
        assert_eq!(v, Value::Number(2.5));
    }

    #[test]
    fn display_renders_time_as_rfc3339_millis() {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_123).single().unwrap();
        assert_eq!(Value::Time(ts).to_string(), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn accessors_only_match_their_kind() {
        let v = Value::from("abc");
        assert_eq!(v.as_str(), Some("abc"));
        assert_eq!(v.as_f64(), None);
        assert_eq!(v.kind(), "string");
    }
}
