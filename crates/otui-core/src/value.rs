//! Runtime value model for property values.
//!
//! Every raw property value is classified exactly once, at parse time, by
//! its leading character: a bracket literal parses as JSON (after `'` → `"`
//! substitution), a quoted literal strips its first and last characters,
//! and a bare token becomes a number when the whole token parses as a
//! float. Classification is total: there is no coercion failure.

use serde::Serialize;
use std::fmt;

/// A coerced property value.
///
/// `String` holds a quoted literal with the quotes stripped; `Token` holds
/// the bare-text fallback. The two render and serialize identically; the
/// tag only records how the value was written in the source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    String(String),
    List(Vec<Value>),
    Token(String),
}

impl Value {
    /// Classify a raw (already trimmed) property value.
    ///
    /// Silent recoveries, kept deliberately: a malformed bracket literal
    /// becomes an empty list, and an unterminated quoted literal loses its
    /// last intended character to the unconditional first/last strip.
    pub fn coerce(raw: &str) -> Value {
        if raw.starts_with('[') {
            return match serde_json::from_str::<serde_json::Value>(&raw.replace('\'', "\"")) {
                Ok(serde_json::Value::Array(items)) => {
                    Value::List(items.iter().map(Value::from_json).collect())
                }
                _ => Value::List(Vec::new()),
            };
        }
        if raw.starts_with('"') {
            let mut inner = raw.chars();
            inner.next();
            inner.next_back();
            return Value::String(inner.as_str().to_string());
        }
        match raw.parse::<f64>() {
            Ok(n) => Value::Number(n),
            Err(_) => Value::Token(raw.to_string()),
        }
    }

    fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Value::from_json).collect())
            }
            // Booleans, nulls, and objects are outside the format; carry
            // their JSON text so coercion stays total.
            other => Value::Token(other.to_string()),
        }
    }

    /// Truthiness as the builder applies it: zero, NaN, and the empty
    /// string read as absent.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) | Value::Token(s) => !s.is_empty(),
            Value::List(_) => true,
        }
    }

    /// Numeric view: numbers directly, strings and tokens via a full
    /// float parse. Lists have no numeric reading.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::String(s) | Value::Token(s) => s.trim().parse().ok(),
            Value::List(_) => None,
        }
    }

    /// Sequence view.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => {
                if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{n}")
                }
            }
            Value::String(s) | Value::Token(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}
