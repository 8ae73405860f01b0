//! Scalar module - coerced values read from a metadata block

use std::fmt;

/// A single value from a `key: value` line, coerced to its most specific type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// `true` or `false`
    Bool(bool),

    /// A run of ASCII digits that fits in a `u64`
    Int(u64),

    /// Anything else, trimmed
    Str(String),
}

impl Scalar {
    /// Coerce trimmed value text into a scalar
    ///
    /// Digit-only text becomes an integer, the literals `true` and `false`
    /// become booleans, everything else stays a string. Digit runs too large
    /// for a `u64` are kept as strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use aimeta_domain::Scalar;
    ///
    /// assert_eq!(Scalar::coerce("42"), Scalar::Int(42));
    /// assert_eq!(Scalar::coerce("false"), Scalar::Bool(false));
    /// assert_eq!(Scalar::coerce("build"), Scalar::Str("build".to_string()));
    /// ```
    pub fn coerce(text: &str) -> Self {
        if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = text.parse::<u64>() {
                return Scalar::Int(n);
            }
        }

        match text {
            "true" => Scalar::Bool(true),
            "false" => Scalar::Bool(false),
            _ => Scalar::Str(text.to_string()),
        }
    }

    /// Get the string payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Scalar::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer payload, if this is an integer
    pub fn as_int(&self) -> Option<u64> {
        match self {
            Scalar::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the boolean payload, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(n) => write!(f, "{}", n),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}
