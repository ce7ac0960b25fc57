use num_bigint::BigInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawValueKind {
    Null,
    Bool,
    Integer,
    Float,
    Text,
}

impl core::fmt::Display for RawValueKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Integer => write!(f, "integer"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// The value an author binds to an enumeration member.
///
/// Values are compared structurally. Two members of one enumeration that
/// carry equal values are the same member under two names.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Null,
    Bool(bool),
    Integer(BigInt),
    Float(f64),
    Text(String),
}

impl RawValue {
    pub fn kind(&self) -> RawValueKind {
        match self {
            Self::Null => RawValueKind::Null,
            Self::Bool(_) => RawValueKind::Bool,
            Self::Integer(_) => RawValueKind::Integer,
            Self::Float(_) => RawValueKind::Float,
            Self::Text(_) => RawValueKind::Text,
        }
    }

    /// Returns the text content if this is a `Text` variant.
    pub fn as_str(&self) -> Option<&str> {
        if let Self::Text(text) = self {
            Some(text)
        } else {
            None
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        if let Self::Integer(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl core::fmt::Display for RawValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(x) => write!(f, "{}", x),
            Self::Text(s) => write!(f, "{:?}", s),
        }
    }
}

// ============================================================================
// From implementations for RawValue
// ============================================================================

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl From<i32> for RawValue {
    fn from(n: i32) -> Self {
        RawValue::Integer(BigInt::from(n))
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Integer(BigInt::from(n))
    }
}

impl From<u32> for RawValue {
    fn from(n: u32) -> Self {
        RawValue::Integer(BigInt::from(n))
    }
}

impl From<u64> for RawValue {
    fn from(n: u64) -> Self {
        RawValue::Integer(BigInt::from(n))
    }
}

impl From<BigInt> for RawValue {
    fn from(n: BigInt) -> Self {
        RawValue::Integer(n)
    }
}

impl From<f32> for RawValue {
    fn from(x: f32) -> Self {
        RawValue::Float(x as f64)
    }
}

impl From<f64> for RawValue {
    fn from(x: f64) -> Self {
        RawValue::Float(x)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

impl From<()> for RawValue {
    fn from(_: ()) -> Self {
        RawValue::Null
    }
}

impl PartialEq<str> for RawValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for RawValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for RawValue {
    fn eq(&self, other: &i64) -> bool {
        self.as_integer() == Some(&BigInt::from(*other))
    }
}

impl PartialEq<bool> for RawValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_and_float_are_distinct() {
        assert_ne!(RawValue::from(1), RawValue::from(1.0));
        assert_eq!(RawValue::from(1).kind(), RawValueKind::Integer);
        assert_eq!(RawValue::from(1.0).kind(), RawValueKind::Float);
    }

    #[test]
    fn test_widths_compare_equal() {
        assert_eq!(RawValue::from(7i32), RawValue::from(7u64));
        assert_eq!(RawValue::from(7i64), 7i64);
    }

    #[test]
    fn test_text_comparison() {
        let value = RawValue::from("first_last");
        assert_eq!(value, "first_last");
        assert_ne!(value, "last_first");
        assert_eq!(value.to_string(), "\"first_last\"");
    }

    #[test]
    fn test_null_from_unit() {
        assert!(RawValue::from(()).is_null());
        assert_eq!(RawValue::Null.to_string(), "null");
    }
}
