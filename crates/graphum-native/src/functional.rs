//! Single-call construction of a [`NativeEnum`] from a names specification.

use num_bigint::BigInt;

use crate::enumeration::{NativeEnum, NativeEnumError};
use crate::value::RawValue;

/// Default first value given to auto-numbered names.
pub const DEFAULT_START: i64 = 1;

/// The member names passed to [`NativeEnum::functional`].
///
/// - `Joined("RED GREEN, BLUE")`: names separated by whitespace or commas,
///   numbered from the start value
/// - `List(vec!["RED", "GREEN"])`: one name per entry, numbered likewise
/// - `Pairs(vec![("RED", 1.into())])`: explicit values
#[derive(Debug, Clone, PartialEq)]
pub enum Names {
    Joined(String),
    List(Vec<String>),
    Pairs(Vec<(String, RawValue)>),
}

impl Names {
    fn into_bindings(self, start: i64) -> Vec<(String, RawValue)> {
        let numbered = |names: Vec<String>| -> Vec<(String, RawValue)> {
            let start = BigInt::from(start);
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| (name, RawValue::Integer(&start + BigInt::from(i))))
                .collect()
        };
        match self {
            Names::Joined(joined) => numbered(
                joined
                    .replace(',', " ")
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
            ),
            Names::List(names) => numbered(names),
            Names::Pairs(pairs) => pairs,
        }
    }
}

impl From<&str> for Names {
    fn from(joined: &str) -> Self {
        Names::Joined(joined.to_string())
    }
}

impl From<String> for Names {
    fn from(joined: String) -> Self {
        Names::Joined(joined)
    }
}

impl From<Vec<&str>> for Names {
    fn from(names: Vec<&str>) -> Self {
        Names::List(names.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<String>> for Names {
    fn from(names: Vec<String>) -> Self {
        Names::List(names)
    }
}

impl<V: Into<RawValue>> From<Vec<(&str, V)>> for Names {
    fn from(pairs: Vec<(&str, V)>) -> Self {
        Names::Pairs(
            pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.into()))
                .collect(),
        )
    }
}

impl NativeEnum {
    /// Build an enumeration in one call, numbering bare names from 1.
    pub fn functional(
        name: impl Into<String>,
        names: impl Into<Names>,
    ) -> Result<NativeEnum, NativeEnumError> {
        Self::functional_with_start(name, names, DEFAULT_START)
    }

    pub fn functional_with_start(
        name: impl Into<String>,
        names: impl Into<Names>,
        start: i64,
    ) -> Result<NativeEnum, NativeEnumError> {
        NativeEnum::builder(name)
            .members(names.into().into_bindings(start))
            .build()
    }
}
