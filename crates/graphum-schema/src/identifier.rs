use std::borrow::Cow;
use std::fmt::{self, Display};
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static IDENTIFIER_PARSER: LazyLock<IdentifierParser> = LazyLock::new(IdentifierParser::init);

/// Key of the meta/options block inside a declaration.
pub const META_KEY: &str = "Meta";

/// Parser for schema names: `[_A-Za-z][_0-9A-Za-z]*`.
/// Prefer using `Identifier::from_str` and `.parse()`.
pub struct IdentifierParser(Regex);

impl IdentifierParser {
    /// Initialize the parser. This internally compiles a regex, so don't call this in a hot path.
    pub fn init() -> Self {
        Self(Regex::new(r"^[_A-Za-z][_0-9A-Za-z]*").unwrap())
    }

    pub fn parse(&self, s: &str) -> Result<Identifier, IdentifierError> {
        let Some(matches) = self.0.find(s) else {
            if let Some(c) = s.chars().next() {
                return Err(IdentifierError::InvalidChar {
                    at: 0,
                    invalid_char: c,
                });
            } else {
                return Err(IdentifierError::Empty);
            }
        };
        if matches.len() == s.len() {
            Ok(Identifier(Cow::Owned(matches.as_str().to_string())))
        } else {
            // The pattern is ASCII-only, so the byte offset is also the character index.
            let at = matches.end();
            let invalid_char = s[at..].chars().next().unwrap();
            Err(IdentifierError::InvalidChar { at, invalid_char })
        }
    }
}

impl std::str::FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IDENTIFIER_PARSER.parse(s)
    }
}

/// A validated schema name for an enum member.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier(Cow<'static, str>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentifierError {
    #[error("Empty identifier")]
    Empty,
    #[error("Invalid character for identifier: {invalid_char} at {at}")]
    InvalidChar {
        /// the problem index of the identifier in the string
        at: usize,
        /// the invalid character
        invalid_char: char,
    },
}

impl Identifier {
    /// Creates a new Identifier without validation.
    ///
    /// Intended for compile-time constants where the string is known to match
    /// `[_A-Za-z][_0-9A-Za-z]*`.
    pub const fn new_unchecked(s: &'static str) -> Self {
        Identifier(Cow::Borrowed(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0.into()
    }

    /// Names that configure a declaration and can never name a member:
    /// the meta block key and `_sunder_` / `__dunder__` names.
    pub fn is_reserved(&self) -> bool {
        is_reserved_name(&self.0)
    }
}

/// See [`Identifier::is_reserved`].
pub fn is_reserved_name(name: &str) -> bool {
    name == META_KEY || (name.len() > 2 && name.starts_with('_') && name.ends_with('_'))
}

impl Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_identifier() {
        assert_eq!(
            Identifier::from_str("FIRST_LAST"),
            Ok(Identifier(Cow::Owned("FIRST_LAST".to_string())))
        );
    }

    #[test]
    fn test_identifier_leading_underscore() {
        assert_eq!(
            Identifier::from_str("_private"),
            Ok(Identifier(Cow::Owned("_private".to_string())))
        );
    }

    #[test]
    fn test_identifier_rejects_hyphen() {
        assert_eq!(
            Identifier::from_str("first-last"),
            Err(IdentifierError::InvalidChar {
                at: 5,
                invalid_char: '-',
            })
        );
    }

    #[test]
    fn test_identifier_invalid_first_char() {
        assert_eq!(
            Identifier::from_str("1ST"),
            Err(IdentifierError::InvalidChar {
                at: 0,
                invalid_char: '1',
            })
        );
    }

    #[test]
    fn test_identifier_rejects_non_ascii() {
        assert_eq!(
            Identifier::from_str("おーい"),
            Err(IdentifierError::InvalidChar {
                at: 0,
                invalid_char: 'お',
            })
        );
    }

    #[test]
    fn test_identifier_error_empty() {
        assert_eq!(Identifier::from_str(""), Err(IdentifierError::Empty));
    }

    #[test]
    fn test_reserved_names() {
        assert!(Identifier::new_unchecked("Meta").is_reserved());
        assert!(Identifier::new_unchecked("_order_").is_reserved());
        assert!(Identifier::new_unchecked("__init__").is_reserved());
        assert!(!Identifier::new_unchecked("_").is_reserved());
        assert!(!Identifier::new_unchecked("__").is_reserved());
        assert!(!Identifier::new_unchecked("_private").is_reserved());
        assert!(!Identifier::new_unchecked("META").is_reserved());
    }

    #[test]
    fn test_identifier_new_unchecked() {
        const TEST_ID: Identifier = Identifier::new_unchecked("LAST_FIRST");
        assert_eq!(TEST_ID.as_ref(), "LAST_FIRST");
    }
}
