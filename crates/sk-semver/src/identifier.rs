//! Dot-separated identifiers used by prerelease and build metadata

use std::cmp::Ordering;
use std::fmt;

use crate::{IdentifierError, IdentifierKind};

/// A validated prerelease or build metadata identifier.
///
/// The text is non-empty and made only of ASCII alphanumerics and hyphens.
/// Prerelease identifiers additionally never carry a leading zero when they
/// are purely numeric.
///
/// Ordering follows SemVer precedence: numeric identifiers compare as
/// integers, alphanumeric ones compare by ASCII value, and a numeric
/// identifier always sorts before an alphanumeric one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    text: String,
}

impl Identifier {
    /// Validate a single identifier
    pub fn validate(text: &str, kind: IdentifierKind) -> Result<Self, IdentifierError> {
        if text.is_empty() {
            return Err(IdentifierError::Empty { kind });
        }

        if let Some(character) = text.chars().find(|&c| !is_identifier_char(c)) {
            return Err(IdentifierError::InvalidCharacter {
                kind,
                identifier: text.to_string(),
                character,
            });
        }

        if kind == IdentifierKind::Prerelease
            && text.len() > 1
            && text.starts_with('0')
            && is_numeric(text)
        {
            return Err(IdentifierError::LeadingZero {
                identifier: text.to_string(),
            });
        }

        Ok(Identifier {
            text: text.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Check if the identifier consists only of digits
    pub fn is_numeric(&self) -> bool {
        is_numeric(&self.text)
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_numeric(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// Compare two digit strings by value without converting them to integers.
///
/// Both sides are free of leading zeros for prerelease identifiers, so the
/// longer string is the larger number.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_numeric(), other.is_numeric()) {
            (true, true) => compare_numeric(&self.text, &other.text),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.text.as_bytes().cmp(other.text.as_bytes()),
        }
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Split `text` on `.` and validate every segment
pub(crate) fn split_identifiers(
    text: &str,
    kind: IdentifierKind,
) -> Result<Vec<Identifier>, IdentifierError> {
    text.split('.')
        .map(|part| Identifier::validate(part, kind))
        .collect()
}

/// Join identifiers back into their dotted form
pub(crate) fn write_dotted(f: &mut fmt::Formatter<'_>, identifiers: &[Identifier]) -> fmt::Result {
    for (i, identifier) in identifiers.iter().enumerate() {
        if i > 0 {
            f.write_str(".")?;
        }
        f.write_str(identifier.as_str())?;
    }
    Ok(())
}
