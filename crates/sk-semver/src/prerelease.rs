//! Prerelease identifiers and their precedence

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::identifier::{split_identifiers, write_dotted};
use crate::{Identifier, IdentifierError, IdentifierKind};

/// The `-alpha.1` part of a version.
///
/// An empty prerelease means the version is a release, which has higher
/// precedence than any prerelease of the same `major.minor.patch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prerelease {
    identifiers: Vec<Identifier>,
}

impl Prerelease {
    /// The absent prerelease
    pub const EMPTY: Prerelease = Prerelease {
        identifiers: Vec::new(),
    };

    /// Parse dot-separated prerelease identifiers.
    ///
    /// An empty string yields [`Prerelease::EMPTY`]; any empty segment inside
    /// a non-empty string is an error.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        if text.is_empty() {
            return Ok(Prerelease::EMPTY);
        }

        Ok(Prerelease {
            identifiers: split_identifiers(text, IdentifierKind::Prerelease)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}

impl Ord for Prerelease {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Slice ordering is element-wise, then shorter-is-lower
            (false, false) => self.identifiers.as_slice().cmp(other.identifiers.as_slice()),
        }
    }
}

impl PartialOrd for Prerelease {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Prerelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.identifiers)
    }
}

impl FromStr for Prerelease {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prerelease::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Prerelease {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
