//! Build metadata

use std::fmt;
use std::str::FromStr;

use crate::identifier::{split_identifiers, write_dotted};
use crate::{Identifier, IdentifierError, IdentifierKind};

/// The `+build.5` part of a version.
///
/// Build metadata is informational only and never affects precedence. It is
/// kept so a parsed version displays the same way it was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BuildMetadata {
    identifiers: Vec<Identifier>,
}

impl BuildMetadata {
    pub const EMPTY: BuildMetadata = BuildMetadata {
        identifiers: Vec::new(),
    };

    /// Parse dot-separated build identifiers. Leading zeros are allowed.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        if text.is_empty() {
            return Ok(BuildMetadata::EMPTY);
        }

        Ok(BuildMetadata {
            identifiers: split_identifiers(text, IdentifierKind::Build)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    pub fn identifiers(&self) -> &[Identifier] {
        &self.identifiers
    }
}

impl fmt::Display for BuildMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dotted(f, &self.identifiers)
    }
}

impl FromStr for BuildMetadata {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildMetadata::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BuildMetadata {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
