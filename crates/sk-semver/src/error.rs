//! Error types for version parsing

use std::fmt;
use thiserror::Error;

/// Which part of a version an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Prerelease,
    Build,
}

impl IdentifierKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::Prerelease => "prerelease",
            IdentifierKind::Build => "build metadata",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric fields of a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
        }
    }

    /// Capture group index of this field in every grammar pattern
    pub(crate) fn group(&self) -> usize {
        match self {
            Field::Major => 1,
            Field::Minor => 2,
            Field::Patch => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single prerelease or build metadata identifier was rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("empty {kind} identifier")]
    Empty { kind: IdentifierKind },
    #[error("invalid character {character:?} in {kind} identifier \"{identifier}\"")]
    InvalidCharacter {
        kind: IdentifierKind,
        identifier: String,
        character: char,
    },
    #[error("leading zero in numeric prerelease identifier \"{identifier}\"")]
    LeadingZero { identifier: String },
}

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid version string \"{0}\"")]
    Malformed(String),
    #[error("failed to parse version string: {0} version is required")]
    MissingField(Field),
    #[error("failed to parse version string: {field} version \"{value}\" does not fit in 64 bits")]
    Overflow { field: Field, value: String },
    #[error("failed to parse version string: {0}")]
    Identifier(#[from] IdentifierError),
    #[error("invalid grammar policy \"{0}\", expected one of: strict, loose")]
    UnknownPolicy(String),
}
