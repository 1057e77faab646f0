//! The parsed version value and its precedence

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::version_parser::parse_version;
use crate::{BuildMetadata, GrammarPolicy, Loose, ParseError, Prerelease, Strict};

/// A semantic version.
///
/// Equality, hashing and ordering follow SemVer precedence and therefore
/// ignore build metadata: `1.0.0+a == 1.0.0+b`. Use [`Version::identical`] to
/// also compare build metadata.
#[derive(Debug, Clone, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Prerelease,
    build: BuildMetadata,
}

impl Version {
    /// Create a release version without prerelease or build metadata
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
        }
    }

    /// Create a version from already validated parts
    pub fn with_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Prerelease,
        build: BuildMetadata,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    /// Parse a full `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` version
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_version(&Strict, input)
    }

    /// Parse a version that may have a `v` prefix and omit minor or patch
    pub fn parse_loose(input: &str) -> Result<Self, ParseError> {
        parse_version(&Loose, input)
    }

    pub fn parse_with<P>(policy: &P, input: &str) -> Result<Self, ParseError>
    where
        P: GrammarPolicy + ?Sized,
    {
        parse_version(policy, input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn prerelease(&self) -> &Prerelease {
        &self.prerelease
    }

    pub fn build(&self) -> &BuildMetadata {
        &self.build
    }

    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Three-way precedence comparison, same as [`Ord::cmp`]
    pub fn compare(&self, other: &Version) -> Ordering {
        self.cmp(other)
    }

    /// Equal precedence and equal build metadata
    pub fn identical(&self, other: &Version) -> bool {
        self == other && self.build == other.build
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| self.prerelease.cmp(&other.prerelease))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Version {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Version::parse(&text).map_err(serde::de::Error::custom)
    }
}
