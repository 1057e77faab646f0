//! Grammar policies: which version string shapes a parser accepts

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::{Field, ParseError};

lazy_static! {
    /// Numeric component without leading zeros. `\d` would also match non-ASCII digits.
    static ref NUMBER_REGEX: &'static str = r"(0|[1-9][0-9]*)";

    // Every field is optional in the pattern so a missing field can be reported by
    // name instead of as a generic mismatch. Prerelease and build tails are
    // captured loosely and validated identifier by identifier.
    static ref VERSION_BODY: String = format!(
        r"{num}?(?:\.{num})?(?:\.{num})?(?:-([^+]*))?(?:\+(.*))?$",
        num = *NUMBER_REGEX
    );

    static ref STRICT_RE: Regex = Regex::new(&format!(r"^{}", *VERSION_BODY)).unwrap();

    static ref LOOSE_RE: Regex = Regex::new(&format!(r"^v?{}", *VERSION_BODY)).unwrap();
}

/// A rule set describing an accepted version dialect.
///
/// The pattern must be anchored on both ends and expose five capture groups:
/// major, minor, patch, prerelease text and build text.
pub trait GrammarPolicy {
    /// Human readable policy name
    fn name(&self) -> &'static str;

    /// Anchored pattern the whole input has to match
    fn pattern(&self) -> &'static Regex;

    /// Numeric fields that must be present in the input
    fn required_fields(&self) -> &'static [Field];

    /// Check that every required field was captured
    fn validate_fields(&self, captures: &Captures<'_>) -> Result<(), ParseError> {
        for field in self.required_fields() {
            if captures.get(field.group()).is_none() {
                return Err(ParseError::MissingField(*field));
            }
        }
        Ok(())
    }
}

/// Full SemVer: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`, no `v` prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Strict;

impl GrammarPolicy for Strict {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn pattern(&self) -> &'static Regex {
        &STRICT_RE
    }

    fn required_fields(&self) -> &'static [Field] {
        &[Field::Major, Field::Minor, Field::Patch]
    }
}

/// Partial versions such as `v1` or `1.2`; missing minor and patch become 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Loose;

impl GrammarPolicy for Loose {
    fn name(&self) -> &'static str {
        "loose"
    }

    fn pattern(&self) -> &'static Regex {
        &LOOSE_RE
    }

    fn required_fields(&self) -> &'static [Field] {
        &[Field::Major]
    }
}

/// Runtime selection between the built-in grammars
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Policy {
    #[default]
    Strict,
    Loose,
}

impl Policy {
    pub fn as_str(&self) -> &'static str {
        self.name()
    }

    fn inner(&self) -> &'static dyn GrammarPolicy {
        match self {
            Policy::Strict => &Strict,
            Policy::Loose => &Loose,
        }
    }
}

impl GrammarPolicy for Policy {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn pattern(&self) -> &'static Regex {
        self.inner().pattern()
    }

    fn required_fields(&self) -> &'static [Field] {
        self.inner().required_fields()
    }

    fn validate_fields(&self, captures: &Captures<'_>) -> Result<(), ParseError> {
        self.inner().validate_fields(captures)
    }
}

impl FromStr for Policy {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Policy::Strict),
            "loose" => Ok(Policy::Loose),
            _ => Err(ParseError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
