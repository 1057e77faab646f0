//! Version comparison utilities

use std::cmp::Ordering;

use crate::{ParseError, Policy, VersionParser};

/// Comparator for comparing version strings.
///
/// Both operands are parsed with the comparator's policy. The boolean
/// predicates return `false` when either side fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Comparator {
    parser: VersionParser,
}

impl Comparator {
    /// Create a comparator using the strict grammar
    pub fn new() -> Self {
        Comparator::default()
    }

    pub fn with_policy(policy: Policy) -> Self {
        Comparator {
            parser: VersionParser::with_policy(policy),
        }
    }

    /// Compare version1 to version2 by precedence
    pub fn compare(&self, version1: &str, version2: &str) -> Result<Ordering, ParseError> {
        let left = self.parser.parse(version1)?;
        let right = self.parser.parse(version2)?;
        Ok(left.cmp(&right))
    }

    /// Check if version1 > version2
    pub fn greater_than(&self, version1: &str, version2: &str) -> bool {
        self.check(version1, version2, |o| o == Ordering::Greater)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(&self, version1: &str, version2: &str) -> bool {
        self.check(version1, version2, |o| o != Ordering::Less)
    }

    /// Check if version1 < version2
    pub fn less_than(&self, version1: &str, version2: &str) -> bool {
        self.check(version1, version2, |o| o == Ordering::Less)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(&self, version1: &str, version2: &str) -> bool {
        self.check(version1, version2, |o| o != Ordering::Greater)
    }

    /// Check if version1 == version2
    pub fn equal_to(&self, version1: &str, version2: &str) -> bool {
        self.check(version1, version2, |o| o == Ordering::Equal)
    }

    /// Check if version1 != version2
    pub fn not_equal_to(&self, version1: &str, version2: &str) -> bool {
        self.check(version1, version2, |o| o != Ordering::Equal)
    }

    fn check(&self, version1: &str, version2: &str, accept: impl Fn(Ordering) -> bool) -> bool {
        match self.compare(version1, version2) {
            Ok(ordering) => accept(ordering),
            Err(_) => false,
        }
    }
}
