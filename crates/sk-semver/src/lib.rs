//! Semantic versioning library with strict and loose grammars
//!
//! This crate parses SemVer 2.0.0 version strings into a structured [`Version`]
//! and orders versions by SemVer precedence. A [`GrammarPolicy`] decides which
//! input shapes are accepted: [`Strict`] requires `MAJOR.MINOR.PATCH`, while
//! [`Loose`] allows a `v` prefix and defaults a missing minor or patch to 0.

mod build_meta;
mod comparator;
mod error;
mod identifier;
mod policy;
mod prerelease;
mod version;
mod version_parser;


pub use build_meta::BuildMetadata;
pub use comparator::Comparator;
pub use error::{Field, IdentifierError, IdentifierKind, ParseError};
pub use identifier::Identifier;
pub use policy::{GrammarPolicy, Loose, Policy, Strict};
pub use prerelease::Prerelease;
pub use version::Version;
pub use version_parser::{parse_version, VersionParser};
