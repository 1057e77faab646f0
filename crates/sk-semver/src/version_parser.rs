//! Version parsing engine shared by every grammar policy

use regex::{Captures, Match};

use crate::{
    BuildMetadata, Field, GrammarPolicy, IdentifierError, IdentifierKind, ParseError, Policy,
    Prerelease, Version,
};

/// Parse `input` with the given grammar policy.
///
/// The input is never trimmed. Missing required fields are reported before any
/// numeric conversion, and nested identifier errors are wrapped in
/// [`ParseError::Identifier`].
pub fn parse_version<P>(policy: &P, input: &str) -> Result<Version, ParseError>
where
    P: GrammarPolicy + ?Sized,
{
    let result = parse_captures(policy, input);
    if let Err(ref err) = result {
        log::trace!("Rejected {:?} under {} policy: {}", input, policy.name(), err);
    }
    result
}

fn parse_captures<P>(policy: &P, input: &str) -> Result<Version, ParseError>
where
    P: GrammarPolicy + ?Sized,
{
    let caps = policy
        .pattern()
        .captures(input)
        .ok_or_else(|| ParseError::Malformed(input.to_string()))?;

    policy.validate_fields(&caps)?;

    let major = convert_numeric(&caps, Field::Major)?;
    let minor = convert_numeric(&caps, Field::Minor)?;
    let patch = convert_numeric(&caps, Field::Patch)?;

    let prerelease = match present_tail(caps.get(4), IdentifierKind::Prerelease)? {
        Some(text) => Prerelease::parse(text)?,
        None => Prerelease::EMPTY,
    };
    let build = match present_tail(caps.get(5), IdentifierKind::Build)? {
        Some(text) => BuildMetadata::parse(text)?,
        None => BuildMetadata::EMPTY,
    };

    Ok(Version::with_parts(major, minor, patch, prerelease, build))
}

/// Read a numeric field, defaulting to 0 when the policy allowed it to be absent
fn convert_numeric(caps: &Captures<'_>, field: Field) -> Result<u64, ParseError> {
    match caps.get(field.group()) {
        Some(m) => m.as_str().parse::<u64>().map_err(|_| ParseError::Overflow {
            field,
            value: m.as_str().to_string(),
        }),
        None => Ok(0),
    }
}

/// A `-` or `+` separator followed by nothing is an empty identifier, not an
/// absent prerelease or build.
fn present_tail<'t>(
    m: Option<Match<'t>>,
    kind: IdentifierKind,
) -> Result<Option<&'t str>, IdentifierError> {
    match m {
        Some(m) if m.as_str().is_empty() => Err(IdentifierError::Empty { kind }),
        Some(m) => Ok(Some(m.as_str())),
        None => Ok(None),
    }
}

/// Reusable parser bound to one grammar policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionParser {
    policy: Policy,
}

impl VersionParser {
    /// Create a new version parser using the strict grammar
    pub fn new() -> Self {
        VersionParser::default()
    }

    pub fn with_policy(policy: Policy) -> Self {
        VersionParser { policy }
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn parse(&self, version: &str) -> Result<Version, ParseError> {
        parse_version(&self.policy, version)
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Loose, Strict};

    #[test]
    fn test_parse_strict() {
        let parser = VersionParser::new();

        let v = parser.parse("1.2.3").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert!(v.prerelease().is_empty());
        assert!(v.build().is_empty());

        let v = parser.parse("0.0.0").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (0, 0, 0));

        let v = parser.parse("10.20.30-rc.1+exp.sha.5114f85").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (10, 20, 30));
        assert_eq!(v.prerelease().to_string(), "rc.1");
        assert_eq!(v.build().to_string(), "exp.sha.5114f85");

        let v = parser.parse("1.0.0+20130313144700").unwrap();
        assert!(v.prerelease().is_empty());
        assert_eq!(v.build().to_string(), "20130313144700");

        let v = parser.parse("1.0.0-x-y-z.--").unwrap();
        assert_eq!(v.prerelease().to_string(), "x-y-z.--");

        let v = parser.parse("18446744073709551615.0.0").unwrap();
        assert_eq!(v.major(), u64::MAX);
    }

    #[test]
    fn test_parse_strict_missing_fields() {
        let parser = VersionParser::new();
        assert_eq!(parser.parse("1.2").unwrap_err(), ParseError::MissingField(Field::Patch));
        assert_eq!(parser.parse("1").unwrap_err(), ParseError::MissingField(Field::Minor));
        assert_eq!(parser.parse("").unwrap_err(), ParseError::MissingField(Field::Major));
        assert_eq!(parser.parse("-1.2.3").unwrap_err(), ParseError::MissingField(Field::Major));
        assert_eq!(
            parser.parse("1.2-alpha").unwrap_err(),
            ParseError::MissingField(Field::Patch)
        );
    }

    #[test]
    fn test_parse_strict_malformed() {
        let parser = VersionParser::new();
        for input in [
            "v1.2.3",
            "01.2.3",
            "1.02.3",
            "1.2.03",
            "1.2.3.4",
            "1..3",
            "a.b.c",
            " 1.2.3",
            "1.2.3 ",
            "1.2.3\n",
            "1.2.3+a\nb",
        ] {
            assert_eq!(
                parser.parse(input).unwrap_err(),
                ParseError::Malformed(input.to_string()),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_overflow() {
        let parser = VersionParser::new();
        assert_eq!(
            parser.parse("18446744073709551616.0.0").unwrap_err(),
            ParseError::Overflow {
                field: Field::Major,
                value: "18446744073709551616".to_string(),
            }
        );
        assert_eq!(
            parser.parse("1.99999999999999999999.0").unwrap_err(),
            ParseError::Overflow {
                field: Field::Minor,
                value: "99999999999999999999".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_field_reported_before_overflow() {
        assert_eq!(
            VersionParser::new().parse("99999999999999999999.1").unwrap_err(),
            ParseError::MissingField(Field::Patch)
        );
    }

    #[test]
    fn test_parse_invalid_identifiers() {
        let parser = VersionParser::new();
        assert_eq!(
            parser.parse("1.2.3-01").unwrap_err(),
            ParseError::Identifier(IdentifierError::LeadingZero {
                identifier: "01".to_string()
            })
        );
        assert_eq!(
            parser.parse("1.2.3-").unwrap_err(),
            ParseError::Identifier(IdentifierError::Empty {
                kind: IdentifierKind::Prerelease
            })
        );
        assert_eq!(
            parser.parse("1.2.3+").unwrap_err(),
            ParseError::Identifier(IdentifierError::Empty {
                kind: IdentifierKind::Build
            })
        );
        assert_eq!(
            parser.parse("1.2.3-alpha..1").unwrap_err(),
            ParseError::Identifier(IdentifierError::Empty {
                kind: IdentifierKind::Prerelease
            })
        );
        assert!(matches!(
            parser.parse("1.2.3-alpha_1").unwrap_err(),
            ParseError::Identifier(IdentifierError::InvalidCharacter { character: '_', .. })
        ));
        assert!(matches!(
            parser.parse("1.2.3+a+b").unwrap_err(),
            ParseError::Identifier(IdentifierError::InvalidCharacter { character: '+', .. })
        ));
        assert!(matches!(
            parser.parse("1.2.3-al pha").unwrap_err(),
            ParseError::Identifier(IdentifierError::InvalidCharacter { character: ' ', .. })
        ));
        assert!(parser.parse("1.2.3-0a").is_ok());
        assert!(parser.parse("1.2.3+01").is_ok());
    }

    #[test]
    fn test_parse_loose() {
        let parser = VersionParser::with_policy(Policy::Loose);

        let v = parser.parse("1.2").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 0));

        let v = parser.parse("v3").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (3, 0, 0));

        let v = parser.parse("v1.2.3-beta.2+build").unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (1, 2, 3));
        assert_eq!(v.prerelease().to_string(), "beta.2");
        assert_eq!(v.build().to_string(), "build");

        let v = parser.parse("2-rc.1").unwrap();
        assert_eq!(v.to_string(), "2.0.0-rc.1");

        assert_eq!(parser.parse("v").unwrap_err(), ParseError::MissingField(Field::Major));
        assert_eq!(
            parser.parse("01.2.3").unwrap_err(),
            ParseError::Malformed("01.2.3".to_string())
        );
        assert!(parser.parse("V1").is_err());
        assert!(parser.parse("1.2.3-01").is_err());
    }

    #[test]
    fn test_generic_policies() {
        assert!(parse_version(&Strict, "1.2.3").is_ok());
        assert!(parse_version(&Loose, "v1").is_ok());

        let dynamic: &dyn GrammarPolicy = &Loose;
        assert_eq!(parse_version(dynamic, "1.5").unwrap().to_string(), "1.5.0");
    }

    #[test]
    fn test_is_valid() {
        let strict = VersionParser::new();
        assert!(strict.is_valid("1.0.0"));
        assert!(!strict.is_valid("1.0"));

        let loose = VersionParser::with_policy(Policy::Loose);
        assert!(loose.is_valid("1.0"));
        assert_eq!(loose.policy(), Policy::Loose);
    }

    #[test]
    fn test_error_messages() {
        let parser = VersionParser::new();
        assert_eq!(
            parser.parse("1.2").unwrap_err().to_string(),
            "failed to parse version string: patch version is required"
        );
        assert_eq!(
            parser.parse("nope").unwrap_err().to_string(),
            "invalid version string \"nope\""
        );
        assert_eq!(
            parser.parse("1.2.3-01").unwrap_err().to_string(),
            "failed to parse version string: leading zero in numeric prerelease identifier \"01\""
        );
    }
}
