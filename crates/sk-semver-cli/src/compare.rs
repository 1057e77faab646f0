//! Compare command - print the precedence of two versions.

use std::cmp::Ordering;

use anyhow::{Context, Result};
use clap::Args;
use sk_semver::VersionParser;

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

pub fn execute(args: &CompareArgs, parser: &VersionParser) -> Result<u8> {
    let left = parser
        .parse(&args.left)
        .with_context(|| format!("Could not read version \"{}\"", args.left))?;
    let right = parser
        .parse(&args.right)
        .with_context(|| format!("Could not read version \"{}\"", args.right))?;

    let ordering = left.cmp(&right);
    log::debug!("{} {} {}", left, symbol(ordering), right);
    println!("{}", symbol(ordering));
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_semver::Version;

    #[test]
    fn test_symbol() {
        let a = Version::parse("1.0.0-beta.2").unwrap();
        let b = Version::parse("1.0.0-beta.11").unwrap();
        assert_eq!(symbol(a.cmp(&b)), "<");
        assert_eq!(symbol(b.cmp(&a)), ">");
        assert_eq!(symbol(a.cmp(&a)), "=");
    }

    #[test]
    fn test_execute_reports_unparsable_operand() {
        let args = CompareArgs {
            left: "1.0".to_string(),
            right: "1.0.0".to_string(),
        };
        let err = execute(&args, &VersionParser::new()).unwrap_err();
        assert_eq!(err.to_string(), "Could not read version \"1.0\"");
        assert_eq!(
            err.chain().nth(1).unwrap().to_string(),
            "failed to parse version string: patch version is required"
        );
    }
}
