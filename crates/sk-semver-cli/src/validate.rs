//! Validate command - report versions that do not parse.

use anyhow::Result;
use clap::Args;
use sk_semver::{ParseError, VersionParser};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Version strings to check
    #[arg(required = true)]
    pub versions: Vec<String>,
}

fn invalid<'a>(parser: &VersionParser, versions: &'a [String]) -> Vec<(&'a str, ParseError)> {
    versions
        .iter()
        .filter_map(|v| parser.parse(v).err().map(|err| (v.as_str(), err)))
        .collect()
}

pub fn execute(args: &ValidateArgs, parser: &VersionParser) -> Result<u8> {
    let failures = invalid(parser, &args.versions);

    for (input, err) in &failures {
        println!("{}: {}", input, err);
    }

    log::info!("{} of {} versions are invalid", failures.len(), args.versions.len());
    Ok(if failures.is_empty() { 0 } else { 1 })
}
