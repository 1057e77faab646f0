//! Parse command - print canonical versions or their fields.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use sk_semver::{Version, VersionParser};

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version strings to parse
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Print the parsed fields as JSON, one object per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize, Debug)]
struct ParsedVersion<'a> {
    input: &'a str,
    version: &'a Version,
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Vec<&'a str>,
    build: Vec<&'a str>,
}

impl<'a> ParsedVersion<'a> {
    fn new(input: &'a str, version: &'a Version) -> Self {
        ParsedVersion {
            input,
            version,
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            prerelease: version.prerelease().identifiers().iter().map(|i| i.as_str()).collect(),
            build: version.build().identifiers().iter().map(|i| i.as_str()).collect(),
        }
    }
}

fn render(input: &str, version: &Version, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(&ParsedVersion::new(input, version))?)
    } else {
        Ok(version.to_string())
    }
}

pub fn execute(args: &ParseArgs, parser: &VersionParser) -> Result<u8> {
    let mut failures = 0;

    for input in &args.versions {
        match parser.parse(input) {
            Ok(version) => println!("{}", render(input, &version, args.json)?),
            Err(err) => {
                eprintln!("{}: {}", input, err);
                failures += 1;
            }
        }
    }

    log::debug!("Parsed {} of {} versions", args.versions.len() - failures, args.versions.len());
    Ok(if failures > 0 { 1 } else { 0 })
}
