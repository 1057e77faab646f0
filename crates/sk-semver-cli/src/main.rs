mod compare;
mod parse;
mod validate;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sk_semver::{Policy, VersionParser};

/// Environment variable consulted when `--policy` is not given
const POLICY_ENV: &str = "SKVER_POLICY";

#[derive(Parser, Debug)]
#[command(name = "skver")]
#[command(about = "Parse, validate and compare semantic versions")]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Grammar used to read versions [default: strict, or $SKVER_POLICY]
    #[arg(long, value_enum, global = true)]
    policy: Option<PolicyArg>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the canonical form of each version
    Parse(parse::ParseArgs),

    /// Compare two versions by precedence and print <, = or >
    Compare(compare::CompareArgs),

    /// Report versions that do not parse
    Validate(validate::ValidateArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum PolicyArg {
    Strict,
    Loose,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => Policy::Strict,
            PolicyArg::Loose => Policy::Loose,
        }
    }
}

fn resolve_policy(flag: Option<PolicyArg>, env_value: Option<String>) -> Result<Policy> {
    if let Some(arg) = flag {
        return Ok(arg.into());
    }

    match env_value {
        Some(value) => value
            .parse::<Policy>()
            .with_context(|| format!("Invalid {}", POLICY_ENV)),
        None => Ok(Policy::default()),
    }
}

fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn run() -> Result<u8> {
    let args = Args::parse();
    init_logger(args.verbose);

    let policy = resolve_policy(args.policy, std::env::var(POLICY_ENV).ok())?;
    log::debug!("Using {} grammar policy", policy);
    let parser = VersionParser::with_policy(policy);

    match args.command {
        Commands::Parse(parse_args) => parse::execute(&parse_args, &parser),
        Commands::Compare(compare_args) => compare::execute(&compare_args, &parser),
        Commands::Validate(validate_args) => validate::execute(&validate_args, &parser),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            for cause in e.chain().skip(1) {
                eprintln!("  Caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}
