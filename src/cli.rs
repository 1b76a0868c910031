// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//     urlgrep [-a] url [url ...]
//
// The usage rules are stricter than what clap gives us for free: each kind
// of bad invocation has its own exit code, and only `-a` may appear in
// front of the URLs. So the raw arguments are classified first, and clap
// gets the URL list back behind a `--`, where it takes every value as-is
// (a second `-a`, or a literal `--`, is just another URL).
//
// Exit codes for usage errors:
//   1 = no arguments at all
//   2 = a leading flag other than -a (or anything else clap rejects)
//   3 = -a with no URLs after it
//
// Rust concepts:
// - Derive macros: clap::Parser and thiserror::Error generate the plumbing
// - Enums: Each usage error is a variant with its own exit code
// =============================================================================

use clap::Parser;
use thiserror::Error;

use crate::extractor::ExtractionMode;

/// Flag that restricts output to absolute URLs
const ABSOLUTE_FLAG: &str = "-a";

/// Printed to stderr on any usage error
pub const USAGE: &str = "Usage: urlgrep [-a] url url ... \n  -a: only print absolute URLs";

#[derive(Parser, Debug)]
#[command(
    name = "urlgrep",
    about = "Print the links found in the anchor tags of one or more web pages",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Only print absolute URLs
    #[arg(short = 'a')]
    pub absolute: bool,

    /// Pages to grep, processed in order
    #[arg(required = true)]
    pub urls: Vec<String>,
}

impl Cli {
    /// Parses the program arguments (without the program name)
    pub fn from_args<I>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let (absolute, urls) = classify(&args)?;

        let mut argv = vec!["urlgrep".to_string()];
        if absolute {
            argv.push(ABSOLUTE_FLAG.to_string());
        }
        argv.push("--".to_string());
        argv.extend(urls.iter().cloned());

        Cli::try_parse_from(argv).map_err(|e| UsageError::Invalid(e.kind().to_string()))
    }

    pub fn mode(&self) -> ExtractionMode {
        ExtractionMode::from_include_relative(!self.absolute)
    }
}

/// A bad invocation; nothing gets fetched
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("no URLs given")]
    NoArguments,

    #[error("unknown flag '{0}'")]
    UnknownFlag(String),

    #[error("-a needs at least one URL after it")]
    MissingUrls,

    #[error("invalid arguments: {0}")]
    Invalid(String),
}

impl UsageError {
    pub fn exit_code(&self) -> i32 {
        match self {
            UsageError::NoArguments => 1,
            UsageError::UnknownFlag(_) | UsageError::Invalid(_) => 2,
            UsageError::MissingUrls => 3,
        }
    }
}

/// Splits the raw arguments into the absolute flag and the URLs after it
fn classify(args: &[String]) -> Result<(bool, &[String]), UsageError> {
    let first = args.first().ok_or(UsageError::NoArguments)?;

    if !first.starts_with('-') {
        return Ok((false, args));
    }
    if first != ABSOLUTE_FLAG {
        return Err(UsageError::UnknownFlag(first.clone()));
    }
    if args.len() == 1 {
        return Err(UsageError::MissingUrls);
    }

    Ok((true, &args[1..]))
}
