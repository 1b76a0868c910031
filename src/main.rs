// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging
// 2. Check the command-line arguments (bad usage exits with code 1, 2 or 3)
// 3. For each URL, in order: fetch it, extract its links, print them
// 4. Exit with proper code (0 = success, 1 = a URL could not be fetched)
//
// A single bad URL stops the run: the URLs after it are never fetched.
//
// Rust concepts used:
// - async/await: reqwest is async, so main runs inside a tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - The ? operator: Hands any fetch error straight back to main
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod extractor;     // src/extractor/ - link extraction
mod fetch;         // src/fetch/ - URL fetching
mod logger;        // src/logger.rs - logging setup

use anyhow::Result;
use reqwest::Client;

use cli::{Cli, USAGE};
use extractor::ExtractionMode;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // Fetch failures (and anything else unexpected) end the whole run
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = every URL was fetched and its links printed
//   Ok(1..=3) = usage error, nothing was fetched
//   Err = a URL could not be fetched
async fn run() -> Result<i32> {
    logger::initialize()?;

    let cli = match Cli::from_args(std::env::args().skip(1)) {
        Ok(cli) => cli,
        Err(e) => {
            log::debug!("usage error: {}", e);
            eprintln!("{}", USAGE);
            return Ok(e.exit_code());
        }
    };

    let client = fetch::build_client()?;
    grep_urls(&client, &cli.urls, cli.mode()).await?;

    Ok(0)
}

// Fetches each URL in turn and prints the links found on it
//
// Strictly one at a time: a page is fetched, extracted and printed before
// the next URL is touched.
async fn grep_urls(client: &Client, urls: &[String], mode: ExtractionMode) -> Result<()> {
    log::trace!("enter: grep_urls({:?}, {:?})", urls, mode);

    for url in urls {
        log::debug!("fetching {}", url);
        let content = fetch::fetch_page(client, url).await?;

        let links = extractor::extract(&content, mode);
        if links.is_empty() {
            log::debug!("no links found on {}", url);
        } else {
            log::debug!("{} link(s) found on {}", links.len(), url);
        }

        println!("{}", links);
    }

    log::trace!("exit: grep_urls");
    Ok(())
}
