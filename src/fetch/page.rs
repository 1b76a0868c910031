// src/fetch/page.rs
// =============================================================================
// This module fetches a page and hands back its body as lines of text.
//
// Supported URLs:
// - http:// and https:// are fetched with reqwest
// - file:// is read straight from disk
// Anything else (or anything that doesn't parse as a URL) is an error.
//
// There is no retry and no timeout. The caller decides what to do when a
// fetch fails; urlgrep stops the whole run.
//
// Rust concepts:
// - anyhow::Context: Attach a human-readable message to any error
// - match on &str: Dispatch on the URL scheme
// =============================================================================

use anyhow::{anyhow, bail, Context, Result};
use reqwest::Client;
use url::Url;

use crate::extractor::PageContent;

/// Maximum number of redirects followed for a single page
const MAX_REDIRECTS: usize = 5;

/// Builds the HTTP client shared by every fetch in a run
pub fn build_client() -> Result<Client> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .build()
        .context("Failed to create HTTP client")
}

/// Fetches `target` and splits its body into lines
pub async fn fetch_page(client: &Client, target: &str) -> Result<PageContent> {
    log::trace!("enter: fetch_page({})", target);

    let url = Url::parse(target).map_err(|e| anyhow!("Invalid URL '{}': {}", target, e))?;

    let body = match url.scheme() {
        "http" | "https" => fetch_http(client, &url).await?,
        "file" => read_file(&url).await?,
        other => bail!("Unsupported URL scheme '{}' in {}", other, target),
    };

    let content = PageContent::from_text(&body);
    if content.is_empty() {
        log::debug!("{} has an empty body", target);
    }

    log::trace!("exit: fetch_page -> {} lines", content.len());
    Ok(content)
}

async fn fetch_http(client: &Client, url: &Url) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status();
    log::debug!("{} responded with {}", url, status);

    if !status.is_success() {
        bail!("Failed to fetch {}: HTTP {}", url, status);
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read body of {}", url))
}

async fn read_file(url: &Url) -> Result<String> {
    let path = url
        .to_file_path()
        .map_err(|_| anyhow!("Not a local file path: {}", url))?;

    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
