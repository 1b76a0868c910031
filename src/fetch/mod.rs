// src/fetch/mod.rs
// =============================================================================
// This module turns a URL into page content for the extractor.
//
// Submodules:
// - page: URL validation, HTTP and file fetching
// =============================================================================

mod page;

pub use page::{build_client, fetch_page};
