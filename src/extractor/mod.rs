// src/extractor/mod.rs
// =============================================================================
// This module finds the links referenced by anchor tags in raw page text.
//
// It does NOT parse HTML. It walks the page line by line, skips lines that
// don't open an anchor tag, and runs a regular expression over the rest.
// That keeps it simple, with a few known limits:
// - Only `<a href` and `<A HREF` open a candidate line (no mixed case)
// - An anchor tag whose opening `<...>` spans lines is never found
// - Links are reported exactly as written: no resolving, no de-duplication
//
// Submodules:
// - rules: the candidate-line filter and the two matching rules
// - format: turns raw matches into printable text
//
// Rust concepts:
// - Newtypes: LinkRecord wraps a String to give it a distinct meaning
// - Iterator adapters: filter + flat_map build the result in one pass
// - Display: lets callers print an ExtractionResult with {}
// =============================================================================

mod format;
mod rules;

use std::fmt;

use format::render;
use rules::is_candidate_line;

/// Which links to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Every `href` value, relative or absolute
    AllLinks,
    /// Only absolute-URL-shaped text (a scheme plus `://`, or a mailto address)
    AbsoluteOnly,
}

impl ExtractionMode {
    /// Picks the mode from the "include relative links?" switch
    pub fn from_include_relative(include_relative: bool) -> Self {
        if include_relative {
            ExtractionMode::AllLinks
        } else {
            ExtractionMode::AbsoluteOnly
        }
    }
}

/// The fetched body of a page, as an ordered list of lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    lines: Vec<String>,
}

impl PageContent {
    /// Splits `text` into lines on `\n`, dropping a trailing `\r` from each
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(String::from).collect(),
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<String>> for PageContent {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

/// One matched substring, exactly as it appeared on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord(String);

impl LinkRecord {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// All matches from one page, in line order then left-to-right order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    links: Vec<LinkRecord>,
}

impl ExtractionResult {
    pub fn iter(&self) -> impl Iterator<Item = &LinkRecord> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Formatted text: one cleaned-up link per line, each ending in `\n`
    pub fn render(&self) -> String {
        render(self.iter().map(LinkRecord::as_str))
    }
}

impl fmt::Display for ExtractionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Extracts links from a fetched page
///
/// Never fails: a line without a match just contributes nothing.
pub fn extract(content: &PageContent, mode: ExtractionMode) -> ExtractionResult {
    log::trace!("enter: extract({} lines, {:?})", content.len(), mode);

    let result = extract_lines(content.lines(), mode);

    log::trace!("exit: extract -> {} links", result.len());
    result
}

/// Same as [`extract`], over any sequence of lines
pub fn extract_lines<'a, I>(lines: I, mode: ExtractionMode) -> ExtractionResult
where
    I: IntoIterator<Item = &'a str>,
{
    let links = lines
        .into_iter()
        .filter(|line| is_candidate_line(line))
        .flat_map(|line| mode.find_in(line))
        .inspect(|found| log::debug!("matched {}", found))
        .map(|found| LinkRecord(found.to_string()))
        .collect();

    ExtractionResult { links }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is extract() a plain function and not a method on some struct?
//    - It has no state to keep between calls
//    - Every call gets its own input and returns its own output
//
// 2. What does flat_map do here?
//    - Each line can produce zero, one or many matches
//    - flat_map flattens those per-line iterators into one stream,
//      keeping line order and left-to-right order inside a line
//
// 3. Why impl Display?
//    - println!("{}", result) now prints the formatted links directly
// -----------------------------------------------------------------------------
