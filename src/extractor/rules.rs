// src/extractor/rules.rs
// =============================================================================
// This module holds the matching rules used to pull links out of a line.
//
// Two steps per line:
// 1. A cheap substring check decides whether the line is worth looking at
//    (a "candidate line")
// 2. One of two regular expressions is run over the candidate line
//
// The regular expressions are compiled once, the first time they are used,
// and shared for the rest of the run.
//
// Rust concepts:
// - lazy_static!: Statics that are initialized on first access
// - Enums with methods: Each variant knows which pattern it uses
// - Iterators: find_iter() yields matches left to right
// =============================================================================

use lazy_static::lazy_static;
use regex::Regex;

use super::ExtractionMode;

/// Tag openings that mark a candidate line. Case-sensitive: `<A href` and
/// `<a HREF` are not candidates.
const CANDIDATE_MARKERS: [&str; 2] = ["<a href", "<A HREF"];

/// `href`, optional whitespace, `=`, optional whitespace, then a double-quoted,
/// single-quoted or bare value.
///
/// Whitespace is the ASCII set only; a non-breaking space belongs to a bare value.
const HREF_ATTRIBUTE_REGEX: &str =
    r#"(?i-u:href)[\t\n\x0B\f\r ]*=[\t\n\x0B\f\r ]*("[^"]*"|'[^']*'|[^'">\t\n\x0B\f\r ]+)"#;

/// Scheme + `://` (or backslashes) + a run of URL-ish characters, or a mailto
/// address ending in edu/com.
///
/// Note the class contains `\+-=`, which is the range `+`..`=`, so `,` `<` `:`
/// `;` and digits are all accepted. Backslash separators let Windows paths
/// through as `file:\\...` links.
///
/// Letters, digits and case folding are ASCII only: `exämple` ends a match at
/// `ex`, and `httpſ` is not a scheme.
const ABSOLUTE_URL_REGEX: &str = r#"((?i-u:https?|ftp|gopher|telnet|file):((//)|(\\))+(?-u:[\w\d:#@%/;$()~_?\+-=\\\.&])*)|(?i-u:mailto):*.*.(?i-u:edu|com)"#;

lazy_static! {
    /// `HREF_ATTRIBUTE_REGEX` as a regex::Regex type
    static ref HREF_ATTRIBUTE: Regex = Regex::new(HREF_ATTRIBUTE_REGEX).unwrap();

    /// `ABSOLUTE_URL_REGEX` as a regex::Regex type
    static ref ABSOLUTE_URL: Regex = Regex::new(ABSOLUTE_URL_REGEX).unwrap();
}

/// Returns true when `line` contains a lower-case `<a href` or upper-case
/// `<A HREF` tag opening
pub fn is_candidate_line(line: &str) -> bool {
    CANDIDATE_MARKERS.iter().any(|marker| line.contains(marker))
}

impl ExtractionMode {
    /// The compiled pattern this mode matches with
    pub fn pattern(self) -> &'static Regex {
        match self {
            ExtractionMode::AllLinks => &*HREF_ATTRIBUTE,
            ExtractionMode::AbsoluteOnly => &*ABSOLUTE_URL,
        }
    }

    /// Every non-overlapping match of this mode's pattern in `line`, left to right
    pub fn find_in<'a>(self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pattern().find_iter(line).map(|m| m.as_str())
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why r#"..."# strings?
//    - Raw strings don't process escapes, so \s stays \s for the regex engine
//    - The # delimiters let the pattern contain " characters
//
// 2. Why lazy_static instead of compiling in the loop?
//    - Compiling a regex is much slower than running it
//    - A page can have thousands of lines; we want one compile per process
//
// 3. What is the 'a lifetime on find_in?
//    - The matches are slices of the line we were given
//    - The lifetime tells the compiler the results can't outlive the line
// -----------------------------------------------------------------------------
