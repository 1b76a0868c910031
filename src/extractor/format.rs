// src/extractor/format.rs
// =============================================================================
// This module turns raw matches into the text we print.
//
// A raw match still carries markup around the link, e.g. `href="/docs"`.
// Formatting cleans each one up in three steps:
// 1. Drop the characters [ ] , " =
// 2. Drop the attribute names `href` and `HREF`
// 3. Replace every remaining space with `+`
//
// Step 3 is a tiny bit of URL encoding: spaces show up in real links (file
// names, obfuscated email addresses) and would break anything that parses
// our output as a URI. Nothing else gets encoded.
//
// All of these are plain &str -> String functions with no knowledge of
// regexes or pages, so they are tested against literal strings.
// =============================================================================

/// Characters removed from every rendered link
const STRIPPED_CHARS: [char; 5] = ['[', ']', ',', '"', '='];

/// Attribute names removed from every rendered link; exact case only
const STRIPPED_TAG_NAMES: [&str; 2] = ["href", "HREF"];

/// Removes `[`, `]`, `,`, `"` and `=` from `link`
pub fn strip_punctuation(link: &str) -> String {
    link.chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect()
}

/// Removes the literal substrings `href` and `HREF`, in that order
pub fn strip_tag_names(link: &str) -> String {
    STRIPPED_TAG_NAMES
        .iter()
        .fold(link.to_string(), |text, name| text.replace(name, ""))
}

/// Replaces every space with `+`
pub fn encode_spaces(link: &str) -> String {
    link.replace(' ', "+")
}

/// Runs all three formatting steps over a single raw match
pub fn format_link(raw: &str) -> String {
    encode_spaces(&strip_tag_names(&strip_punctuation(raw)))
}

/// Formats every link and puts each on its own line, newline-terminated
///
/// An empty input renders as an empty string.
pub fn render<'a, I>(links: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    links.into_iter().fold(String::new(), |mut out, raw| {
        out.push_str(&format_link(raw));
        out.push('\n');
        out
    })
}
