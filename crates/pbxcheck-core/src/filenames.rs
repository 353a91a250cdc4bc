//! Referenced filename extraction
//!
//! Manifest entries carry inline comments of the form `/* Name.ext */` or
//! `/* Name.ext in Sources */`. This module pulls those filenames out of a
//! section's text and deduplicates them into a set.
//!
//! Known limitation: only filenames with a whitelisted extension are
//! extracted; anything else (e.g. `.xcassets` bundles) is silently ignored.

use regex::Regex;
use std::collections::BTreeSet;

/// A deduplicated, case-sensitive set of filenames
///
/// `BTreeSet` iteration is ordered, which also covers sorted display.
pub type FileNameSet = BTreeSet<String>;

/// File extensions recognized in manifest comments
pub const EXTENSION_WHITELIST: &[&str] = &[
    "xib",
    "storyboard",
    "h",
    "m",
    "mm",
    "swift",
    "plist",
    "json",
    "string",
    "png",
    "jpeg",
    "jpg",
    "gif",
    "pch",
];

/// Extracts comment-wrapped filenames from manifest section text
#[derive(Debug)]
pub struct FileNameExtractor {
    pattern: Regex,
}

impl FileNameExtractor {
    /// Build an extractor over [`EXTENSION_WHITELIST`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_extensions(EXTENSION_WHITELIST)
    }

    /// Build an extractor over a custom extension list
    ///
    /// # Panics
    /// Panics if an extension contains regex metacharacters.
    #[must_use]
    pub fn with_extensions(extensions: &[&str]) -> Self {
        let alternation = extensions.join("|");
        let pattern = Regex::new(&format!(
            r"/\* ([0-9A-Za-z]+\.(?:{alternation}))(?: in (?:Sources|Resources))? \*/"
        ))
        .expect("extension whitelist builds a valid pattern");
        Self { pattern }
    }

    /// Extract the set of referenced filenames from section text
    ///
    /// Phase annotations (` in Sources`, ` in Resources`) are stripped, so
    /// `/* Foo.swift */` and `/* Foo.swift in Sources */` collapse to a
    /// single `Foo.swift` entry.
    #[must_use]
    pub fn referenced_file_names(&self, section_text: &str) -> FileNameSet {
        self.pattern
            .captures_iter(section_text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

impl Default for FileNameExtractor {
    fn default() -> Self {
        Self::new()
    }
}
