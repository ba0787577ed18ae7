//! Visibility rules: dotfiles, filter patterns and ignore patterns.

use globset::{Glob, GlobSet, GlobSetBuilder};
use regex::Regex;
use std::path::Path;
use tracing::warn;

use crate::entry::FileEntry;

const REGEX_PREFIX: &str = "re:";
const GLOB_PREFIX: &str = "glob:";

/// A compiled list of glob and regex patterns.
///
/// `re:` marks a regular expression; `glob:` or no prefix marks a glob.
#[derive(Debug, Clone)]
pub struct PatternSet {
    globs: GlobSet,
    regexes: Vec<Regex>,
    len: usize,
}

impl PatternSet {
    /// Compile `patterns`. Invalid patterns are skipped with a warning.
    pub fn build(patterns: &[String]) -> Self {
        let mut builder = GlobSetBuilder::new();
        let mut regexes = Vec::new();
        let mut len = 0;
        let mut invalid = Vec::new();

        for pattern in patterns {
            if let Some(expr) = pattern.strip_prefix(REGEX_PREFIX) {
                match Regex::new(expr) {
                    Ok(re) => {
                        regexes.push(re);
                        len += 1;
                    }
                    Err(_) => invalid.push(pattern.clone()),
                }
                continue;
            }
            let glob = pattern.strip_prefix(GLOB_PREFIX).unwrap_or(pattern);
            match Glob::new(glob) {
                Ok(g) => {
                    builder.add(g);
                    len += 1;
                }
                Err(_) => invalid.push(pattern.clone()),
            }
        }

        if !invalid.is_empty() {
            warn!(patterns = ?invalid, "invalid pattern(s), skipped");
        }
        let globs = builder.build().unwrap_or_else(|e| {
            warn!(error = %e, "failed to build glob set");
            GlobSet::empty()
        });

        PatternSet {
            globs,
            regexes,
            len,
        }
    }

    pub fn empty() -> Self {
        PatternSet {
            globs: GlobSet::empty(),
            regexes: Vec::new(),
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether any pattern matches the base name or the full path.
    pub fn matches(&self, name: &str, full_path: &Path) -> bool {
        if self.globs.is_match(name) || self.globs.is_match(full_path) {
            return true;
        }
        let full = full_path.to_string_lossy();
        self.regexes
            .iter()
            .any(|re| re.is_match(name) || re.is_match(&full))
    }
}

/// Decides whether an entry is shown.
#[derive(Debug, Clone)]
pub struct Selector {
    show_all: bool,
    filters: PatternSet,
    ignores: PatternSet,
}

impl Selector {
    pub fn new(show_all: bool, filters: PatternSet, ignores: PatternSet) -> Self {
        Selector {
            show_all,
            filters,
            ignores,
        }
    }

    pub fn visible(&self, entry: &FileEntry) -> bool {
        if !self.show_all && entry.is_dotfile() {
            return false;
        }
        let full_path = entry.full_path();
        if !self.filters.is_empty() && !self.filters.matches(&entry.name, &full_path) {
            return false;
        }
        if !self.ignores.is_empty() && self.ignores.matches(&entry.name, &full_path) {
            return false;
        }
        true
    }
}
