//! View formatters and the output assembler.
//!
//! The traversal driver talks to a formatter through [`Visitor`]; each of the
//! four views ([`GridView`], [`TreeView`], [`LongView`], [`LongTreeView`])
//! decides what to emit for a visited entry and where. [`ViewFormatter`] adds
//! the final serialization step.

mod columns;
mod grid;
mod long;
mod long_tree;
mod tree;

use std::fmt::Write as _;

use crate::config::ListingConfig;
use crate::entry::FileEntry;
use crate::error::ListingError;
use crate::paint::sanitize_terminal_text;
use crate::tree::TreePath;

pub use columns::{Column, ColumnMeasure, ColumnWidths};
pub use grid::GridView;
pub use long::LongView;
pub use long_tree::LongTreeView;
pub use tree::TreeView;

/// Handle to a render target (buffer or grid) owned by a formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetId(usize);

/// Receives the traversal, one directory and one entry at a time.
pub trait Visitor {
    /// Called once per directory about to be listed. `corners` is empty for a
    /// root. Returns the target the directory's children are written into.
    fn enter_directory(&mut self, dir: &FileEntry, corners: &TreePath) -> TargetId;

    /// Called once per visible, ordered child. Never recurses.
    fn visit(&mut self, entry: &FileEntry, target: TargetId, corners: &TreePath);

    /// Records a root that could not be read.
    fn fail_source(&mut self, source: &str, error: ListingError);
}

/// A visitor that can serialize what it has accumulated.
pub trait ViewFormatter: Visitor {
    fn finalize(self: Box<Self>) -> String;
}

/// Build the formatter for `config`. `widths` only matters to long views.
pub fn build(config: &ListingConfig, widths: ColumnWidths) -> Box<dyn ViewFormatter> {
    use crate::config::ViewKind;
    match config.view {
        ViewKind::Grid => Box::new(GridView::new(config)),
        ViewKind::Tree => Box::new(TreeView::new(config)),
        ViewKind::Long => Box::new(LongView::new(config, widths)),
        ViewKind::LongTree => Box::new(LongTreeView::new(config, widths)),
    }
}

/// One section of output: a title and either a target or an error.
#[derive(Debug)]
pub struct SourceResult<T> {
    pub title: String,
    pub outcome: Result<T, ListingError>,
}

/// Owns every section of a run and concatenates them.
#[derive(Debug)]
pub struct Assembler<T> {
    results: Vec<SourceResult<T>>,
}

impl<T> Default for Assembler<T> {
    fn default() -> Self {
        Assembler {
            results: Vec::new(),
        }
    }
}

impl<T> Assembler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: impl Into<String>, target: T) -> TargetId {
        self.results.push(SourceResult {
            title: title.into(),
            outcome: Ok(target),
        });
        TargetId(self.results.len() - 1)
    }

    pub fn push_error(&mut self, title: impl Into<String>, error: ListingError) {
        self.results.push(SourceResult {
            title: title.into(),
            outcome: Err(error),
        });
    }

    pub fn target_mut(&mut self, id: TargetId) -> Option<&mut T> {
        self.results
            .get_mut(id.0)
            .and_then(|r| r.outcome.as_mut().ok())
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Concatenate all sections. With more than one section each gets a
    /// `title:` line and sections are separated by a blank line.
    pub fn render(&self, mut body: impl FnMut(&T) -> String) -> String {
        let titled = self.results.len() > 1;
        let mut out = String::new();
        for (i, result) in self.results.iter().enumerate() {
            if titled {
                if i > 0 {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}:", sanitize_terminal_text(&result.title));
            }
            match &result.outcome {
                Ok(target) => out.push_str(&body(target)),
                Err(e) => {
                    let _ = writeln!(out, "Error: {}", sanitize_terminal_text(&e.to_string()));
                }
            }
        }
        out
    }
}

/// Title used for a directory's section.
fn section_title(dir: &FileEntry) -> String {
    sanitize_terminal_text(&dir.full_path().display().to_string())
}
