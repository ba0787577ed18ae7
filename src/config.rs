//! The resolved configuration the listing core consumes.

use clap::ValueEnum;

use crate::grid::Direction;
use crate::order::SortKey;

/// When names are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    Never,
    Always,
    /// Color only when standard output is a terminal.
    #[default]
    Auto,
}

/// Timestamp columns of the long view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeColumn {
    Accessed,
    Modified,
    Created,
}

/// Which formatter renders the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewKind {
    #[default]
    Grid,
    Tree,
    Long,
    LongTree,
}

impl ViewKind {
    pub fn from_flags(long: bool, tree: bool) -> Self {
        match (long, tree) {
            (true, true) => ViewKind::LongTree,
            (true, false) => ViewKind::Long,
            (false, true) => ViewKind::Tree,
            (false, false) => ViewKind::Grid,
        }
    }

    pub fn is_long(self) -> bool {
        matches!(self, ViewKind::Long | ViewKind::LongTree)
    }
}

/// Optional columns of the long view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongColumns {
    pub inode: bool,
    pub links: bool,
    pub blocks: bool,
    pub group: bool,
    pub times: Vec<TimeColumn>,
    pub header: bool,
}

/// Everything a listing run needs.
#[derive(Debug, Clone)]
pub struct ListingConfig {
    pub sources: Vec<String>,
    pub view: ViewKind,
    pub show_all: bool,
    pub direction: Direction,
    pub one_line: bool,
    /// Explicit grid column count; skips the width search.
    pub columns: Option<usize>,
    /// Terminal width for grid layout.
    pub width: Option<usize>,
    pub classify: bool,
    pub color: bool,
    pub recursive: bool,
    /// Recursion depth limit, `0` for unlimited.
    pub depth: usize,
    pub sort: SortKey,
    pub dirs_first: bool,
    pub reverse: bool,
    pub filters: Vec<String>,
    pub ignores: Vec<String>,
    pub long: LongColumns,
    pub separator: String,
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            sources: vec![".".to_string()],
            view: ViewKind::Grid,
            show_all: false,
            direction: Direction::TopToBottom,
            one_line: false,
            columns: None,
            width: None,
            classify: false,
            color: false,
            recursive: false,
            depth: 0,
            sort: SortKey::None,
            dirs_first: false,
            reverse: false,
            filters: Vec::new(),
            ignores: Vec::new(),
            long: LongColumns::default(),
            separator: "  ".to_string(),
        }
    }
}

impl ListingConfig {
    /// Whether rendering depends on knowing the terminal width.
    pub fn needs_width(&self) -> bool {
        self.view == ViewKind::Grid && !self.one_line && self.columns.is_none()
    }
}
