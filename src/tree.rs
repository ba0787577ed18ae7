//! Tree paths ("corners") and the box-drawing connectors derived from them.

/// Per-ancestor "was the last sibling" flags; one flag per level below the root.
///
/// Extending a path always allocates a new one, so a sibling's captured path
/// is never changed by a later recursion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePath(Vec<bool>);

impl TreePath {
    /// Path of a root directory (no ancestors).
    pub fn root() -> Self {
        TreePath(Vec::new())
    }

    /// New path one level deeper.
    pub fn extended(&self, is_last: bool) -> Self {
        let mut flags = Vec::with_capacity(self.0.len() + 1);
        flags.extend_from_slice(&self.0);
        flags.push(is_last);
        TreePath(flags)
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn flags(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for TreePath {
    fn from(flags: Vec<bool>) -> Self {
        TreePath(flags)
    }
}

/// Connector prefix for an entry at `path`.
///
/// Ancestor levels draw a continuation bar unless that ancestor was the last
/// sibling; the entry's own level draws a tee or an elbow.
pub fn connector(path: &TreePath) -> String {
    let flags = path.flags();
    let mut prefix = String::with_capacity(flags.len() * 3 * 3);
    for (level, &is_last) in flags.iter().enumerate() {
        let own_level = level + 1 == flags.len();
        prefix.push_str(match (own_level, is_last) {
            (true, true) => "\u{2514}\u{2500}\u{2500}",  // └──
            (true, false) => "\u{251c}\u{2500}\u{2500}", // ├──
            (false, true) => "   ",
            (false, false) => "\u{2502}  ", // │
        });
    }
    prefix
}
