//! Sibling ordering.

use std::cmp::Ordering;
use std::str::FromStr;
use tracing::warn;

use crate::entry::{unix_seconds, FileEntry};

/// Key a sibling list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep directory-read order.
    #[default]
    None,
    Inode,
    Mode,
    Size,
    Links,
    Blocks,
    Accessed,
    Modified,
    Created,
    User,
    Group,
    Name,
}

impl SortKey {
    pub const NAMES: &'static [&'static str] = &[
        "none", "inode", "mode", "size", "links", "blocks", "accessed", "modified", "created",
        "user", "group", "name",
    ];

    /// Parse a key, falling back to [`SortKey::None`] for unknown names.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            if !name.is_empty() {
                warn!(key = name, "unknown sort key, keeping read order");
            }
            SortKey::None
        })
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "none" => SortKey::None,
            "inode" => SortKey::Inode,
            "mode" => SortKey::Mode,
            "size" => SortKey::Size,
            "link" | "links" => SortKey::Links,
            "blocks" => SortKey::Blocks,
            "accessed" => SortKey::Accessed,
            "modified" => SortKey::Modified,
            "created" => SortKey::Created,
            "user" => SortKey::User,
            "group" => SortKey::Group,
            "name" => SortKey::Name,
            other => return Err(format!("unknown sort key '{other}'")),
        })
    }
}

/// Sorts sibling lists by key, with optional dirs-first partition and reversal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Orderer {
    pub key: SortKey,
    pub dirs_first: bool,
    pub reverse: bool,
}

impl Orderer {
    pub fn new(key: SortKey, dirs_first: bool, reverse: bool) -> Self {
        Orderer {
            key,
            dirs_first,
            reverse,
        }
    }

    pub fn order(&self, mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
        if self.key != SortKey::None {
            // `sort_by` is stable: ties keep read order.
            entries.sort_by(|a, b| compare(self.key, a, b));
        }
        if self.dirs_first {
            entries.sort_by_key(|e| !e.is_dir());
        }
        if self.reverse {
            entries.reverse();
        }
        entries
    }
}

fn compare(key: SortKey, a: &FileEntry, b: &FileEntry) -> Ordering {
    match key {
        SortKey::None => Ordering::Equal,
        SortKey::Inode => a.unix.map(|u| u.inode).cmp(&b.unix.map(|u| u.inode)),
        SortKey::Mode => mode_flags(a).cmp(&mode_flags(b)),
        SortKey::Size => a.size.cmp(&b.size),
        SortKey::Links => a.unix.map(|u| u.links).cmp(&b.unix.map(|u| u.links)),
        SortKey::Blocks => a.unix.map(|u| u.blocks).cmp(&b.unix.map(|u| u.blocks)),
        SortKey::Accessed => unix_seconds(a.accessed).cmp(&unix_seconds(b.accessed)),
        SortKey::Modified => unix_seconds(a.modified).cmp(&unix_seconds(b.modified)),
        SortKey::Created => unix_seconds(a.created).cmp(&unix_seconds(b.created)),
        SortKey::User => a.unix.map(|u| u.uid).cmp(&b.unix.map(|u| u.uid)),
        SortKey::Group => a.unix.map(|u| u.gid).cmp(&b.unix.map(|u| u.gid)),
        SortKey::Name => a.name.cmp(&b.name),
    }
}

/// Mode string with the dashes removed, so only the set flags compare.
fn mode_flags(entry: &FileEntry) -> String {
    entry.mode_string().replace('-', "")
}
