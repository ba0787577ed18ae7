//! Filesystem metadata snapshots and directory reads.
//!
//! A [`FileEntry`] is a value: it is built once from a `stat`-like probe and
//! never updated. Children are not cached; [`read_children`] re-reads the
//! directory every time it is called.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{ListingError, Result};

/// The type of a filesystem node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Symlink,
    NamedPipe,
    Socket,
    BlockDevice,
    CharDevice,
    Regular,
}

impl FileKind {
    fn from_metadata(meta: &Metadata) -> Self {
        let ft = meta.file_type();
        if ft.is_dir() {
            return FileKind::Directory;
        }
        if ft.is_symlink() {
            return FileKind::Symlink;
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if ft.is_fifo() {
                return FileKind::NamedPipe;
            }
            if ft.is_socket() {
                return FileKind::Socket;
            }
            if ft.is_block_device() {
                return FileKind::BlockDevice;
            }
            if ft.is_char_device() {
                return FileKind::CharDevice;
            }
        }
        FileKind::Regular
    }

    /// Leading character of the mode string.
    fn mode_char(self) -> char {
        match self {
            FileKind::Directory => 'd',
            FileKind::Symlink => 'l',
            FileKind::NamedPipe => 'p',
            FileKind::Socket => 's',
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
            FileKind::Regular => '-',
        }
    }
}

/// Metadata only POSIX platforms expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnixMeta {
    pub uid: u32,
    pub gid: u32,
    pub inode: u64,
    pub links: u64,
    pub blocks: u64,
}

/// Snapshot of one filesystem node at the moment it was read.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    /// Base name, never empty.
    pub name: String,
    /// Absolute path of the containing directory.
    pub parent: PathBuf,
    /// Length in bytes; only meaningful for regular files.
    pub size: u64,
    pub accessed: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    pub created: Option<SystemTime>,
    pub kind: FileKind,
    /// Permission bits (`0o7777` mask).
    pub permissions: u32,
    /// Owner, inode, link and block information, when the platform has it.
    pub unix: Option<UnixMeta>,
}

impl FileEntry {
    /// Build an entry from already-probed metadata. Symlinks are described
    /// as links; the caller decides whether `meta` followed them.
    pub fn from_metadata(parent: &Path, name: impl Into<String>, meta: &Metadata) -> Self {
        FileEntry {
            name: name.into(),
            parent: parent.to_path_buf(),
            size: meta.len(),
            accessed: meta.accessed().ok(),
            modified: meta.modified().ok(),
            created: meta.created().ok(),
            kind: FileKind::from_metadata(meta),
            permissions: permission_bits(meta),
            unix: unix_meta(meta),
        }
    }

    pub fn full_path(&self) -> PathBuf {
        self.parent.join(&self.name)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Directory
    }

    pub fn is_symlink(&self) -> bool {
        self.kind == FileKind::Symlink
    }

    pub fn is_named_pipe(&self) -> bool {
        self.kind == FileKind::NamedPipe
    }

    pub fn is_socket(&self) -> bool {
        self.kind == FileKind::Socket
    }

    pub fn is_regular(&self) -> bool {
        self.kind == FileKind::Regular
    }

    pub fn is_dotfile(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn is_executable(&self) -> bool {
        self.is_regular() && self.permissions & 0o111 != 0
    }

    /// One-character type indicator used by `--classify`.
    pub fn classifier(&self) -> Option<char> {
        match self.kind {
            FileKind::Directory => Some('/'),
            FileKind::Symlink => Some('@'),
            FileKind::NamedPipe => Some('|'),
            FileKind::Socket => Some('='),
            _ => None,
        }
    }

    /// `ls`-style mode string, e.g. `drwxr-xr-x`.
    pub fn mode_string(&self) -> String {
        const TRIADS: [(u32, u32, char, char); 3] = [
            (6, 0o4000, 's', 'S'),
            (3, 0o2000, 's', 'S'),
            (0, 0o1000, 't', 'T'),
        ];
        let bits = self.permissions;
        let mut out = String::with_capacity(10);
        out.push(self.kind.mode_char());
        for (shift, special, with_exec, without_exec) in TRIADS {
            out.push(if (bits >> (shift + 2)) & 1 != 0 { 'r' } else { '-' });
            out.push(if (bits >> (shift + 1)) & 1 != 0 { 'w' } else { '-' });
            let exec = (bits >> shift) & 1 != 0;
            out.push(match (bits & special != 0, exec) {
                (true, true) => with_exec,
                (true, false) => without_exec,
                (false, true) => 'x',
                (false, false) => '-',
            });
        }
        out
    }
}

/// Seconds since the Unix epoch, negative for earlier instants. Saturates at
/// the `i64` bounds.
pub fn unix_seconds(time: Option<SystemTime>) -> Option<i64> {
    let time = time?;
    Some(match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs())
            .map(|s| -s)
            .unwrap_or(i64::MIN),
    })
}

#[cfg(unix)]
fn permission_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(meta: &Metadata) -> u32 {
    let base = if meta.is_dir() { 0o755 } else { 0o644 };
    if meta.permissions().readonly() {
        base & !0o222
    } else {
        base
    }
}

#[cfg(unix)]
fn unix_meta(meta: &Metadata) -> Option<UnixMeta> {
    use std::os::unix::fs::MetadataExt;
    Some(UnixMeta {
        uid: meta.uid(),
        gid: meta.gid(),
        inode: meta.ino(),
        links: meta.nlink(),
        blocks: meta.blocks(),
    })
}

#[cfg(not(unix))]
fn unix_meta(_meta: &Metadata) -> Option<UnixMeta> {
    None
}

/// Probe a single path given on the command line.
///
/// The path is canonicalized, so a root given as a symlink to a directory is
/// listed as that directory.
pub fn read_entry(path: &Path) -> Result<FileEntry> {
    let resolved = path
        .canonicalize()
        .map_err(|e| ListingError::unreadable(path, e))?;
    let meta = fs::metadata(&resolved).map_err(|e| ListingError::Probe {
        path: resolved.clone(),
        source: e,
    })?;

    let name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| resolved.to_string_lossy().to_string());
    let parent = resolved
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| resolved.clone());

    Ok(FileEntry::from_metadata(&parent, name, &meta))
}

/// Read the immediate children of `dir`, in directory-read order.
///
/// Failing to open `dir` is an error; a child whose metadata vanishes between
/// the read and the probe is skipped.
pub fn read_children(dir: &Path) -> Result<Vec<FileEntry>> {
    let mut children = Vec::new();
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false);

    for item in walker {
        let item = match item {
            Ok(item) => item,
            Err(e) if e.depth() == 0 => {
                return Err(ListingError::unreadable(dir, std::io::Error::from(e)));
            }
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let meta = match item.metadata() {
            Ok(meta) => meta,
            Err(e) => {
                debug!(path = %item.path().display(), error = %e, "skipping entry without metadata");
                continue;
            }
        };
        let name = item.file_name().to_string_lossy().to_string();
        children.push(FileEntry::from_metadata(dir, name, &meta));
    }

    debug!(dir = %dir.display(), count = children.len(), "read directory");
    Ok(children)
}
