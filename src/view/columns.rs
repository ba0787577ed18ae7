//! Long-view metadata columns and their run-wide widths.

use chrono::{DateTime, Datelike, Local};
use humansize::{format_size, WINDOWS};
use std::time::SystemTime;
use unicode_width::UnicodeWidthStr;

use super::{TargetId, Visitor};
use crate::config::{LongColumns, TimeColumn};
use crate::entry::{unix_seconds, FileEntry};
use crate::error::ListingError;
use crate::tree::TreePath;

/// A metadata column of the long view, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Inode,
    Mode,
    Size,
    Links,
    Blocks,
    Accessed,
    Modified,
    Created,
    Owner,
    Group,
}

const COLUMN_COUNT: usize = 10;

impl Column {
    pub fn label(self) -> &'static str {
        match self {
            Column::Inode => "Inode",
            Column::Mode => "Mode",
            Column::Size => "Size",
            Column::Links => "Links",
            Column::Blocks => "Blocks",
            Column::Accessed => "Accessed",
            Column::Modified => "Modified",
            Column::Created => "Created",
            Column::Owner => "User",
            Column::Group => "Group",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Columns enabled by `long`, in display order. Mode, size and owner are
    /// always on.
    pub fn selected(long: &LongColumns) -> Vec<Column> {
        let time = |t: TimeColumn| long.times.contains(&t);
        [
            (Column::Inode, long.inode),
            (Column::Mode, true),
            (Column::Size, true),
            (Column::Links, long.links),
            (Column::Blocks, long.blocks),
            (Column::Accessed, time(TimeColumn::Accessed)),
            (Column::Modified, time(TimeColumn::Modified)),
            (Column::Created, time(TimeColumn::Created)),
            (Column::Owner, true),
            (Column::Group, long.group),
        ]
        .into_iter()
        .filter_map(|(column, on)| on.then_some(column))
        .collect()
    }

    /// Rendered value, or `None` when the entry does not expose it.
    pub fn value(self, entry: &FileEntry, current_year: i32) -> Option<String> {
        match self {
            Column::Inode => entry.unix.map(|u| u.inode.to_string()),
            Column::Mode => Some(entry.mode_string()),
            Column::Size => Some(format_file_size(entry)),
            Column::Links => entry.unix.map(|u| u.links.to_string()),
            Column::Blocks => entry.unix.map(|u| u.blocks.to_string()),
            Column::Accessed => entry.accessed.and_then(|t| format_time(t, current_year)),
            Column::Modified => entry.modified.and_then(|t| format_time(t, current_year)),
            Column::Created => entry.created.and_then(|t| format_time(t, current_year)),
            Column::Owner => entry.unix.map(|u| u.uid.to_string()),
            Column::Group => entry.unix.map(|u| u.gid.to_string()),
        }
    }
}

/// Human-readable size of a regular file; `-` for anything else.
pub fn format_file_size(entry: &FileEntry) -> String {
    if !entry.is_regular() {
        return "-".to_string();
    }
    format_size(
        entry.size,
        WINDOWS.decimal_places(1).space_after_value(false),
    )
}

/// `ls`-style timestamp: time of day for the current year, year otherwise.
///
/// Returns `None` for instants chrono cannot place in local time; some
/// filesystems store 64-bit times far outside its range.
pub fn format_time(time: SystemTime, current_year: i32) -> Option<String> {
    let secs = unix_seconds(Some(time))?;
    // Local offsets stay within a day of UTC.
    DateTime::from_timestamp(secs.checked_sub(SECONDS_PER_DAY)?, 0)?;
    DateTime::from_timestamp(secs.checked_add(SECONDS_PER_DAY)?, 0)?;
    let local = DateTime::from_timestamp(secs, 0)?.with_timezone(&Local);
    Some(if local.year() == current_year {
        local.format("%e %b %H:%M").to_string()
    } else {
        local.format("%e %b  %Y").to_string()
    })
}

const SECONDS_PER_DAY: i64 = 86_400;

pub(crate) fn current_year() -> i32 {
    Local::now().year()
}

/// Widest value seen per column across a whole run.
///
/// A column no visited entry could provide stays absent and is left out of
/// the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    widths: [usize; COLUMN_COUNT],
    present: [bool; COLUMN_COUNT],
}

impl ColumnWidths {
    pub fn observe(&mut self, column: Column, value: &str) {
        let i = column.index();
        self.widths[i] = self.widths[i].max(value.width());
        self.present[i] = true;
    }

    /// Account for a header label without marking the column present.
    pub fn observe_label(&mut self, column: Column) {
        let i = column.index();
        self.widths[i] = self.widths[i].max(column.label().len());
    }

    pub fn width(&self, column: Column) -> usize {
        self.widths[column.index()]
    }

    pub fn is_present(&self, column: Column) -> bool {
        self.present[column.index()]
    }

    /// The subset of `selected` that some entry actually exposed.
    pub fn active(&self, selected: &[Column]) -> Vec<Column> {
        selected
            .iter()
            .copied()
            .filter(|c| self.is_present(*c))
            .collect()
    }
}

/// Pre-pass visitor that fills a [`ColumnWidths`].
#[derive(Debug)]
pub struct ColumnMeasure {
    columns: Vec<Column>,
    widths: ColumnWidths,
    current_year: i32,
}

impl ColumnMeasure {
    pub fn new(long: &LongColumns) -> Self {
        let columns = Column::selected(long);
        let mut widths = ColumnWidths::default();
        if long.header {
            for column in &columns {
                widths.observe_label(*column);
            }
        }
        ColumnMeasure {
            columns,
            widths,
            current_year: current_year(),
        }
    }

    pub fn into_widths(self) -> ColumnWidths {
        self.widths
    }
}

impl Visitor for ColumnMeasure {
    fn enter_directory(&mut self, _dir: &FileEntry, _corners: &TreePath) -> TargetId {
        TargetId(0)
    }

    fn visit(&mut self, entry: &FileEntry, _target: TargetId, _corners: &TreePath) {
        for column in &self.columns {
            if let Some(value) = column.value(entry, self.current_year) {
                self.widths.observe(*column, &value);
            }
        }
    }

    fn fail_source(&mut self, _source: &str, _error: ListingError) {}
}

/// Shared row writer for the long and long-tree views.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    columns: Vec<Column>,
    widths: ColumnWidths,
    separator: String,
    current_year: i32,
}

impl Row {
    pub(crate) fn new(long: &LongColumns, widths: ColumnWidths, separator: &str) -> Self {
        let columns = widths.active(&Column::selected(long));
        Row {
            columns,
            widths,
            separator: separator.to_string(),
            current_year: current_year(),
        }
    }

    /// Every active column, right-aligned and followed by the separator.
    pub(crate) fn write_columns(&self, out: &mut String, entry: &FileEntry) {
        for column in &self.columns {
            let value = column
                .value(entry, self.current_year)
                .unwrap_or_else(|| "-".to_string());
            self.write_cell(out, *column, &value);
        }
    }

    pub(crate) fn write_header(&self, out: &mut String) {
        for column in &self.columns {
            self.write_cell(out, *column, column.label());
        }
        out.push_str("Name\n");
    }

    fn write_cell(&self, out: &mut String, column: Column, value: &str) {
        let pad = self.widths.width(column).saturating_sub(value.width());
        out.extend(std::iter::repeat(' ').take(pad));
        out.push_str(value);
        out.push_str(&self.separator);
    }
}
