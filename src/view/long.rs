//! Long view: one line of metadata columns per entry, a section per directory.

use super::columns::Row;
use super::{section_title, Assembler, ColumnWidths, TargetId, ViewFormatter, Visitor};
use crate::config::ListingConfig;
use crate::entry::FileEntry;
use crate::error::ListingError;
use crate::paint::NamePainter;
use crate::tree::TreePath;

pub struct LongView {
    sections: Assembler<String>,
    painter: NamePainter,
    row: Row,
    header: bool,
}

impl LongView {
    /// `widths` must come from a pre-pass over the same sources.
    pub fn new(config: &ListingConfig, widths: ColumnWidths) -> Self {
        LongView {
            sections: Assembler::new(),
            painter: NamePainter::new(config.classify, config.color),
            row: Row::new(&config.long, widths, &config.separator),
            header: config.long.header,
        }
    }
}

impl Visitor for LongView {
    fn enter_directory(&mut self, dir: &FileEntry, _corners: &TreePath) -> TargetId {
        let mut buffer = String::new();
        if self.header {
            self.row.write_header(&mut buffer);
        }
        self.sections.push(section_title(dir), buffer)
    }

    fn visit(&mut self, entry: &FileEntry, target: TargetId, _corners: &TreePath) {
        let (name, _) = self.painter.paint(entry);
        if let Some(buffer) = self.sections.target_mut(target) {
            self.row.write_columns(buffer, entry);
            buffer.push_str(&name);
            buffer.push('\n');
        }
    }

    fn fail_source(&mut self, source: &str, error: ListingError) {
        self.sections.push_error(source, error);
    }
}

impl ViewFormatter for LongView {
    fn finalize(self: Box<Self>) -> String {
        self.sections.render(String::clone)
    }
}
