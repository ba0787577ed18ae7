//! Long-tree view: long columns followed by a tree-connected name.

use super::columns::Row;
use super::tree::root_target;
use super::{Assembler, ColumnWidths, TargetId, ViewFormatter, Visitor};
use crate::config::ListingConfig;
use crate::entry::FileEntry;
use crate::error::ListingError;
use crate::paint::NamePainter;
use crate::tree::{connector, TreePath};

pub struct LongTreeView {
    sections: Assembler<String>,
    painter: NamePainter,
    row: Row,
    header: bool,
    current_root: Option<TargetId>,
}

impl LongTreeView {
    pub fn new(config: &ListingConfig, widths: ColumnWidths) -> Self {
        LongTreeView {
            sections: Assembler::new(),
            painter: NamePainter::new(config.classify, config.color),
            row: Row::new(&config.long, widths, &config.separator),
            header: config.long.header,
            current_root: None,
        }
    }
}

impl Visitor for LongTreeView {
    fn enter_directory(&mut self, dir: &FileEntry, corners: &TreePath) -> TargetId {
        let id = root_target(&mut self.sections, &mut self.current_root, dir, corners);
        if self.header && corners.is_root() {
            if let Some(buffer) = self.sections.target_mut(id) {
                self.row.write_header(buffer);
            }
        }
        id
    }

    fn visit(&mut self, entry: &FileEntry, target: TargetId, corners: &TreePath) {
        let (name, _) = self.painter.paint(entry);
        if let Some(buffer) = self.sections.target_mut(target) {
            self.row.write_columns(buffer, entry);
            buffer.push_str(&connector(corners));
            buffer.push(' ');
            buffer.push_str(&name);
            buffer.push('\n');
        }
    }

    fn fail_source(&mut self, source: &str, error: ListingError) {
        self.sections.push_error(source, error);
    }
}

impl ViewFormatter for LongTreeView {
    fn finalize(self: Box<Self>) -> String {
        self.sections.render(String::clone)
    }
}
