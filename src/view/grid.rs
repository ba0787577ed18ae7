//! Grid view: every listed directory becomes one column-packed grid.

use super::{section_title, Assembler, TargetId, ViewFormatter, Visitor};
use crate::config::ListingConfig;
use crate::entry::FileEntry;
use crate::error::ListingError;
use crate::grid::{Direction, Grid};
use crate::paint::NamePainter;
use crate::tree::TreePath;

pub struct GridView {
    sections: Assembler<Grid>,
    painter: NamePainter,
    direction: Direction,
    separator: String,
    one_line: bool,
    columns: Option<usize>,
    width: Option<usize>,
}

impl GridView {
    pub fn new(config: &ListingConfig) -> Self {
        GridView {
            sections: Assembler::new(),
            painter: NamePainter::new(config.classify, config.color),
            direction: config.direction,
            separator: config.separator.clone(),
            one_line: config.one_line,
            columns: config.columns,
            width: config.width,
        }
    }

    fn layout(&self, grid: &Grid) -> String {
        if self.one_line {
            return grid.render_lines();
        }
        let dims = match (self.columns, self.width) {
            (Some(columns), _) => Some(grid.fit_into_columns(columns)),
            (None, Some(width)) => grid.fit_into_width(width),
            (None, None) => None,
        };
        match dims {
            Some(dims) => grid.render(&dims),
            None => grid.render_lines(),
        }
    }
}

impl Visitor for GridView {
    fn enter_directory(&mut self, dir: &FileEntry, _corners: &TreePath) -> TargetId {
        let grid = Grid::new(self.direction, self.separator.clone());
        self.sections.push(section_title(dir), grid)
    }

    fn visit(&mut self, entry: &FileEntry, target: TargetId, _corners: &TreePath) {
        let (text, width) = self.painter.paint(entry);
        if let Some(grid) = self.sections.target_mut(target) {
            grid.add_measured(text, width);
        }
    }

    fn fail_source(&mut self, source: &str, error: ListingError) {
        self.sections.push_error(source, error);
    }
}

impl ViewFormatter for GridView {
    fn finalize(self: Box<Self>) -> String {
        self.sections.render(|grid| self.layout(grid))
    }
}
