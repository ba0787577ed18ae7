//! Traversal driver: reads roots, selects, orders and recurses.

use std::path::Path;
use tracing::{debug, info};

use crate::config::ListingConfig;
use crate::entry::{read_children, read_entry, FileEntry};
use crate::order::Orderer;
use crate::select::{PatternSet, Selector};
use crate::tree::TreePath;
use crate::view::{self, ColumnMeasure, ColumnWidths, Visitor};

/// Depth-first walker shared by the column pre-pass and every view.
pub struct TraversalDriver<'a> {
    config: &'a ListingConfig,
    selector: Selector,
    orderer: Orderer,
}

impl<'a> TraversalDriver<'a> {
    pub fn new(config: &'a ListingConfig) -> Self {
        let selector = Selector::new(
            config.show_all,
            PatternSet::build(&config.filters),
            PatternSet::build(&config.ignores),
        );
        let orderer = Orderer::new(config.sort, config.dirs_first, config.reverse);
        TraversalDriver {
            config,
            selector,
            orderer,
        }
    }

    /// Walk every source. A source that cannot be read is reported to the
    /// visitor and does not stop the others.
    pub fn run<V: Visitor + ?Sized>(&self, visitor: &mut V) {
        for source in &self.config.sources {
            info!(source = %source, "listing source");
            let root = match read_entry(Path::new(source)) {
                Ok(root) => root,
                Err(err) => {
                    debug!(source = %source, error = %err, "source unreadable");
                    visitor.fail_source(source, err);
                    continue;
                }
            };

            if !root.is_dir() {
                let target = visitor.enter_directory(&root, &TreePath::root());
                visitor.visit(&root, target, &TreePath::root().extended(true));
                continue;
            }

            match read_children(&root.full_path()) {
                Ok(children) => self.list(&root, children, &TreePath::root(), visitor),
                Err(err) => visitor.fail_source(source, err),
            }
        }
    }

    fn list<V: Visitor + ?Sized>(
        &self,
        dir: &FileEntry,
        children: Vec<FileEntry>,
        corners: &TreePath,
        visitor: &mut V,
    ) {
        // Empty directories get no section, but hidden-only ones still do.
        if children.is_empty() {
            debug!(dir = %dir.full_path().display(), "empty directory");
            return;
        }
        let target = visitor.enter_directory(dir, corners);
        let visible: Vec<FileEntry> = children
            .into_iter()
            .filter(|e| self.selector.visible(e))
            .collect();
        let ordered = self.orderer.order(visible);
        let count = ordered.len();

        for (i, child) in ordered.iter().enumerate() {
            let child_corners = corners.extended(i + 1 == count);
            visitor.visit(child, target, &child_corners);

            if !self.should_descend(child, &child_corners) {
                continue;
            }
            match read_children(&child.full_path()) {
                Ok(grandchildren) => self.list(child, grandchildren, &child_corners, visitor),
                Err(err) => {
                    debug!(error = %err, "skipping unreadable subtree");
                }
            }
        }
    }

    /// `depth` counts listed levels below the root: the root's children are
    /// at depth 1.
    fn should_descend(&self, entry: &FileEntry, corners: &TreePath) -> bool {
        self.config.recursive
            && entry.is_dir()
            && (self.config.depth == 0 || self.config.depth >= corners.depth())
    }
}

/// Run a full listing and return the rendered text.
///
/// Long views first walk every source once to measure column widths, so
/// alignment holds across the whole output.
pub fn render_listing(config: &ListingConfig) -> String {
    let driver = TraversalDriver::new(config);

    let widths = if config.view.is_long() {
        let mut measure = ColumnMeasure::new(&config.long);
        driver.run(&mut measure);
        measure.into_widths()
    } else {
        ColumnWidths::default()
    };

    let mut formatter = view::build(config, widths);
    driver.run(formatter.as_mut());
    formatter.finalize()
}
