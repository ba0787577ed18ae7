//! Tree view: one buffer per root, connector-prefixed names.

use super::{section_title, Assembler, TargetId, ViewFormatter, Visitor};
use crate::config::ListingConfig;
use crate::entry::FileEntry;
use crate::error::ListingError;
use crate::paint::NamePainter;
use crate::tree::{connector, TreePath};

pub struct TreeView {
    sections: Assembler<String>,
    painter: NamePainter,
    current_root: Option<TargetId>,
}

impl TreeView {
    pub fn new(config: &ListingConfig) -> Self {
        TreeView {
            sections: Assembler::new(),
            painter: NamePainter::new(config.classify, config.color),
            current_root: None,
        }
    }
}

/// Root sections are created on entry; nested directories reuse their root's
/// buffer.
pub(super) fn root_target(
    sections: &mut Assembler<String>,
    current_root: &mut Option<TargetId>,
    dir: &FileEntry,
    corners: &TreePath,
) -> TargetId {
    match *current_root {
        Some(id) if !corners.is_root() => id,
        _ => {
            let id = sections.push(section_title(dir), String::new());
            *current_root = Some(id);
            id
        }
    }
}

impl Visitor for TreeView {
    fn enter_directory(&mut self, dir: &FileEntry, corners: &TreePath) -> TargetId {
        root_target(&mut self.sections, &mut self.current_root, dir, corners)
    }

    fn visit(&mut self, entry: &FileEntry, target: TargetId, corners: &TreePath) {
        let (name, _) = self.painter.paint(entry);
        if let Some(buffer) = self.sections.target_mut(target) {
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

impl ViewFormatter for TreeView {
    fn finalize(self: Box<Self>) -> String {
        self.sections.render(String::clone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::tests::entry;
    use crate::entry::FileKind;

    #[test]
    fn nested_directories_share_the_root_buffer() {
        let mut view = TreeView::new(&ListingConfig::default());
        let root = TreePath::root();
        let target = view.enter_directory(&entry("d", FileKind::Directory, 0), &root);

        let sub_path = root.extended(false);
        let sub = entry("sub", FileKind::Directory, 0);
        view.visit(&sub, target, &sub_path);
        let nested = view.enter_directory(&sub, &sub_path);
        assert_eq!(nested, target);
        view.visit(&entry("inner.txt", FileKind::Regular, 0), nested, &sub_path.extended(true));

        view.visit(&entry("z.txt", FileKind::Regular, 0), target, &root.extended(true));

        assert_eq!(
            Box::new(view).finalize(),
            "├── sub\n│  └── inner.txt\n└── z.txt\n"
        );
    }

    #[test]
    fn classify_marks_directories() {
        let config = ListingConfig {
            classify: true,
            ..ListingConfig::default()
        };
        let mut view = TreeView::new(&config);
        let root = TreePath::root();
        let target = view.enter_directory(&entry("d", FileKind::Directory, 0), &root);
        view.visit(&entry("src", FileKind::Directory, 0), target, &root.extended(true));
        assert_eq!(Box::new(view).finalize(), "└── src/\n");
    }
}
