//! Display names: sanitizing, classification suffixes and color.

use crossterm::style::{Attribute, Color, ContentStyle};
use unicode_width::UnicodeWidthStr;

use crate::entry::{FileEntry, FileKind};

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn styled(color: Color, bold: bool) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = Some(color);
    if bold {
        style.attributes.set(Attribute::Bold);
    }
    style
}

fn style_for(entry: &FileEntry) -> Option<ContentStyle> {
    match entry.kind {
        FileKind::Directory => Some(styled(Color::Blue, true)),
        FileKind::Symlink => Some(styled(Color::Cyan, false)),
        FileKind::NamedPipe => Some(styled(Color::Yellow, false)),
        FileKind::Socket => Some(styled(Color::Magenta, false)),
        FileKind::BlockDevice | FileKind::CharDevice => Some(styled(Color::Yellow, true)),
        FileKind::Regular if entry.is_executable() => Some(styled(Color::Green, true)),
        FileKind::Regular => None,
    }
}

/// How entry names are turned into display text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamePainter {
    pub classify: bool,
    pub color: bool,
}

impl NamePainter {
    pub fn new(classify: bool, color: bool) -> Self {
        NamePainter { classify, color }
    }

    /// Sanitized name plus classification suffix, without color.
    pub fn plain(&self, entry: &FileEntry) -> String {
        let mut name = sanitize_terminal_text(&entry.name);
        if self.classify {
            if let Some(suffix) = entry.classifier() {
                name.push(suffix);
            }
        }
        name
    }

    /// Display text and its visible width in terminal columns.
    ///
    /// Only the name is colored; the classification suffix stays plain.
    pub fn paint(&self, entry: &FileEntry) -> (String, usize) {
        let plain = self.plain(entry);
        let width = plain.width();
        if !self.color {
            return (plain, width);
        }
        let Some(style) = style_for(entry) else {
            return (plain, width);
        };
        let name = sanitize_terminal_text(&entry.name);
        let suffix = &plain[name.len()..];
        (format!("{}{}", style.apply(name.as_str()), suffix), width)
    }
}
