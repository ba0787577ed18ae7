use clap::{ArgAction, Parser};

use crate::config::{ColorMode, ListingConfig, LongColumns, TimeColumn, ViewKind};
use crate::grid::Direction;
use crate::order::SortKey;
use crate::terminal;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ipe",
    version,
    about = "List directory contents as a grid, a tree or a long table",
    disable_help_flag = true,
    after_help = "Examples:\n  ipe -lt -D 2 -R src\n  ipe -x --sort size --dirs-first\n  ipe -f '*.rs' -I 're:^test_' -R"
)]
pub struct Args {
    /// Directories to list (default: current directory)
    #[arg(default_value = ".")]
    pub sources: Vec<String>,

    /// Do not hide entries starting with .
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Show entries in the long view
    #[arg(short = 'l', long = "long")]
    pub long: bool,

    /// Show entries in the tree view
    #[arg(short = 't', long = "tree")]
    pub tree: bool,

    /// Fill the grid by rows instead of by columns
    #[arg(short = 'x', long = "across")]
    pub across: bool,

    /// Show one entry per line
    #[arg(short = '1', long = "one-line")]
    pub one_line: bool,

    /// Use exactly N grid columns
    #[arg(short = 'C', long = "columns", value_name = "N")]
    pub columns: Option<usize>,

    /// Layout width (default: terminal width)
    #[arg(short = 'w', long = "width", value_name = "N")]
    pub width: Option<usize>,

    /// Append a type indicator (/ @ | =) to entries
    #[arg(short = 'F', long = "classify")]
    pub classify: bool,

    /// Maximum recursion depth, 0 for unlimited
    #[arg(short = 'D', long = "depth", default_value = "0", value_name = "N")]
    pub depth: usize,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    pub recursive: bool,

    /// Reverse the order of entries
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// Sort key: none, inode, mode, size, links, blocks, accessed, modified, created, user, group, name
    #[arg(short = 's', long = "sort", default_value = "none", value_name = "KEY")]
    pub sort: String,

    /// List directories before files
    #[arg(long = "dirs-first")]
    pub dirs_first: bool,

    /// Only show entries matching a pattern (glob, or regex with `re:`; repeatable)
    #[arg(short = 'f', long = "filter", action = ArgAction::Append, value_name = "PATTERN")]
    pub filter: Vec<String>,

    /// Hide entries matching a pattern (glob, or regex with `re:`; repeatable)
    #[arg(short = 'I', long = "ignore", action = ArgAction::Append, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Show the inode column
    #[arg(short = 'i', long = "inode")]
    pub inode: bool,

    /// Show the hard link count column
    #[arg(long = "links")]
    pub links: bool,

    /// Show the block count column
    #[arg(long = "blocks")]
    pub blocks: bool,

    /// Show the group column
    #[arg(short = 'g', long = "group")]
    pub group: bool,

    /// Timestamp columns to show (repeatable)
    #[arg(short = 'T', long = "time", value_enum, action = ArgAction::Append)]
    pub time: Vec<TimeColumn>,

    /// Column separator
    #[arg(short = 'S', long = "separator", default_value = "  ")]
    pub separator: String,

    /// When to color names
    #[arg(long = "color", value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print column headers in the long view
    #[arg(short = 'h', long = "header")]
    pub header: bool,

    /// Increase diagnostic output on stderr (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors on stderr
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        // Respect NO_COLOR env var
        if self.color == ColorMode::Auto && std::env::var_os("NO_COLOR").is_some() {
            self.color = ColorMode::Never;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Resolve into the configuration the listing core consumes.
    pub fn into_config(self) -> ListingConfig {
        let color = match self.color {
            ColorMode::Never => false,
            ColorMode::Always => true,
            ColorMode::Auto => terminal::stdout_is_terminal(),
        };
        ListingConfig {
            sources: self.sources,
            view: ViewKind::from_flags(self.long, self.tree),
            show_all: self.all,
            direction: if self.across {
                Direction::LeftToRight
            } else {
                Direction::TopToBottom
            },
            one_line: self.one_line,
            columns: self.columns,
            width: self.width,
            classify: self.classify,
            color,
            recursive: self.recursive,
            depth: self.depth,
            sort: SortKey::parse_lenient(&self.sort),
            dirs_first: self.dirs_first,
            reverse: self.reverse,
            filters: self.filter,
            ignores: self.ignore,
            long: LongColumns {
                inode: self.inode,
                links: self.links,
                blocks: self.blocks,
                group: self.group,
                times: self.time,
                header: self.header,
            },
            separator: self.separator,
        }
    }
}
