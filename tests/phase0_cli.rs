mod common;

use assert_cmd::Command;
use clap::Parser;
use common::{create_fixture, sample_dir};
use ipe::cli::Args;
use ipe::config::{ColorMode, TimeColumn, ViewKind};
use ipe::grid::Direction;
use ipe::order::SortKey;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    Command::cargo_bin("ipe")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("List directory contents"))
        .stdout(predicate::str::contains("--depth"))
        .stdout(predicate::str::contains("--ignore"))
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("--header"))
        .stdout(predicate::str::contains("--dirs-first"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("ipe")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ipe"));
}

#[test]
fn test_short_h_is_header_not_help() {
    let tmp = sample_dir();
    Command::cargo_bin("ipe")
        .unwrap()
        .args(["-l", "-h", "--color", "never"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode"))
        .stdout(predicate::str::contains("Name"))
        .stdout(predicate::str::contains("Examples:").not());
}

#[test]
fn test_nonexistent_path_is_reported_inline() {
    Command::cargo_bin("ipe")
        .unwrap()
        .args(["-1", "/this/path/does/not/exist"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: /this/path/does/not/exist"));
}

#[test]
fn test_one_line_lists_names() {
    let tmp = sample_dir();
    Command::cargo_bin("ipe")
        .unwrap()
        .args(["-1", "-s", "name", "--color", "never"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("a.txt\nb.txt\nsub\n");
}

#[test]
fn test_explicit_width_packs_grid() {
    let tmp = sample_dir();
    Command::cargo_bin("ipe")
        .unwrap()
        .args(["-w", "40", "-s", "name", "--color", "never"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout("a.txt  b.txt  sub\n");
}

#[test]
fn test_unknown_sort_key_warns_and_continues() {
    let tmp = create_fixture(&["only.txt"]);
    Command::cargo_bin("ipe")
        .unwrap()
        .args(["-1", "-s", "bogus", "--color", "never"])
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("only.txt\n")
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn test_quiet_suppresses_warnings() {
    let tmp = create_fixture(&["only.txt"]);
    Command::cargo_bin("ipe")
        .unwrap()
        .args(["-q", "-1", "-s", "bogus", "--color", "never"])
        .arg(tmp.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_color_always_emits_escapes() {
    let tmp = create_fixture(&["sub/"]);
    Command::cargo_bin("ipe")
        .unwrap()
        .args(["-1", "--color", "always"])
        .env_remove("NO_COLOR")
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

// --- Argument parsing ---

#[test]
fn test_default_args() {
    let args = Args::try_parse_from(["ipe"]).unwrap();
    assert_eq!(args.sources, vec!["."]);
    assert_eq!(args.depth, 0);
    assert_eq!(args.separator, "  ");
    assert_eq!(args.color, ColorMode::Auto);
    assert!(!args.long && !args.tree && !args.header);
}

#[test]
fn test_combined_long_tree_flags() {
    let args = Args::try_parse_from(["ipe", "-lt", "-D", "2", "--color", "never"]).unwrap();
    let config = args.validated().into_config();
    assert_eq!(config.view, ViewKind::LongTree);
    assert_eq!(config.depth, 2);
    assert!(!config.color);
}

#[test]
fn test_multiple_patterns_accumulate() {
    let args =
        Args::try_parse_from(["ipe", "-I", "*.log", "-I", "re:^tmp", "-f", "*.rs"]).unwrap();
    assert_eq!(args.ignore, vec!["*.log", "re:^tmp"]);
    assert_eq!(args.filter, vec!["*.rs"]);
}

#[test]
fn test_time_columns_repeatable() {
    let args = Args::try_parse_from(["ipe", "-l", "-T", "modified", "-T", "accessed"]).unwrap();
    assert_eq!(args.time, vec![TimeColumn::Modified, TimeColumn::Accessed]);
}

#[test]
fn test_sort_and_layout_options_resolve() {
    let args = Args::try_parse_from([
        "ipe", "-x", "-C", "3", "-s", "SIZE", "-r", "--dirs-first", "--color", "never",
    ])
    .unwrap();
    let config = args.validated().into_config();
    assert_eq!(config.direction, Direction::LeftToRight);
    assert_eq!(config.columns, Some(3));
    assert_eq!(config.sort, SortKey::Size);
    assert!(config.reverse && config.dirs_first);
    assert!(!config.needs_width());
}

#[test]
fn test_unknown_sort_key_resolves_to_none() {
    let args = Args::try_parse_from(["ipe", "-s", "nonsense", "--color", "never"]).unwrap();
    assert_eq!(args.validated().into_config().sort, SortKey::None);
}

#[test]
fn test_verbose_quiet() {
    let args = Args::try_parse_from(["ipe", "-vv"]).unwrap();
    assert_eq!(args.verbose, 2);
    let args = Args::try_parse_from(["ipe", "-q", "-vv"]).unwrap().validated();
    assert!(args.quiet);
    assert_eq!(args.verbose, 0);
}

#[test]
fn test_invalid_depth_rejected() {
    assert!(Args::try_parse_from(["ipe", "-D", "deep"]).is_err());
}

#[test]
fn test_generate_assets_into_directory() {
    let tmp = create_fixture(&[]);
    Command::cargo_bin("generate-assets")
        .unwrap()
        .arg(tmp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("ipe.1"));

    for file in ["completions/ipe.bash", "completions/_ipe", "completions/ipe.fish", "man/ipe.1"] {
        assert!(tmp.path().join(file).is_file(), "missing {file}");
    }
    let page = std::fs::read_to_string(tmp.path().join("man/ipe.1")).unwrap();
    assert!(page.contains("dirs\\-first"), "{page}");
}
