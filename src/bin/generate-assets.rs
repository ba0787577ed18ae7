//! Writes shell completions and the man page for `ipe`.
//!
//! Usage: `generate-assets [OUT_DIR]`, defaulting to `dist`.

#![forbid(unsafe_code)]

use anyhow::Context;
use clap::CommandFactory;
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use ipe::cli::Args;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    for path in write_assets(&out_dir)? {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

/// Completions go to `<out>/completions`, the man page to `<out>/man`.
fn write_assets(out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut cmd = Args::command();
    let name = cmd.get_name().to_string();

    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");
    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    }

    let mut written = Vec::new();
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let path = generate_to(shell, &mut cmd, &name, &completions_dir)
            .with_context(|| format!("cannot write {shell} completions"))?;
        written.push(path);
    }

    let mut page = Vec::new();
    Man::new(cmd).render(&mut page)?;
    let man_path = man_dir.join(format!("{name}.1"));
    fs::write(&man_path, page).with_context(|| format!("cannot write {}", man_path.display()))?;
    written.push(man_path);

    Ok(written)
}
