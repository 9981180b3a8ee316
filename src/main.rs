//! szv - a lazy directory-size browser.
//!
//! Usage:
//!   szv [PATH]               List one directory level, largest first
//!   szv tree [PATH]          Drill down through the largest subtrees
//!   szv roots                Show available scan roots
//!   szv export [PATH]        Export a listing to JSON
//!   szv rm PATH --yes        Delete an entry and report freed space
//!   szv --help               Show help

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result, bail};

use sizeview_core::ScanConfig;
use sizeview_ops::MutationCoordinator;
use sizeview_scan::available_roots;
use sizeview_tree::{EntryTree, NodeId};

#[derive(Parser)]
#[command(
    name = "szv",
    version,
    about = "A lazy directory-size browser",
    long_about = "szv reports, for every entry in a directory, its total size \
                  (recursively summed for subdirectories), sorted largest-first, \
                  so you can find what consumes space."
)]
struct Cli {
    /// Path to list (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Maximum scan recursion depth for directory totals
    #[arg(short = 'd', long)]
    max_depth: Option<u32>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Expand the largest subtrees level by level
    Tree {
        /// Path to browse
        #[arg(default_value = ".")]
        path: PathBuf,

        /// How many levels to expand
        #[arg(short, long, default_value = "3")]
        depth: u32,

        /// Number of top entries to show per directory
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },

    /// Show available scan roots on this host
    Roots,

    /// Export a one-level listing to JSON
    Export {
        /// Path to list
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete an entry and report the freed space
    Rm {
        /// Path to delete
        path: PathBuf,

        /// Confirm the deletion; without this flag nothing is removed
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = match cli.max_depth {
        Some(depth) => ScanConfig::builder()
            .max_depth(Some(depth))
            .build()
            .map_err(|e| color_eyre::eyre::eyre!(e))?,
        None => ScanConfig::default(),
    };

    match cli.command {
        Some(Command::Tree { path, depth, top }) => run_tree(&path, config, depth, top)?,
        Some(Command::Roots) => run_roots(),
        Some(Command::Export { path, output }) => run_export(&path, config, output)?,
        Some(Command::Rm { path, yes }) => run_rm(&path, config, yes)?,
        None => run_list(&cli.path, config)?,
    }

    Ok(())
}

/// List one directory level, largest first.
fn run_list(path: &PathBuf, config: ScanConfig) -> Result<()> {
    let mut tree = EntryTree::new(config);
    let top: Vec<NodeId> = tree
        .set_root(path)
        .with_context(|| format!("Cannot list {}", path.display()))?
        .to_vec();

    let total: u64 = top
        .iter()
        .filter_map(|id| tree.entry(*id))
        .map(|e| e.size)
        .sum();

    println!();
    println!(
        " {} - {}",
        tree.root_path().unwrap_or(path).display(),
        format_size(total)
    );
    println!("{}", "─".repeat(64));

    for id in &top {
        if let Some(entry) = tree.entry(*id) {
            print_row(entry, 0, total);
        }
    }

    Ok(())
}

/// Expand the largest subtrees down to `max_depth` levels.
fn run_tree(path: &PathBuf, config: ScanConfig, max_depth: u32, top_n: usize) -> Result<()> {
    let mut tree = EntryTree::new(config);
    let top: Vec<NodeId> = tree
        .set_root(path)
        .with_context(|| format!("Cannot list {}", path.display()))?
        .to_vec();

    let total: u64 = top
        .iter()
        .filter_map(|id| tree.entry(*id))
        .map(|e| e.size)
        .sum();

    println!();
    println!(
        " {} - {}",
        tree.root_path().unwrap_or(path).display(),
        format_size(total)
    );
    println!("{}", "─".repeat(64));

    for id in top.into_iter().take(top_n) {
        print_subtree(&mut tree, id, 0, max_depth, top_n, total);
    }

    Ok(())
}

/// Print a node, expanding its children up to the depth budget.
fn print_subtree(
    tree: &mut EntryTree,
    id: NodeId,
    depth: u32,
    max_depth: u32,
    top_n: usize,
    total: u64,
) {
    let Some(entry) = tree.entry(id) else { return };
    let is_dir = entry.is_dir();
    print_row(entry, depth, total);

    if is_dir && depth + 1 < max_depth {
        let kids: Vec<NodeId> = tree.expand(id).to_vec();
        let shown = kids.len().min(top_n);
        for kid in kids.iter().take(top_n) {
            print_subtree(tree, *kid, depth + 1, max_depth, top_n, total);
        }
        if kids.len() > shown {
            let indent = "  ".repeat((depth + 1) as usize);
            println!("{}  ... and {} more", indent, kids.len() - shown);
        }
    }
}

fn print_row(entry: &sizeview_core::Entry, depth: u32, total: u64) {
    let indent = "  ".repeat(depth as usize);
    let ratio = if total > 0 {
        entry.size as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let marker = if entry.is_dir() { "/" } else { "" };

    println!(
        "{}{:<40} {:>10} {:>5.1}% {}",
        indent,
        truncate(&format!("{}{}", entry.name, marker), 40),
        format_size(entry.size),
        ratio,
        make_bar(ratio / 100.0, 10)
    );
}

/// Show the host's top-level scan targets.
fn run_roots() {
    for root in available_roots() {
        println!("{}", root.display());
    }
}

/// Export a one-level listing as JSON.
fn run_export(path: &PathBuf, config: ScanConfig, output: Option<PathBuf>) -> Result<()> {
    let mut tree = EntryTree::new(config);
    let top: Vec<NodeId> = tree
        .set_root(path)
        .with_context(|| format!("Cannot list {}", path.display()))?
        .to_vec();

    let entries: Vec<_> = top.iter().filter_map(|id| tree.entry(*id)).collect();
    let json = serde_json::to_string_pretty(&entries)?;

    match output {
        Some(output_path) => {
            std::fs::write(&output_path, json)?;
            eprintln!("Exported to {}", output_path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Delete one entry, confirmation-gated.
fn run_rm(path: &PathBuf, config: ScanConfig, yes: bool) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let Some(file_name) = path.file_name() else {
        bail!("Cannot delete {}", path.display());
    };

    let mut tree = EntryTree::new(config);
    tree.set_root(&parent)
        .with_context(|| format!("Cannot list {}", parent.display()))?;

    let target = tree
        .root_path()
        .map(|root| root.join(file_name))
        .unwrap_or_else(|| path.clone());
    let Some(id) = tree.find_by_path(&target) else {
        bail!("{} does not appear in the listing", target.display());
    };

    let size = tree.entry(id).map(|e| e.size).unwrap_or(0);
    if !yes {
        bail!(
            "Would delete {} ({}). Re-run with --yes to confirm.",
            target.display(),
            format_size(size)
        );
    }

    let coordinator = MutationCoordinator::new();
    coordinator
        .delete(&mut tree, id)
        .with_context(|| format!("Failed to delete {}", target.display()))?;

    println!("Deleted {} (freed {})", target.display(), format_size(size));
    Ok(())
}

/// Create a simple ASCII bar.
fn make_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}

/// Truncate a string to at most `max_len` characters.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 1).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::{make_bar, truncate};

    #[test]
    fn test_truncate_multibyte_names() {
        let long = "é".repeat(50);
        let cut = truncate(&long, 40);
        assert_eq!(cut.chars().count(), 40);
        assert!(cut.ends_with('…'));

        assert_eq!(truncate("short", 40), "short");
    }

    #[test]
    fn test_make_bar_bounds() {
        assert_eq!(make_bar(0.0, 4), "[░░░░]");
        assert_eq!(make_bar(1.0, 4), "[████]");
    }
}
