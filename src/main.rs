//! CLI entry point for foldertree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use foldertree::{OutputConfig, ScanConfig, Scanner, TreeFormatter, print_json};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "foldertree")]
#[command(about = "Print a directory and everything beneath it as an indented tree")]
#[command(version)]
struct Args {
    /// Directory to display
    path: PathBuf,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Number of spaces before the root line
    #[arg(
        long = "indent",
        value_name = "N",
        default_value = "0",
        conflicts_with = "json"
    )]
    indent: usize,

    /// Print a directory and file count after the tree
    #[arg(long = "summary", conflicts_with = "json")]
    summary: bool,

    /// Do not follow symbolic links
    #[arg(long = "no-follow")]
    no_follow: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let scanner = Scanner::new(ScanConfig {
        follow_links: !args.no_follow,
    });

    // Nothing is printed unless the whole scan succeeds.
    let tree = match scanner.scan(&args.path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("foldertree: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&tree)
    } else {
        let formatter = TreeFormatter::new(OutputConfig {
            use_color: should_use_color(args.color),
            indent: args.indent,
            summary: args.summary,
        });
        formatter.print(&tree)
    };

    if let Err(e) = result {
        eprintln!("foldertree: error writing output: {}", e);
        process::exit(1);
    }
}
