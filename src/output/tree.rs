//! Tree formatter for indented text output
//!
//! Each directory is printed as `name/` and each file as `name`, indented by
//! two spaces per level. Within a directory, subdirectories come first and
//! files after, both in name order.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::DirectoryNode;

use super::config::OutputConfig;

/// Spaces added per level of depth.
pub const INDENT_STEP: usize = 2;

/// One rendered line of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine<'a> {
    pub indent: usize,
    pub name: &'a str,
    pub is_dir: bool,
}

impl TreeLine<'_> {
    /// Suffix after the name: `/` for directories, unless the name already
    /// ends in a separator as the filesystem root does.
    pub fn marker(&self) -> &'static str {
        if self.is_dir && !self.name.ends_with(['/', std::path::MAIN_SEPARATOR]) {
            "/"
        } else {
            ""
        }
    }

    /// The line as plain text, without a trailing newline.
    pub fn text(&self) -> String {
        format!("{:indent$}{}{}", "", self.name, self.marker(), indent = self.indent)
    }
}

/// Flatten `node` into the lines it renders as, starting at `indent`.
pub fn tree_lines(node: &DirectoryNode, indent: usize) -> Vec<TreeLine<'_>> {
    let mut lines = Vec::new();
    collect_lines(node, indent, &mut lines);
    lines
}

fn collect_lines<'a>(node: &'a DirectoryNode, indent: usize, lines: &mut Vec<TreeLine<'a>>) {
    lines.push(TreeLine {
        indent,
        name: node.name(),
        is_dir: true,
    });
    for child in node.subdirectories().values() {
        collect_lines(child, indent + INDENT_STEP, lines);
    }
    lines.extend(node.files().iter().map(|file| TreeLine {
        indent: indent + INDENT_STEP,
        name: file,
        is_dir: false,
    }));
}

/// Formatter for indented tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the tree as plain text. Every line ends with a newline.
    pub fn format(&self, node: &DirectoryNode) -> String {
        let mut output = String::new();
        for line in tree_lines(node, self.config.indent) {
            output.push_str(&line.text());
            output.push('\n');
        }
        if self.config.summary {
            output.push_str(&format!("\n{}\n", summary_line(node)));
        }
        output
    }

    /// Render the tree into `out`, coloring directory names when the sink
    /// supports it.
    pub fn write<W: WriteColor>(&self, node: &DirectoryNode, out: &mut W) -> io::Result<()> {
        let mut dir_spec = ColorSpec::new();
        dir_spec.set_fg(Some(Color::Blue)).set_bold(true);

        for line in tree_lines(node, self.config.indent) {
            write!(out, "{:indent$}", "", indent = line.indent)?;
            if line.is_dir {
                out.set_color(&dir_spec)?;
                write!(out, "{}{}", line.name, line.marker())?;
                out.reset()?;
            } else {
                write!(out, "{}", line.name)?;
            }
            writeln!(out)?;
        }
        if self.config.summary {
            writeln!(out)?;
            writeln!(out, "{}", summary_line(node))?;
        }
        Ok(())
    }

    /// Print the tree to stdout. Color is used exactly when `use_color` is set;
    /// terminal detection is the caller's job.
    pub fn print(&self, node: &DirectoryNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(node, &mut stdout)?;
        stdout.flush()
    }
}

/// Print `node` to stdout without color, starting at `indent`.
pub fn print_tree(node: &DirectoryNode, indent: usize) -> io::Result<()> {
    TreeFormatter::new(OutputConfig {
        indent,
        ..Default::default()
    })
    .print(node)
}

fn summary_line(node: &DirectoryNode) -> String {
    format!(
        "{} directories, {} files",
        node.directory_count(),
        node.file_count()
    )
}
