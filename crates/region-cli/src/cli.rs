//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// code-region - Embed source code regions into markdown documentation
#[derive(Parser, Debug)]
#[command(name = "code-region")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory substituted for the root placeholder in `file=` paths
    #[arg(long, global = true, env = "CODE_REGION_ROOT_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Config file (defaults to ./code-region.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Placeholder token standing for the root directory
    #[arg(long, global = true)]
    pub placeholder: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Embed referenced code into one markdown document
    ///
    /// Every fenced code block whose info string carries
    /// `file=<path>[#<region>]` has its content replaced. Broken references
    /// become inline error comments; the command still succeeds.
    ///
    /// Examples:
    ///   code-region render docs/guide.md
    ///   code-region render docs/guide.md -o build/guide.md
    Render {
        /// Markdown document to process
        document: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Verify every `file=` reference in documents and directories
    ///
    /// Exits with a non-zero status if any reference cannot be embedded.
    Check {
        /// Markdown files or directories to scan (.md and .mdx)
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output as JSON for CI integration
        #[arg(long)]
        json: bool,
    },

    /// Print a source file, or one region of it
    Extract {
        /// Source file to read
        file: PathBuf,

        /// Region name to extract
        #[arg(short, long)]
        region: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_render_with_output() {
        let cli = Cli::try_parse_from(["code-region", "render", "a.md", "-o", "b.md"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Render {
                document: PathBuf::from("a.md"),
                output: Some(PathBuf::from("b.md")),
            })
        );
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "code-region",
            "extract",
            "x.rs",
            "--region",
            "setup",
            "--root-dir",
            "/proj",
        ])
        .unwrap();
        assert_eq!(cli.root_dir, Some(PathBuf::from("/proj")));
        assert_eq!(
            cli.command,
            Some(Commands::Extract {
                file: PathBuf::from("x.rs"),
                region: Some("setup".into()),
            })
        );
    }

    #[test]
    fn check_requires_paths() {
        assert!(Cli::try_parse_from(["code-region", "check"]).is_err());
    }
}
