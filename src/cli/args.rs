//! CLI argument definitions.
//!
//! pipstrap has a single operation, so there are no subcommands: one
//! optional positional path plus a few flags. Invoked without a path it
//! prints usage and does nothing else.

use clap::Parser;
use std::path::PathBuf;

/// pipstrap - scan a Python project and pip-install its missing imports.
#[derive(Debug, Parser)]
#[command(name = "pipstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory to scan (relative to the current directory)
    pub path: Option<PathBuf>,

    /// Python interpreter to probe for version and stdlib location
    #[arg(long, value_name = "PATH")]
    pub python: Option<String>,

    /// Report missing dependencies without invoking pip
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_invocation() {
        let cli = Cli::parse_from(["pipstrap"]);
        assert!(cli.path.is_none());
        assert!(!cli.dry_run);
    }

    #[test]
    fn parses_path_and_flags() {
        let cli = Cli::parse_from(["pipstrap", "my_project", "--dry-run", "--python", "python3.12"]);
        assert_eq!(cli.path, Some(PathBuf::from("my_project")));
        assert!(cli.dry_run);
        assert_eq!(cli.python.as_deref(), Some("python3.12"));
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["pipstrap", "a", "b"]).is_err());
    }
}
