//! The single scan-and-install pass.
//!
//! Sequencing: validate the project path, probe the interpreter, select the
//! pip executable (unsupported majors die here, before any work), walk and
//! extract, build the stdlib index, classify, then install each external
//! occurrence in turn. Everything is sequential and blocking; nothing is
//! cached between runs.

use clap::CommandFactory;
use console::style;

use crate::cli::args::Cli;
use crate::error::{PipstrapError, Result};
use crate::installer::{InstallerContext, PipInstaller};
use crate::python::PythonRuntime;
use crate::resolver;
use crate::scanner;
use crate::stdlib;

/// Execute one run. With no path given, print usage and return without
/// touching the filesystem.
pub fn run(cli: &Cli, ctx: &InstallerContext<'_>) -> Result<()> {
    let Some(project_path) = &cli.path else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    if !project_path.exists() {
        return Err(PipstrapError::ProjectPathNotFound {
            path: project_path.clone(),
        });
    }

    let runtime = PythonRuntime::probe(cli.python.as_deref())?;
    let installer = PipInstaller::new(runtime.major)?;

    let files = scanner::collect_python_files(project_path)?;
    let imports = scanner::extract_imports(files);
    let index = stdlib::build_index(&runtime.stdlib_dir)?;
    let missing = resolver::external_candidates(&imports, &index);

    if missing.is_empty() {
        println!(
            "{} No missing dependencies in {}",
            style("✓").green(),
            project_path.display()
        );
        return Ok(());
    }

    for name in &missing {
        println!(
            "{} Missing dependency: {}",
            style("!").yellow(),
            style(name).bold()
        );
        if cli.dry_run {
            continue;
        }
        installer.install(name, ctx);
    }

    if cli.dry_run {
        println!(
            "{} {} missing occurrence(s), nothing installed (dry-run)",
            style("→").cyan(),
            missing.len()
        );
    }

    Ok(())
}
