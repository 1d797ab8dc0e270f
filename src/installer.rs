//! pip subprocess invocation.
//!
//! Installs are fire-and-forget: the child process blocks the run until it
//! exits, but its status is neither checked nor propagated. There is no
//! retry, no verification, no timeout.

use std::process::Command;

use console::style;

use crate::error::{PipstrapError, Result};

/// Mockable process spawner, so tests can count invocations instead of
/// actually running pip.
pub struct InstallerContext<'a> {
    /// Spawn the installer executable with the given arguments and wait for
    /// it to exit.
    pub run_command: &'a dyn Fn(&str, &[&str]),
}

/// Build the default `InstallerContext` for production use.
pub fn default_context() -> InstallerContext<'static> {
    InstallerContext {
        run_command: &|program, args| {
            // Exit status is deliberately not inspected
            let _ = Command::new(program).args(args).status();
        },
    }
}

/// Map a Python major version to its pip executable.
///
/// Anything other than 2 or 3 is the fatal unsupported-version error; nothing
/// above catches it.
pub fn pip_executable(major: u32) -> Result<&'static str> {
    match major {
        2 => Ok("pip2"),
        3 => Ok("pip3"),
        version => Err(PipstrapError::UnsupportedPythonVersion { version }),
    }
}

/// Invokes pip for one dependency at a time.
pub struct PipInstaller {
    pip: &'static str,
    major: u32,
}

impl PipInstaller {
    /// Select the pip executable for the probed major version.
    pub fn new(major: u32) -> Result<Self> {
        Ok(Self {
            pip: pip_executable(major)?,
            major,
        })
    }

    /// Executable this installer invokes (`pip2` or `pip3`).
    pub fn executable(&self) -> &'static str {
        self.pip
    }

    /// Run `pipN install <name>`, blocking until the child exits.
    pub fn install(&self, name: &str, ctx: &InstallerContext<'_>) {
        println!(
            "{} Installing {} with {} (Python {})",
            style("→").cyan(),
            style(name).bold(),
            self.pip,
            self.major
        );
        tracing::info!("running {} install {}", self.pip, name);
        (ctx.run_command)(self.pip, &["install", name]);
    }
}
