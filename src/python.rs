//! Python interpreter probing.
//!
//! pipstrap has no Python runtime of its own, so the two facts it needs —
//! the major version and the standard-library directory — come from running
//! the interpreter with one-line `-c` queries. The probe happens once per
//! run and the result is passed around as a plain value.

use std::path::PathBuf;
use std::process::Command;

use crate::error::{PipstrapError, Result};

/// Interpreters tried in order when none is given on the command line.
const DEFAULT_INTERPRETERS: &[&str] = &["python3", "python"];

/// Facts about the interpreter the scanned project runs under.
#[derive(Debug, Clone)]
pub struct PythonRuntime {
    /// Executable the facts were probed from.
    pub interpreter: String,
    /// `sys.version_info.major`.
    pub major: u32,
    /// `sysconfig.get_paths()["stdlib"]` — root of the bundled library.
    pub stdlib_dir: PathBuf,
}

impl PythonRuntime {
    /// Probe the given interpreter, or the defaults in order when none is
    /// given. Returns the first interpreter that answers both queries.
    pub fn probe(interpreter: Option<&str>) -> Result<Self> {
        if let Some(name) = interpreter {
            return Self::probe_one(name);
        }

        let mut last_err = None;
        for name in DEFAULT_INTERPRETERS {
            match Self::probe_one(name) {
                Ok(runtime) => return Ok(runtime),
                Err(e) => {
                    tracing::debug!("interpreter '{}' not usable: {}", name, e);
                    last_err = Some(e);
                }
            }
        }
        Err(last_err.unwrap_or_else(|| PipstrapError::InterpreterProbeFailed {
            interpreter: DEFAULT_INTERPRETERS.join(", "),
            message: "no interpreter candidates".into(),
        }))
    }

    fn probe_one(interpreter: &str) -> Result<Self> {
        let major_raw = query(interpreter, "import sys; print(sys.version_info.major)")?;
        let major = major_raw
            .parse::<u32>()
            .map_err(|_| PipstrapError::InterpreterProbeFailed {
                interpreter: interpreter.to_string(),
                message: format!("unparseable version output: {:?}", major_raw),
            })?;

        let stdlib = query(
            interpreter,
            "import sysconfig; print(sysconfig.get_paths()[\"stdlib\"])",
        )?;

        tracing::debug!(
            "probed '{}': major={}, stdlib={}",
            interpreter,
            major,
            stdlib
        );

        Ok(Self {
            interpreter: interpreter.to_string(),
            major,
            stdlib_dir: PathBuf::from(stdlib),
        })
    }
}

/// Run `<interpreter> -c <code>` and return trimmed stdout.
fn query(interpreter: &str, code: &str) -> Result<String> {
    let output = Command::new(interpreter)
        .args(["-c", code])
        .output()
        .map_err(|e| PipstrapError::InterpreterProbeFailed {
            interpreter: interpreter.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(PipstrapError::InterpreterProbeFailed {
            interpreter: interpreter.to_string(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_of_missing_executable_fails() {
        let err = PythonRuntime::probe(Some("definitely-not-a-python-xyz")).unwrap_err();
        assert!(matches!(
            err,
            PipstrapError::InterpreterProbeFailed { .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn probe_reads_version_and_stdlib_from_stub() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        // Stub "interpreter" that answers the two -c queries the way a real
        // python would: version query mentions version_info, the other gets
        // the stdlib path.
        let temp = TempDir::new().unwrap();
        let stub = temp.path().join("python-stub");
        fs::write(
            &stub,
            "#!/bin/sh\ncase \"$2\" in\n*version_info*) echo 3 ;;\n*) echo /opt/py/lib ;;\nesac\n",
        )
        .unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let runtime = PythonRuntime::probe(Some(stub.to_str().unwrap())).unwrap();

        assert_eq!(runtime.major, 3);
        assert_eq!(runtime.stdlib_dir, PathBuf::from("/opt/py/lib"));
    }

    #[cfg(unix)]
    #[test]
    fn probe_rejects_garbage_version_output() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let stub = temp.path().join("python-stub");
        fs::write(&stub, "#!/bin/sh\necho not-a-number\n").unwrap();
        fs::set_permissions(&stub, fs::Permissions::from_mode(0o755)).unwrap();

        let err = PythonRuntime::probe(Some(stub.to_str().unwrap())).unwrap_err();
        assert!(matches!(
            err,
            PipstrapError::InterpreterProbeFailed { .. }
        ));
    }
}
