//! pipstrap - scan a Python project and pip-install its missing imports.
//!
//! pipstrap walks a project directory for `.py` files, pulls the imported
//! names out of each one with line-anchored pattern matching, checks every
//! name against the interpreter's standard library and the project's own
//! modules, and runs `pip install` for whatever is left over.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and the single scan-and-install run
//! - [`error`] - Error types and result aliases
//! - [`installer`] - pip subprocess invocation
//! - [`python`] - Interpreter probing (major version, stdlib location)
//! - [`resolver`] - Import classification against stdlib and local modules
//! - [`scanner`] - File discovery and import extraction
//! - [`stdlib`] - Standard-library module index
//!
//! The scan is a single sequential pass with no persistent state: results
//! are computed, acted on, and discarded. Import extraction is deliberately
//! line-based (`import X` / `from X ...` at column zero), not a real parse.

pub mod cli;
pub mod error;
pub mod installer;
pub mod python;
pub mod resolver;
pub mod scanner;
pub mod stdlib;

pub use error::{PipstrapError, Result};
