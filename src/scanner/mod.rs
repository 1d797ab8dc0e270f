//! Project scanning: file discovery and import extraction.

pub mod imports;
pub mod walker;

pub use imports::{extract_imports, ImportMap};
pub use walker::collect_python_files;
