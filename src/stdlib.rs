//! Standard-library module index.
//!
//! Built once per run by walking the interpreter's stdlib directory. Every
//! `.py` file except `__init__.py` contributes its dotted module name: the
//! path relative to the stdlib root, extension stripped, separators replaced
//! by dots (`email/mime/text.py` → `email.mime.text`).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Set of dotted module names bundled with the interpreter. Membership is
/// the sole authority for "is this a standard-library import".
pub type StdlibIndex = HashSet<String>;

/// Walk `stdlib_root` and collect the dotted name of every bundled module.
pub fn build_index(stdlib_root: &Path) -> Result<StdlibIndex> {
    let mut index = StdlibIndex::new();
    visit(stdlib_root, stdlib_root, &mut index)?;
    tracing::debug!(
        "indexed {} standard-library modules under {}",
        index.len(),
        stdlib_root.display()
    );
    Ok(index)
}

fn visit(root: &Path, dir: &Path, index: &mut StdlibIndex) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            visit(root, &path, index)?;
        } else if path.extension().is_some_and(|ext| ext == "py")
            && path.file_stem().is_some_and(|stem| stem != "__init__")
        {
            index.insert(dotted_name(root, &path));
        }
    }
    Ok(())
}

fn dotted_name(root: &Path, file: &Path) -> String {
    // strip_prefix cannot fail: `file` was reached by descending from `root`
    file.strip_prefix(root)
        .unwrap_or(file)
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(".")
}
