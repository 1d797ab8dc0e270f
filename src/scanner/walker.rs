//! Recursive discovery of Python source files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Collect every `.py` file reachable by recursive descent from `root`,
/// in directory traversal order. Directories themselves are never returned
/// and nothing besides the extension is filtered. Symlinks are followed
/// without loop protection.
///
/// Existence of `root` is the caller's problem; it is validated at the CLI
/// entry point before the walk starts.
pub fn collect_python_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    visit(root, &mut files)?;
    tracing::debug!("discovered {} Python files under {}", files.len(), root.display());
    Ok(files)
}

fn visit(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            visit(&path, files)?;
        } else if path.extension().is_some_and(|ext| ext == "py") {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn collects_only_py_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("app.py"), "").unwrap();
        fs::write(temp.path().join("notes.txt"), "").unwrap();
        fs::write(temp.path().join("Makefile"), "").unwrap();

        let files = collect_python_files(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app.py"));
    }

    #[test]
    fn descends_into_nested_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("pkg/sub")).unwrap();
        fs::write(temp.path().join("main.py"), "").unwrap();
        fs::write(temp.path().join("pkg/__init__.py"), "").unwrap();
        fs::write(temp.path().join("pkg/sub/util.py"), "").unwrap();
        fs::write(temp.path().join("pkg/sub/data.json"), "{}").unwrap();

        let files = collect_python_files(temp.path()).unwrap();

        assert_eq!(files.len(), 3);
        assert!(files.iter().all(|f| f.extension().is_some_and(|e| e == "py")));
    }

    #[test]
    fn directories_are_never_returned() {
        let temp = TempDir::new().unwrap();
        // A directory whose name ends in .py must not be mistaken for a file
        fs::create_dir(temp.path().join("weird.py")).unwrap();
        fs::write(temp.path().join("weird.py/inner.py"), "").unwrap();

        let files = collect_python_files(temp.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("inner.py"));
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let temp = TempDir::new().unwrap();
        assert!(collect_python_files(temp.path()).unwrap().is_empty());
    }
}
