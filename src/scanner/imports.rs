//! Line-based import extraction.
//!
//! This is a text scan, not a parse: a line contributes a token exactly when
//! it starts (column zero) with `import` or `from` followed by whitespace.
//! Indented imports inside functions or `try` blocks are intentionally not
//! matched, and nothing is deduplicated — a name imported twice appears
//! twice in the output.

use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;

use regex::Regex;

/// Per-file import tokens, one entry per discovered file, in traversal
/// order. Tokens within a file keep line order.
pub type ImportMap = Vec<(PathBuf, Vec<String>)>;

static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:import|from)\s+(\S+)").unwrap());

/// Extract the imported names from each file.
///
/// Files that cannot be read (vanished mid-scan, not valid UTF-8) still get
/// an entry with no tokens, so their stems keep counting as local modules.
pub fn extract_imports(files: Vec<PathBuf>) -> ImportMap {
    let mut map = ImportMap::with_capacity(files.len());

    for file in files {
        let tokens = match fs::read_to_string(&file) {
            Ok(text) => scan_lines(&text),
            Err(e) => {
                tracing::debug!("skipping unreadable file {}: {}", file.display(), e);
                Vec::new()
            }
        };
        map.push((file, tokens));
    }

    map
}

fn scan_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| IMPORT_LINE.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}
