//! Import classification.
//!
//! Every extracted token lands in exactly one of three classes: bundled with
//! the interpreter, a module of the scanned project itself, or an external
//! candidate worth handing to pip. There is no "unknown".

use std::collections::HashSet;

use crate::scanner::ImportMap;
use crate::stdlib::StdlibIndex;

/// Where an imported name resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    StandardLibrary,
    LocalModule,
    ExternalCandidate,
}

/// Classify one token. Standard library wins over local; external requires
/// absence from both sets.
pub fn classify(
    token: &str,
    stdlib: &StdlibIndex,
    local_stems: &HashSet<String>,
) -> Classification {
    if stdlib.contains(token) {
        Classification::StandardLibrary
    } else if local_stems.contains(token) {
        Classification::LocalModule
    } else {
        Classification::ExternalCandidate
    }
}

/// Stems (file name minus extension) of the scanned files, used so that
/// intra-project imports are never mistaken for missing packages.
pub fn local_module_stems(imports: &ImportMap) -> HashSet<String> {
    imports
        .iter()
        .filter_map(|(path, _)| path.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .collect()
}

/// Every external-candidate occurrence, in scan order. Occurrences are not
/// deduplicated: a name imported in three places comes back three times and
/// triggers three installer invocations downstream.
pub fn external_candidates(imports: &ImportMap, stdlib: &StdlibIndex) -> Vec<String> {
    let local_stems = local_module_stems(imports);
    let mut candidates = Vec::new();

    for (path, tokens) in imports {
        for token in tokens {
            match classify(token, stdlib, &local_stems) {
                Classification::ExternalCandidate => {
                    tracing::debug!("{}: '{}' is not bundled or local", path.display(), token);
                    candidates.push(token.clone());
                }
                Classification::StandardLibrary | Classification::LocalModule => {}
            }
        }
    }

    candidates
}
