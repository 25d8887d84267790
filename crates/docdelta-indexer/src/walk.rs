//! Lazy archive traversal

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use docdelta_core::{SymbolIdentifier, SymbolSet};
use ignore::{Walk, WalkBuilder};
use thiserror::Error;
use tracing::debug;

use crate::manifest::{self, MANIFEST_SUFFIX};

/// Fatal faults while walking an archive.
///
/// Manifest decode failures never show up here; a file that does not decode
/// to a symbol simply contributes nothing to the walk.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A manifest file exists but could not be read.
    #[error("failed to read manifest {}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The directory enumeration itself faulted mid-walk.
    #[error("archive traversal failed")]
    Traversal(#[from] ignore::Error),
}

/// Build the shared traversal: recursive, hidden entries skipped, no
/// VCS-ignore handling since archives are build products, not checkouts.
fn archive_walk(root: &Path) -> Walk {
    WalkBuilder::new(root)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false)
        .build()
}

/// Roots that cannot be enumerated at all (missing, not a directory) make
/// the walk come back empty instead of failing.
fn can_enumerate(root: &Path) -> bool {
    fs::read_dir(root).is_ok()
}

pub(crate) fn enumerate(root: &Path) -> Option<Walk> {
    can_enumerate(root).then(|| archive_walk(root))
}

pub(crate) fn is_manifest_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(MANIFEST_SUFFIX))
}

/// Lazy stream of the symbol identifiers documented under an archive root.
///
/// Yields one identifier per manifest that decodes to a symbol, in traversal
/// order. The stream is finite and not restartable. Read and enumeration
/// faults surface as errors and end the walk; decode failures are skipped.
pub struct SymbolWalk {
    inner: Option<Walk>,
}

impl Iterator for SymbolWalk {
    type Item = Result<SymbolIdentifier, IndexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let walk = self.inner.as_mut()?;
        loop {
            let entry = match walk.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(IndexError::Traversal(err))),
            };
            if !entry.file_type().is_some_and(|ty| ty.is_file()) {
                continue;
            }
            let path = entry.path();
            if !is_manifest_path(path) {
                continue;
            }
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    return Some(Err(IndexError::ManifestRead {
                        path: path.to_path_buf(),
                        source: err,
                    }));
                }
            };
            match manifest::decode(&bytes) {
                Ok(id) => return Some(Ok(id)),
                Err(err) => {
                    debug!("Skipping {}: {}", path.display(), err);
                }
            }
        }
    }
}

/// Stream every symbol identifier documented under `root`.
pub fn symbol_identifiers(root: &Path) -> SymbolWalk {
    SymbolWalk {
        inner: enumerate(root),
    }
}

/// Collect the walk into a set, stopping at the first fatal fault.
pub fn collect_symbols(root: &Path) -> Result<SymbolSet, IndexError> {
    let mut symbols = SymbolSet::new();
    for id in symbol_identifiers(root) {
        symbols.insert(id?);
    }
    Ok(symbols)
}
