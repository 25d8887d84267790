//! Cross-archive planning

use std::path::PathBuf;

use docdelta_core::{SymbolIdentifier, SymbolSet};
use docdelta_indexer::collect_symbols;
use tracing::{info, warn};

use crate::request::{MergeError, MergeRequest};

/// One input archive with its discovered symbols.
#[derive(Debug)]
pub struct ArchiveIndex {
    pub root: PathBuf,
    pub symbols: SymbolSet,
}

/// Everything the combining step needs to know about the inputs.
///
/// Collision detection reuses the identifier equality the differ is built
/// on, so "the same symbol in two archives" means exactly what it means when
/// diffing two snapshots.
#[derive(Debug)]
pub struct MergePlan {
    pub archives: Vec<ArchiveIndex>,
    collisions: Vec<SymbolIdentifier>,
}

impl MergePlan {
    /// Validate the request, index every input archive, and record which
    /// symbols appear in more than one of them.
    pub fn build(request: &MergeRequest) -> Result<Self, MergeError> {
        request.validate()?;

        let mut archives = Vec::with_capacity(request.archives.len());
        for root in &request.archives {
            let symbols = collect_symbols(root).map_err(|err| MergeError::Index {
                path: root.clone(),
                source: err,
            })?;
            info!("Indexed {} symbols in {}", symbols.len(), root.display());
            archives.push(ArchiveIndex {
                root: root.clone(),
                symbols,
            });
        }

        let mut seen = SymbolSet::new();
        let mut collisions = Vec::new();
        for archive in &archives {
            for id in archive.symbols.iter() {
                if !seen.insert(id.clone()) && !collisions.contains(id) {
                    collisions.push(id.clone());
                }
            }
        }

        Ok(MergePlan {
            archives,
            collisions,
        })
    }

    /// Symbols documented by more than one input archive, in discovery
    /// order across the inputs.
    pub fn collisions(&self) -> &[SymbolIdentifier] {
        &self.collisions
    }
}

/// Seam to the collaborator that lays down the combined output tree.
pub trait ArchiveCombiner {
    fn combine(&self, plan: &MergePlan, request: &MergeRequest) -> Result<(), MergeError>;
}

/// Validate, plan, report collisions, and hand off to the combiner.
pub fn merge(request: &MergeRequest, combiner: &dyn ArchiveCombiner) -> Result<(), MergeError> {
    let plan = MergePlan::build(request)?;
    for id in plan.collisions() {
        warn!("Symbol {} is documented by more than one archive", id);
    }
    combiner.combine(&plan, request)
}
