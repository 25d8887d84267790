//! Thin combining collaborator

use std::fs;
use std::io;
use std::path::Path;

use tracing::info;

use crate::coordinator::{ArchiveCombiner, MergePlan};
use crate::request::{MergeError, MergeRequest};

/// Lays each input archive under the output by archive stem and overlays
/// the landing-page catalog on top. Reference re-linking and combined index
/// construction belong to the merge internals behind this seam; this
/// collaborator only moves bytes.
#[derive(Debug, Default)]
pub struct DirectoryCombiner;

impl ArchiveCombiner for DirectoryCombiner {
    fn combine(&self, plan: &MergePlan, request: &MergeRequest) -> Result<(), MergeError> {
        let output = &request.output_root;
        if !output.is_dir() {
            // Single level only: the validated request guarantees the parent
            // exists, and intermediate directories are never created.
            fs::create_dir(output).map_err(|err| copy_error(output, err))?;
        }

        for archive in &plan.archives {
            let stem = archive
                .root
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or("archive");
            info!(
                "Copying {} ({} symbols) into {}",
                archive.root.display(),
                archive.symbols.len(),
                stem
            );
            copy_tree(&archive.root, &output.join(stem))?;
        }

        if let Some(catalog) = &request.landing_page_catalog {
            info!("Overlaying landing-page catalog {}", catalog.display());
            copy_tree(catalog, output)?;
        }

        Ok(())
    }
}

fn copy_tree(source: &Path, target: &Path) -> Result<(), MergeError> {
    fs::create_dir_all(target).map_err(|err| copy_error(target, err))?;
    let entries = fs::read_dir(source).map_err(|err| copy_error(source, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| copy_error(source, err))?;
        let path = entry.path();
        let destination = target.join(entry.file_name());
        if path.is_dir() {
            copy_tree(&path, &destination)?;
        } else {
            fs::copy(&path, &destination).map_err(|err| copy_error(&path, err))?;
        }
    }
    Ok(())
}

fn copy_error(path: &Path, source: io::Error) -> MergeError {
    MergeError::Copy {
        path: path.to_path_buf(),
        source,
    }
}
