//! Merge request validation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extension a documentation archive directory carries.
pub const ARCHIVE_EXTENSION: &str = "docarchive";

/// Inputs for combining several archives into one output tree.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    /// Archives to combine, in caller order. Never empty once validated.
    pub archives: Vec<PathBuf>,
    /// Optional content root supplying the combined landing page.
    pub landing_page_catalog: Option<PathBuf>,
    /// Where the combined archive is written. The parent directory must
    /// already exist; intermediate directories are never created.
    pub output_root: PathBuf,
}

/// User-facing failures of the merge pipeline.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("no input archives were provided")]
    NoArchives,
    #[error("{} does not have the .{ARCHIVE_EXTENSION} extension", .0.display())]
    NotAnArchive(PathBuf),
    #[error("archive {} does not exist", .0.display())]
    MissingArchive(PathBuf),
    #[error("landing-page catalog {} does not exist", .0.display())]
    MissingCatalog(PathBuf),
    #[error("parent directory of output {} does not exist", .0.display())]
    MissingOutputParent(PathBuf),
    #[error("failed to index archive {}", .path.display())]
    Index {
        path: PathBuf,
        #[source]
        source: docdelta_indexer::IndexError,
    },
    #[error("failed to copy {} into the combined archive", .path.display())]
    Copy {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MergeRequest {
    /// Check every precondition. Runs before any filesystem mutation so a
    /// rejected request leaves no partial output behind.
    pub fn validate(&self) -> Result<(), MergeError> {
        if self.archives.is_empty() {
            return Err(MergeError::NoArchives);
        }
        for archive in &self.archives {
            if archive.extension().and_then(|ext| ext.to_str()) != Some(ARCHIVE_EXTENSION) {
                return Err(MergeError::NotAnArchive(archive.clone()));
            }
            if !archive.is_dir() {
                return Err(MergeError::MissingArchive(archive.clone()));
            }
        }
        if let Some(catalog) = &self.landing_page_catalog {
            if !catalog.exists() {
                return Err(MergeError::MissingCatalog(catalog.clone()));
            }
        }
        let parent = self.output_root.parent().unwrap_or(Path::new(""));
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(MergeError::MissingOutputParent(self.output_root.clone()));
        }
        Ok(())
    }
}
