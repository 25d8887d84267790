//! CLI command implementations

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use docdelta_indexer::{collect_symbols, framework_name};
use docdelta_merge::{DirectoryCombiner, MergeRequest};

use crate::report;

/// Name used when neither archive reveals what it documents.
const FALLBACK_FRAMEWORK_NAME: &str = "Framework";

pub fn diff(
    old_archive: PathBuf,
    new_archive: PathBuf,
    old_version: String,
    new_version: String,
) -> anyhow::Result<()> {
    tracing::info!(
        "Comparing {} to {}",
        old_archive.display(),
        new_archive.display()
    );

    // The two walks never share state, so they run on separate threads.
    let (old_symbols, new_symbols) = rayon::join(
        || collect_symbols(&old_archive),
        || collect_symbols(&new_archive),
    );
    let old_symbols =
        old_symbols.with_context(|| format!("indexing {}", old_archive.display()))?;
    let new_symbols =
        new_symbols.with_context(|| format!("indexing {}", new_archive.display()))?;

    tracing::info!(
        "Indexed {} old symbols, {} new symbols",
        old_symbols.len(),
        new_symbols.len()
    );

    let changes = docdelta_core::diff(&old_symbols, &new_symbols);

    // Older archive names the report; the newer one is the fallback, then a
    // fixed placeholder.
    let framework = framework_name(&old_archive)
        .or_else(|| framework_name(&new_archive))
        .unwrap_or_else(|| FALLBACK_FRAMEWORK_NAME.to_string());

    let changelog = report::render_changelog(&framework, &old_version, &new_version, &changes);
    let path = changelog_path(&old_archive, &framework);
    fs::write(&path, changelog).with_context(|| format!("writing {}", path.display()))?;

    tracing::info!(
        "Wrote {} ({} additions, {} removals)",
        path.display(),
        changes.additions.len(),
        changes.removals.len()
    );

    Ok(())
}

/// The changelog lands beside the older archive.
fn changelog_path(old_archive: &Path, framework: &str) -> PathBuf {
    let file_name = format!("{framework}_ChangeLog.md");
    match old_archive.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(file_name),
        _ => PathBuf::from(file_name),
    }
}

pub fn merge(
    archives: Vec<PathBuf>,
    catalog: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let output_root = output.unwrap_or_else(|| default_output(&archives));
    tracing::info!(
        "Combining {} archive(s) into {}",
        archives.len(),
        output_root.display()
    );

    let request = MergeRequest {
        archives,
        landing_page_catalog: catalog,
        output_root,
    };
    docdelta_merge::merge(&request, &DirectoryCombiner)?;

    tracing::info!("Combined archive ready");
    Ok(())
}

fn default_output(archives: &[PathBuf]) -> PathBuf {
    let beside = archives
        .first()
        .and_then(|archive| archive.parent())
        .unwrap_or(Path::new(""));
    beside.join("Combined.docarchive")
}
