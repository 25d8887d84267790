//! Best-effort archive naming

use std::ffi::OsStr;
use std::path::{Component, Path};

use docdelta_core::DOCUMENTATION_SEGMENT;

use crate::walk;

/// Logical name of the module an archive documents.
///
/// Scans manifest paths in traversal order and returns the component right
/// after the first `documentation` component found. Best effort throughout:
/// an unreadable root, a mid-walk fault, or a tree without the marker all
/// come back as `None`. Callers own the fallback chain.
pub fn framework_name(root: &Path) -> Option<String> {
    let entries = walk::enumerate(root)?;
    for entry in entries {
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_some_and(|ty| ty.is_file()) {
            continue;
        }
        if !walk::is_manifest_path(entry.path()) {
            continue;
        }
        if let Some(name) = component_after_marker(entry.path()) {
            return Some(name);
        }
    }
    None
}

fn component_after_marker(path: &Path) -> Option<String> {
    let mut components = path.components();
    while let Some(component) = components.next() {
        let Component::Normal(name) = component else {
            continue;
        };
        if name != OsStr::new(DOCUMENTATION_SEGMENT) {
            continue;
        }
        return match components.next() {
            Some(Component::Normal(next)) => Some(next.to_string_lossy().into_owned()),
            _ => None,
        };
    }
    None
}
