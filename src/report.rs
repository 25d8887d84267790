//! Changelog markdown assembly

use docdelta_core::{SymbolDiff, SymbolIdentifier};

/// Render the full changelog document for a computed diff.
///
/// The shape is fixed: front matter, an overview naming the compared
/// snapshots, then one link bullet per differing symbol. Links come straight
/// from the identifier rewrite, so both `doc:` references and absolute URLs
/// can appear.
pub fn render_changelog(
    framework: &str,
    old_version: &str,
    new_version: &str,
    diff: &SymbolDiff,
) -> String {
    let mut doc = String::new();
    doc.push_str(&format!("# `{framework}` Updates\n\n"));
    doc.push_str("@Metadata {\n    @TechnologyRoot\n}\n\n");
    doc.push_str("Symbols added and removed between archive snapshots.\n\n");
    doc.push_str("## Overview\n\n");
    doc.push_str(&format!(
        "This changelog compares the {old_version} and {new_version} snapshots of `{framework}`.\n"
    ));
    push_section(&mut doc, "Additions", &diff.additions);
    push_section(&mut doc, "Removals", &diff.removals);
    doc
}

fn push_section(doc: &mut String, title: &str, symbols: &[SymbolIdentifier]) {
    doc.push_str(&format!("\n### {title}\n\n"));
    for symbol in symbols {
        doc.push_str(&format!("- <{}>\n", symbol.doc_link()));
    }
}
