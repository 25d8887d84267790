//! Per-symbol manifest decoding

use docdelta_core::SymbolIdentifier;
use serde::Deserialize;

/// File-name suffix that marks a rendered manifest.
pub const MANIFEST_SUFFIX: &str = ".json";

/// The one slice of a manifest this tool reads. Everything else in the file
/// is ignored.
#[derive(Debug, Deserialize)]
struct SymbolManifest {
    identifier: ManifestIdentifier,
}

#[derive(Debug, Deserialize)]
struct ManifestIdentifier {
    url: SymbolIdentifier,
}

/// Decode a manifest's symbol identifier.
///
/// An error here means "this file does not describe a symbol", not
/// "something went wrong": archives legitimately contain manifests without
/// an identifier, so the traversal layer maps these to no contribution.
pub fn decode(bytes: &[u8]) -> Result<SymbolIdentifier, serde_json::Error> {
    serde_json::from_slice::<SymbolManifest>(bytes).map(|manifest| manifest.identifier.url)
}
