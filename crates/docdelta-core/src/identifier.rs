//! Canonical symbol identity

use std::fmt;

use serde::Deserialize;
use url::Url;

/// Path segment that anchors the documentation hierarchy inside an archive.
pub const DOCUMENTATION_SEGMENT: &str = "documentation";

/// Canonical address of one documented symbol.
///
/// Equality and hashing are structural: scheme, host, path, and query are all
/// significant, so two manifests describe the same symbol exactly when their
/// identifier URLs match byte for byte. This is the comparison key shared by
/// the differ and the merge coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct SymbolIdentifier(Url);

impl SymbolIdentifier {
    /// Parse an identifier from its string form.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(SymbolIdentifier)
    }

    /// The underlying URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Absolute string form.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Rewrite into a `doc:` reference resolvable outside the archive.
    ///
    /// Every path segment before the first `documentation` segment is
    /// dropped; the reference keeps that segment and everything after it,
    /// each with a trailing `/`. A URL without the segment (including
    /// cannot-be-a-base forms like an already rewritten reference) comes back
    /// as its unchanged absolute string, so rewriting is idempotent.
    pub fn doc_link(&self) -> String {
        let Some(segments) = self.0.path_segments() else {
            return self.0.as_str().to_owned();
        };
        let mut tail = segments
            .skip_while(|segment| *segment != DOCUMENTATION_SEGMENT)
            .peekable();
        if tail.peek().is_none() {
            return self.0.as_str().to_owned();
        }
        let mut link = String::from("doc:");
        for segment in tail {
            link.push_str(segment);
            link.push('/');
        }
        link
    }
}

impl fmt::Display for SymbolIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<Url> for SymbolIdentifier {
    fn from(url: Url) -> Self {
        SymbolIdentifier(url)
    }
}
