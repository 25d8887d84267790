//! Archive traversal and manifest decoding

pub mod framework;
pub mod manifest;
pub mod walk;


pub use framework::framework_name;
pub use manifest::MANIFEST_SUFFIX;
pub use walk::{IndexError, SymbolWalk, collect_symbols, symbol_identifiers};
