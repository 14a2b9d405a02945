pub mod document_path;
pub mod path_index;

pub use document_path::{DocumentPath, RESERVED_CHAR, RESERVED_REPLACEMENT};
pub use path_index::PathIndex;
