pub mod io;
pub mod models;
pub mod parsing;
pub mod publish;
pub mod rewrite;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::IoError;
pub use models::{DocumentPath, PathIndex};
pub use publish::{PublishFailure, PublishOptions, PublishReport, publish};
pub use rewrite::{
    LinkOutcome, LinkResolution, MERMAID_SCRIPT_SRC, RewriteContext, RewrittenDocument,
    RewrittenText, prepare_document, rewrite_document, rewrite_text,
};
