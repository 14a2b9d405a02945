//! Whole-vault run: index once, then rewrite every markdown document.

use crate::io::{self, IoError};
use crate::models::DocumentPath;
use crate::rewrite::{self, MERMAID_SCRIPT_SRC, RewriteContext, RewrittenDocument};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct PublishOptions {
    pub vault_root: PathBuf,
    pub url_base: String,
    /// Directory-name glob patterns that are neither indexed nor rewritten.
    pub excludes: Vec<String>,
    pub mermaid_script_src: String,
    /// Compute every rewrite without touching the disk.
    pub dry_run: bool,
}

impl PublishOptions {
    pub fn new(vault_root: impl Into<PathBuf>, url_base: impl Into<String>) -> Self {
        Self {
            vault_root: vault_root.into(),
            url_base: url_base.into(),
            excludes: Vec::new(),
            mermaid_script_src: MERMAID_SCRIPT_SRC.to_string(),
            dry_run: false,
        }
    }
}

#[derive(Debug)]
pub struct PublishFailure {
    pub document: DocumentPath,
    pub error: IoError,
}

#[derive(Debug, Default)]
pub struct PublishReport {
    pub published: Vec<RewrittenDocument>,
    /// Files that aren't markdown and were left as they are.
    pub skipped: Vec<DocumentPath>,
    pub failures: Vec<PublishFailure>,
}

impl PublishReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn unresolved_links(&self) -> usize {
        self.published
            .iter()
            .map(RewrittenDocument::unresolved_links)
            .sum()
    }
}

/// Publish a vault in place.
///
/// Failing to index the vault aborts the run before any file is touched.
/// After that, a document that can't be read or written is recorded in the
/// report and the run carries on with the next one.
pub fn publish(options: &PublishOptions) -> Result<PublishReport, IoError> {
    let excludes = io::compile_excludes(&options.excludes)?;
    let index = io::build_path_index(&options.vault_root, &excludes)?;
    let ctx = RewriteContext::new(&index, &options.url_base)
        .with_mermaid_script_src(&options.mermaid_script_src);

    log::info!(
        "Publishing {} files from {}",
        index.len(),
        options.vault_root.display()
    );

    let mut report = PublishReport::default();
    for document in &index {
        if !document.is_markdown() {
            log::debug!("Skipping {document}");
            report.skipped.push(document.clone());
            continue;
        }

        let result = if options.dry_run {
            rewrite::prepare_document(document, &options.vault_root, &ctx)
        } else {
            rewrite::rewrite_document(document, &options.vault_root, &ctx)
        };

        match result {
            Ok(rewritten) => report.published.push(rewritten),
            Err(error) => {
                log::warn!("Failed to publish {document}: {error}");
                report.failures.push(PublishFailure {
                    document: document.clone(),
                    error,
                });
            }
        }
    }

    log::info!(
        "Published {} documents ({} skipped, {} failed, {} unresolved links)",
        report.published.len(),
        report.skipped.len(),
        report.failures.len(),
        report.unresolved_links()
    );

    Ok(report)
}
