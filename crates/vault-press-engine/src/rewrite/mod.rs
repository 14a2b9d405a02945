//! # Document rewriting
//!
//! Turns vault markdown into publishable markdown. Stages run in a fixed
//! order, each consuming the previous stage's output:
//!
//! 1. [`comments`]: drop `%%...%%`
//! 2. [`links`]: `[[Target|Alias]]` to `[Alias](url)` or `**Target**`
//! 3. [`mermaid`]: fenced mermaid blocks to `<div class=mermaid>`
//! 4. [`callouts`]: `[!NOTE]` to a note glyph
//!
//! The result is then persisted under a colon-free path.

pub mod callouts;
pub mod comments;
pub mod links;
pub mod mermaid;

use crate::io::{self, IoError};
use crate::models::{DocumentPath, PathIndex};
use relative_path::RelativePathBuf;
use std::path::Path;

pub use links::{LinkOutcome, LinkResolution};
pub use mermaid::MERMAID_SCRIPT_SRC;

/// Shared, read-only inputs for rewriting every document of a run.
#[derive(Debug, Clone, Copy)]
pub struct RewriteContext<'a> {
    pub index: &'a PathIndex,
    pub url_base: &'a str,
    pub mermaid_script_src: &'a str,
}

impl<'a> RewriteContext<'a> {
    pub fn new(index: &'a PathIndex, url_base: &'a str) -> Self {
        Self {
            index,
            url_base,
            mermaid_script_src: MERMAID_SCRIPT_SRC,
        }
    }

    pub fn with_mermaid_script_src(mut self, src: &'a str) -> Self {
        self.mermaid_script_src = src;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenText {
    pub text: String,
    pub links: Vec<LinkResolution>,
}

/// Run the text stages of the pipeline. Pure; touches no files.
pub fn rewrite_text(text: &str, ctx: &RewriteContext<'_>) -> RewrittenText {
    let text = comments::strip_comments(text);
    let (text, links) = links::resolve_links(&text, ctx.index, ctx.url_base);
    let text = mermaid::replace_mermaid_blocks(&text, ctx.mermaid_script_src);
    let text = callouts::expand_callouts(&text).into_owned();
    RewrittenText { text, links }
}

/// A document after rewriting, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenDocument {
    pub source: DocumentPath,
    pub output: RelativePathBuf,
    pub text: String,
    pub links: Vec<LinkResolution>,
}

impl RewrittenDocument {
    pub fn is_renamed(&self) -> bool {
        self.source.relative_path() != self.output.as_relative_path()
    }

    pub fn resolved_links(&self) -> usize {
        self.links.iter().filter(|l| l.is_resolved()).count()
    }

    pub fn unresolved_links(&self) -> usize {
        self.links.len() - self.resolved_links()
    }

    pub fn persist(&self, vault_root: &Path) -> Result<(), IoError> {
        io::persist_document(&self.source, &self.output, vault_root, &self.text)
    }
}

/// Load a document and run it through the pipeline without writing it back.
pub fn prepare_document(
    document: &DocumentPath,
    vault_root: &Path,
    ctx: &RewriteContext<'_>,
) -> Result<RewrittenDocument, IoError> {
    let raw = io::read_document(document, vault_root)?;
    let RewrittenText { text, links } = rewrite_text(&raw, ctx);

    for link in links.iter().filter(|l| !l.is_resolved()) {
        log::warn!("{document}: unresolved link {}", link.raw);
    }

    Ok(RewrittenDocument {
        source: document.clone(),
        output: document.output_path(),
        text,
        links,
    })
}

/// Rewrite a document in place, renaming it if its path has a colon.
pub fn rewrite_document(
    document: &DocumentPath,
    vault_root: &Path,
    ctx: &RewriteContext<'_>,
) -> Result<RewrittenDocument, IoError> {
    let rewritten = prepare_document(document, vault_root, ctx)?;
    rewritten.persist(vault_root)?;
    Ok(rewritten)
}
