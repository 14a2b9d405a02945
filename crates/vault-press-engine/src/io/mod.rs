use crate::models::{DocumentPath, PathIndex};
use glob::Pattern;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Vault directory not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    fn write(path: &Path, source: std::io::Error) -> Self {
        IoError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub fn validate_vault_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Compile exclude patterns. Each pattern is matched against single
/// directory names, so `_site` skips every `_site` folder in the vault.
pub fn compile_excludes<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Pattern>, IoError> {
    patterns
        .iter()
        .map(|p| {
            let pattern = p.as_ref();
            Pattern::new(pattern).map_err(|source| IoError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
        })
        .collect()
}

/// Enumerate every file under the vault root into a [`PathIndex`].
///
/// Directory entries are visited in ascending name order; directories whose
/// name matches an exclude pattern are skipped entirely.
pub fn build_path_index(vault_root: &Path, excludes: &[Pattern]) -> Result<PathIndex, IoError> {
    validate_vault_dir(vault_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(vault_root, RelativePath::new(""), excludes, &mut files)?;
    log::debug!(
        "Indexed {} files under {}",
        files.len(),
        vault_root.display()
    );
    Ok(PathIndex::from_paths(files))
}

fn scan_directory_recursive(
    dir: &Path,
    relative_dir: &RelativePath,
    excludes: &[Pattern],
    files: &mut Vec<DocumentPath>,
) -> Result<(), IoError> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            log::warn!("Skipping non UTF-8 path {}", path.display());
            continue;
        };
        let relative = relative_dir.join(name);
        let file_type = entry.file_type()?;

        // Symlinked directories are never descended into.
        if file_type.is_symlink() && path.is_dir() {
            log::debug!("Not following directory symlink {relative}");
            continue;
        }

        if file_type.is_dir() {
            if excludes.iter().any(|pattern| pattern.matches(name)) {
                log::debug!("Excluding directory {relative}");
                continue;
            }
            scan_directory_recursive(&path, &relative, excludes, files)?;
        } else {
            files.push(DocumentPath::new(relative));
        }
    }

    Ok(())
}

/// Read a document's full text
pub fn read_document(document: &DocumentPath, vault_root: &Path) -> Result<String, IoError> {
    let absolute_path = document.to_path(vault_root);
    log::debug!("Reading {}", absolute_path.display());
    fs::read_to_string(&absolute_path).map_err(|source| IoError::Read {
        path: absolute_path,
        source,
    })
}

/// Store a rewritten document under `output`, then drop the source if the
/// document was renamed.
///
/// Content goes to a temp file next to the destination, which is renamed
/// into place once fully written, so a failed write never loses the source.
/// A rename never overwrites a different existing file.
pub fn persist_document(
    source: &DocumentPath,
    output: &RelativePathBuf,
    vault_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let source_path = source.to_path(vault_root);
    let target_path = output.to_path(vault_root);
    let renamed = source.relative_path() != output.as_relative_path();

    let parent = target_path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| vault_root.to_path_buf());
    fs::create_dir_all(&parent).map_err(|e| IoError::write(&target_path, e))?;

    let mut temp = NamedTempFile::new_in(&parent).map_err(|e| IoError::write(&target_path, e))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| IoError::write(&target_path, e))?;

    // Temp files are created owner-only; keep the source's permissions.
    if let Ok(metadata) = fs::metadata(&source_path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| IoError::write(&target_path, e))?;
    }

    if renamed {
        temp.persist_noclobber(&target_path)
            .map_err(|e| IoError::write(&target_path, e.error))?;
        fs::remove_file(&source_path).map_err(|e| IoError::write(&source_path, e))?;
        remove_empty_parents(source.relative_path(), vault_root);
        log::debug!("Renamed {source} to {output}");
    } else {
        temp.persist(&target_path)
            .map_err(|e| IoError::write(&target_path, e.error))?;
        log::debug!("Rewrote {source}");
    }

    Ok(())
}

/// Remove the folders a renamed document left empty, stopping at the first
/// one that still has entries and never touching the vault root.
fn remove_empty_parents(source: &RelativePath, vault_root: &Path) {
    let mut dir = source.parent();
    while let Some(relative) = dir {
        if relative.as_str().is_empty() {
            break;
        }
        let absolute = relative.to_path(vault_root);
        let is_empty = fs::read_dir(&absolute)
            .map(|mut entries| entries.next().is_none())
            .unwrap_or(false);
        if !is_empty {
            break;
        }
        if let Err(e) = fs::remove_dir(&absolute) {
            log::warn!("Failed to remove empty folder {relative}: {e}");
            break;
        }
        log::debug!("Removed empty folder {relative}");
        dir = relative.parent();
    }
}
