//! Filesystem primitives for template materialization
//!
//! `.git` is special-cased throughout: it never counts against a directory's
//! emptiness and is never removed by [`empty_dir`].

use anyhow::{Context, Result};
use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use tokio::fs;

/// Copy a single file or, when `src` is a directory, its whole tree
pub async fn copy(src: &Path, dest: &Path) -> Result<()> {
    let metadata = fs::metadata(src)
        .await
        .with_context(|| format!("Failed to stat {}", src.display()))?;

    if metadata.is_dir() {
        copy_dir(src, dest).await
    } else {
        fs::copy(src, dest)
            .await
            .with_context(|| format!("Failed to copy {} to {}", src.display(), dest.display()))?;
        Ok(())
    }
}

/// Recursively copy `src_dir` into `dest_dir`, creating it (and any missing
/// ancestors) first. File contents are copied byte-for-byte.
pub fn copy_dir<'a>(
    src_dir: &'a Path,
    dest_dir: &'a Path,
) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
    Box::pin(async move {
        fs::create_dir_all(dest_dir)
            .await
            .with_context(|| format!("Failed to create directory {}", dest_dir.display()))?;

        let mut entries = fs::read_dir(src_dir)
            .await
            .with_context(|| format!("Failed to read directory {}", src_dir.display()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .with_context(|| format!("Failed to read entry in {}", src_dir.display()))?
        {
            let dest = dest_dir.join(entry.file_name());
            copy(&entry.path(), &dest).await?;
        }

        Ok(())
    })
}

/// True when the directory has zero entries, or exactly one entry named `.git`
pub async fn is_empty(dir: &Path) -> Result<bool> {
    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut count = 0usize;
    let mut only_git = true;
    while let Some(entry) = entries.next_entry().await? {
        count += 1;
        if entry.file_name() != ".git" {
            only_git = false;
        }
    }

    Ok(count == 0 || (count == 1 && only_git))
}

/// Remove every entry of `dir` except `.git`, recursively. Calling this on a
/// directory that does not exist is a no-op.
pub async fn empty_dir(dir: &Path) -> Result<()> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        return Ok(());
    }

    let mut entries = fs::read_dir(dir)
        .await
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        if entry.file_name() == ".git" {
            continue;
        }

        let path = entry.path();
        let file_type = entry
            .file_type()
            .await
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        if file_type.is_dir() {
            fs::remove_dir_all(&path)
                .await
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        } else {
            fs::remove_file(&path)
                .await
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }

    Ok(())
}
