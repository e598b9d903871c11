//! Front-end manifest patching and the copy-or-write indirection
//!
//! The primary template copy routes every top-level entry through
//! [`write_entry`] so the one file whose content is computed rather than
//! copied verbatim (`package.json`) needs no special case in the copy loop.

use super::fs_ops;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Manifest file handled by the patcher instead of the plain copy loop
pub const PACKAGE_JSON: &str = "package.json";

/// Template filenames that cannot ship literally, mapped to their real
/// on-disk names. Applies only at the top level of the primary copy.
const RENAME_FILES: &[(&str, &str)] = &[("_gitignore", ".gitignore")];

/// Resolve a template filename to its on-disk name
pub fn target_name(file: &str) -> &str {
    RENAME_FILES
        .iter()
        .find(|(from, _)| *from == file)
        .map(|(_, to)| *to)
        .unwrap_or(file)
}

/// Write one top-level template entry into the project root.
///
/// With `content` supplied the bytes are written at the renamed path;
/// otherwise the like-named entry is copied from the template directory.
pub async fn write_entry(
    template_dir: &Path,
    root: &Path,
    file: &str,
    content: Option<&str>,
) -> Result<()> {
    let target_path = root.join(target_name(file));
    match content {
        Some(content) => fs::write(&target_path, content)
            .await
            .with_context(|| format!("Failed to write {}", target_path.display())),
        None => fs_ops::copy(&template_dir.join(file), &target_path).await,
    }
}

/// Read the template's `package.json`, overwrite its `name` field with the
/// resolved package identifier, and write it into the project root with
/// stable 2-space indentation and a single trailing newline.
///
/// Malformed JSON in the template is fatal; template contents are the
/// template author's responsibility.
pub async fn patch_package_json(
    template_dir: &Path,
    root: &Path,
    package_name: &str,
) -> Result<()> {
    let manifest_path = template_dir.join(PACKAGE_JSON);
    let raw = fs::read_to_string(&manifest_path)
        .await
        .with_context(|| format!("Failed to read {}", manifest_path.display()))?;

    let mut pkg: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;
    pkg.as_object_mut()
        .with_context(|| format!("{} is not a JSON object", manifest_path.display()))?
        .insert(
            "name".to_string(),
            serde_json::Value::String(package_name.to_string()),
        );

    let rendered = serde_json::to_string_pretty(&pkg).context("Failed to serialize manifest")?;
    write_entry(template_dir, root, PACKAGE_JSON, Some(&format!("{rendered}\n"))).await
}
