//! Template materialization
//!
//! This module provides:
//! - Filesystem primitives (`fs_ops`)
//! - Front-end manifest patching and the rename table (`manifest`)
//! - Python-side scaffold integration (`python`)
//! - The `materialize` driver that sequences them

pub mod fs_ops;
pub mod manifest;
pub mod python;

use anyhow::{Context, Result};
use std::path::Path;

pub use fs_ops::{copy, copy_dir, empty_dir, is_empty};
pub use manifest::patch_package_json;
pub use python::IntegrationError;

/// Outcome of a completed materialization
///
/// A scaffold that completes can still carry warnings from the best-effort
/// Python-side fixups; the caller decides how to surface them.
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub warnings: Vec<String>,
}

/// Materialize the chosen template into `root`.
///
/// Copies every top-level template entry except `package.json` (applying the
/// rename table), patches the manifest with the resolved package identifier,
/// then integrates the Python-side subtree. The subtree copy is fatal; the
/// placeholder rename and manifest render are best-effort and reported as
/// warnings. Already-written files are never rolled back.
pub async fn materialize(
    templates_root: &Path,
    template: &str,
    root: &Path,
    package_name: &str,
) -> Result<ScaffoldReport> {
    let template_dir = templates_root.join(format!("template-{template}"));

    tokio::fs::create_dir_all(root)
        .await
        .with_context(|| format!("Failed to create {}", root.display()))?;

    let mut entries = tokio::fs::read_dir(&template_dir)
        .await
        .with_context(|| format!("Failed to read template {}", template_dir.display()))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("Failed to read entry in {}", template_dir.display()))?
    {
        let file = entry.file_name();
        let file = file.to_string_lossy();
        if file == manifest::PACKAGE_JSON {
            continue;
        }
        manifest::write_entry(&template_dir, root, &file, None).await?;
    }

    manifest::patch_package_json(&template_dir, root, package_name).await?;

    let mut report = ScaffoldReport::default();

    python::copy_base(templates_root, root).await?;
    if let Err(e) = python::rename_package_dir(root, package_name).await {
        report
            .warnings
            .push(format!("Python package directory rename skipped: {e}"));
    }
    if let Err(e) = python::render_pyproject(root, package_name).await {
        report
            .warnings
            .push(format!("pyproject.toml rendering skipped: {e}"));
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tokio::fs;

    /// Lay out a minimal templates root with one front-end template and the
    /// shared Python scaffold
    async fn fixture_templates_root(tmp: &TempDir, template: &str) -> PathBuf {
        let templates_root = tmp.path().join("templates");
        let template_dir = templates_root.join(format!("template-{template}"));

        fs::create_dir_all(template_dir.join("src")).await.unwrap();
        fs::write(
            template_dir.join("package.json"),
            r#"{"name":"placeholder","version":"0.0.0","scripts":{"dev":"vite"}}"#,
        )
        .await
        .unwrap();
        fs::write(template_dir.join("_gitignore"), "node_modules\ndist\n")
            .await
            .unwrap();
        fs::write(template_dir.join("index.html"), "<!doctype html>\n")
            .await
            .unwrap();
        fs::write(template_dir.join("src/main.ts"), "export {}\n")
            .await
            .unwrap();

        let python_src = templates_root.join("_base_/src-python");
        fs::create_dir_all(python_src.join("src/{{packageName}}"))
            .await
            .unwrap();
        fs::write(python_src.join("src/{{packageName}}/__init__.py"), "")
            .await
            .unwrap();
        fs::write(
            python_src.join("pyproject.toml"),
            "[project]\nname = \"{{ project_name }}\"\n",
        )
        .await
        .unwrap();

        templates_root
    }

    #[tokio::test]
    async fn test_materialize_produces_complete_project() {
        let tmp = TempDir::new().unwrap();
        let templates_root = fixture_templates_root(&tmp, "vue-ts").await;
        let root = tmp.path().join("my-app");

        let report = materialize(&templates_root, "vue-ts", &root, "my-app")
            .await
            .unwrap();
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);

        // Manifest patched with the resolved identifier
        let pkg = fs::read_to_string(root.join("package.json")).await.unwrap();
        let pkg: serde_json::Value = serde_json::from_str(&pkg).unwrap();
        assert_eq!(pkg["name"], "my-app");
        assert_eq!(pkg["version"], "0.0.0");

        // Dotfile stand-in renamed on write
        assert!(root.join(".gitignore").exists());
        assert!(!root.join("_gitignore").exists());

        // Verbatim entries copied
        assert!(root.join("index.html").exists());
        assert!(root.join("src/main.ts").exists());

        // Python subtree integrated under the fixed nested path
        let python_dir = root.join("src-tauri/src-python");
        assert!(python_dir.join("src/my-app/__init__.py").exists());
        assert!(!python_dir.join("src/{{packageName}}").exists());
        let pyproject = fs::read_to_string(python_dir.join("pyproject.toml"))
            .await
            .unwrap();
        assert_eq!(pyproject, "[project]\nname = \"my-app\"\n");
    }

    #[tokio::test]
    async fn test_materialize_missing_placeholder_is_soft() {
        let tmp = TempDir::new().unwrap();
        let templates_root = fixture_templates_root(&tmp, "react").await;
        fs::remove_dir_all(templates_root.join("_base_/src-python/src/{{packageName}}"))
            .await
            .unwrap();
        let root = tmp.path().join("my-app");

        let report = materialize(&templates_root, "react", &root, "my-app")
            .await
            .unwrap();

        // Scaffold completed, warning surfaced, front end intact
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("rename skipped"));
        assert!(root.join("package.json").exists());
        let pyproject = fs::read_to_string(root.join("src-tauri/src-python/pyproject.toml"))
            .await
            .unwrap();
        assert_eq!(pyproject, "[project]\nname = \"my-app\"\n");
    }

    #[tokio::test]
    async fn test_materialize_unknown_template_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let templates_root = fixture_templates_root(&tmp, "vue-ts").await;
        let root = tmp.path().join("my-app");

        let err = materialize(&templates_root, "missing", &root, "my-app")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("template-missing"));
    }
}
