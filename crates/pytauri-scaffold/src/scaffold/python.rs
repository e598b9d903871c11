//! Python-side scaffold integration
//!
//! The generated project embeds a Python package under
//! `src-tauri/src-python`. After the subtree is copied, two best-effort
//! fixups propagate the resolved package identifier into it: the placeholder
//! package directory is renamed, and `pyproject.toml` is rendered through
//! the template engine. Either fixup can fail without aborting the scaffold;
//! the caller collects the typed reasons and surfaces them as warnings.

use super::fs_ops;
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Template-side location of the Python scaffold, relative to the templates root
pub const PYTHON_TEMPLATE_SUBDIR: &[&str] = &["_base_", "src-python"];

/// Project-side location of the Python scaffold, relative to the project root
pub const PYTHON_PROJECT_SUBDIR: &[&str] = &["src-tauri", "src-python"];

/// Literal name of the placeholder package directory inside the template
pub const PLACEHOLDER_DIR: &str = "{{packageName}}";

/// Manifest rendered with the resolved package identifier
pub const PYPROJECT_TOML: &str = "pyproject.toml";

/// Reasons the best-effort fixups can fail
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("placeholder directory does not exist: {}", .0.display())]
    MissingPlaceholder(PathBuf),

    #[error("rename target already exists: {}", .0.display())]
    DestinationExists(PathBuf),

    #[error("failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        source: tera::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Resolve the Python scaffold directory inside a generated project
pub fn python_root(project_root: &Path) -> PathBuf {
    PYTHON_PROJECT_SUBDIR
        .iter()
        .fold(project_root.to_path_buf(), |p, seg| p.join(seg))
}

/// Copy the Python scaffold subtree into the generated project.
///
/// Unlike the fixups below this is part of primary materialization and any
/// failure is fatal.
pub async fn copy_base(templates_root: &Path, project_root: &Path) -> Result<()> {
    let src = PYTHON_TEMPLATE_SUBDIR
        .iter()
        .fold(templates_root.to_path_buf(), |p, seg| p.join(seg));
    fs_ops::copy_dir(&src, &python_root(project_root)).await
}

/// Rename the placeholder package directory to the resolved identifier.
///
/// Attempted only when the placeholder exists and the destination does not;
/// otherwise the tree is left unchanged and the reason is returned.
pub async fn rename_package_dir(
    project_root: &Path,
    package_name: &str,
) -> Result<(), IntegrationError> {
    let src_dir = python_root(project_root).join("src");
    let placeholder = src_dir.join(PLACEHOLDER_DIR);
    let destination = src_dir.join(package_name);

    if !fs::try_exists(&placeholder).await? {
        return Err(IntegrationError::MissingPlaceholder(placeholder));
    }
    if fs::try_exists(&destination).await? {
        return Err(IntegrationError::DestinationExists(destination));
    }

    fs::rename(&placeholder, &destination).await?;
    Ok(())
}

/// Render a text template with variable substitution only
fn render(template: &str, context: &[(&str, &str)]) -> Result<String, tera::Error> {
    let mut ctx = tera::Context::new();
    for (key, value) in context {
        ctx.insert(*key, value);
    }
    tera::Tera::one_off(template, &ctx, false)
}

/// Render the copied `pyproject.toml` in place, substituting the resolved
/// package identifier for every `project_name` expression
pub async fn render_pyproject(
    project_root: &Path,
    package_name: &str,
) -> Result<(), IntegrationError> {
    let path = python_root(project_root).join(PYPROJECT_TOML);
    let raw = fs::read_to_string(&path).await?;

    let rendered = render(&raw, &[("project_name", package_name)])
        .map_err(|source| IntegrationError::Render {
            path: path.clone(),
            source,
        })?;

    fs::write(&path, rendered).await?;
    Ok(())
}
