//! Interactive scaffolding pipeline
//!
//! A linear sequence of prompt steps, each either resolved from a
//! non-interactive flag or from a cliclack prompt. Every step returns
//! `Result<Option<T>>`; `None` means the user cancelled, and the driver
//! exits through a single cancellation path. cliclack reports cancellation
//! as `io::ErrorKind::Interrupted`, which is mapped to the `None` sentinel
//! here so the pipeline never nests cancellation conditionals.

use crate::catalog;
use crate::naming;
use crate::pkg_manager::{self, PkgInfo};
use crate::scaffold;
use crate::DEFAULT_TARGET_DIR;
use anyhow::{Context, Result};
use std::io;
use std::path::{Path, PathBuf};

/// CLI arguments for the scaffolding run
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Target directory from the positional argument
    pub directory: Option<String>,

    /// Template identifier from `--template`
    pub template: Option<String>,

    /// Skip the overwrite prompt and empty a non-empty target directory
    pub overwrite: bool,

    /// Templates root override (development use); defaults to the
    /// `templates` directory next to the executable
    pub template_dir: Option<PathBuf>,
}

/// Map a prompt result to the cancellation sentinel
fn flatten_cancel<T>(result: io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Terminal state for a cancelled run
fn cancelled() -> Result<()> {
    cliclack::outro_cancel("Operation cancelled")?;
    Ok(())
}

/// Run the scaffolding pipeline with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("create-pytauri")?;

    let user_agent = std::env::var("npm_config_user_agent").ok();
    let pkg_info = pkg_manager::pkg_from_user_agent(user_agent.as_deref());

    // 1. Get project name and target dir
    let Some(target_dir) = resolve_target_dir(&args)? else {
        return cancelled();
    };

    // 2. Handle directory if it exists and is not empty
    let Some(()) = resolve_overwrite(&target_dir, args.overwrite).await? else {
        return cancelled();
    };

    // 3. Get package name
    let Some(package_name) = resolve_package_name(&target_dir)? else {
        return cancelled();
    };

    // 4. Choose a framework and variant
    let Some(template) = resolve_template(args.template.as_deref(), pkg_info.as_ref())? else {
        return cancelled();
    };

    // 5. Materialize the template
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let root = cwd.join(&target_dir);

    cliclack::log::step(format!("Scaffolding project in {}...", root.display()))?;

    let templates_root = resolve_templates_root(args.template_dir);
    let report = scaffold::materialize(&templates_root, template, &root, &package_name).await?;
    for warning in &report.warnings {
        cliclack::log::warning(warning)?;
    }

    // 6. Show next steps
    print_done(&root, &cwd, pkg_manager::pkg_manager_name(pkg_info.as_ref()))
}

fn resolve_target_dir(args: &CreateArgs) -> Result<Option<String>> {
    if let Some(dir) = &args.directory {
        return Ok(Some(naming::format_target_dir(dir)));
    }

    let result = cliclack::input("Project name:")
        .placeholder(DEFAULT_TARGET_DIR)
        .default_input(DEFAULT_TARGET_DIR)
        .interact::<String>();

    Ok(flatten_cancel(result)?.map(|name| naming::format_target_dir(&name)))
}

async fn resolve_overwrite(target_dir: &str, overwrite_flag: bool) -> Result<Option<()>> {
    let path = Path::new(target_dir);
    let exists = tokio::fs::try_exists(path).await.unwrap_or(false);
    if !exists || scaffold::is_empty(path).await? {
        return Ok(Some(()));
    }

    let choice = if overwrite_flag {
        "yes"
    } else {
        let subject = if target_dir == "." {
            "Current directory".to_string()
        } else {
            format!("Target directory \"{target_dir}\"")
        };
        let result = cliclack::select(format!(
            "{subject} is not empty. Please choose how to proceed:"
        ))
        .item("no", "Cancel operation", "")
        .item("yes", "Remove existing files and continue", "")
        .item("ignore", "Ignore files and continue", "")
        .interact();

        match flatten_cancel(result)? {
            Some(choice) => choice,
            None => return Ok(None),
        }
    };

    match choice {
        "yes" => {
            scaffold::empty_dir(path).await?;
            Ok(Some(()))
        }
        "no" => Ok(None),
        _ => Ok(Some(())),
    }
}

fn resolve_package_name(target_dir: &str) -> Result<Option<String>> {
    let resolved = std::env::current_dir()
        .context("Failed to resolve current directory")?
        .join(target_dir);
    let basename = resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_TARGET_DIR.to_string());

    if naming::is_valid_package_name(&basename) {
        return Ok(Some(basename));
    }

    let suggested = naming::suggest_package_name(&basename);
    let result = cliclack::input("Package name:")
        .placeholder(&suggested)
        .default_input(&suggested)
        .validate(|input: &String| {
            if naming::is_valid_package_name(input) {
                Ok(())
            } else {
                Err("Invalid package.json name")
            }
        })
        .interact::<String>();

    flatten_cancel(result)
}

/// Framework prompt header; names the rejected value when an invalid
/// `--template` redirected the user here
fn framework_prompt_message(invalid_arg: Option<&str>) -> String {
    match invalid_arg {
        Some(bad) => format!("\"{bad}\" isn't a valid template. Please choose from below: "),
        None => "Select a framework:".to_string(),
    }
}

fn resolve_template(
    arg_template: Option<&str>,
    pkg_info: Option<&PkgInfo>,
) -> Result<Option<&'static str>> {
    let mut invalid_arg = None;
    if let Some(requested) = arg_template {
        if let Some(variant) = catalog::FRAMEWORKS
            .iter()
            .flat_map(|f| f.variants)
            .find(|v| v.name == requested)
        {
            return Ok(Some(variant.name));
        }
        invalid_arg = Some(requested);
    }

    // Select by index to keep the static tables borrow-friendly
    let mut select = cliclack::select(framework_prompt_message(invalid_arg));
    for (idx, framework) in catalog::FRAMEWORKS.iter().enumerate() {
        select = select.item(idx, framework.label(), "");
    }
    let Some(framework_idx) = flatten_cancel(select.interact())? else {
        return Ok(None);
    };
    let framework = &catalog::FRAMEWORKS[framework_idx];

    let mut select = cliclack::select("Select a variant:");
    for (idx, variant) in framework.variants.iter().enumerate() {
        let hint = variant
            .custom_command
            .map(|command| {
                pkg_manager::full_custom_command(command, pkg_info)
                    .trim_end_matches(" TARGET_DIR")
                    .to_string()
            })
            .unwrap_or_default();
        select = select.item(idx, variant.label(), hint);
    }
    let Some(variant_idx) = flatten_cancel(select.interact())? else {
        return Ok(None);
    };

    Ok(Some(framework.variants[variant_idx].name))
}

/// Resolve the templates root: explicit override, else the `templates`
/// directory shipped next to the executable, else the working directory
fn resolve_templates_root(override_dir: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir;
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("templates")))
        .filter(|dir| dir.exists())
        .unwrap_or_else(|| PathBuf::from("templates"))
}

fn print_done(root: &Path, cwd: &Path, pkg_manager: &str) -> Result<()> {
    let mut message = String::from("Done. Now run:\n");

    if root != cwd {
        let cd_path = root.strip_prefix(cwd).unwrap_or(root);
        let cd_path = cd_path.display().to_string();
        if cd_path.contains(' ') {
            message.push_str(&format!("\n  cd \"{cd_path}\""));
        } else {
            message.push_str(&format!("\n  cd {cd_path}"));
        }
    }
    message.push_str(&format!("\n  {pkg_manager} install"));
    message.push_str(&format!("\n  {pkg_manager} run dev"));

    cliclack::outro(message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_cancel_maps_interrupted_to_sentinel() {
        assert_eq!(flatten_cancel(Ok(1)).unwrap(), Some(1));

        let cancelled: io::Result<i32> = Err(io::Error::new(io::ErrorKind::Interrupted, "esc"));
        assert_eq!(flatten_cancel(cancelled).unwrap(), None);

        let failed: io::Result<i32> = Err(io::Error::new(io::ErrorKind::Other, "boom"));
        assert!(flatten_cancel(failed).is_err());
    }

    #[test]
    fn test_framework_prompt_names_invalid_template() {
        let message = framework_prompt_message(Some("foo"));
        assert!(message.contains("\"foo\""));
        assert!(message.contains("isn't a valid template"));
        assert_eq!(framework_prompt_message(None), "Select a framework:");
    }

    #[test]
    fn test_resolve_templates_root_honors_override() {
        let dir = PathBuf::from("/tmp/custom-templates");
        assert_eq!(resolve_templates_root(Some(dir.clone())), dir);
    }

    #[tokio::test]
    async fn test_overwrite_resolves_silently_for_missing_or_empty_target() {
        let tmp = tempfile::TempDir::new().unwrap();

        let missing = tmp.path().join("missing").display().to_string();
        assert!(resolve_overwrite(&missing, false).await.unwrap().is_some());

        let empty = tmp.path().display().to_string();
        assert!(resolve_overwrite(&empty, false).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_overwrite_flag_empties_target_without_prompting() {
        let tmp = tempfile::TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("stale.txt"), "x")
            .await
            .unwrap();
        tokio::fs::create_dir(tmp.path().join(".git")).await.unwrap();

        let target = tmp.path().display().to_string();
        assert!(resolve_overwrite(&target, true).await.unwrap().is_some());

        assert!(!tmp.path().join("stale.txt").exists());
        assert!(tmp.path().join(".git").exists());
    }
}
