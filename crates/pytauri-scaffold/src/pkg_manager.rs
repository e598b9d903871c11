//! Package-manager detection for displayed commands
//!
//! Only consulted for display text (next-step instructions and variant
//! hints); materialization never depends on which manager invoked the tool.

/// Package manager inferred from the install-time user agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkgInfo {
    pub name: String,
    pub version: String,
}

/// Parse `npm_config_user_agent` (e.g. `pnpm/9.12.0 npm/? node/v22.1.0`)
/// into the invoking package manager's name and version
pub fn pkg_from_user_agent(user_agent: Option<&str>) -> Option<PkgInfo> {
    let pkg_spec = user_agent?.split(' ').next()?;
    let mut parts = pkg_spec.split('/');
    let name = parts.next()?.to_string();
    if name.is_empty() {
        return None;
    }
    let version = parts.next().unwrap_or_default().to_string();
    Some(PkgInfo { name, version })
}

/// The package manager to show in example commands
pub fn pkg_manager_name(pkg_info: Option<&PkgInfo>) -> &str {
    pkg_info.map(|p| p.name.as_str()).unwrap_or("npm")
}

/// Rewrite an `npm create` / `npm exec` command for the invoking package
/// manager. Yarn 1.x does not support `@version` in `create` commands; bun
/// has its own template set, so the closest form is `bun x` on the package.
pub fn full_custom_command(custom_command: &str, pkg_info: Option<&PkgInfo>) -> String {
    let pkg_manager = pkg_manager_name(pkg_info);
    let is_yarn1 = pkg_manager == "yarn" && pkg_info.is_some_and(|p| p.version.starts_with("1."));

    let command = if let Some(rest) = custom_command
        .strip_prefix("npm create -- ")
        .or_else(|| custom_command.strip_prefix("npm create "))
    {
        let double_dash = custom_command.starts_with("npm create -- ");
        match pkg_manager {
            "bun" => format!("bun x create-{rest}"),
            // pnpm doesn't support the -- syntax
            "pnpm" => format!("pnpm create {rest}"),
            _ if double_dash => format!("{pkg_manager} create -- {rest}"),
            _ => format!("{pkg_manager} create {rest}"),
        }
    } else {
        custom_command.to_string()
    };

    let command = if is_yarn1 {
        command.replacen("@latest", "", 1)
    } else {
        command
    };

    if let Some(rest) = command.strip_prefix("npm exec") {
        // Prefer `pnpm dlx`, `yarn dlx`, or `bun x`
        match pkg_manager {
            "pnpm" => format!("pnpm dlx{rest}"),
            "yarn" if !is_yarn1 => format!("yarn dlx{rest}"),
            "bun" => format!("bun x{rest}"),
            _ => command,
        }
    } else {
        command
    }
}
