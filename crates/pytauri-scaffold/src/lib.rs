//! Pytauri Scaffold - Core library for the `create-pytauri` CLI
//!
//! This library materializes a new Pytauri project (a JavaScript/TypeScript
//! front end plus a Python-backed Tauri backend) from local template trees.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure naming/catalog functions and the
//!   filesystem materializer (`naming`, `catalog`, `scaffold`)
//! - **Layer 2: Presentation Helpers** - Package-manager detection for the
//!   displayed next-step commands (`pkg_manager`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts
//!   (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt pipeline
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use pytauri_scaffold::scaffold;
//!
//! let report = scaffold::materialize(
//!     &templates_root,
//!     "vue-ts",
//!     &project_root,
//!     "my-app",
//! ).await?;
//! for warning in &report.warnings {
//!     eprintln!("{warning}");
//! }
//! ```

pub mod catalog;
pub mod naming;
pub mod pkg_manager;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use catalog::{Framework, Variant, FRAMEWORKS};
pub use scaffold::{materialize, ScaffoldReport};

#[cfg(feature = "tui")]
pub use tui::{run, CreateArgs};

/// Target directory offered when the user does not name one
pub const DEFAULT_TARGET_DIR: &str = "pytauri-project";
