//! create-pytauri - Scaffold a new Pytauri project in JavaScript or TypeScript

use anyhow::Result;
use clap::Parser;
use pytauri_scaffold::{catalog, CreateArgs};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "create-pytauri")]
#[command(about = "Create a new Pytauri project in JavaScript or TypeScript")]
#[command(long_about = "Create a new Pytauri project in JavaScript or TypeScript.\n\
    With no arguments, start the CLI in interactive mode.")]
#[command(version)]
#[command(after_help = catalog::help_listing())]
pub struct Args {
    /// Directory to create the project in
    pub directory: Option<String>,

    /// Use a specific template
    #[arg(short, long)]
    pub template: Option<String>,

    /// Remove existing files in a non-empty target directory without asking
    #[arg(long)]
    pub overwrite: bool,

    /// Local directory to resolve templates from (for development use)
    #[arg(long = "template-dir")]
    pub template_dir: Option<PathBuf>,
}

impl From<Args> for CreateArgs {
    fn from(args: Args) -> Self {
        CreateArgs {
            directory: args.directory,
            template: args.template,
            overwrite: args.overwrite,
            template_dir: args.template_dir,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let result = pytauri_scaffold::run(args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
