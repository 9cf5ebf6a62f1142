use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "nbscaffold - Scaffold a tree of study notebooks from a declarative table of contents.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create every missing directory and notebook for one or more volumes.
    Build(BuildArgs),
    /// Inspect built-in or on-disk tables of contents.
    Toc(TocArgs),
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root directory of the notebook tree, overriding the config file.
    #[arg(short, long, value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Volume to scaffold. Can be a built-in name (e.g., 'feynman-vol3') or a path to a
    /// TOML table of contents. Can be used multiple times.
    #[arg(long = "volume", value_name = "NAME_OR_PATH")]
    pub volumes: Vec<String>,

    /// Place an empty `.gitkeep` in every chapter directory.
    #[arg(long)]
    pub gitkeep: bool,

    /// Also write per-volume template notebooks into `<volume>/templates/`.
    #[arg(long)]
    pub volume_templates: bool,

    /// Add an examples-and-code notebook to every chapter directory.
    #[arg(long)]
    pub chapter_examples: bool,

    /// Also write the shared `learning-tools/` tree (flashcards template and
    /// spaced-repetition helper) under the root.
    #[arg(long)]
    pub learning_tools: bool,

    /// Print the planned tree without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S layout.gitkeep=true
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `toc` subcommand.
#[derive(Args, Debug)]
pub struct TocArgs {
    #[command(subcommand)]
    pub command: TocCommands,
}

#[derive(Subcommand, Debug)]
pub enum TocCommands {
    /// List the built-in tables of contents.
    List,
    /// Show the chapter directories and section files a table of contents produces.
    Show {
        /// A built-in name or a path to a TOML table of contents.
        #[arg(required = true, value_name = "NAME_OR_PATH")]
        name_or_path: String,
    },
}
