//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "domgen",
    bin_name = "domgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate layered-backend components for a domain",
    long_about = "Domgen writes a DTO, entity, controller, service and repository \
                  for a domain name, in the package derived from where you run it.",
    after_help = "EXAMPLES:\n\
        \x20 domgen generate product --path src/main/java/com/example/shop\n\
        \x20 domgen g order --file src/main/java/com/example/shop/Application.java\n\
        \x20 domgen kinds\n\
        \x20 domgen completions bash > /usr/share/bash-completion/completions/domgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the components for a domain.
    #[command(
        visible_alias = "g",
        about = "Generate DTO, entity, controller, service and repository",
        after_help = "EXAMPLES:\n\
            \x20 domgen generate product                       # current directory\n\
            \x20 domgen generate product --path src/main/java/com/acme\n\
            \x20 domgen generate product --file src/main/java/com/acme/App.java\n\
            \x20 domgen generate product --dry-run --format json"
    )]
    Generate(GenerateArgs),

    /// List the component kinds and their templates.
    #[command(
        visible_alias = "ls",
        about = "List component kinds and template status",
        after_help = "EXAMPLES:\n\
            \x20 domgen kinds\n\
            \x20 domgen kinds --templates ./my-templates\n\
            \x20 domgen kinds --format json"
    )]
    Kinds(KindsArgs),

    /// Initialise a domgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 domgen init                   # global config\n\
            \x20 domgen init --local           # .domgen.toml in CWD\n\
            \x20 domgen init --with-templates  # also copy templates to ./templates"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 domgen completions bash > ~/.local/share/bash-completion/completions/domgen\n\
            \x20 domgen completions zsh  > ~/.zfunc/_domgen\n\
            \x20 domgen completions fish > ~/.config/fish/completions/domgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the domgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 domgen config get generation.marker\n\
            \x20 domgen config list\n\
            \x20 domgen config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `domgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Domain name, e.g. `product`. Prompted for when omitted.
    #[arg(value_name = "NAME", help = "Domain name (e.g. product)")]
    pub name: Option<String>,

    /// Selected directory inside the source tree.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        conflicts_with = "file",
        help = "Directory to generate into (default: current directory)"
    )]
    pub path: Option<PathBuf>,

    /// A file whose directory is used as the selection.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        help = "Use the directory of this file"
    )]
    pub file: Option<PathBuf>,

    /// Template directory override.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Read templates from this directory"
    )]
    pub templates: Option<PathBuf>,

    /// Source root marker override.
    #[arg(
        short = 'm',
        long = "marker",
        value_name = "MARKER",
        help = "Source root marker (default: src/main/java)"
    )]
    pub marker: Option<String>,

    /// Preview the files without writing them.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Summary format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Summary format"
    )]
    pub format: SummaryFormat,
}

/// Output format for the `generate` summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    /// Status lines.
    Human,
    /// The generation report as JSON.
    Json,
}

// ── kinds ─────────────────────────────────────────────────────────────────────

/// Arguments for `domgen kinds`.
#[derive(Debug, Args)]
pub struct KindsArgs {
    /// Template directory to inspect.
    #[arg(
        short = 't',
        long = "templates",
        value_name = "DIR",
        help = "Template directory to inspect"
    )]
    pub templates: Option<PathBuf>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `kinds` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One kind per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `domgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write `.domgen.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Copy the bundled templates into `./templates`.
    #[arg(
        long = "with-templates",
        help = "Copy the bundled templates into ./templates for editing"
    )]
    pub with_templates: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `domgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `domgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.marker`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_command() {
        let cli = Cli::parse_from(["domgen", "generate", "product", "--path", "/p"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.name.as_deref(), Some("product"));
        assert_eq!(args.path, Some(PathBuf::from("/p")));
        assert_eq!(args.format, SummaryFormat::Human);
        assert!(!args.dry_run);
    }

    #[test]
    fn generate_alias_and_optional_name() {
        let cli = Cli::parse_from(["domgen", "g", "--dry-run"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.name.is_none());
        assert!(args.dry_run);
    }

    #[test]
    fn path_and_file_conflict() {
        let result =
            Cli::try_parse_from(["domgen", "generate", "x", "--path", "/a", "--file", "/b/C.java"]);
        assert!(result.is_err());
    }

    #[test]
    fn kinds_alias() {
        let cli = Cli::parse_from(["domgen", "ls", "--format", "csv"]);
        assert!(matches!(
            cli.command,
            Commands::Kinds(KindsArgs {
                format: ListFormat::Csv,
                ..
            })
        ));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["domgen", "--quiet", "--verbose", "kinds"]);
        assert!(result.is_err());
    }
}
