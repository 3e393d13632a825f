//! Command-line interface definitions.

use blog_config::config::CONFIG_FILE;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Check, export and scaffold blog site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: blog.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Load and validate the config, then print a summary
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        load_args: LoadArgs,
    },

    /// Print the validated config as JSON
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        load_args: LoadArgs,

        #[command(flatten)]
        args: ShowArgs,
    },

    /// Write a starter config file
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },
}

/// Shared loading arguments for Check and Show commands
#[derive(clap::Args, Debug, Clone)]
pub struct LoadArgs {
    /// Override site URL.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// the one in blog.toml, keeping the source file clean.
    ///
    /// Example: blogcfg check --site-url "https://user.github.io/blog"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Fail on unknown config keys instead of warning
    #[arg(short, long)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Only output these top-level keys (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_args() {
        let cli = Cli::try_parse_from([
            "blogcfg",
            "-C",
            "site/blog.toml",
            "show",
            "--pretty",
            "--fields",
            "title,menu",
            "-U",
            "https://example.org",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("site/blog.toml"));
        match cli.command {
            Commands::Show { load_args, args } => {
                assert!(args.pretty);
                assert_eq!(args.fields.unwrap(), ["title", "menu"]);
                assert_eq!(load_args.site_url.as_deref(), Some("https://example.org"));
                assert!(!load_args.strict);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::try_parse_from(["blogcfg", "check", "--strict"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(CONFIG_FILE));
        assert!(matches!(
            cli.command,
            Commands::Check { load_args } if load_args.strict
        ));
    }
}
