pub mod code;
pub mod completions;
pub mod render;
pub mod serve;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::types::Settings;

/// identicon - Deterministic symmetric identicons from strings
#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render identicons to PNG files
    Render(render::RenderArgs),

    /// Print the code (and optionally the decoded recipe) for identifiers
    Code(code::CodeArgs),

    /// Serve identicons over HTTP at /<identifier>.png
    Serve(serve::ServeArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by every command that renders.
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Total image size in pixels, 1-65535 (best divisible by 3)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub size: Option<u16>,

    /// Use the primary colour for every tile
    #[arg(long)]
    pub one_color: bool,

    /// Opacity of the fill colours (0-255)
    #[arg(long)]
    pub alpha: Option<u8>,

    /// Config file (default: ./identicon.yaml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Configuration after applying command-line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub config: Config,
    pub size: u16,
    pub settings: Settings,
}

impl StyleArgs {
    /// Load the config and layer the flags over it.
    pub fn resolve(&self) -> Result<Resolved> {
        let config = Config::discover(self.config.as_deref(), Path::new("."))?;
        Ok(self.apply(config))
    }

    fn apply(&self, config: Config) -> Resolved {
        let mut settings = config.settings();
        if self.one_color {
            settings = settings.one_color();
        }
        if let Some(alpha) = self.alpha {
            settings = settings.with_alpha(alpha);
        }

        Resolved {
            size: self.size.unwrap_or(config.size),
            settings,
            config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "identicon", "render", "alice", "bob", "--size", "300", "--one-color", "-o", "out",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.identifiers, vec!["alice", "bob"]);
        assert_eq!(args.style.size, Some(300));
        assert!(args.style.one_color);
        assert_eq!(args.output, Some(PathBuf::from("out")));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Cli::try_parse_from(["identicon", "render", "alice", "--size", "0"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let style = StyleArgs {
            size: Some(60),
            one_color: true,
            alpha: Some(10),
            config: None,
        };
        let config = Config {
            size: 90,
            alpha: 200,
            ..Config::default()
        };

        let resolved = style.apply(config);
        assert_eq!(resolved.size, 60);
        assert_eq!(
            resolved.settings,
            Settings {
                two_color: false,
                alpha: 10
            }
        );
    }

    #[test]
    fn test_config_used_without_flags() {
        let config = Config {
            size: 90,
            two_color: false,
            ..Config::default()
        };
        let resolved = StyleArgs::default().apply(config);
        assert_eq!(resolved.size, 90);
        assert!(!resolved.settings.two_color);
        assert_eq!(resolved.settings.alpha, 255);
    }
}
