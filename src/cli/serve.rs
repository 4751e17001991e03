//! Serve command implementation.

use clap::Args;

use super::StyleArgs;
use crate::error::{IdenticonError, Result};
use crate::server::{ServeOptions, Server};

/// Environment variable consulted when no `--port` is given.
pub const PORT_ENV: &str = "PORT";

/// Serve identicons over HTTP at /<identifier>.png
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on (default: $PORT, then the config, then 8080)
    #[arg(long, short)]
    pub port: Option<u16>,

    #[command(flatten)]
    pub style: StyleArgs,
}

pub async fn run(args: ServeArgs) -> Result<()> {
    let resolved = args.style.resolve()?;
    let env = std::env::var(PORT_ENV).ok();
    let port = resolve_port(args.port, env.as_deref(), resolved.config.port)?;

    let options = ServeOptions {
        size: resolved.size,
        settings: resolved.settings,
    };
    Server::bind(port, options).await?.run().await
}

/// Pick the listening port: flag, then environment, then config.
fn resolve_port(flag: Option<u16>, env: Option<&str>, config: u16) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }

    match env.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value.parse().map_err(|_| IdenticonError::Config {
            message: format!("Invalid {} value '{}'", PORT_ENV, value),
            help: Some("PORT must be a number between 0 and 65535".to_string()),
        }),
        None => Ok(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_wins() {
        assert_eq!(resolve_port(Some(3000), Some("4000"), 5000).unwrap(), 3000);
    }

    #[test]
    fn test_env_before_config() {
        assert_eq!(resolve_port(None, Some("4000"), 5000).unwrap(), 4000);
        assert_eq!(resolve_port(None, Some(""), 5000).unwrap(), 5000);
        assert_eq!(resolve_port(None, None, 5000).unwrap(), 5000);
    }

    #[test]
    fn test_invalid_env() {
        let err = resolve_port(None, Some("eighty"), 5000).unwrap_err();
        assert!(matches!(err, IdenticonError::Config { .. }));
        assert!(resolve_port(None, Some("70000"), 5000).is_err());
    }
}
