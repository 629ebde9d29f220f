//! CLI module.
//!
//! - Argument parsing into a [`CliCommand`] plus [`CliOptions`]
//! - Version and help output
//! - One-shot `shorten` / `stats` commands
//!
//! ```ignore
//! use shorty::cli::{parse_args, run_cli_command};
//!
//! let args = parse_args(std::env::args())?;
//! let config = args.options.apply(ClientConfig::from_env());
//! if let Some(status) = run_cli_exit_status(&args.command, &config) {
//!     // one-shot command ran; exit with `status`
//! }
//! // otherwise start the TUI
//! ```

pub mod args;
pub mod oneshot;
pub mod version;

pub use args::{parse_args, ArgsError, CliArgs, CliCommand, CliOptions, USAGE};
pub use oneshot::{shorten_once, stats_once, stats_report};
pub use version::{version_line, VERSION};

use std::sync::Arc;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::adapters::ReqwestHttpClient;
use crate::api::ShortenerApi;
use crate::config::ClientConfig;

/// Exit status for a failed command.
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for unusable arguments.
pub const EXIT_USAGE: u8 = 2;

/// Run a non-TUI command and map its outcome to a process exit status,
/// printing any failure to stderr. `None` for `RunTui`.
pub fn run_cli_exit_status(command: &CliCommand, config: &ClientConfig) -> Option<u8> {
    match run_cli_command(command, config)? {
        Ok(()) => Some(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            Some(EXIT_FAILURE)
        }
    }
}

/// Run a non-TUI command.
///
/// * `None` - the command is `RunTui`
/// * `Some(Ok(()))` - the command ran and printed its output
/// * `Some(Err(e))` - the command failed; `e` is the message to show
pub fn run_cli_command(command: &CliCommand, config: &ClientConfig) -> Option<Result<()>> {
    match command {
        CliCommand::RunTui => None,
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Shorten { url } => Some(run_blocking(config, |api| {
            let url = url.clone();
            async move {
                let result = shorten_once(&api, &url).await?;
                println!("{}", result.short_url);
                Ok(())
            }
        })),
        CliCommand::Stats { code } => Some(run_blocking(config, |api| {
            let code = code.clone();
            async move {
                let stats = stats_once(&api, &code).await?;
                println!("{}", stats_report(&code, &stats, &chrono::Local));
                Ok(())
            }
        })),
    }
}

/// Build a runtime and API client and drive one command to completion.
/// Failures come back as the user-facing banner text.
fn run_blocking<F, Fut>(config: &ClientConfig, command: F) -> Result<()>
where
    F: FnOnce(ShortenerApi) -> Fut,
    Fut: std::future::Future<Output = crate::error::ShortyResult<()>>,
{
    config.validate().map_err(|e| eyre!(e.user_message()))?;
    let http = ReqwestHttpClient::with_timeout(config.timeout).map_err(|e| eyre!(e.to_string()))?;
    let api = ShortenerApi::new(Arc::new(http), config.clone());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(command(api))
        .map_err(|e| eyre!(e.user_message()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_returns_none() {
        assert!(run_cli_command(&CliCommand::RunTui, &ClientConfig::default()).is_none());
    }

    #[test]
    fn test_version_and_help_succeed() {
        let config = ClientConfig::default();
        assert!(matches!(
            run_cli_command(&CliCommand::Version, &config),
            Some(Ok(()))
        ));
        assert!(matches!(
            run_cli_command(&CliCommand::Help, &config),
            Some(Ok(()))
        ));
    }

    #[test]
    fn test_invalid_config_fails_before_request() {
        let config = ClientConfig::default().with_base_url("ftp://nope");
        let result = run_cli_command(
            &CliCommand::Stats {
                code: "abc".to_string(),
            },
            &config,
        );
        assert!(matches!(result, Some(Err(_))));
    }

    #[test]
    fn test_exit_status() {
        let config = ClientConfig::default();
        assert_eq!(run_cli_exit_status(&CliCommand::RunTui, &config), None);
        assert_eq!(run_cli_exit_status(&CliCommand::Version, &config), Some(0));

        let broken = ClientConfig::default().with_base_url("ftp://nope");
        let status = run_cli_exit_status(
            &CliCommand::Shorten {
                url: "https://example.com".to_string(),
            },
            &broken,
        );
        assert_eq!(status, Some(EXIT_FAILURE));
    }
}
