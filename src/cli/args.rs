//! Command-line argument parsing.
//!
//! Flags may appear before or after the subcommand. A bare argument that
//! is not a subcommand is taken as a URL to shorten.

use std::time::Duration;

use thiserror::Error;

use crate::config::ClientConfig;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Run the TUI application (default)
    RunTui,
    /// Shorten one URL and print the short link
    Shorten { url: String },
    /// Print stats for a short code
    Stats { code: String },
    /// Show version information
    Version,
    /// Show usage
    Help,
}

/// Connection overrides given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub base_url: Option<String>,
    pub api_prefix: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl CliOptions {
    /// Layer these overrides on top of `config`.
    pub fn apply(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.as_str());
        }
        if let Some(prefix) = &self.api_prefix {
            config = config.with_api_prefix(prefix.as_str());
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: CliCommand,
    pub options: CliOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value for --timeout: {0:?} (expected whole seconds > 0)")]
    InvalidTimeout(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: shorty [OPTIONS] [COMMAND]

Commands:
  (none)              Open the interactive shortener
  <URL>               Shorten URL and print the short link
  shorten <URL>       Same as above
  stats <CODE>        Print visit statistics for a short code

Options:
      --base-url <URL>       Service origin (env SHORTY_BASE_URL)
      --api-prefix <PATH>    Path the API is mounted under (env SHORTY_API_PREFIX)
      --timeout <SECS>       Request timeout in seconds (env SHORTY_TIMEOUT_SECS)
  -V, --version              Print version
  -h, --help                 Print this help
";

/// Parse command-line arguments (program name first).
///
/// # Examples
///
/// ```
/// use shorty::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["shorty".to_string(), "stats".to_string(), "abc123".to_string()];
/// let parsed = parse_args(args.into_iter()).unwrap();
/// assert_eq!(parsed.command, CliCommand::Stats { code: "abc123".to_string() });
/// ```
pub fn parse_args<I>(args: I) -> Result<CliArgs, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut positional = Vec::new();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => {
                return Ok(CliArgs {
                    command: CliCommand::Version,
                    options,
                })
            }
            "--help" | "-h" => {
                return Ok(CliArgs {
                    command: CliCommand::Help,
                    options,
                })
            }
            "--base-url" => {
                options.base_url = Some(take_value(inline, &mut args, "--base-url")?);
            }
            "--api-prefix" => {
                options.api_prefix = Some(take_value(inline, &mut args, "--api-prefix")?);
            }
            "--timeout" => {
                let raw = take_value(inline, &mut args, "--timeout")?;
                match raw.trim().parse::<u64>() {
                    Ok(secs) if secs > 0 => options.timeout_secs = Some(secs),
                    _ => return Err(ArgsError::InvalidTimeout(raw)),
                }
            }
            "--" => positional.extend(args.by_ref()),
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(ArgsError::UnknownOption(arg));
            }
            _ => positional.push(arg),
        }
    }

    let command = command_from(positional)?;
    Ok(CliArgs { command, options })
}

fn take_value<I>(inline: Option<String>, args: &mut I, flag: &'static str) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    match inline {
        Some(value) => Ok(value),
        None => args.next().ok_or(ArgsError::MissingValue(flag)),
    }
}

fn command_from(positional: Vec<String>) -> Result<CliCommand, ArgsError> {
    let mut words = positional.into_iter();
    let command = match words.next() {
        None => return Ok(CliCommand::RunTui),
        Some(word) if word == "shorten" => CliCommand::Shorten {
            url: words.next().ok_or(ArgsError::MissingValue("shorten"))?,
        },
        Some(word) if word == "stats" => CliCommand::Stats {
            code: words.next().ok_or(ArgsError::MissingValue("stats"))?,
        },
        Some(url) => CliCommand::Shorten { url },
    };
    match words.next() {
        Some(extra) => Err(ArgsError::UnexpectedArgument(extra)),
        None => Ok(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, ArgsError> {
        let mut all = vec!["shorty".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        let parsed = parse(&[]).unwrap();
        assert_eq!(parsed.command, CliCommand::RunTui);
        assert_eq!(parsed.options, CliOptions::default());
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap().command, CliCommand::Version);
        assert_eq!(parse(&["-h"]).unwrap().command, CliCommand::Help);
    }

    #[test]
    fn test_bare_url_shortens() {
        assert_eq!(
            parse(&["https://example.com"]).unwrap().command,
            CliCommand::Shorten {
                url: "https://example.com".to_string()
            }
        );
    }

    #[test]
    fn test_flags_in_both_forms() {
        let parsed = parse(&[
            "--base-url",
            "https://sho.rt",
            "stats",
            "abc123",
            "--api-prefix=/api/v1",
            "--timeout=3",
        ])
        .unwrap();
        assert_eq!(
            parsed.command,
            CliCommand::Stats {
                code: "abc123".to_string()
            }
        );
        assert_eq!(parsed.options.base_url.as_deref(), Some("https://sho.rt"));
        assert_eq!(parsed.options.api_prefix.as_deref(), Some("/api/v1"));
        assert_eq!(parsed.options.timeout_secs, Some(3));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse(&["--base-url"]).unwrap_err(),
            ArgsError::MissingValue("--base-url")
        );
        assert_eq!(
            parse(&["--timeout", "soon"]).unwrap_err(),
            ArgsError::InvalidTimeout("soon".to_string())
        );
        assert_eq!(
            parse(&["--verbose"]).unwrap_err(),
            ArgsError::UnknownOption("--verbose".to_string())
        );
        assert_eq!(
            parse(&["stats"]).unwrap_err(),
            ArgsError::MissingValue("stats")
        );
        assert_eq!(
            parse(&["shorten", "a", "b"]).unwrap_err(),
            ArgsError::UnexpectedArgument("b".to_string())
        );
    }

    #[test]
    fn test_double_dash_allows_dash_urls() {
        assert_eq!(
            parse(&["--", "-weird"]).unwrap().command,
            CliCommand::Shorten {
                url: "-weird".to_string()
            }
        );
    }

    #[test]
    fn test_options_apply_over_config() {
        let options = CliOptions {
            base_url: Some("https://sho.rt/".to_string()),
            api_prefix: Some("v2".to_string()),
            timeout_secs: Some(5),
        };
        let config = options.apply(ClientConfig::default());
        assert_eq!(config.base_url, "https://sho.rt");
        assert_eq!(config.api_prefix, "/v2");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
