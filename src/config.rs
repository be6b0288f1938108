//! Command line and environment configuration.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::api::Timeouts;

#[derive(Debug, Parser)]
#[command(name = "bankomat")]
#[command(about = "In-memory account ledger served over HTTP", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the ledger over HTTP
    Serve(ServeConfig),
    /// Apply a CSV file of operations and print the resulting balances
    Replay {
        input: PathBuf,
        /// Stream the file through the async runner
        #[arg(long = "async")]
        use_async: bool,
        #[arg(long, env = "BANKOMAT_ENV", value_enum, default_value_t = Environment::Local)]
        env: Environment,
    },
}

#[derive(Debug, Clone, Args)]
pub struct ServeConfig {
    #[arg(long, env = "BANKOMAT_ADDR", default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,
    #[arg(long, env = "BANKOMAT_ENV", value_enum, default_value_t = Environment::Local)]
    pub env: Environment,
    #[arg(long, env = "BANKOMAT_REQUEST_TIMEOUT_SECS", default_value_t = 4)]
    pub request_timeout_secs: u64,
    /// Longest pause allowed while a request body is being received
    #[arg(long, env = "BANKOMAT_READ_TIMEOUT_SECS", default_value_t = 4)]
    pub read_timeout_secs: u64,
    /// Longest pause allowed while a response body is being sent
    #[arg(long, env = "BANKOMAT_WRITE_TIMEOUT_SECS", default_value_t = 4)]
    pub write_timeout_secs: u64,
    /// CSV file of operations applied before the listener opens
    #[arg(long, env = "BANKOMAT_SEED")]
    pub seed: Option<PathBuf>,
}

impl ServeConfig {
    pub fn timeouts(&self) -> Timeouts {
        Timeouts {
            request: Duration::from_secs(self.request_timeout_secs),
            read: Duration::from_secs(self.read_timeout_secs),
            write: Duration::from_secs(self.write_timeout_secs),
        }
    }
}

/// Deployment environment; selects log format and default verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    #[default]
    Local,
    Dev,
    Prod,
}

impl Environment {
    pub fn default_log_level(self) -> &'static str {
        match self {
            Environment::Local | Environment::Dev => "debug",
            Environment::Prod => "info",
        }
    }

    pub fn json_logs(self) -> bool {
        !matches!(self, Environment::Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "bankomat",
            "serve",
            "--addr",
            "0.0.0.0:9000",
            "--env",
            "prod",
            "--request-timeout-secs",
            "10",
            "--read-timeout-secs",
            "2",
            "--write-timeout-secs",
            "3",
            "--seed",
            "data/example_ops.csv",
        ])
        .unwrap();

        let Command::Serve(config) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(config.addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(config.env, Environment::Prod);
        assert_eq!(
            config.timeouts(),
            Timeouts {
                request: Duration::from_secs(10),
                read: Duration::from_secs(2),
                write: Duration::from_secs(3),
            }
        );
        assert_eq!(config.seed, Some(PathBuf::from("data/example_ops.csv")));
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["bankomat", "serve"]).unwrap();
        let Command::Serve(config) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(config.addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.timeouts(), Timeouts::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_replay_flags() {
        let cli = Cli::try_parse_from(["bankomat", "replay", "ops.csv", "--async"]).unwrap();
        match cli.command {
            Command::Replay {
                input, use_async, ..
            } => {
                assert_eq!(input, PathBuf::from("ops.csv"));
                assert!(use_async);
            }
            other => panic!("expected replay, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_env_rejected() {
        assert!(Cli::try_parse_from(["bankomat", "serve", "--env", "staging"]).is_err());
    }

    #[test]
    fn test_environment_logging() {
        assert_eq!(Environment::Local.default_log_level(), "debug");
        assert_eq!(Environment::Dev.default_log_level(), "debug");
        assert_eq!(Environment::Prod.default_log_level(), "info");
        assert!(!Environment::Local.json_logs());
        assert!(Environment::Dev.json_logs());
    }
}
