use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{arg, command, Parser, ValueEnum};
use error_stack::{Result, ResultExt};
use tracing::{error, info};

use crate::config::DeploymentConfig;

mod config;
mod deploy;

#[derive(thiserror::Error, Debug)]
enum Error {
    #[error("failed to read deployment file {0}")]
    ReadConfig(PathBuf),
    #[error("invalid deployment file {0}")]
    Config(PathBuf),
    #[error("failed to build the instantiate message for network {0}")]
    Deploy(String),
    #[error("failed to serialize the instantiate message")]
    Serialization,
}

#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Name of the network the relayer is deployed on, e.g. "fuji"
    #[arg(short, long)]
    pub network: String,

    /// Path of the TOML deployment file
    #[arg(short, long, default_value_os_t = PathBuf::from("deployment.toml"))]
    pub config: PathBuf,

    /// Set the output style of the logs
    #[arg(short, long, value_enum, default_value_t = Output::Text)]
    pub output: Output,
}

#[derive(Debug, Clone, Parser, ValueEnum)]
enum Output {
    Text,
    Json,
}

fn main() -> ExitCode {
    let args = Args::parse();
    set_up_logger(&args.output);

    match run(&args) {
        Ok(msg) => {
            println!("{msg}");
            ExitCode::SUCCESS
        }
        Err(report) => {
            error!("{report:#}");

            // print detailed error report as the last output if in text mode
            if matches!(args.output, Output::Text) {
                eprintln!("{report:?}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String, Error> {
    info!(
        network = %args.network,
        config = %args.config.display(),
        "building instantiate message"
    );

    let content = fs::read_to_string(&args.config)
        .change_context_lazy(|| Error::ReadConfig(args.config.clone()))?;
    let config = DeploymentConfig::parse(&content)
        .change_context_lazy(|| Error::Config(args.config.clone()))?;

    let msg = deploy::instantiate_msg(&args.network, config)
        .change_context_lazy(|| Error::Deploy(args.network.clone()))?;
    info!(
        endpoint = %msg.endpoint_address,
        trusted_remotes = msg.trusted_remotes.len(),
        "instantiate message ready"
    );

    serde_json::to_string_pretty(&msg).change_context(Error::Serialization)
}

fn set_up_logger(output: &Output) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // logs go to stderr so that stdout only carries the message
    match output {
        Output::Json => {
            tracing_subscriber::fmt()
                .json()
                .flatten_event(true)
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        Output::Text => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    };
}
