use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "confdiff",
    about = "Compare Key=Value config texts with variable resolution",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the keys of a config file in definition order
    Keys(KeysArgs),
    /// Print the resolved value of one key (empty when the key is absent)
    Get(GetArgs),
    /// Compare the value of a key across two config files
    Diff(DiffArgs),
    /// Start the permalink server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct KeysArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct GetArgs {
    pub file: PathBuf,
    pub key: String,
}

#[derive(Args)]
pub struct DiffArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    #[arg(short, long)]
    pub key: String,
    /// Key to read from the right file when it differs from --key
    #[arg(long)]
    pub right_key: Option<String>,
}

#[derive(Args)]
pub struct ServeArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub api_key: Option<String>,
}
