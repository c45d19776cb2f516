use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hashlink",
    about = "Inspect and edit the shared viewer state in a URL fragment",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with hash state settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the raw entry of one channel
    Get(ChannelArgs),
    /// Decode one channel's parameters
    Decode(ChannelArgs),
    /// List every channel in the fragment
    Channels(UrlArgs),
    /// Merge parameters into a channel
    Add(WriteArgs),
    /// Replace a channel's parameters
    Set(WriteArgs),
    /// Remove keys from a channel, or the whole channel
    Remove(RemoveArgs),
    /// Encode parameters into a blob without touching a URL
    Encode(EncodeArgs),
}

#[derive(Args)]
pub struct UrlArgs {
    pub url: String,
}

#[derive(Args)]
pub struct ChannelArgs {
    pub url: String,
    pub channel: String,
}

#[derive(Args)]
pub struct WriteArgs {
    pub url: String,
    pub channel: String,
    /// Parameters as `key=value`; a bare value is keyed by its position
    pub params: Vec<String>,
    /// Write `key=value` tokens instead of values only
    #[arg(short, long)]
    pub names: bool,
}

#[derive(Args)]
pub struct RemoveArgs {
    pub url: String,
    pub channel: String,
    /// Keys to remove; none removes the whole channel
    pub keys: Vec<String>,
}

#[derive(Args)]
pub struct EncodeArgs {
    pub params: Vec<String>,
    #[arg(short, long)]
    pub names: bool,
}
