use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use hashlink_channels::list_channels;
use hashlink_codec::{encode_params, object_params, ParamMapping};
use hashlink_location::{HashState, HashStateConfig, InMemoryLocation, Location};
use serde_json::json;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let output = execute(cli.command, cli.format, &config)?;
    println!("{output}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<HashStateConfig> {
    let Some(path) = path else {
        return Ok(HashStateConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = HashStateConfig::from_toml_str(&text)?;
    tracing::debug!(?config, path = %path.display(), "loaded config");
    Ok(config)
}

pub fn execute(command: Command, format: OutputFormat, config: &HashStateConfig) -> anyhow::Result<String> {
    match command {
        Command::Get(args) => cmd_get(args, format),
        Command::Decode(args) => cmd_decode(args, format),
        Command::Channels(args) => cmd_channels(args, format),
        Command::Add(args) => cmd_write(args, format, config, false),
        Command::Set(args) => cmd_write(args, format, config, true),
        Command::Remove(args) => cmd_remove(args, format, config),
        Command::Encode(args) => cmd_encode(args, format, config),
    }
}

/// `key=value` pairs keep their key; a bare value is keyed by its position.
fn parse_params(args: &[String]) -> ParamMapping {
    args.iter()
        .enumerate()
        .map(|(index, arg)| match arg.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (index.to_string(), arg.clone()),
        })
        .collect()
}

fn open(url: &str, config: &HashStateConfig) -> anyhow::Result<HashState<InMemoryLocation>> {
    let location = InMemoryLocation::new(url)?;
    Ok(HashState::with_config(location, config.clone()))
}

fn updated_url(state: &HashState<InMemoryLocation>, format: OutputFormat) -> anyhow::Result<String> {
    let href = state.location().href()?;
    Ok(match format {
        OutputFormat::Text => href,
        OutputFormat::Json => json!({ "url": href, "hash": state.location().hash()? }).to_string(),
    })
}

fn cmd_get(args: ChannelArgs, format: OutputFormat) -> anyhow::Result<String> {
    let state = open(&args.url, &HashStateConfig::default())?;
    let entry = state.get_params(&args.channel)?;
    Ok(match (format, entry) {
        (OutputFormat::Json, entry) => json!({ "channel": args.channel, "entry": entry }).to_string(),
        (OutputFormat::Text, Some(entry)) => entry,
        (OutputFormat::Text, None) => format!("channel {} not present", args.channel.yellow()),
    })
}

fn cmd_decode(args: ChannelArgs, format: OutputFormat) -> anyhow::Result<String> {
    let state = open(&args.url, &HashStateConfig::default())?;
    let params = state
        .get_params(&args.channel)?
        .map(|entry| object_params(&entry))
        .unwrap_or_default();
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(&params)?,
        OutputFormat::Text => params
            .iter()
            .map(|(key, value)| format!("{} = {}", key.bold(), value))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

fn cmd_channels(args: UrlArgs, format: OutputFormat) -> anyhow::Result<String> {
    let location = InMemoryLocation::new(&args.url)?;
    let channels = list_channels(&location.hash()?);
    Ok(match format {
        OutputFormat::Json => serde_json::to_string(&channels)?,
        OutputFormat::Text => channels
            .iter()
            .map(|entry| format!("{}  {}", entry.name.cyan(), entry.blob))
            .collect::<Vec<_>>()
            .join("\n"),
    })
}

fn cmd_write(args: WriteArgs, format: OutputFormat, config: &HashStateConfig, replace: bool) -> anyhow::Result<String> {
    let state = open(&args.url, config)?;
    let params = parse_params(&args.params);
    let include_names = args.names || config.include_names;
    if replace {
        state.set_params_with(&args.channel, &params, include_names)?;
    } else {
        state.add_params_with(&args.channel, &params, include_names)?;
    }
    updated_url(&state, format)
}

fn cmd_remove(args: RemoveArgs, format: OutputFormat, config: &HashStateConfig) -> anyhow::Result<String> {
    let state = open(&args.url, config)?;
    state.remove_params(&args.channel, &args.keys)?;
    updated_url(&state, format)
}

fn cmd_encode(args: EncodeArgs, format: OutputFormat, config: &HashStateConfig) -> anyhow::Result<String> {
    let params = parse_params(&args.params);
    let blob = encode_params(&params, args.names || config.include_names);
    Ok(match format {
        OutputFormat::Json => json!({ "blob": blob }).to_string(),
        OutputFormat::Text => blob,
    })
}
