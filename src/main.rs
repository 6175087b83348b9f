// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod cli;

use std::io;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use probe_bootstrap::{build_tool_registry, ActiveAgent, AgentBuilder, ManifestHost};
use probe_config::Config;
use probe_tools::{SystemClock, ToolCall, ToolContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Commands::Completions { shell } = &cli.command {
        cli::print_completions(*shell);
        return Ok(());
    }

    let config = Arc::new(probe_config::load(cli.config.as_deref())?);

    match &cli.command {
        Commands::ShowConfig => {
            println!("{}", serde_yaml::to_string(config.as_ref()).unwrap_or_default());
            Ok(())
        }
        Commands::Register => register_cmd(&cli, config).await,
        Commands::Tools { json } => tools_cmd(&cli, config, *json),
        Commands::Invoke { tool, args, seed } => invoke_cmd(&cli, config, tool, args, *seed),
        Commands::Completions { .. } => Ok(()),
    }
}

fn builder(cli: &Cli, config: Arc<Config>) -> AgentBuilder {
    let builder = AgentBuilder::new(config);
    match cli.requested_profile() {
        Some(profile) => builder.with_profile(profile),
        None => builder,
    }
}

/// Build the agent and register it through a [`ManifestHost`] on stdout.
async fn register_cmd(cli: &Cli, config: Arc<Config>) -> anyhow::Result<()> {
    let builder = builder(cli, config);
    let identity = builder
        .resolve_identity()
        .context("resolving cloud identity")?;
    debug!(?identity, "resolved cloud identity");

    let registry = build_tool_registry()?;
    let host = ManifestHost::new(io::stdout());
    builder.register(&registry, &identity, &host).await?;
    Ok(())
}

fn activate(cli: &Cli, config: Arc<Config>) -> anyhow::Result<ActiveAgent> {
    let registry = build_tool_registry()?;
    Ok(builder(cli, config).activate(&registry)?)
}

/// List the tools enabled by the active profile.
fn tools_cmd(cli: &Cli, config: Arc<Config>, as_json: bool) -> anyhow::Result<()> {
    let agent = activate(cli, config)?;
    let tools = &agent.definition().tools;

    if as_json {
        println!("{}", serde_json::to_string_pretty(tools)?);
        return Ok(());
    }

    println!("Profile: {} ({} tool(s))\n", agent.profile(), tools.len());
    let name_w = tools.iter().map(|t| t.name.len()).max().unwrap_or(4).max(4);
    println!("{:<name_w$}  DESCRIPTION", "NAME");
    println!("{}", "-".repeat(name_w + 40));
    for t in tools {
        let summary = t.description.lines().next().unwrap_or_default();
        println!("{:<name_w$}  {}", t.name, summary);
    }
    Ok(())
}

/// Dispatch a single tool call and print the tool's output to stdout.
fn invoke_cmd(
    cli: &Cli,
    config: Arc<Config>,
    tool: &str,
    args: &str,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let agent = activate(cli, config)?;
    let args: serde_json::Value =
        serde_json::from_str(args).with_context(|| format!("parsing --args {args:?}"))?;

    let mut ctx = match seed {
        Some(seed) => ToolContext::seeded(seed, SystemClock),
        None => ToolContext::system(),
    };
    let call = ToolCall {
        id: "cli".to_string(),
        name: tool.to_string(),
        args,
    };
    let output = agent
        .dispatch(&call, &mut ctx)
        .with_context(|| format!("invoking {tool}"))?;
    println!("{}", output.content);
    Ok(())
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
