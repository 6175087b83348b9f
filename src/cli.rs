// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use probe_config::AgentProfile;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "probe",
    about = "Register a tool-using assistant agent with its hosting runtime",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Agent profile (overrides `agent.profile` from the config file)
    #[arg(long, short = 'p', value_enum, env = "PROBE_PROFILE", global = true)]
    pub profile: Option<AgentProfile>,

    /// Shorthand for `--profile diagnostics`; wins over `PROBE_PROFILE`
    #[arg(long, overrides_with = "profile", global = true)]
    pub diagnostics: bool,

    /// Increase verbosity (-v = debug, -vv = trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the cloud identity, build the agent and register it.
    ///
    /// The registration manifest (identity + agent definition) is written to
    /// stdout as JSON.
    Register,
    /// List the tools enabled by the active profile
    Tools {
        /// Output as JSON instead of a formatted table
        #[arg(long)]
        json: bool,
    },
    /// Run one tool call through the active agent and print its output
    Invoke {
        /// Tool name, e.g. "get_weather"
        tool: String,
        /// Arguments as a JSON object
        #[arg(long, short = 'a', value_name = "JSON", default_value = "{}")]
        args: String,
        /// Seed the random source for reproducible output
        #[arg(long, value_name = "N")]
        seed: Option<u64>,
    },
    /// Print the effective configuration and exit
    ShowConfig,
    /// Generate shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Profile requested on the command line, if any.
    pub fn requested_profile(&self) -> Option<AgentProfile> {
        if self.diagnostics {
            Some(AgentProfile::from_flag(true))
        } else {
            self.profile
        }
    }
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "probe", &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn diagnostics_flag_selects_diagnostics() {
        let cli = Cli::try_parse_from(["probe", "--diagnostics", "tools"]).unwrap();
        assert_eq!(cli.requested_profile(), Some(AgentProfile::Diagnostics));
    }

    #[test]
    fn diagnostics_flag_wins_over_explicit_profile() {
        let cli =
            Cli::try_parse_from(["probe", "--profile", "basic", "--diagnostics", "tools"]).unwrap();
        assert_eq!(cli.requested_profile(), Some(AgentProfile::Diagnostics));
    }

    #[test]
    fn diagnostics_flag_wins_over_profile_env() {
        std::env::set_var("PROBE_PROFILE", "basic");
        let parsed = Cli::try_parse_from(["probe", "--diagnostics", "tools"]);
        std::env::remove_var("PROBE_PROFILE");
        let cli = parsed.unwrap();
        assert_eq!(cli.requested_profile(), Some(AgentProfile::Diagnostics));
    }

    #[test]
    fn invoke_defaults_to_empty_args() {
        let cli = Cli::try_parse_from(["probe", "invoke", "get_weather"]).unwrap();
        match cli.command {
            Commands::Invoke { tool, args, seed } => {
                assert_eq!(tool, "get_weather");
                assert_eq!(args, "{}");
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
