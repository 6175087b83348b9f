// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use tracing::debug;

use crate::args::{ArgSpec, Args};
use crate::builtin::location::is_san_francisco;
use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::{Tool, ToolOutput};

pub const FOGGY: &str = "It's 60 degrees and foggy.";
pub const SUNNY: &str = "It's 90 degrees and sunny.";

const PARAMS: &[ArgSpec] = &[ArgSpec::string(
    "query",
    "A string containing the location to get weather information for.",
)];

pub struct WeatherTool;

impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Simulates a web search. Use it to get information on weather.\n\n\
         Returns a short sentence with the simulated weather for the queried location."
    }

    fn params(&self) -> &[ArgSpec] {
        PARAMS
    }

    fn execute(&self, args: &Args, _ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        let query = args.require_str("query")?;
        debug!(query, "get_weather tool");
        // Unknown locations get the sunny default rather than an error.
        let report = if is_san_francisco(query) { FOGGY } else { SUNNY };
        Ok(ToolOutput::text(report))
    }
}
