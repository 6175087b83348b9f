// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use chrono_tz::America::Los_Angeles;
use tracing::debug;

use crate::args::{ArgSpec, Args};
use crate::builtin::location::is_san_francisco;
use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::{Tool, ToolOutput};

/// `YYYY-MM-DD HH:MM:SS <abbrev><offset>`, e.g. `2025-07-01 12:30:00 PDT-0700`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z%z";

const PARAMS: &[ArgSpec] = &[ArgSpec::string(
    "query",
    "The name of the city to get the current time for.",
)];

pub struct CurrentTimeTool;

impl Tool for CurrentTimeTool {
    fn name(&self) -> &str {
        "get_current_time"
    }

    fn description(&self) -> &str {
        "Simulates getting the current time for a city.\n\n\
         Returns a sentence with the current local time, or an apology when \
         no timezone is known for the city."
    }

    fn params(&self) -> &[ArgSpec] {
        PARAMS
    }

    fn execute(&self, args: &Args, ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        let query = args.require_str("query")?;
        debug!(query, "get_current_time tool");

        if !is_san_francisco(query) {
            return Ok(ToolOutput::text(format!(
                "Sorry, I don't have timezone information for query: {query}."
            )));
        }

        let local = ctx.now().with_timezone(&Los_Angeles);
        Ok(ToolOutput::text(format!(
            "The current time for query {query} is {}",
            local.format(TIMESTAMP_FORMAT)
        )))
    }
}
