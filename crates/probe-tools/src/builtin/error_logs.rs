// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use chrono::{Duration, SecondsFormat};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::args::{ArgSpec, Args};
use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::{Tool, ToolOutput};

pub const DEFAULT_HOURS: i64 = 24;
pub const MAX_HOURS: i64 = 168;
/// Upper bound (inclusive) on the number of sampled entries.
pub const MAX_ENTRIES: usize = 3;

const PARAMS: &[ArgSpec] = &[
    ArgSpec::string("equipment_id", "Equipment ID to check."),
    ArgSpec::integer("hours", "Hours to look back (default: 24).", 1, MAX_HOURS).optional(),
];

/// A fault signature; code, severity and message always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorKind {
    pub code: &'static str,
    pub severity: &'static str,
    pub message: &'static str,
}

pub static ERROR_KINDS: [ErrorKind; 3] = [
    ErrorKind { code: "E404", severity: "warning", message: "Sensor timeout" },
    ErrorKind { code: "E500", severity: "error", message: "System error" },
    ErrorKind { code: "E503", severity: "critical", message: "Motor overheating" },
];

#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// RFC 3339 in UTC with microseconds, e.g. `2025-07-01T19:30:00.000000+00:00`.
    pub timestamp: String,
    pub equipment_id: String,
    pub code: &'static str,
    pub severity: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorLogReport {
    pub equipment_id: String,
    pub total_errors: usize,
    pub logs: Vec<LogEntry>,
}

pub struct ErrorLogsTool;

impl ErrorLogsTool {
    /// Sample a report.  Entry `i` is stamped `i` hours before now, newest
    /// first, and no entry falls outside the `hours` window.
    pub fn sample(equipment_id: &str, hours: i64, ctx: &mut ToolContext) -> ErrorLogReport {
        let window = usize::try_from(hours).unwrap_or(0);
        let count = ctx.rng().gen_range(0..=MAX_ENTRIES).min(window);
        let now = ctx.now();

        let logs: Vec<LogEntry> = (0..count)
            .map(|i| {
                let kind = ERROR_KINDS[ctx.rng().gen_range(0..ERROR_KINDS.len())];
                let at = now - Duration::hours(i as i64);
                LogEntry {
                    timestamp: at.to_rfc3339_opts(SecondsFormat::Micros, false),
                    equipment_id: equipment_id.to_string(),
                    code: kind.code,
                    severity: kind.severity,
                    message: kind.message,
                }
            })
            .collect();

        ErrorLogReport {
            equipment_id: equipment_id.to_string(),
            total_errors: logs.len(),
            logs,
        }
    }
}

impl Tool for ErrorLogsTool {
    fn name(&self) -> &str {
        "get_error_logs"
    }

    fn description(&self) -> &str {
        "Gets recent error logs for a piece of equipment.\n\n\
         Returns a JSON record with the total error count and the log entries, \
         newest first."
    }

    fn params(&self) -> &[ArgSpec] {
        PARAMS
    }

    fn execute(&self, args: &Args, ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        let equipment_id = args.require_str("equipment_id")?;
        let hours = args.int("hours").unwrap_or(DEFAULT_HOURS);
        let report = Self::sample(equipment_id, hours, ctx);
        debug!(equipment_id, hours, total = report.total_errors, "get_error_logs tool");
        ToolOutput::json(&report)
    }
}
