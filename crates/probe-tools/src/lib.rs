// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod args;
mod context;
mod error;
mod function;
mod registry;
mod tool;
pub mod builtin;

pub use args::{ArgKind, ArgSpec, Args};
pub use context::{Clock, FixedClock, SystemClock, ToolContext};
pub use error::ToolError;
pub use function::FunctionTool;
pub use registry::{ToolRegistry, ToolSchema};
pub use tool::{OutputFormat, Tool, ToolCall, ToolOutput};
pub use builtin::{
    equipment_state::EquipmentStateTool, error_logs::ErrorLogsTool,
    time::CurrentTimeTool, weather::WeatherTool,
};
