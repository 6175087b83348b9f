// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Centralised tool-registry builder.
//!
//! Every builtin tool is registered here once; profiles then pick their
//! subset by name.  Adding a tool means adding it here and listing it in the
//! profile table.

use probe_tools::{
    CurrentTimeTool, EquipmentStateTool, ErrorLogsTool, ToolError, ToolRegistry, WeatherTool,
};

/// Build a [`ToolRegistry`] holding every builtin tool.
pub fn build_tool_registry() -> Result<ToolRegistry, ToolError> {
    let mut reg = ToolRegistry::new();

    reg.register(WeatherTool)?;
    reg.register(CurrentTimeTool)?;
    reg.register(EquipmentStateTool)?;
    reg.register(ErrorLogsTool)?;

    Ok(reg)
}
