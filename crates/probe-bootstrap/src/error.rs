// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use probe_config::{AgentProfile, ConfigError};
use probe_tools::ToolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("profile '{profile}' references undefined tool '{tool}'")]
    UndefinedTool { profile: AgentProfile, tool: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tool(#[from] ToolError),
}
