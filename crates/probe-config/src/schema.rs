// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
    /// Cloud identity used when registering the agent with the hosting
    /// runtime.  Every field may also come from the environment:
    ///
    /// ```toml
    /// [cloud]
    /// project = "my-project"   # GOOGLE_CLOUD_PROJECT
    /// location = "global"      # GOOGLE_CLOUD_LOCATION
    /// use_vertexai = true      # GOOGLE_GENAI_USE_VERTEXAI
    /// ```
    #[serde(default)]
    pub cloud: CloudConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Name of the application wrapping the agent
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Agent name as registered with the hosting runtime
    #[serde(default = "default_agent_name")]
    pub name: String,
    /// Model identifier forwarded to the hosting runtime
    #[serde(default = "default_model")]
    pub model: String,
    /// Which instruction/tool bundle to register
    #[serde(default)]
    pub profile: AgentProfile,
}

fn default_app_name() -> String {
    "app".into()
}
fn default_agent_name() -> String {
    "root_agent".into()
}
fn default_model() -> String {
    "gemini-2.5-flash".into()
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            name: default_agent_name(),
            model: default_model(),
            profile: AgentProfile::default(),
        }
    }
}

/// Named bundle of instruction text and enabled tools.
///
/// The discriminant doubles as the row index into the profile table kept by
/// the bootstrap crate, so new variants must be appended in table order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AgentProfile {
    /// General assistant with weather and time lookups
    #[default]
    Basic,
    /// Equipment troubleshooting assistant that asks follow-up questions
    Diagnostics,
}

impl AgentProfile {
    pub const ALL: [AgentProfile; 2] = [AgentProfile::Basic, AgentProfile::Diagnostics];

    /// Map the legacy on/off "suggestions testing" switch onto a profile.
    pub fn from_flag(diagnostics: bool) -> Self {
        if diagnostics {
            AgentProfile::Diagnostics
        } else {
            AgentProfile::Basic
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentProfile::Basic => "basic",
            AgentProfile::Diagnostics => "diagnostics",
        }
    }
}

impl std::fmt::Display for AgentProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Cloud project identifier
    pub project: Option<String>,
    /// Region or location string (default: "global")
    pub location: Option<String>,
    /// Route model traffic through Vertex AI (default: true)
    pub use_vertexai: Option<bool>,
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
