// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! [`AgentBuilder`]: single entry point for constructing a registered agent.
//!
//! Callers pass a [`Config`] and a tool registry.  The builder selects the
//! profile, checks that every tool it names exists, builds the
//! [`AgentDefinition`] and makes the one outbound registration call.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use probe_config::{AgentProfile, CloudIdentity, Config};
use probe_tools::{ToolCall, ToolContext, ToolError, ToolOutput, ToolRegistry, ToolSchema};

use crate::error::BootstrapError;
use crate::host::AgentHost;
use crate::profile::select_profile;

/// Everything the hosting runtime needs to run the agent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDefinition {
    pub app_name: String,
    pub name: String,
    pub model: String,
    pub instruction: String,
    /// In profile order.
    pub tools: Vec<ToolSchema>,
}

impl AgentDefinition {
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }
}

/// Constructs an agent from configuration.
///
/// # Example
/// ```rust,ignore
/// let active = AgentBuilder::new(config)
///     .with_profile(AgentProfile::Diagnostics)
///     .register(build_tool_registry()?, &identity, &host)
///     .await?;
/// ```
pub struct AgentBuilder {
    config: Arc<Config>,
    profile: AgentProfile,
}

impl AgentBuilder {
    /// Create a builder; the profile defaults to `config.agent.profile`.
    pub fn new(config: Arc<Config>) -> Self {
        let profile = config.agent.profile;
        Self { config, profile }
    }

    /// Override the configured profile.
    pub fn with_profile(mut self, profile: AgentProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn profile(&self) -> AgentProfile {
        self.profile
    }

    /// Resolve the cloud identity from the config file and process environment.
    pub fn resolve_identity(&self) -> Result<CloudIdentity, BootstrapError> {
        Ok(self.config.cloud.resolve_from_env()?)
    }

    /// Build the definition for the selected profile.  Fails if the profile
    /// names a tool that `registry` does not hold.
    pub fn definition(&self, registry: &ToolRegistry) -> Result<AgentDefinition, BootstrapError> {
        let meta = select_profile(self.profile);
        let tools = meta
            .tools
            .iter()
            .map(|name| {
                registry
                    .get(name)
                    .map(|t| ToolSchema::of(t.as_ref()))
                    .ok_or_else(|| BootstrapError::UndefinedTool {
                        profile: self.profile,
                        tool: name.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(profile = %self.profile, tools = tools.len(), "built agent definition");

        Ok(AgentDefinition {
            app_name: self.config.agent.app_name.clone(),
            name: self.config.agent.name.clone(),
            model: self.config.agent.model.clone(),
            instruction: meta.instruction.to_string(),
            tools,
        })
    }

    /// Validate the profile and return an agent that dispatches tool calls,
    /// without contacting a host.
    pub fn activate(self, registry: &ToolRegistry) -> Result<ActiveAgent, BootstrapError> {
        let definition = self.definition(registry)?;
        let tools = registry.subset(&definition.tool_names())?;
        Ok(ActiveAgent {
            profile: self.profile,
            definition,
            tools,
        })
    }

    /// Validate, register with `host`, and return the active agent.
    ///
    /// Host failures are returned as-is; nothing is retried.
    pub async fn register(
        self,
        registry: &ToolRegistry,
        identity: &CloudIdentity,
        host: &dyn AgentHost,
    ) -> anyhow::Result<ActiveAgent> {
        let active = self.activate(registry)?;
        host.register(identity, &active.definition).await?;
        info!(
            agent = %active.definition.name,
            profile = %active.profile,
            tools = ?active.definition.tool_names(),
            "agent registered"
        );
        Ok(active)
    }
}

/// A registered agent: its definition plus the tools its profile enables.
#[derive(Debug)]
pub struct ActiveAgent {
    profile: AgentProfile,
    definition: AgentDefinition,
    tools: ToolRegistry,
}

impl ActiveAgent {
    pub fn profile(&self) -> AgentProfile {
        self.profile
    }

    pub fn definition(&self) -> &AgentDefinition {
        &self.definition
    }

    /// Run a tool call issued by the hosting runtime.  Tools outside the
    /// active profile are reported as unknown.
    pub fn dispatch(&self, call: &ToolCall, ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        self.tools.dispatch(call, ctx)
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
