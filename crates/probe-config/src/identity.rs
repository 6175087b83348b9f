// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Cloud identity resolution.
//!
//! The hosting runtime needs a project id and a location before an agent can
//! be registered.  Both are resolved exactly once at startup from the config
//! file and the process environment into a [`CloudIdentity`], which is then
//! passed by reference to whatever performs the registration.  The process
//! environment itself is never modified.

use serde::Serialize;
use tracing::debug;

use crate::{CloudConfig, ConfigError};

pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";
pub const LOCATION_ENV: &str = "GOOGLE_CLOUD_LOCATION";
pub const USE_VERTEXAI_ENV: &str = "GOOGLE_GENAI_USE_VERTEXAI";
pub const DEFAULT_LOCATION: &str = "global";

/// Fully resolved identity handed to the agent host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudIdentity {
    pub project_id: String,
    pub location: String,
    pub use_vertexai: bool,
}

impl CloudConfig {
    /// Resolve against the real process environment.
    pub fn resolve_from_env(&self) -> Result<CloudIdentity, ConfigError> {
        self.resolve(|var| std::env::var(var).ok())
    }

    /// Resolve using `env` as the environment lookup.
    ///
    /// A non-empty environment value wins over the config file, and the
    /// config file wins over the built-in default.  The project id has no
    /// default.
    pub fn resolve<F>(&self, env: F) -> Result<CloudIdentity, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| env(var).filter(|v| !v.trim().is_empty());

        let project_id = lookup(PROJECT_ENV)
            .or_else(|| self.project.clone())
            .filter(|p| !p.trim().is_empty())
            .ok_or(ConfigError::MissingIdentity { var: PROJECT_ENV })?;

        let location = lookup(LOCATION_ENV)
            .or_else(|| self.location.clone())
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let use_vertexai = match lookup(USE_VERTEXAI_ENV) {
            Some(raw) => parse_bool(USE_VERTEXAI_ENV, &raw)?,
            None => self.use_vertexai.unwrap_or(true),
        };

        debug!(project = %project_id, %location, use_vertexai, "resolved cloud identity");

        Ok(CloudIdentity {
            project_id,
            location,
            use_vertexai,
        })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
        }),
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
