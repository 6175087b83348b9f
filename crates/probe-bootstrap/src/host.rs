// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! The seam to the external agent-hosting runtime.
//!
//! The runtime owns the model loop, authentication and transport; this crate
//! only makes one call into it.  [`ManifestHost`] is the shipped
//! implementation: it emits the registration payload as JSON so it can be
//! piped into whatever deploys the agent.

use std::io::Write;

use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use probe_config::CloudIdentity;

use crate::agent::AgentDefinition;

#[async_trait]
pub trait AgentHost: Send + Sync {
    /// Register `agent` under `identity`.  Called exactly once per process.
    async fn register(&self, identity: &CloudIdentity, agent: &AgentDefinition)
        -> anyhow::Result<()>;
}

/// Payload written by [`ManifestHost`].
#[derive(Debug, Serialize)]
pub struct RegistrationManifest<'a> {
    pub identity: &'a CloudIdentity,
    pub agent: &'a AgentDefinition,
}

/// Writes the registration payload as pretty JSON followed by a newline.
pub struct ManifestHost<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> ManifestHost<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> AgentHost for ManifestHost<W> {
    async fn register(
        &self,
        identity: &CloudIdentity,
        agent: &AgentDefinition,
    ) -> anyhow::Result<()> {
        let manifest = RegistrationManifest { identity, agent };
        let body = serde_json::to_string_pretty(&manifest)?;
        let mut out = self.out.lock().await;
        writeln!(out, "{body}").context("writing registration manifest")?;
        out.flush().context("flushing registration manifest")?;
        info!(agent = %agent.name, project = %identity.project_id, "agent manifest written");
        Ok(())
    }
}
