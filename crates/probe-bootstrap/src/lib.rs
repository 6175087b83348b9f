//! Agent construction.
//!
//! This crate turns a [`probe_config::Config`] into a registered agent:
//! - Profile selection: the closed table of instruction/tool bundles
//! - Tool-registry building for the builtin tools
//! - The [`AgentHost`] seam to the external hosting runtime
//! - [`AgentBuilder`], which validates the profile against the registry,
//!   performs the one outbound registration call and hands back an
//!   [`ActiveAgent`] that dispatches the runtime's tool calls

pub mod agent;
pub mod error;
pub mod host;
pub mod profile;
pub mod registry;

pub use agent::{ActiveAgent, AgentBuilder, AgentDefinition};
pub use error::BootstrapError;
pub use host::{AgentHost, ManifestHost, RegistrationManifest};
pub use profile::{select_profile, ProfileMeta, PROFILES};
pub use registry::build_tool_registry;
