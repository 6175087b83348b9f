// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
mod error;
mod identity;
mod loader;
mod schema;

pub use error::ConfigError;
pub use identity::{
    CloudIdentity, DEFAULT_LOCATION, LOCATION_ENV, PROJECT_ENV, USE_VERTEXAI_ENV,
};
pub use loader::load;
pub use schema::*;
