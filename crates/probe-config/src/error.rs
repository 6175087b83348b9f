// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing cloud project id: set `cloud.project` in config or the {var} environment variable")]
    MissingIdentity { var: &'static str },

    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}
