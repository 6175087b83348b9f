// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Closure-backed tools, for registering a handler without writing a struct.

use crate::args::{ArgSpec, Args};
use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::{Tool, ToolOutput};

type Handler = dyn Fn(&Args, &mut ToolContext) -> Result<ToolOutput, ToolError> + Send + Sync;

pub struct FunctionTool {
    name: String,
    description: String,
    params: Vec<ArgSpec>,
    handler: Box<Handler>,
}

impl FunctionTool {
    pub fn new<F>(
        name: impl Into<String>,
        description: impl Into<String>,
        params: Vec<ArgSpec>,
        handler: F,
    ) -> Self
    where
        F: Fn(&Args, &mut ToolContext) -> Result<ToolOutput, ToolError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            params,
            handler: Box::new(handler),
        }
    }
}

impl Tool for FunctionTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn params(&self) -> &[ArgSpec] {
        &self.params
    }

    fn execute(&self, args: &Args, ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        (self.handler)(args, ctx)
    }
}

impl std::fmt::Debug for FunctionTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionTool")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
