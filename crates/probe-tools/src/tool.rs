// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use serde::Serialize;
use serde_json::Value;

use crate::args::{self, ArgSpec, Args};
use crate::context::ToolContext;
use crate::error::ToolError;

/// A single tool invocation requested by the model.
#[derive(Debug, Clone)]
pub struct ToolCall {
    /// Opaque identifier returned by the model (forwarded verbatim)
    pub id: String,
    pub name: String,
    /// Parsed JSON arguments
    pub args: Value,
}

/// How the runtime should interpret [`ToolOutput::content`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain UTF-8 text.
    Text,
    /// A JSON document, pretty-printed with two-space indentation.
    Json,
}

/// The result of executing a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    /// Empty until the output is tied to a [`ToolCall`].
    pub call_id: String,
    pub content: String,
    pub format: OutputFormat,
}

impl ToolOutput {
    /// Plain-text result.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            call_id: String::new(),
            content: content.into(),
            format: OutputFormat::Text,
        }
    }

    /// Structured result serialized for transport.
    pub fn json<T: Serialize>(record: &T) -> Result<Self, ToolError> {
        Ok(Self {
            call_id: String::new(),
            content: serde_json::to_string_pretty(record)?,
            format: OutputFormat::Json,
        })
    }

    pub fn with_call_id(mut self, call_id: impl Into<String>) -> Self {
        self.call_id = call_id.into();
        self
    }

    /// Parse the content back into a JSON value.  `None` for text output.
    pub fn as_json(&self) -> Option<Value> {
        match self.format {
            OutputFormat::Json => serde_json::from_str(&self.content).ok(),
            OutputFormat::Text => None,
        }
    }
}

/// Trait that every tool exposed to the agent must implement.
///
/// Handlers are synchronous and must return promptly: the hosting runtime
/// owns cancellation and has no way to interrupt a call once started.
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Declared argument contract.  The registry validates every call
    /// against it before [`Tool::execute`] runs.
    fn params(&self) -> &[ArgSpec];
    /// JSON Schema for parameters, derived from [`Tool::params`].
    fn parameters_schema(&self) -> Value {
        args::schema(self.params())
    }
    /// Execute the tool with already-validated arguments.
    fn execute(&self, args: &Args, ctx: &mut ToolContext) -> Result<ToolOutput, ToolError>;
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn text_output_has_no_json() {
        let out = ToolOutput::text("hello");
        assert_eq!(out.format, OutputFormat::Text);
        assert!(out.as_json().is_none());
        assert!(out.call_id.is_empty());
    }

    #[test]
    fn json_output_is_indented_and_parses_back() {
        let out = ToolOutput::json(&json!({"a": 1})).unwrap();
        assert_eq!(out.content, "{\n  \"a\": 1\n}");
        assert_eq!(out.as_json(), Some(json!({"a": 1})));
    }

    #[test]
    fn with_call_id_stamps_id() {
        let out = ToolOutput::text("x").with_call_id("call-7");
        assert_eq!(out.call_id, "call-7");
    }
}
