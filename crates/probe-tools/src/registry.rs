// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::args::{self, ArgSpec, Args};
use crate::context::ToolContext;
use crate::error::ToolError;
use crate::function::FunctionTool;
use crate::tool::{Tool, ToolCall, ToolOutput};

/// The declaration of a tool as advertised to the hosting runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl ToolSchema {
    pub fn of(tool: &dyn Tool) -> Self {
        Self {
            name: tool.name().to_string(),
            description: tool.description().to_string(),
            parameters: tool.parameters_schema(),
        }
    }
}

/// Central registry holding all available tools.
///
/// Tools are immutable once registered, so a registry can be shared freely
/// and [`ToolRegistry::subset`] hands out clones of the same `Arc`s.
#[derive(Default, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: impl Tool + 'static) -> Result<(), ToolError> {
        self.insert(Arc::new(tool))
    }

    /// Register a closure as a tool under `name`.
    pub fn register_fn<F>(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        params: Vec<ArgSpec>,
        handler: F,
    ) -> Result<(), ToolError>
    where
        F: Fn(&Args, &mut ToolContext) -> Result<ToolOutput, ToolError> + Send + Sync + 'static,
    {
        self.register(FunctionTool::new(name, description, params, handler))
    }

    fn insert(&mut self, tool: Arc<dyn Tool>) -> Result<(), ToolError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(ToolError::DuplicateTool(name));
        }
        debug!(tool = %name, "registered tool");
        self.tools.insert(name, tool);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Registered tool names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Produce schemas for all registered tools, sorted by name.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> =
            self.tools.values().map(|t| ToolSchema::of(t.as_ref())).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// A new registry holding only `names`.  Fails on the first name that is
    /// not registered here.
    pub fn subset<S: AsRef<str>>(&self, names: &[S]) -> Result<ToolRegistry, ToolError> {
        let mut out = ToolRegistry::new();
        for name in names {
            let name = name.as_ref();
            let tool = self
                .get(name)
                .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
            out.insert(tool)?;
        }
        Ok(out)
    }

    /// Validate `args` against the tool's contract and run it.
    pub fn invoke(
        &self,
        name: &str,
        args: &Value,
        ctx: &mut ToolContext,
    ) -> Result<ToolOutput, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;
        let args = args::validate(tool.name(), tool.params(), args)?;
        debug!(tool = %name, "invoking tool");
        tool.execute(&args, ctx)
    }

    /// [`ToolRegistry::invoke`] for a model-issued call; the output carries the call id.
    pub fn dispatch(&self, call: &ToolCall, ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        let out = self.invoke(&call.name, &call.args, ctx)?;
        Ok(out.with_call_id(&call.id))
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry").field("tools", &self.names()).finish()
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    use super::*;
    use crate::context::FixedClock;

    /// Minimal echo tool for registry tests.
    struct EchoTool {
        name: &'static str,
    }

    const ECHO_PARAMS: &[ArgSpec] = &[ArgSpec::string("text", "Text to echo")];

    impl Tool for EchoTool {
        fn name(&self) -> &str {
            self.name
        }
        fn description(&self) -> &str {
            "echoes its input"
        }
        fn params(&self) -> &[ArgSpec] {
            ECHO_PARAMS
        }
        fn execute(&self, args: &Args, _ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
            Ok(ToolOutput::text(format!("echo:{}", args.require_str("text")?)))
        }
    }

    fn ctx() -> ToolContext {
        ToolContext::seeded(1, FixedClock(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()))
    }

    #[test]
    fn register_and_get() {
        let mut reg = ToolRegistry::new();
        reg.register(EchoTool { name: "echo" }).unwrap();
        assert!(reg.get("echo").is_some());
        assert!(reg.contains("echo"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn get_unknown_returns_none() {
        let reg = ToolRegistry::new();
        assert!(reg.get("nope").is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn registering_same_name_twice_fails() {
        let mut reg = ToolRegistry::new();
        reg.register(EchoTool { name: "t" }).unwrap();
        let err = reg.register(EchoTool { name: "t" }).unwrap_err();
        assert!(matches!(err, ToolError::DuplicateTool(ref n) if n == "t"));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn names_are_sorted() {
        let mut reg = ToolRegistry::new();
        reg.register(EchoTool { name: "b" }).unwrap();
        reg.register(EchoTool { name: "a" }).unwrap();
        assert_eq!(reg.names(), vec!["a", "b"]);
    }

    #[test]
    fn schemas_carry_description_and_parameters() {
        let mut reg = ToolRegistry::new();
        reg.register(EchoTool { name: "t" }).unwrap();
        let schemas = reg.schemas();
        assert_eq!(schemas[0].description, "echoes its input");
        assert_eq!(schemas[0].parameters["required"], json!(["text"]));
    }

    #[test]
    fn invoke_known_tool_succeeds() {
        let mut reg = ToolRegistry::new();
        reg.register(EchoTool { name: "echo" }).unwrap();
        let out = reg.invoke("echo", &json!({"text": "hi"}), &mut ctx()).unwrap();
        assert_eq!(out.content, "echo:hi");
    }

    #[test]
    fn invoke_unknown_tool_fails() {
        let reg = ToolRegistry::new();
        let err = reg.invoke("missing", &json!({}), &mut ctx()).unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref n) if n == "missing"));
        assert!(err.to_string().contains("unknown tool"));
    }

    #[test]
    fn invoke_validates_before_running() {
        let mut reg = ToolRegistry::new();
        reg.register(EchoTool { name: "echo" }).unwrap();
        let err = reg.invoke("echo", &json!({"text": 3}), &mut ctx()).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArgument { ref tool, .. } if tool == "echo"));
    }

    #[test]
    fn dispatch_stamps_call_id() {
        let mut reg = ToolRegistry::new();
        reg.register(EchoTool { name: "echo" }).unwrap();
        let call = ToolCall { id: "c1".into(), name: "echo".into(), args: json!({"text": "x"}) };
        let out = reg.dispatch(&call, &mut ctx()).unwrap();
        assert_eq!(out.call_id, "c1");
    }

    #[test]
    fn register_fn_wraps_closure() {
        let mut reg = ToolRegistry::new();
        reg.register_fn(
            "shout",
            "uppercases its input",
            vec![ArgSpec::string("text", "Text")],
            |args, _ctx| Ok(ToolOutput::text(args.require_str("text")?.to_uppercase())),
        )
        .unwrap();
        let out = reg.invoke("shout", &json!({"text": "abc"}), &mut ctx()).unwrap();
        assert_eq!(out.content, "ABC");

        let err = reg
            .register_fn("shout", "again", vec![], |_, _| Ok(ToolOutput::text("")))
            .unwrap_err();
        assert!(matches!(err, ToolError::DuplicateTool(_)));
    }

    #[test]
    fn subset_keeps_only_listed_tools() {
        let mut reg = ToolRegistry::new();
        reg.register(EchoTool { name: "a" }).unwrap();
        reg.register(EchoTool { name: "b" }).unwrap();
        let sub = reg.subset(&["b"]).unwrap();
        assert_eq!(sub.names(), vec!["b"]);
        assert!(sub.invoke("a", &json!({"text": "x"}), &mut ctx()).is_err());
    }

    #[test]
    fn subset_with_unknown_name_fails() {
        let reg = ToolRegistry::new();
        let err = reg.subset(&["ghost"]).unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref n) if n == "ghost"));
    }
}
