// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Declared argument contracts and validation.
//!
//! Each tool publishes a list of [`ArgSpec`]s.  The same list produces the
//! JSON Schema shown to the model and drives validation of incoming calls,
//! so the two can never drift apart.

use serde_json::{json, Map, Value};

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    String,
    /// Inclusive bounds.
    Integer { min: i64, max: i64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub required: bool,
    pub description: &'static str,
}

impl ArgSpec {
    /// A required string argument.
    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ArgKind::String,
            required: true,
            description,
        }
    }

    /// A required integer argument within `min..=max`.
    pub const fn integer(
        name: &'static str,
        description: &'static str,
        min: i64,
        max: i64,
    ) -> Self {
        Self {
            name,
            kind: ArgKind::Integer { min, max },
            required: true,
            description,
        }
    }

    pub const fn optional(self) -> Self {
        Self {
            required: false,
            ..self
        }
    }

    fn json_schema(&self) -> Value {
        match self.kind {
            ArgKind::String => json!({
                "type": "string",
                "description": self.description,
            }),
            ArgKind::Integer { min, max } => json!({
                "type": "integer",
                "description": self.description,
                "minimum": min,
                "maximum": max,
            }),
        }
    }
}

/// Build the JSON Schema object for a parameter list.
pub fn schema(specs: &[ArgSpec]) -> Value {
    let properties: Map<String, Value> = specs
        .iter()
        .map(|s| (s.name.to_string(), s.json_schema()))
        .collect();
    let required: Vec<&str> = specs.iter().filter(|s| s.required).map(|s| s.name).collect();
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
        "additionalProperties": false
    })
}

/// Arguments that passed validation against a tool's contract.
#[derive(Debug, Clone)]
pub struct Args {
    tool: String,
    values: Map<String, Value>,
}

impl Args {
    pub fn str(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.values.get(name).and_then(Value::as_i64)
    }

    /// Fetch a string argument that the contract marks as required.
    pub fn require_str(&self, name: &str) -> Result<&str, ToolError> {
        self.str(name)
            .ok_or_else(|| ToolError::invalid(&self.tool, format!("missing '{name}'")))
    }
}

/// Check `args` against `specs`.
///
/// `null` is accepted as "no arguments".  Unknown fields, missing required
/// fields, wrong JSON types and out-of-range integers are all rejected.
pub fn validate(tool: &str, specs: &[ArgSpec], args: &Value) -> Result<Args, ToolError> {
    let values = match args {
        Value::Object(map) => map.clone(),
        Value::Null => Map::new(),
        other => {
            return Err(ToolError::invalid(
                tool,
                format!("expected a JSON object, got {}", type_name(other)),
            ))
        }
    };

    if let Some(extra) = values.keys().find(|k| !specs.iter().any(|s| s.name == k.as_str())) {
        return Err(ToolError::invalid(tool, format!("unexpected argument '{extra}'")));
    }

    for spec in specs {
        let Some(value) = values.get(spec.name) else {
            if spec.required {
                return Err(ToolError::invalid(tool, format!("missing '{}'", spec.name)));
            }
            continue;
        };
        match spec.kind {
            ArgKind::String => {
                if !value.is_string() {
                    return Err(ToolError::invalid(
                        tool,
                        format!("'{}' must be a string, got {}", spec.name, type_name(value)),
                    ));
                }
            }
            ArgKind::Integer { min, max } => {
                if value.is_u64() && value.as_i64().is_none() {
                    return Err(ToolError::invalid(
                        tool,
                        format!("'{}' must be between {min} and {max}, got {value}", spec.name),
                    ));
                }
                let Some(n) = value.as_i64() else {
                    return Err(ToolError::invalid(
                        tool,
                        format!("'{}' must be an integer, got {}", spec.name, type_name(value)),
                    ));
                };
                if n < min || n > max {
                    return Err(ToolError::invalid(
                        tool,
                        format!("'{}' must be between {min} and {max}, got {n}", spec.name),
                    ));
                }
            }
        }
    }

    Ok(Args {
        tool: tool.to_string(),
        values,
    })
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
