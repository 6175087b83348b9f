// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::args::{ArgSpec, Args};
use crate::context::ToolContext;
use crate::error::ToolError;
use crate::tool::{Tool, ToolOutput};

const PARAMS: &[ArgSpec] = &[ArgSpec::string(
    "equipment_id",
    "Equipment ID to check (e.g. \"pump-1\", \"motor-2\").",
)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentStatus {
    Running,
    Maintenance,
    Warning,
    Error,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 4] = [
        EquipmentStatus::Running,
        EquipmentStatus::Maintenance,
        EquipmentStatus::Warning,
        EquipmentStatus::Error,
    ];

    /// The canned record for this status.  Each status always carries the
    /// same companion fields.
    pub fn report(self, equipment_id: &str) -> EquipmentReport {
        let (state, temperature_celsius, pressure_psi, alerts, error_code) = match self {
            EquipmentStatus::Running => ("normal_operation", 45.2, Some(120.0), vec![], None),
            EquipmentStatus::Maintenance => (
                "maintenance_mode",
                25.0,
                None,
                vec!["scheduled_maintenance"],
                None,
            ),
            EquipmentStatus::Warning => (
                "high_temperature",
                78.5,
                None,
                vec!["temperature_warning", "pressure_elevated"],
                None,
            ),
            EquipmentStatus::Error => ("fault", 95.0, None, vec!["critical_fault"], Some("E503")),
        };
        EquipmentReport {
            equipment_id: equipment_id.to_string(),
            status: self,
            state,
            temperature_celsius,
            pressure_psi,
            alerts,
            error_code,
        }
    }
}

/// Field order matches the serialized record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquipmentReport {
    pub equipment_id: String,
    pub status: EquipmentStatus,
    pub state: &'static str,
    pub temperature_celsius: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_psi: Option<f64>,
    pub alerts: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
}

pub struct EquipmentStateTool;

impl Tool for EquipmentStateTool {
    fn name(&self) -> &str {
        "get_equipment_state"
    }

    fn description(&self) -> &str {
        "Gets the current state of a piece of equipment.\n\n\
         Returns a JSON record with status, operating state, temperature and \
         active alerts."
    }

    fn params(&self) -> &[ArgSpec] {
        PARAMS
    }

    fn execute(&self, args: &Args, ctx: &mut ToolContext) -> Result<ToolOutput, ToolError> {
        let equipment_id = args.require_str("equipment_id")?;
        let status = EquipmentStatus::ALL[ctx.rng().gen_range(0..EquipmentStatus::ALL.len())];
        debug!(equipment_id, ?status, "get_equipment_state tool");
        ToolOutput::json(&status.report(equipment_id))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::{json, Value};

    use super::*;
    use crate::builtin::testing::{ctx, run};
    use crate::tool::OutputFormat;

    fn state_for(seed: u64) -> Value {
        let out = run(&EquipmentStateTool, json!({"equipment_id": "pump-1"}), &mut ctx(seed)).unwrap();
        assert_eq!(out.format, OutputFormat::Json);
        out.as_json().unwrap()
    }

    fn expected(status: &str) -> Value {
        match status {
            "running" => json!({
                "equipment_id": "pump-1", "status": "running", "state": "normal_operation",
                "temperature_celsius": 45.2, "pressure_psi": 120.0, "alerts": []
            }),
            "maintenance" => json!({
                "equipment_id": "pump-1", "status": "maintenance", "state": "maintenance_mode",
                "temperature_celsius": 25.0, "alerts": ["scheduled_maintenance"]
            }),
            "warning" => json!({
                "equipment_id": "pump-1", "status": "warning", "state": "high_temperature",
                "temperature_celsius": 78.5,
                "alerts": ["temperature_warning", "pressure_elevated"]
            }),
            "error" => json!({
                "equipment_id": "pump-1", "status": "error", "state": "fault",
                "temperature_celsius": 95.0, "alerts": ["critical_fault"], "error_code": "E503"
            }),
            other => panic!("unexpected status {other}"),
        }
    }

    #[test]
    fn every_status_carries_its_exact_companion_fields() {
        for seed in 0..64 {
            let v = state_for(seed);
            let status = v["status"].as_str().unwrap().to_string();
            assert_eq!(v, expected(&status), "seed {seed}");
        }
    }

    #[test]
    fn all_four_statuses_are_reachable() {
        let seen: HashSet<String> = (0..64)
            .map(|seed| state_for(seed)["status"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(seen.len(), 4, "{seen:?}");
    }

    #[test]
    fn same_seed_same_record() {
        assert_eq!(state_for(11), state_for(11));
    }

    #[test]
    fn keys_serialize_in_record_order() {
        let out = ToolOutput::json(&EquipmentStatus::Error.report("motor-2")).unwrap();
        let keys: Vec<usize> = [
            "\"equipment_id\"",
            "\"status\"",
            "\"state\"",
            "\"temperature_celsius\"",
            "\"alerts\"",
            "\"error_code\"",
        ]
        .iter()
        .map(|k| out.content.find(k).unwrap())
        .collect();
        assert!(keys.windows(2).all(|w| w[0] < w[1]), "{}", out.content);
    }

    #[test]
    fn whole_number_temperatures_keep_decimal_point() {
        let out = ToolOutput::json(&EquipmentStatus::Maintenance.report("p")).unwrap();
        assert!(out.content.contains("\"temperature_celsius\": 25.0"), "{}", out.content);
    }
}
