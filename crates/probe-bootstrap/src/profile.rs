// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Profile table: static instruction text and tool list for every
//! [`AgentProfile`].
//!
//! This module is the single source of truth for what each profile exposes.
//! Selection is a table lookup with no hidden state, so the same profile
//! always yields byte-identical instruction text and the same tools.

use probe_config::AgentProfile;

/// Instruction text and enabled tools for one profile.
#[derive(Debug, PartialEq, Eq)]
pub struct ProfileMeta {
    pub profile: AgentProfile,
    /// System instruction handed to the hosting runtime.
    pub instruction: &'static str,
    /// Enabled tool names, in registration order.
    pub tools: &'static [&'static str],
}

const BASIC_INSTRUCTION: &str =
    "You are a helpful AI assistant designed to provide accurate and useful information.";

const DIAGNOSTICS_INSTRUCTION: &str = "\
You are a diagnostic assistant helping troubleshoot equipment.

When users ask about equipment:
1. Call the appropriate diagnostic tool (get_equipment_state, get_error_logs)
2. After receiving tool results, ask a specific follow-up question based on the data
3. Reference actual values from the tool response in your question

Examples:
- \"I see pump-1 is in {state}. What would you like to check next?\"
- \"The temperature is at {temp}°C. Is this normal for this equipment?\"
- \"I found {count} errors. Which one should we investigate?\"

Always ask clear questions after calling tools to help guide troubleshooting.";

/// Rows are indexed by the [`AgentProfile`] discriminant.
pub static PROFILES: &[ProfileMeta] = &[
    ProfileMeta {
        profile: AgentProfile::Basic,
        instruction: BASIC_INSTRUCTION,
        tools: &["get_weather", "get_current_time"],
    },
    ProfileMeta {
        profile: AgentProfile::Diagnostics,
        instruction: DIAGNOSTICS_INSTRUCTION,
        tools: &[
            "get_weather",
            "get_current_time",
            "get_equipment_state",
            "get_error_logs",
        ],
    },
];

/// Look up the instruction/tool bundle for `profile`.
pub fn select_profile(profile: AgentProfile) -> &'static ProfileMeta {
    &PROFILES[profile as usize]
}

// ─── Unit tests ──────────────────────────────────────────────────────────────
