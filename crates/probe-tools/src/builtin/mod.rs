// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
//! Mock lookup tools.
//!
//! None of these talk to a live service: weather and time answer from a
//! single known location, and the equipment tools sample canned records
//! through the [`ToolContext`](crate::ToolContext) randomness source.

mod location;

pub mod equipment_state;
pub mod error_logs;
pub mod time;
pub mod weather;
