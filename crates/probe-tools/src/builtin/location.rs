// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT

/// Substrings that identify San Francisco in a free-text query.
const SAN_FRANCISCO: &[&str] = &["sf", "san francisco"];

/// Case-insensitive substring match; "sf" matches anywhere, including inside
/// other words.
pub(crate) fn is_san_francisco(query: &str) -> bool {
    let q = query.to_lowercase();
    SAN_FRANCISCO.iter().any(|needle| q.contains(needle))
}
