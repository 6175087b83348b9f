// Copyright (c) 2024-2026 Martin Schröder <info@swedishembedded.com>
//
// SPDX-License-Identifier: MIT
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::Config;

/// Ordered list of config file locations searched from lowest to highest priority.
/// Later files override earlier ones.
fn config_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // 1. System-wide default
    paths.push(PathBuf::from("/etc/probe/config.toml"));

    // 2. XDG / home
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config/probe/config.toml"));
    }
    if let Some(cfg) = dirs::config_dir() {
        paths.push(cfg.join("probe/config.toml"));
    }

    // 3. Workspace-local
    paths.push(PathBuf::from(".probe/config.toml"));
    paths.push(PathBuf::from("probe.toml"));

    paths
}

/// Load configuration by merging all discovered TOML files.
/// The `extra` argument may provide an explicit path (e.g. `--config` CLI flag).
pub fn load(extra: Option<&Path>) -> anyhow::Result<Config> {
    let mut layers = Vec::new();
    for path in config_search_paths() {
        if path.is_file() {
            layers.push(path);
        }
    }
    if let Some(p) = extra {
        layers.push(p.to_path_buf());
    }
    load_layers(&layers)
}

fn load_layers(layers: &[PathBuf]) -> anyhow::Result<Config> {
    let mut merged = toml::Value::Table(toml::map::Map::new());

    for path in layers {
        debug!(path = %path.display(), "loading config layer");
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let layer: toml::Value = toml::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        merge_toml(&mut merged, layer);
    }

    let config: Config = merged
        .try_into()
        .context("merged configuration does not match the expected schema")?;
    Ok(config)
}

/// Deep-merge `src` into `dst`; src wins on scalar conflicts.
fn merge_toml(dst: &mut toml::Value, src: toml::Value) {
    match (dst, src) {
        (toml::Value::Table(d), toml::Value::Table(s)) => {
            for (k, v) in s {
                let entry = d.entry(k).or_insert(toml::Value::Table(toml::map::Map::new()));
                merge_toml(entry, v);
            }
        }
        (dst, src) => *dst = src,
    }
}

// ─── Unit tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::AgentProfile;

    fn val(s: &str) -> toml::Value {
        toml::from_str(s).unwrap()
    }

    fn write_layer(body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "{body}").unwrap();
        f
    }

    #[test]
    fn merge_scalar_src_wins() {
        let mut dst = val(r#"x = 1"#);
        let src = val(r#"x = 2"#);
        merge_toml(&mut dst, src);
        assert_eq!(dst["x"].as_integer(), Some(2));
    }

    #[test]
    fn merge_nested_tables() {
        let mut dst = val(r#"[agent]
name = "root_agent"
model = "gemini-2.5-flash""#);
        let src = val(r#"[agent]
model = "gemini-2.5-pro""#);
        merge_toml(&mut dst, src);
        assert_eq!(dst["agent"]["name"].as_str(), Some("root_agent"));
        assert_eq!(dst["agent"]["model"].as_str(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let result = load(Some(Path::new("/tmp/probe_nonexistent_config_xyz.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn no_layers_yields_defaults() {
        let cfg = load_layers(&[]).unwrap();
        assert_eq!(cfg.agent.profile, AgentProfile::Basic);
        assert!(cfg.cloud.project.is_none());
    }

    #[test]
    fn later_layer_overrides_earlier() {
        let base = write_layer(
            r#"[agent]
profile = "diagnostics"
[cloud]
project = "base-project"
location = "us-central1""#,
        );
        let over = write_layer(
            r#"[cloud]
location = "europe-west1""#,
        );
        let cfg = load_layers(&[base.path().to_path_buf(), over.path().to_path_buf()]).unwrap();
        assert_eq!(cfg.agent.profile, AgentProfile::Diagnostics);
        assert_eq!(cfg.cloud.project.as_deref(), Some("base-project"));
        assert_eq!(cfg.cloud.location.as_deref(), Some("europe-west1"));
    }

    #[test]
    fn schema_mismatch_is_reported() {
        let bad = write_layer(
            r#"[cloud]
use_vertexai = "sometimes""#,
        );
        assert!(load_layers(&[bad.path().to_path_buf()]).is_err());
    }
}
