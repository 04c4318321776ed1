//! Generation settings baked in at build time.
//!
//! Trunk and wasm-pack builds read these variables from the build environment:
//!
//! | Variable                  | Field                  |
//! |---------------------------|------------------------|
//! | `API_KEY` / `GEMINI_API_KEY` | `api_key`           |
//! | `STUDY_PLANNER_MODEL`     | `model`                |
//! | `STUDY_PLANNER_ENDPOINT`  | `endpoint`             |
//! | `STUDY_PLANNER_DEBUG`     | `enable_debug_logging` |

use anyhow::{bail, Result};
use shared::GenerationConfig;

fn build_env(name: &str) -> Option<&'static str> {
    match name {
        "API_KEY" => option_env!("API_KEY"),
        "GEMINI_API_KEY" => option_env!("GEMINI_API_KEY"),
        "STUDY_PLANNER_MODEL" => option_env!("STUDY_PLANNER_MODEL"),
        "STUDY_PLANNER_ENDPOINT" => option_env!("STUDY_PLANNER_ENDPOINT"),
        "STUDY_PLANNER_DEBUG" => option_env!("STUDY_PLANNER_DEBUG"),
        _ => None,
    }
}

pub fn load_config() -> GenerationConfig {
    config_from(build_env)
}

/// Build the configuration from a variable lookup. Unset or blank values keep
/// the defaults.
pub fn config_from<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> GenerationConfig {
    let value = |name: &str| {
        lookup(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let mut config = GenerationConfig::default();
    config.api_key = value("API_KEY").or_else(|| value("GEMINI_API_KEY"));
    if let Some(model) = value("STUDY_PLANNER_MODEL") {
        config.model = model;
    }
    if let Some(endpoint) = value("STUDY_PLANNER_ENDPOINT") {
        config.endpoint = endpoint;
    }
    if let Some(flag) = value("STUDY_PLANNER_DEBUG") {
        config.enable_debug_logging = parse_flag(&flag).unwrap_or_else(|e| {
            log::warn!("{}", e);
            false
        });
    }
    config
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("STUDY_PLANNER_DEBUG must be a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&'static str, &'static str)]) -> GenerationConfig {
        let vars: HashMap<&str, &'static str> = vars.iter().copied().collect();
        config_from(|name| vars.get(name).copied())
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = config_with(&[]);
        assert_eq!(config, GenerationConfig::default());
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_api_key_prefers_primary_variable() {
        let config = config_with(&[("API_KEY", "primary"), ("GEMINI_API_KEY", "secondary")]);
        assert_eq!(config.api_key(), Some("primary"));

        let config = config_with(&[("API_KEY", "  "), ("GEMINI_API_KEY", "secondary")]);
        assert_eq!(config.api_key(), Some("secondary"));
    }

    #[test]
    fn test_overrides_model_endpoint_and_debug() {
        let config = config_with(&[
            ("STUDY_PLANNER_MODEL", "gemini-2.5-flash"),
            ("STUDY_PLANNER_ENDPOINT", "http://localhost:8080/v1"),
            ("STUDY_PLANNER_DEBUG", "TRUE"),
        ]);
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.endpoint, "http://localhost:8080/v1");
        assert!(config.enable_debug_logging);
    }

    #[test]
    fn test_unparseable_debug_flag_is_off() {
        assert!(parse_flag("maybe").is_err());
        assert!(!config_with(&[("STUDY_PLANNER_DEBUG", "maybe")]).enable_debug_logging);
    }
}
