//! Runtime configuration for the `bowling-sim` binary.
//!
//! Read from environment variables:
//!
//! - `BOWLING_SEED`: u32 seed for a reproducible game (default: unseeded)
//! - `BOWLING_OUTPUT`: `text` or `json` (default: `text`)
//! - `BOWLING_COLOR`: set to "1" or "true" to colour text output
//! - `RUST_LOG`: log filter, logs go to stderr (default: `warn`)

use std::env;

/// Report format written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SimConfig {
    pub seed: Option<u32>,
    pub output: OutputFormat,
    pub color: bool,
    pub log_filter: String,
}

impl SimConfig {
    pub const DEFAULT_LOG_FILTER: &'static str = "warn";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup("BOWLING_SEED").and_then(|s| s.trim().parse().ok());

        let output = lookup("BOWLING_OUTPUT")
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or_default();

        let color = lookup("BOWLING_COLOR")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_filter = lookup("RUST_LOG")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            output,
            color,
            log_filter,
        }
    }
}
