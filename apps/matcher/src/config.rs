use anyhow::{Context, Result};

use crate::models::profile::PersonalityScale;

const DEFAULT_MAX_CONCURRENT_LOADS: usize = 8;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Scale assumed for personality maps that don't declare one.
    pub personality_scale: PersonalityScale,
    pub max_concurrent_loads: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            personality_scale: PersonalityScale::Fraction,
            max_concurrent_loads: DEFAULT_MAX_CONCURRENT_LOADS,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let personality_scale = match lookup("MATCHER_PERSONALITY_SCALE") {
            Some(raw) => raw
                .parse::<PersonalityScale>()
                .context("MATCHER_PERSONALITY_SCALE must be 'fraction' or 'percent'")?,
            None => defaults.personality_scale,
        };

        let max_concurrent_loads = match lookup("MATCHER_MAX_CONCURRENT_LOADS") {
            Some(raw) => parse_positive(&raw)
                .context("MATCHER_MAX_CONCURRENT_LOADS must be a positive integer")?,
            None => defaults.max_concurrent_loads,
        };

        Ok(Config {
            personality_scale,
            max_concurrent_loads,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_positive(raw: &str) -> Result<usize> {
    let value = raw.trim().parse::<usize>()?;
    anyhow::ensure!(value >= 1, "got {value}");
    Ok(value)
}
