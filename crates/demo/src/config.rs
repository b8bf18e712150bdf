//! Demo configuration, read from the environment.

use core::str::FromStr;
use std::path::PathBuf;

use storefront_catalog::DEFAULT_DISPLAY_COUNT;

pub const DATA_ENV: &str = "STOREFRONT_DATA";
pub const SEED_ENV: &str = "STOREFRONT_SEED";
pub const DISPLAY_COUNT_ENV: &str = "STOREFRONT_DISPLAY_COUNT";
pub const REPORT_ENV: &str = "STOREFRONT_REPORT";

/// Bundled sample catalog.
pub const DEFAULT_DATA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/product_data.txt");
pub const DEFAULT_SEED: u64 = 42;

/// How the final summary is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Log lines only.
    #[default]
    Text,
    /// Summary printed to stdout as pretty JSON.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unsupported report format: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub data_path: PathBuf,
    pub seed: u64,
    pub display_count: usize,
    pub report: ReportFormat,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            seed: DEFAULT_SEED,
            display_count: DEFAULT_DISPLAY_COUNT,
            report: ReportFormat::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Unparsable values fall
    /// back to their defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            data_path: lookup(DATA_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            seed: parse_or(&lookup, SEED_ENV, defaults.seed),
            display_count: parse_or(&lookup, DISPLAY_COUNT_ENV, defaults.display_count),
            report: parse_or(&lookup, REPORT_ENV, defaults.report),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: core::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, value = %raw, error = %e, "invalid setting; using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        assert_eq!(DemoConfig::from_lookup(|_| None), DemoConfig::default());
    }

    #[test]
    fn reads_every_setting() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (DATA_ENV, "/tmp/products.txt"),
            (SEED_ENV, "7"),
            (DISPLAY_COUNT_ENV, "10"),
            (REPORT_ENV, "JSON"),
        ]));
        assert_eq!(config.data_path, PathBuf::from("/tmp/products.txt"));
        assert_eq!(config.seed, 7);
        assert_eq!(config.display_count, 10);
        assert_eq!(config.report, ReportFormat::Json);
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let config = DemoConfig::from_lookup(lookup_from(&[
            (SEED_ENV, "not-a-number"),
            (REPORT_ENV, "xml"),
        ]));
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.report, ReportFormat::Text);
    }
}
