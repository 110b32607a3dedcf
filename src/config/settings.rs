use serde::Deserialize;

use crate::template::value::CfnValue;

/// ================================
/// Global synth-wide settings
/// ================================
#[derive(Debug, Deserialize, Clone, Default)]
pub struct SettingsConfig {
    #[serde(default)]
    pub environment: DeploymentContext,
    pub logging: Option<LoggingConfig>,
    /// Template description; a generic one is used when absent.
    pub description: Option<String>,
}

/// Account and region the template is synthesized for.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct DeploymentContext {
    pub account: Option<String>,
    /// invariant: when absent the region is resolved at apply time
    pub region: Option<String>,
}

impl DeploymentContext {
    pub fn new(account: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            account: Some(account.into()),
            region: Some(region.into()),
        }
    }

    pub fn region_value(&self) -> CfnValue {
        match &self.region {
            Some(region) if !region.is_empty() => CfnValue::literal(region.as_str()),
            _ => CfnValue::region(),
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Compact,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "compact".to_string())
            .to_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}
