use serde::Deserialize;
use std::time::Duration;

use crate::proxy::config::{CacheSize, CustomDomainConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MfaConfiguration {
    Off,
    Optional,
    On,
}

impl MfaConfiguration {
    pub fn as_str(&self) -> &'static str {
        match self {
            MfaConfiguration::Off => "OFF",
            MfaConfiguration::Optional => "OPTIONAL",
            MfaConfiguration::On => "ON",
        }
    }
}

/// Caller overrides for the user pool.
///
/// `properties` is written into the pool resource as is, except for the pool
/// name, which is always the computed one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserPoolSettings {
    pub deletion_protection: Option<bool>,
    pub mfa: Option<MfaConfiguration>,
    pub self_sign_up_enabled: Option<bool>,
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PoolWithCacheConfig {
    pub stage: String,
    pub cache_ttl: Duration,
    pub cache_size: CacheSize,
    pub name_prefix: Option<String>,
    pub user_pool_settings: UserPoolSettings,
    pub custom_cache_domain: Option<CustomDomainConfig>,
}

impl PoolWithCacheConfig {
    pub fn new(stage: impl Into<String>, cache_ttl: Duration) -> Self {
        Self {
            stage: stage.into(),
            cache_ttl,
            cache_size: CacheSize::default(),
            name_prefix: None,
            user_pool_settings: UserPoolSettings::default(),
            custom_cache_domain: None,
        }
    }
}
