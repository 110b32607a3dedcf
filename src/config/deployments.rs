use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::config::settings::SettingsConfig;
use crate::pool::config::{PoolWithCacheConfig, UserPoolSettings};
use crate::proxy::config::{CacheSize, CertificateRef, CustomDomainConfig, HostedZoneRef, ProxyConfig};
use crate::template::resources::EndpointType;

/// ================================
/// Full deployment file
/// ================================
#[derive(Debug, Deserialize, Clone)]
pub struct DeploymentFile {
    #[serde(default)]
    pub settings: SettingsConfig,
    /// Sorted by name so the synthesized template is stable.
    #[serde(default)]
    pub deployments: BTreeMap<String, DeploymentConfig>,
}

/// ================================
/// Deployment units
/// ================================
#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeploymentConfig {
    /// Cache proxy in front of an existing token endpoint.
    Proxy(ProxyDeployment),
    /// New user pool plus the cache proxy in front of its token endpoint.
    PoolWithCache(PoolWithCacheDeployment),
}

impl DeploymentConfig {
    pub fn stage(&self) -> &str {
        match self {
            DeploymentConfig::Proxy(d) => &d.stage,
            DeploymentConfig::PoolWithCache(d) => &d.stage,
        }
    }

    pub fn cache_ttl_seconds(&self) -> u64 {
        match self {
            DeploymentConfig::Proxy(d) => d.cache_ttl_seconds,
            DeploymentConfig::PoolWithCache(d) => d.cache_ttl_seconds,
        }
    }

    pub fn cache_size(&self) -> Option<&CacheSize> {
        match self {
            DeploymentConfig::Proxy(d) => d.cache_size.as_ref(),
            DeploymentConfig::PoolWithCache(d) => d.cache_size.as_ref(),
        }
    }

    pub fn custom_domain(&self) -> Option<&CustomDomainSpec> {
        match self {
            DeploymentConfig::Proxy(d) => d.custom_domain.as_ref(),
            DeploymentConfig::PoolWithCache(d) => d.custom_domain.as_ref(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProxyDeployment {
    pub stage: String,
    pub target_url: String,
    pub cache_ttl_seconds: u64,
    pub cache_size: Option<CacheSize>,
    pub name_prefix: Option<String>,
    pub custom_domain: Option<CustomDomainSpec>,
    #[serde(default)]
    pub disable_authorization_header_validation: bool,
}

impl ProxyDeployment {
    pub fn to_proxy_config(&self) -> ProxyConfig {
        ProxyConfig {
            stage: self.stage.clone(),
            target_url: self.target_url.as_str().into(),
            cache_ttl: Duration::from_secs(self.cache_ttl_seconds),
            cache_size: self.cache_size.clone().unwrap_or_default(),
            name_prefix: self.name_prefix.clone(),
            custom_domain: self.custom_domain.as_ref().map(CustomDomainSpec::to_custom_domain),
            disable_authorization_header_validation: self.disable_authorization_header_validation,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct PoolWithCacheDeployment {
    pub stage: String,
    pub cache_ttl_seconds: u64,
    pub cache_size: Option<CacheSize>,
    pub name_prefix: Option<String>,
    pub user_pool: Option<UserPoolSettings>,
    pub custom_domain: Option<CustomDomainSpec>,
}

impl PoolWithCacheDeployment {
    pub fn to_pool_config(&self) -> PoolWithCacheConfig {
        PoolWithCacheConfig {
            stage: self.stage.clone(),
            cache_ttl: Duration::from_secs(self.cache_ttl_seconds),
            cache_size: self.cache_size.clone().unwrap_or_default(),
            name_prefix: self.name_prefix.clone(),
            user_pool_settings: self.user_pool.clone().unwrap_or_default(),
            custom_cache_domain: self.custom_domain.as_ref().map(CustomDomainSpec::to_custom_domain),
        }
    }
}

/// Custom domain as written in YAML: certificate and zone are referenced by id.
#[derive(Debug, Deserialize, Clone)]
pub struct CustomDomainSpec {
    pub domain_name: String,
    pub sub_domain: String,
    pub certificate_arn: String,
    pub hosted_zone_id: String,
    #[serde(default)]
    pub endpoint_type: EndpointType,
}

impl CustomDomainSpec {
    pub fn to_custom_domain(&self) -> CustomDomainConfig {
        CustomDomainConfig {
            endpoint_type: self.endpoint_type,
            ..CustomDomainConfig::new(
                self.domain_name.as_str(),
                self.sub_domain.as_str(),
                CertificateRef::from_arn(self.certificate_arn.as_str()),
                HostedZoneRef::from_id(self.hosted_zone_id.as_str()),
            )
        }
    }
}
