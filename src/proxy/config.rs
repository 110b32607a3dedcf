use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::time::Duration;

use crate::template::resources::EndpointType;
use crate::template::value::CfnValue;

/// Capacity tiers (GB) the gateway accepts for its cache cluster.
pub const CACHE_SIZE_TIERS: [&str; 8] = ["0.5", "1.6", "6.1", "13.5", "28.4", "58.2", "118", "237"];
pub const DEFAULT_CACHE_SIZE: &str = "0.5";

/// Cache cluster size as the gateway spells it.
///
/// Not checked on construction: an unknown tier is passed through and left for
/// the provisioning engine to reject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CacheSize(String);

impl CacheSize {
    pub fn new(size: impl Into<String>) -> Self {
        Self(size.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_known_tier(&self) -> bool {
        CACHE_SIZE_TIERS.contains(&self.0.as_str())
    }
}

impl Default for CacheSize {
    fn default() -> Self {
        Self(DEFAULT_CACHE_SIZE.to_owned())
    }
}

impl fmt::Display for CacheSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CacheSize {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

// YAML users write `cache_size: 1.6` as often as `cache_size: "1.6"`.
impl<'de> Deserialize<'de> for CacheSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(f64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => CacheSize(s),
            Raw::Number(n) => CacheSize(n.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRef {
    pub arn: CfnValue,
}

impl CertificateRef {
    pub fn from_arn(arn: impl Into<CfnValue>) -> Self {
        Self { arn: arn.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZoneRef {
    pub hosted_zone_id: CfnValue,
}

impl HostedZoneRef {
    pub fn from_id(hosted_zone_id: impl Into<CfnValue>) -> Self {
        Self { hosted_zone_id: hosted_zone_id.into() }
    }
}

/// Caller-owned hostname bound to the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomDomainConfig {
    /// Root domain, e.g. `example.com`.
    pub domain_name: String,
    /// Label placed in front of the root domain, e.g. `auth`.
    pub sub_domain: String,
    /// Must cover `{sub_domain}.{domain_name}`. Edge endpoints need it issued in us-east-1.
    pub certificate: CertificateRef,
    pub hosted_zone: HostedZoneRef,
    pub endpoint_type: EndpointType,
}

impl CustomDomainConfig {
    pub fn new(
        domain_name: impl Into<String>,
        sub_domain: impl Into<String>,
        certificate: CertificateRef,
        hosted_zone: HostedZoneRef,
    ) -> Self {
        Self {
            domain_name: domain_name.into(),
            sub_domain: sub_domain.into(),
            certificate,
            hosted_zone,
            endpoint_type: EndpointType::default(),
        }
    }

    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.sub_domain, self.domain_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProxyConfig {
    /// Used verbatim as the stage name and in resource names.
    pub stage: String,
    /// Upstream token endpoint.
    pub target_url: CfnValue,
    /// Written as whole seconds, sub-second remainders rounded up.
    pub cache_ttl: Duration,
    pub cache_size: CacheSize,
    pub name_prefix: Option<String>,
    pub custom_domain: Option<CustomDomainConfig>,
    pub disable_authorization_header_validation: bool,
}

impl ProxyConfig {
    pub fn new(stage: impl Into<String>, target_url: impl Into<CfnValue>, cache_ttl: Duration) -> Self {
        Self {
            stage: stage.into(),
            target_url: target_url.into(),
            cache_ttl,
            cache_size: CacheSize::default(),
            name_prefix: None,
            custom_domain: None,
            disable_authorization_header_validation: false,
        }
    }
}
