//! Caching reverse proxy in front of a single OAuth2 token endpoint.

pub mod assembler;
pub mod cache_key;
pub mod config;

pub use assembler::{assemble_proxy, ProxyIds};
pub use cache_key::CacheKeySet;
pub use config::{CacheSize, CertificateRef, CustomDomainConfig, HostedZoneRef, ProxyConfig};
