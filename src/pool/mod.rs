//! Cognito user pool wired to the caching proxy.

pub mod assembler;
pub mod config;

pub use assembler::{assemble_pool_with_cache, PoolWithCache};
pub use config::{MfaConfiguration, PoolWithCacheConfig, UserPoolSettings};
