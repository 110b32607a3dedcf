//! # M2M Token Cache
//!
//! Declares a Cognito user pool and an API Gateway cache in front of its
//! OAuth2 token endpoint, so client-credentials token requests are answered
//! from the gateway cache instead of being re-issued on every call.
//!
//! Nothing here runs at request time. Every assembler is a pure function from
//! configuration to a [`template::ResourceGraph`], which is rendered as a
//! CloudFormation template and applied by the provisioning engine.
//!
//! Modules:
//! - `proxy` — caching proxy and its cache-key policy
//! - `pool` — user pool + pool domain wired into the proxy
//! - `template` — typed resources, intrinsic values and graph rendering
//! - `config` — YAML deployment file, defaults and validation
//! - `synth` — deployment file to template

pub mod config;
pub mod pool;
pub mod proxy;
pub mod synth;
pub mod template;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::config::settings::DeploymentContext;
pub use crate::pool::assembler::assemble_pool_with_cache;
pub use crate::proxy::assembler::assemble_proxy;
