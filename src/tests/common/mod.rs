// src/tests/common/mod.rs
pub use serde_json::json;

use std::time::Duration;

use crate::proxy::config::{CertificateRef, CustomDomainConfig, HostedZoneRef, ProxyConfig};
use crate::template::graph::ResourceGraph;
use crate::template::resources::{MethodProps, Resource, ResourceKind, StageProps, METHOD, STAGE};

pub const TOKEN_URL: &str = "https://example.auth.us-east-1.amazoncognito.com/oauth2/token";
pub const CERTIFICATE_ARN: &str = "arn:aws:acm:us-east-1:123456789012:certificate/abc";
pub const HOSTED_ZONE_ID: &str = "Z123456";

pub fn proxy_config(stage: &str) -> ProxyConfig {
    ProxyConfig::new(stage, TOKEN_URL, Duration::from_secs(5 * 60))
}

pub fn custom_domain() -> CustomDomainConfig {
    CustomDomainConfig::new(
        "example.com",
        "auth",
        CertificateRef::from_arn(CERTIFICATE_ARN),
        HostedZoneRef::from_id(HOSTED_ZONE_ID),
    )
}

/// The only resource of `type_name`; panics when there are zero or several.
pub fn single<'a>(graph: &'a ResourceGraph, type_name: &str) -> (&'a str, &'a Resource) {
    let found = graph.resources_of_type(type_name);
    assert_eq!(found.len(), 1, "expected exactly one {}, got {}", type_name, found.len());
    found[0]
}

pub fn method(graph: &ResourceGraph) -> &MethodProps {
    match &single(graph, METHOD).1.kind {
        ResourceKind::Method(props) => props,
        other => panic!("not a method: {:?}", other),
    }
}

pub fn stage(graph: &ResourceGraph) -> &StageProps {
    match &single(graph, STAGE).1.kind {
        ResourceKind::Stage(props) => props,
        other => panic!("not a stage: {:?}", other),
    }
}

/// JSON properties of the only resource of `type_name`.
pub fn properties(graph: &ResourceGraph, type_name: &str) -> serde_json::Value {
    let rendered = serde_json::to_value(single(graph, type_name).1).expect("resource serializes");
    rendered["Properties"].clone()
}
