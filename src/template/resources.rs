//! Typed property sets for every resource type the assemblers emit.
//!
//! Field names serialize to the PascalCase keys the provisioning engine expects.
//! Only the properties this crate sets are modelled.

use http::Method;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::template::value::CfnValue;

pub const REST_API: &str = "AWS::ApiGateway::RestApi";
pub const API_RESOURCE: &str = "AWS::ApiGateway::Resource";
pub const METHOD: &str = "AWS::ApiGateway::Method";
pub const REQUEST_VALIDATOR: &str = "AWS::ApiGateway::RequestValidator";
pub const DEPLOYMENT: &str = "AWS::ApiGateway::Deployment";
pub const STAGE: &str = "AWS::ApiGateway::Stage";
pub const DOMAIN_NAME: &str = "AWS::ApiGateway::DomainName";
pub const BASE_PATH_MAPPING: &str = "AWS::ApiGateway::BasePathMapping";
pub const RECORD_SET: &str = "AWS::Route53::RecordSet";
pub const USER_POOL: &str = "AWS::Cognito::UserPool";
pub const USER_POOL_DOMAIN: &str = "AWS::Cognito::UserPoolDomain";

/// A single template entry: type, properties and explicit ordering edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub kind: ResourceKind,
    pub depends_on: Vec<String>,
}

impl Resource {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind, depends_on: Vec::new() }
    }

    pub fn depends_on(mut self, logical_id: impl Into<String>) -> Self {
        self.depends_on.push(logical_id.into());
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.depends_on.is_empty() { 2 } else { 3 };
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("Type", self.type_name())?;
        map.serialize_entry("Properties", &self.kind)?;
        if !self.depends_on.is_empty() {
            map.serialize_entry("DependsOn", &self.depends_on)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceKind {
    RestApi(RestApiProps),
    ApiResource(ApiResourceProps),
    Method(MethodProps),
    RequestValidator(RequestValidatorProps),
    Deployment(DeploymentProps),
    Stage(StageProps),
    DomainName(DomainNameProps),
    BasePathMapping(BasePathMappingProps),
    RecordSet(RecordSetProps),
    UserPool(UserPoolProps),
    UserPoolDomain(UserPoolDomainProps),
}

impl ResourceKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::RestApi(_) => REST_API,
            ResourceKind::ApiResource(_) => API_RESOURCE,
            ResourceKind::Method(_) => METHOD,
            ResourceKind::RequestValidator(_) => REQUEST_VALIDATOR,
            ResourceKind::Deployment(_) => DEPLOYMENT,
            ResourceKind::Stage(_) => STAGE,
            ResourceKind::DomainName(_) => DOMAIN_NAME,
            ResourceKind::BasePathMapping(_) => BASE_PATH_MAPPING,
            ResourceKind::RecordSet(_) => RECORD_SET,
            ResourceKind::UserPool(_) => USER_POOL,
            ResourceKind::UserPoolDomain(_) => USER_POOL_DOMAIN,
        }
    }
}

/// ================================
/// API Gateway
/// ================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all(serialize = "UPPERCASE", deserialize = "lowercase"))]
pub enum EndpointType {
    #[default]
    Edge,
    Regional,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EndpointConfiguration {
    pub types: Vec<EndpointType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestApiProps {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResourceProps {
    pub parent_id: CfnValue,
    pub path_part: String,
    pub rest_api_id: CfnValue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorizationType {
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntegrationType {
    HttpProxy,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodProps {
    #[serde(with = "http_serde::method")]
    pub http_method: Method,
    pub authorization_type: AuthorizationType,
    pub resource_id: CfnValue,
    pub rest_api_id: CfnValue,
    /// `method.request.*` selector -> required
    pub request_parameters: BTreeMap<String, bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_validator_id: Option<CfnValue>,
    pub integration: Integration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Integration {
    #[serde(rename = "Type")]
    pub integration_type: IntegrationType,
    #[serde(with = "http_serde::method")]
    pub integration_http_method: Method,
    pub uri: CfnValue,
    pub cache_key_parameters: Vec<String>,
    /// `integration.request.*` target -> mapping expression
    pub request_parameters: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestValidatorProps {
    pub name: String,
    pub rest_api_id: CfnValue,
    pub validate_request_body: bool,
    pub validate_request_parameters: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeploymentProps {
    pub rest_api_id: CfnValue,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StageProps {
    pub rest_api_id: CfnValue,
    pub deployment_id: CfnValue,
    pub stage_name: String,
    pub cache_cluster_enabled: bool,
    pub cache_cluster_size: String,
    pub method_settings: Vec<MethodSetting>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MethodSetting {
    /// Path with `/` escaped as `~1`, e.g. `/~1oauth2~1token`.
    pub resource_path: String,
    #[serde(with = "http_serde::method")]
    pub http_method: Method,
    pub caching_enabled: bool,
    pub cache_ttl_in_seconds: u64,
    pub cache_data_encrypted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DomainNameProps {
    pub domain_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<CfnValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_certificate_arn: Option<CfnValue>,
    pub endpoint_configuration: EndpointConfiguration,
    pub security_policy: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BasePathMappingProps {
    pub domain_name: CfnValue,
    pub rest_api_id: CfnValue,
    pub stage: CfnValue,
}

/// ================================
/// Route 53
/// ================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    Cname,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordSetProps {
    pub hosted_zone_id: CfnValue,
    /// Fully qualified, trailing dot included.
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: RecordType,
    #[serde(rename = "TTL")]
    pub ttl: String,
    pub resource_records: Vec<CfnValue>,
}

/// ================================
/// Cognito
/// ================================
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolProps {
    pub user_pool_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_protection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_create_user_config: Option<AdminCreateUserConfig>,
    /// Caller-supplied properties emitted verbatim next to the typed ones.
    #[serde(flatten)]
    pub additional_properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AdminCreateUserConfig {
    pub allow_admin_create_user_only: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserPoolDomainProps {
    pub domain: String,
    pub user_pool_id: CfnValue,
}
