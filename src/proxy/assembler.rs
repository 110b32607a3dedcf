use http::Method;
use std::time::Duration;
use tracing::debug;

use crate::proxy::cache_key::CacheKeySet;
use crate::proxy::config::{CustomDomainConfig, ProxyConfig};
use crate::template::graph::ResourceGraph;
use crate::template::naming::{logical_id, resolve_name_prefix, resource_name};
use crate::template::resources::{
    ApiResourceProps, AuthorizationType, BasePathMappingProps, DeploymentProps, DomainNameProps,
    EndpointConfiguration, EndpointType, Integration, IntegrationType, MethodProps, MethodSetting,
    RecordSetProps, RecordType, RequestValidatorProps, Resource, ResourceKind, RestApiProps, StageProps,
};
use crate::template::value::CfnValue;
use crate::utils::constants::{
    CNAME_TTL_SECONDS, DOMAIN_SECURITY_POLICY, PROXY_BASE_NAME, REST_API_DESCRIPTION, TOKEN_PATH,
};

/// Logical ids of everything the proxy assembler emits for one deployment unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyIds {
    pub rest_api: String,
    pub oauth2_resource: String,
    pub token_resource: String,
    pub token_method: String,
    pub request_validator: String,
    pub deployment: String,
    pub stage: String,
    pub domain_name: String,
    pub base_path_mapping: String,
    pub alias_record: String,
    pub endpoint_output: String,
    pub custom_domain_output: String,
}

impl ProxyIds {
    pub fn new(name_prefix: Option<&str>, stage: &str) -> Self {
        let base = logical_id(&resource_name(name_prefix, PROXY_BASE_NAME, stage));
        let id = |suffix: &str| format!("{}{}", base, suffix);
        Self {
            rest_api: id("RestApi"),
            oauth2_resource: id("Oauth2Resource"),
            token_resource: id("TokenResource"),
            token_method: id("TokenPost"),
            request_validator: id("RequestValidator"),
            deployment: id("Deployment"),
            stage: id("Stage"),
            domain_name: id("DomainName"),
            base_path_mapping: id("BasePathMapping"),
            alias_record: id("AliasRecord"),
            endpoint_output: id("TokenEndpoint"),
            custom_domain_output: id("CustomDomainTokenEndpoint"),
        }
    }
}

/// `{prefix-}Cognito Proxy ({stage})`
pub fn rest_api_name(name_prefix: Option<&str>, stage: &str) -> String {
    format!("{}Cognito Proxy ({})", resolve_name_prefix(name_prefix), stage)
}

/// Build the caching proxy in front of `config.target_url`.
///
/// Never fails: values the gateway would refuse, like an unknown cache tier,
/// are written as given.
pub fn assemble_proxy(config: &ProxyConfig) -> ResourceGraph {
    let prefix = config.name_prefix.as_deref();
    let ids = ProxyIds::new(prefix, &config.stage);
    let cache_keys = CacheKeySet::token_endpoint(!config.disable_authorization_header_validation);
    let mut graph = ResourceGraph::new();

    debug!(
        stage = %config.stage,
        cache_size = %config.cache_size,
        ttl_seconds = cache_ttl_seconds(config.cache_ttl),
        "assembling token cache proxy"
    );

    let rest_api = graph.add_kind(
        &ids.rest_api,
        ResourceKind::RestApi(RestApiProps {
            name: rest_api_name(prefix, &config.stage),
            description: REST_API_DESCRIPTION.to_owned(),
        }),
    );

    let oauth2 = graph.add_kind(
        &ids.oauth2_resource,
        ResourceKind::ApiResource(ApiResourceProps {
            parent_id: CfnValue::get_att(&ids.rest_api, "RootResourceId"),
            path_part: "oauth2".to_owned(),
            rest_api_id: rest_api.clone(),
        }),
    );

    let token = graph.add_kind(
        &ids.token_resource,
        ResourceKind::ApiResource(ApiResourceProps {
            parent_id: oauth2,
            path_part: "token".to_owned(),
            rest_api_id: rest_api.clone(),
        }),
    );

    let request_validator_id = if cache_keys.requires_validator() {
        debug!(stage = %config.stage, "authorization header required, attaching parameter validator");
        Some(graph.add_kind(
            &ids.request_validator,
            ResourceKind::RequestValidator(RequestValidatorProps {
                name: resource_name(prefix, "AuthorizationHeaderValidator", &config.stage),
                rest_api_id: rest_api.clone(),
                validate_request_body: false,
                validate_request_parameters: true,
            }),
        ))
    } else {
        debug!(stage = %config.stage, "authorization header validation disabled");
        None
    };

    graph.add_kind(
        &ids.token_method,
        ResourceKind::Method(MethodProps {
            http_method: Method::POST,
            authorization_type: AuthorizationType::None,
            resource_id: token,
            rest_api_id: rest_api.clone(),
            request_parameters: cache_keys.method_request_parameters(),
            request_validator_id,
            integration: Integration {
                integration_type: IntegrationType::HttpProxy,
                integration_http_method: Method::POST,
                uri: config.target_url.clone(),
                cache_key_parameters: cache_keys.cache_key_parameters(),
                request_parameters: cache_keys.integration_request_parameters(),
            },
        }),
    );

    let deployment = graph.add(
        &ids.deployment,
        Resource::new(ResourceKind::Deployment(DeploymentProps {
            rest_api_id: rest_api.clone(),
            description: rest_api_name(prefix, &config.stage),
        }))
        .depends_on(&ids.token_method),
    );

    let stage = graph.add_kind(
        &ids.stage,
        ResourceKind::Stage(StageProps {
            rest_api_id: rest_api.clone(),
            deployment_id: deployment,
            stage_name: config.stage.clone(),
            cache_cluster_enabled: true,
            cache_cluster_size: config.cache_size.as_str().to_owned(),
            method_settings: vec![MethodSetting {
                resource_path: escape_resource_path(TOKEN_PATH),
                http_method: Method::POST,
                caching_enabled: true,
                cache_ttl_in_seconds: cache_ttl_seconds(config.cache_ttl),
                cache_data_encrypted: true,
            }],
        }),
    );

    graph.add_output(
        &ids.endpoint_output,
        "Cached token endpoint on the default gateway URL",
        CfnValue::join([
            "https://".into(),
            rest_api.clone(),
            ".execute-api.".into(),
            CfnValue::region(),
            ".".into(),
            CfnValue::url_suffix(),
            format!("/{}{}", config.stage, TOKEN_PATH).into(),
        ]),
    );

    if let Some(custom_domain) = &config.custom_domain {
        add_custom_domain(&mut graph, &ids, custom_domain, rest_api, stage);
    }

    graph
}

fn add_custom_domain(
    graph: &mut ResourceGraph,
    ids: &ProxyIds,
    custom_domain: &CustomDomainConfig,
    rest_api: CfnValue,
    stage: CfnValue,
) {
    let fqdn = custom_domain.fqdn();
    debug!(domain = %fqdn, endpoint_type = ?custom_domain.endpoint_type, "binding custom domain");

    let certificate_arn = custom_domain.certificate.arn.clone();
    let (certificate_arn, regional_certificate_arn, alias_attribute) = match custom_domain.endpoint_type {
        EndpointType::Edge => (Some(certificate_arn), None, "DistributionDomainName"),
        EndpointType::Regional => (None, Some(certificate_arn), "RegionalDomainName"),
    };

    let domain_name = graph.add_kind(
        &ids.domain_name,
        ResourceKind::DomainName(DomainNameProps {
            domain_name: fqdn.clone(),
            certificate_arn,
            regional_certificate_arn,
            endpoint_configuration: EndpointConfiguration {
                types: vec![custom_domain.endpoint_type],
            },
            security_policy: DOMAIN_SECURITY_POLICY.to_owned(),
        }),
    );

    graph.add_kind(
        &ids.base_path_mapping,
        ResourceKind::BasePathMapping(BasePathMappingProps {
            domain_name,
            rest_api_id: rest_api,
            stage,
        }),
    );

    graph.add_kind(
        &ids.alias_record,
        ResourceKind::RecordSet(RecordSetProps {
            hosted_zone_id: custom_domain.hosted_zone.hosted_zone_id.clone(),
            name: format!("{}.", fqdn),
            record_type: RecordType::Cname,
            ttl: CNAME_TTL_SECONDS.to_string(),
            resource_records: vec![CfnValue::get_att(&ids.domain_name, alias_attribute)],
        }),
    );

    graph.add_output(
        &ids.custom_domain_output,
        "Cached token endpoint on the custom domain",
        CfnValue::literal(format!("https://{}{}", fqdn, TOKEN_PATH)),
    );
}

/// Method settings address paths as `/` followed by the path with every `/`
/// escaped as `~1`, e.g. `/oauth2/token` -> `/~1oauth2~1token`.
fn escape_resource_path(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/').replace('/', "~1"))
}

/// Whole seconds for the cache TTL, rounded up so a sub-second TTL still caches.
fn cache_ttl_seconds(ttl: Duration) -> u64 {
    if ttl.subsec_nanos() > 0 {
        ttl.as_secs() + 1
    } else {
        ttl.as_secs()
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use super::{cache_ttl_seconds, escape_resource_path};
    use crate::utils::constants::TOKEN_PATH;

    #[test]
    fn resource_path_keeps_leading_slash() {
        assert_eq!(escape_resource_path(TOKEN_PATH), "/~1oauth2~1token");
        assert_eq!(escape_resource_path("/"), "/");
        assert_eq!(escape_resource_path("/a/b/c"), "/~1a~1b~1c");
        assert_eq!(escape_resource_path("oauth2/token"), "/~1oauth2~1token");
    }

    #[test]
    fn sub_second_ttl_rounds_up() {
        assert_eq!(cache_ttl_seconds(Duration::from_millis(500)), 1);
        assert_eq!(cache_ttl_seconds(Duration::from_millis(90_500)), 91);
        assert_eq!(cache_ttl_seconds(Duration::from_secs(600)), 600);
    }
}
