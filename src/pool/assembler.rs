use tracing::{debug, warn};

use crate::config::settings::DeploymentContext;
use crate::pool::config::{PoolWithCacheConfig, UserPoolSettings};
use crate::proxy::assembler::assemble_proxy;
use crate::proxy::config::ProxyConfig;
use crate::template::graph::ResourceGraph;
use crate::template::naming::{logical_id, resource_name};
use crate::template::resources::{
    AdminCreateUserConfig, ResourceKind, UserPoolDomainProps, UserPoolProps,
};
use crate::template::value::CfnValue;
use crate::utils::constants::{
    COGNITO_AUTH_DOMAIN_SUFFIX, DEFAULT_DOMAIN_PREFIX, TOKEN_PATH, USER_POOL_BASE_NAME,
    USER_POOL_DOMAIN_BASE_NAME,
};

const USER_POOL_NAME_PROPERTY: &str = "UserPoolName";

/// Output of [`assemble_pool_with_cache`].
#[derive(Debug, Clone, PartialEq)]
pub struct PoolWithCache {
    pub graph: ResourceGraph,
    /// `Ref` to the user pool.
    pub user_pool: CfnValue,
    /// `Ref` to the pool domain; resolves to the domain prefix.
    pub user_pool_domain: CfnValue,
    /// Proxy configuration derived from the pool, as passed to the proxy assembler.
    pub proxy: ProxyConfig,
}

/// `{namePrefix or "default"}-token-cache-{stage}`, lowercased.
pub fn domain_prefix(name_prefix: Option<&str>, stage: &str) -> String {
    let prefix = name_prefix.filter(|p| !p.is_empty()).unwrap_or(DEFAULT_DOMAIN_PREFIX);
    format!("{}-token-cache-{}", prefix.to_lowercase(), stage.to_lowercase())
}

/// `https://{domain}.auth.{region}.amazoncognito.com/oauth2/token`
pub fn token_endpoint_url(domain: CfnValue, region: CfnValue) -> CfnValue {
    CfnValue::join([
        "https://".into(),
        domain,
        ".auth.".into(),
        region,
        format!(".{}{}", COGNITO_AUTH_DOMAIN_SUFFIX, TOKEN_PATH).into(),
    ])
}

/// User pool, its hosted domain, and the caching proxy in front of the pool's
/// token endpoint.
pub fn assemble_pool_with_cache(config: &PoolWithCacheConfig, context: &DeploymentContext) -> PoolWithCache {
    let prefix = config.name_prefix.as_deref();
    let pool_name = resource_name(prefix, USER_POOL_BASE_NAME, &config.stage);
    let pool_id = logical_id(&pool_name);
    let domain_id = logical_id(&resource_name(prefix, USER_POOL_DOMAIN_BASE_NAME, &config.stage));
    let mut graph = ResourceGraph::new();

    debug!(stage = %config.stage, pool = %pool_name, "assembling user pool with token cache");

    let user_pool = graph.add_kind(
        &pool_id,
        ResourceKind::UserPool(user_pool_props(pool_name, &config.user_pool_settings)),
    );

    let user_pool_domain = graph.add_kind(
        &domain_id,
        ResourceKind::UserPoolDomain(UserPoolDomainProps {
            domain: domain_prefix(prefix, &config.stage),
            user_pool_id: user_pool.clone(),
        }),
    );

    let proxy = ProxyConfig {
        stage: config.stage.clone(),
        target_url: token_endpoint_url(user_pool_domain.clone(), context.region_value()),
        cache_ttl: config.cache_ttl,
        cache_size: config.cache_size.clone(),
        name_prefix: config.name_prefix.clone(),
        custom_domain: config.custom_cache_domain.clone(),
        disable_authorization_header_validation: false,
    };

    // proxy ids all carry the proxy base name, pool ids never do
    graph.absorb(assemble_proxy(&proxy));

    PoolWithCache {
        graph,
        user_pool,
        user_pool_domain,
        proxy,
    }
}

fn user_pool_props(pool_name: String, settings: &UserPoolSettings) -> UserPoolProps {
    let mut additional_properties = settings.properties.clone();
    if additional_properties.remove(USER_POOL_NAME_PROPERTY).is_some() {
        warn!(pool = %pool_name, "ignoring user pool setting '{}'; the pool name is computed", USER_POOL_NAME_PROPERTY);
    }
    // Typed settings win over the same key in the free-form map.
    let typed = [
        ("DeletionProtection", settings.deletion_protection.is_some()),
        ("MfaConfiguration", settings.mfa.is_some()),
        ("AdminCreateUserConfig", settings.self_sign_up_enabled.is_some()),
    ];
    for (key, _) in typed.iter().filter(|(_, set)| *set) {
        additional_properties.remove(*key);
    }

    UserPoolProps {
        user_pool_name: pool_name,
        deletion_protection: settings
            .deletion_protection
            .map(|enabled| (if enabled { "ACTIVE" } else { "INACTIVE" }).to_owned()),
        mfa_configuration: settings.mfa.map(|mfa| mfa.as_str().to_owned()),
        admin_create_user_config: settings.self_sign_up_enabled.map(|enabled| AdminCreateUserConfig {
            allow_admin_create_user_only: !enabled,
        }),
        additional_properties,
    }
}
