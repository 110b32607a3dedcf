//! Shared constants and invariants

pub const DEFAULT_CONFIG_PATH: &str = "m2m-token-cache.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Path of the proxied token endpoint, on the gateway and upstream alike.
pub const TOKEN_PATH: &str = "/oauth2/token";

pub const PROXY_BASE_NAME: &str = "ApiGatewayProxy";
pub const USER_POOL_BASE_NAME: &str = "CognitoUserPool";
pub const USER_POOL_DOMAIN_BASE_NAME: &str = "CognitoUserPoolDomain";
pub const DEFAULT_DOMAIN_PREFIX: &str = "default";

pub const REST_API_DESCRIPTION: &str = "API Gateway proxy with cache for m2m tokens for Cognito pool";
pub const COGNITO_AUTH_DOMAIN_SUFFIX: &str = "amazoncognito.com";
pub const DOMAIN_SECURITY_POLICY: &str = "TLS_1_2";
pub const CNAME_TTL_SECONDS: u32 = 1800;

/// Longest TTL the gateway cache honours.
pub const MAX_CACHE_TTL_SECONDS: u64 = 3600;
