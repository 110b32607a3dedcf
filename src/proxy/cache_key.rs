//! Which request attributes tell two token requests apart in the gateway cache.
//!
//! The set is fixed: the Authorization and Content-Type headers, the
//! `scope`, `grant_type`, `client_secret` and `client_id` query parameters,
//! and the request body. The gateway cache only keys on headers and query
//! parameters, so the body is copied into the integration query parameter
//! `bodyCacheKey` and that parameter is keyed on instead.

use std::collections::BTreeMap;

pub const BODY_CACHE_KEY: &str = "bodyCacheKey";
const METHOD_REQUEST_BODY: &str = "method.request.body";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheKeySelector {
    Header(&'static str),
    QueryString(&'static str),
    /// Request body, folded into [`BODY_CACHE_KEY`].
    Body,
}

impl CacheKeySelector {
    /// `method.request.*` name declared on the method. The body has none.
    pub fn method_request_parameter(&self) -> Option<String> {
        match self {
            CacheKeySelector::Header(name) => Some(format!("method.request.header.{}", name)),
            CacheKeySelector::QueryString(name) => Some(format!("method.request.querystring.{}", name)),
            CacheKeySelector::Body => None,
        }
    }

    /// Name listed in the integration's cache key parameters.
    pub fn cache_key_parameter(&self) -> String {
        match self {
            CacheKeySelector::Body => format!("integration.request.querystring.{}", BODY_CACHE_KEY),
            other => other.method_request_parameter().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheKeyParameter {
    pub selector: CacheKeySelector,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeySet {
    parameters: Vec<CacheKeyParameter>,
}

impl CacheKeySet {
    /// Key set for `POST /oauth2/token`. Only the Authorization header can be
    /// required; everything else differentiates cache entries without being
    /// mandatory.
    pub fn token_endpoint(authorization_required: bool) -> Self {
        let optional = |selector| CacheKeyParameter { selector, required: false };
        Self {
            parameters: vec![
                CacheKeyParameter {
                    selector: CacheKeySelector::Header("Authorization"),
                    required: authorization_required,
                },
                optional(CacheKeySelector::Header("Content-Type")),
                optional(CacheKeySelector::QueryString("scope")),
                optional(CacheKeySelector::QueryString("grant_type")),
                optional(CacheKeySelector::QueryString("client_secret")),
                optional(CacheKeySelector::QueryString("client_id")),
                optional(CacheKeySelector::Body),
            ],
        }
    }

    /// Method request parameters and whether each one is required.
    pub fn method_request_parameters(&self) -> BTreeMap<String, bool> {
        self.parameters
            .iter()
            .filter_map(|p| p.selector.method_request_parameter().map(|name| (name, p.required)))
            .collect()
    }

    /// Ordered cache key parameter list for the integration.
    pub fn cache_key_parameters(&self) -> Vec<String> {
        self.parameters.iter().map(|p| p.selector.cache_key_parameter()).collect()
    }

    /// Integration request mappings that feed synthetic key parameters.
    pub fn integration_request_parameters(&self) -> BTreeMap<String, String> {
        self.parameters
            .iter()
            .filter(|p| p.selector == CacheKeySelector::Body)
            .map(|p| (p.selector.cache_key_parameter(), METHOD_REQUEST_BODY.to_owned()))
            .collect()
    }

    /// A parameter validator is only worth attaching when something is required.
    pub fn requires_validator(&self) -> bool {
        self.parameters.iter().any(|p| p.required)
    }
}
