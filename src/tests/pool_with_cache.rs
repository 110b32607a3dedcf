#[cfg(test)]
mod test {

    use std::time::Duration;

    use crate::config::settings::DeploymentContext;
    use crate::pool::assembler::{assemble_pool_with_cache, domain_prefix};
    use crate::pool::config::{MfaConfiguration, PoolWithCacheConfig, UserPoolSettings};
    use crate::proxy::config::CacheSize;
    use crate::template::naming::logical_id;
    use crate::template::resources::{
        DOMAIN_NAME, RECORD_SET, REQUEST_VALIDATOR, REST_API, USER_POOL, USER_POOL_DOMAIN,
    };
    use crate::template::value::CfnValue;
    use crate::tests::common::*;

    fn us_east_1() -> DeploymentContext {
        DeploymentContext::new("123456789012", "us-east-1")
    }

    fn test_dev() -> PoolWithCacheConfig {
        PoolWithCacheConfig {
            name_prefix: Some("Test".to_string()),
            ..PoolWithCacheConfig::new("dev", Duration::from_secs(10 * 60))
        }
    }

    #[test]
    fn creates_user_pool_and_domain_with_computed_names() {
        let assembled = assemble_pool_with_cache(&test_dev(), &us_east_1());
        let graph = &assembled.graph;

        assert_eq!(properties(graph, USER_POOL)["UserPoolName"], "Test-CognitoUserPool-dev");
        assert_eq!(properties(graph, USER_POOL_DOMAIN)["Domain"], "test-token-cache-dev");
        assert_eq!(assembled.user_pool, CfnValue::reference("TestCognitoUserPooldev"));
        assert_eq!(assembled.user_pool_domain, CfnValue::reference("TestCognitoUserPoolDomaindev"));
        assert_eq!(
            properties(graph, USER_POOL_DOMAIN)["UserPoolId"],
            json!({"Ref": "TestCognitoUserPooldev"})
        );
    }

    #[test]
    fn domain_prefix_defaults_and_lowercases() {
        assert_eq!(domain_prefix(None, "Prod"), "default-token-cache-prod");
        assert_eq!(domain_prefix(Some(""), "dev"), "default-token-cache-dev");
        assert_eq!(domain_prefix(Some("MyApp"), "QA"), "myapp-token-cache-qa");

        let config = PoolWithCacheConfig::new("Prod", Duration::from_secs(60));
        let graph = assemble_pool_with_cache(&config, &us_east_1()).graph;
        assert_eq!(properties(&graph, USER_POOL)["UserPoolName"], "CognitoUserPool-Prod");
        assert_eq!(properties(&graph, USER_POOL_DOMAIN)["Domain"], "default-token-cache-prod");
    }

    #[test]
    fn target_url_is_built_from_pool_domain_and_region() {
        let assembled = assemble_pool_with_cache(&test_dev(), &us_east_1());

        let expected = CfnValue::join([
            "https://".into(),
            assembled.user_pool_domain.clone(),
            ".auth.us-east-1.amazoncognito.com/oauth2/token".into(),
        ]);
        assert_eq!(assembled.proxy.target_url, expected);
        assert_eq!(method(&assembled.graph).integration.uri, expected);
        assert_eq!(
            serde_json::to_value(&expected).unwrap(),
            json!({"Fn::Join": ["", [
                "https://",
                {"Ref": "TestCognitoUserPoolDomaindev"},
                ".auth.us-east-1.amazoncognito.com/oauth2/token"
            ]]})
        );
    }

    #[test]
    fn region_falls_back_to_pseudo_parameter() {
        let assembled = assemble_pool_with_cache(&test_dev(), &DeploymentContext::default());

        assert_eq!(
            serde_json::to_value(&assembled.proxy.target_url).unwrap(),
            json!({"Fn::Join": ["", [
                "https://",
                {"Ref": "TestCognitoUserPoolDomaindev"},
                ".auth.",
                {"Ref": "AWS::Region"},
                ".amazoncognito.com/oauth2/token"
            ]]})
        );
    }

    #[test]
    fn caller_settings_merge_but_cannot_rename_pool() {
        let mut properties_map = serde_json::Map::new();
        properties_map.insert("UserPoolName".to_string(), json!("Hijacked"));
        properties_map.insert("UsernameAttributes".to_string(), json!(["email"]));
        properties_map.insert("MfaConfiguration".to_string(), json!("ON"));

        let config = PoolWithCacheConfig {
            user_pool_settings: UserPoolSettings {
                deletion_protection: Some(true),
                mfa: Some(MfaConfiguration::Optional),
                self_sign_up_enabled: Some(false),
                properties: properties_map,
            },
            ..test_dev()
        };
        let graph = assemble_pool_with_cache(&config, &us_east_1()).graph;

        assert_eq!(
            properties(&graph, USER_POOL),
            json!({
                "UserPoolName": "Test-CognitoUserPool-dev",
                "DeletionProtection": "ACTIVE",
                "MfaConfiguration": "OPTIONAL",
                "AdminCreateUserConfig": {"AllowAdminCreateUserOnly": true},
                "UsernameAttributes": ["email"]
            })
        );
    }

    #[test]
    fn passes_cache_settings_and_domain_to_proxy() {
        let config = PoolWithCacheConfig {
            stage: "prod".to_string(),
            cache_ttl: Duration::from_secs(5 * 60),
            cache_size: CacheSize::new("6.1"),
            custom_cache_domain: Some(custom_domain()),
            ..test_dev()
        };
        let assembled = assemble_pool_with_cache(&config, &us_east_1());
        let graph = &assembled.graph;

        assert_eq!(assembled.proxy.cache_ttl, config.cache_ttl);
        assert_eq!(assembled.proxy.name_prefix.as_deref(), Some("Test"));
        assert_eq!(
            properties(graph, REST_API)["Description"],
            "API Gateway proxy with cache for m2m tokens for Cognito pool"
        );
        assert_eq!(properties(graph, REST_API)["Name"], "Test-Cognito Proxy (prod)");
        assert_eq!(stage(graph).cache_cluster_size, "6.1");
        assert_eq!(stage(graph).method_settings[0].cache_ttl_in_seconds, 300);
        assert_eq!(properties(graph, DOMAIN_NAME)["DomainName"], "auth.example.com");
        assert_eq!(properties(graph, RECORD_SET)["Name"], "auth.example.com.");
        assert_eq!(properties(graph, RECORD_SET)["Type"], "CNAME");
    }

    #[test]
    fn token_method_keeps_default_validation() {
        let graph = assemble_pool_with_cache(&test_dev(), &us_east_1()).graph;
        let method = method(&graph);

        assert_eq!(method.http_method, http::Method::POST);
        assert_eq!(properties(&graph, crate::template::resources::METHOD)["AuthorizationType"], "NONE");
        assert_eq!(method.request_parameters["method.request.header.Authorization"], true);
        assert_eq!(graph.count_of_type(REQUEST_VALIDATOR), 1);
    }

    #[test]
    fn pool_ids_are_distinct_from_proxy_ids() {
        let graph = assemble_pool_with_cache(&test_dev(), &us_east_1()).graph;

        assert_eq!(graph.len(), 9);
        assert!(graph.get(&logical_id("Test-CognitoUserPool-dev")).is_some());
        assert!(graph.get(&logical_id("Test-CognitoUserPoolDomain-dev")).is_some());
    }
}
