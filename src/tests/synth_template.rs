#[cfg(test)]
mod test {

    use crate::config::proc_loader::parse_and_validate;
    use crate::config::settings::{LogFormat, LoggingConfig, SettingsConfig};
    use crate::synth::{synthesize, write_template, DEFAULT_TEMPLATE_DESCRIPTION};
    use crate::template::resources::{RECORD_SET, REQUEST_VALIDATOR, USER_POOL};
    use crate::utils::logging::{resolve, LogLevel};

    const TWO_UNITS: &str = r#"
settings:
  environment:
    region: us-east-1
  description: token caches
deployments:
  tokens:
    type: pool_with_cache
    stage: dev
    cache_ttl_seconds: 600
    name_prefix: Test
    custom_domain:
      domain_name: example.com
      sub_domain: auth
      certificate_arn: arn:aws:acm:us-east-1:123456789012:certificate/abc
      hosted_zone_id: Z123
  legacy:
    type: proxy
    stage: legacy
    target_url: https://legacy.auth.us-east-1.amazoncognito.com/oauth2/token
    cache_ttl_seconds: 300
    disable_authorization_header_validation: true
"#;

    #[test]
    fn merges_every_deployment_into_one_template() {
        let cfg = parse_and_validate(TWO_UNITS).unwrap();
        let template = synthesize(&cfg).unwrap();

        // pool (2) + proxy with domain (10) + proxy without validator (6)
        assert_eq!(template.graph.len(), 18);
        assert_eq!(template.graph.count_of_type(USER_POOL), 1);
        assert_eq!(template.graph.count_of_type(REQUEST_VALIDATOR), 1);
        assert_eq!(template.graph.count_of_type(RECORD_SET), 1);

        let rendered = serde_json::to_value(&template).unwrap();
        assert_eq!(rendered["AWSTemplateFormatVersion"], "2010-09-09");
        assert_eq!(rendered["Description"], "token caches");
        assert_eq!(rendered["Resources"].as_object().unwrap().len(), 18);
        assert_eq!(rendered["Outputs"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn synthesis_is_deterministic() {
        let cfg = parse_and_validate(TWO_UNITS).unwrap();
        let first = synthesize(&cfg).unwrap().to_json_pretty().unwrap();
        let second = synthesize(&cfg).unwrap().to_json_pretty().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn colliding_deployments_are_rejected() {
        let yaml = r#"
deployments:
  a:
    type: proxy
    stage: dev
    target_url: https://a/oauth2/token
    cache_ttl_seconds: 60
  b:
    type: proxy
    stage: dev
    target_url: https://b/oauth2/token
    cache_ttl_seconds: 60
"#;
        let cfg = parse_and_validate(yaml).unwrap();
        let err = synthesize(&cfg).unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate logical id"));
        assert!(err.to_string().contains("deployment 'b' collides"));
    }

    #[test]
    fn default_description_is_used() {
        let yaml = r#"
deployments:
  a:
    type: proxy
    stage: dev
    target_url: https://a/oauth2/token
    cache_ttl_seconds: 60
"#;
        let template = synthesize(&parse_and_validate(yaml).unwrap()).unwrap();
        assert_eq!(template.description.as_deref(), Some(DEFAULT_TEMPLATE_DESCRIPTION));
    }

    #[test]
    fn writes_template_to_file() {
        let cfg = parse_and_validate(TWO_UNITS).unwrap();
        let template = synthesize(&cfg).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.json");
        write_template(&template, Some(&path)).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, serde_json::to_value(&template).unwrap());
    }

    #[test]
    fn cli_log_level_beats_file_level() {
        let settings = SettingsConfig {
            logging: Some(LoggingConfig::new("warn".to_string(), LogFormat::Json)),
            ..SettingsConfig::default()
        };

        let from_file = resolve(&settings, None);
        assert_eq!(from_file.level, "warn");
        assert_eq!(from_file.format, LogFormat::Json);

        let from_cli = resolve(&settings, Some(LogLevel::DEBUG));
        assert_eq!(from_cli.level, "debug");
        assert_eq!(from_cli.format, LogFormat::Json);
    }
}
