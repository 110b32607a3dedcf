//! Deployment file validation with aggregated errors.
//! - Aggregates all blocking issues into Vec<String>
//! - Blocking: anything that leaves a deployment unit without a usable value
//!   (empty stage, zero TTL, empty target URL, incomplete custom domain)
//! - Advisory: values the provisioning engine will judge (cache tier, TTL
//!   ceiling, URL scheme, stage charset) are only logged with `warn!`

use regex::Regex;
use tracing::{error, info, warn};

use crate::config::deployments::{CustomDomainSpec, DeploymentConfig, DeploymentFile};
use crate::config::settings::SettingsConfig;
use crate::proxy::config::CACHE_SIZE_TIERS;
use crate::utils::constants::MAX_CACHE_TTL_SECONDS;

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub fn validate_deployment_file(cfg: &DeploymentFile) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);

    if cfg.deployments.is_empty() {
        errors.push("config: 'deployments' is empty; at least one deployment required".to_string());
    }

    for (name, deployment) in &cfg.deployments {
        validate_deployment_basics(name, deployment, &mut errors);

        match deployment {
            DeploymentConfig::Proxy(proxy) => {
                let url = proxy.target_url.trim();
                if url.is_empty() {
                    errors.push(format!("deployments.{}: target_url cannot be empty", name));
                } else if !(url.starts_with("https://") || url.starts_with("http://")) {
                    warn!(
                        "deployments.{}: target_url '{}' is not an absolute http(s) URL",
                        name, url
                    );
                }
            }
            DeploymentConfig::PoolWithCache(pool) => {
                if let Some(user_pool) = &pool.user_pool {
                    if user_pool.properties.contains_key("UserPoolName") {
                        warn!(
                            "deployments.{}: user_pool.properties.UserPoolName is ignored; the pool name is computed",
                            name
                        );
                    }
                }
            }
        }

        if let Some(domain) = deployment.custom_domain() {
            validate_custom_domain(name, domain, &mut errors);
        }
    }

    if errors.is_empty() {
        info!("config valid");
        Ok(())
    } else {
        error!("configuration validation errors ({}):", errors.len());
        for e in &errors {
            error!(" - {}", e);
        }
        Err(errors)
    }
}

/// SETTINGS VALIDATION
fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if let Some(logging) = &settings.logging {
        let valid = ["trace", "debug", "info", "warn", "error"];
        if !valid.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' invalid; allowed: {:?}",
                logging.level, valid
            ));
        }
    }

    if let Some(region) = &settings.environment.region {
        if region.trim().is_empty() {
            errors.push("settings.environment.region cannot be empty when present".to_string());
        }
    }
}

/// DEPLOYMENT BASICS shared by every unit type
fn validate_deployment_basics(name: &str, deployment: &DeploymentConfig, errors: &mut Vec<String>) {
    let stage = deployment.stage();
    if stage.trim().is_empty() {
        errors.push(format!("deployments.{}: stage cannot be empty", name));
    } else {
        // stage is used verbatim in names, nothing escapes it
        let stage_charset = Regex::new(r"^[A-Za-z0-9_-]+$");
        if matches!(stage_charset, Ok(re) if !re.is_match(stage)) {
            warn!(
                "deployments.{}: stage '{}' contains characters the gateway may reject in stage names",
                name, stage
            );
        }
    }

    let ttl = deployment.cache_ttl_seconds();
    if ttl == 0 {
        errors.push(format!("deployments.{}: cache_ttl_seconds must be > 0", name));
    } else if ttl > MAX_CACHE_TTL_SECONDS {
        warn!(
            "deployments.{}: cache_ttl_seconds ({}) exceeds the gateway maximum of {}",
            name, ttl, MAX_CACHE_TTL_SECONDS
        );
    }

    if let Some(size) = deployment.cache_size() {
        if !size.is_known_tier() {
            warn!(
                "deployments.{}: cache_size '{}' is not one of {:?}; provisioning will reject it",
                name, size, CACHE_SIZE_TIERS
            );
        }
    }
}

fn validate_custom_domain(name: &str, domain: &CustomDomainSpec, errors: &mut Vec<String>) {
    let fields = [
        ("domain_name", &domain.domain_name),
        ("sub_domain", &domain.sub_domain),
        ("certificate_arn", &domain.certificate_arn),
        ("hosted_zone_id", &domain.hosted_zone_id),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            errors.push(format!("deployments.{}.custom_domain: {} cannot be empty", name, field));
        }
    }

    if domain.domain_name.ends_with('.') || domain.sub_domain.ends_with('.') {
        errors.push(format!(
            "deployments.{}.custom_domain: domain_name and sub_domain must not end with '.'",
            name
        ));
    }
}
