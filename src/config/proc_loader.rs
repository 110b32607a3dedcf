use anyhow::{anyhow, Result};
use regex::Regex;
use std::{fs, path::Path};
use tracing::{debug, error};

use crate::config::deployments::DeploymentFile;
use crate::config::proc_validator;
use crate::config::settings::{LogFormat, LoggingConfig};
use crate::utils::constants::DEFAULT_LOG_LEVEL;

/// Read a deployment file from disk, expand `${VAR}` references and parse it.
pub fn file_to_config(path: &Path) -> Result<DeploymentFile> {
    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("cannot read config '{}': {}", path.display(), e))?;

    let expanded = expand_env_vars(&content)?;
    parse_config(&expanded)
}

/// Parse YAML and apply defaults. Does not validate.
pub fn parse_config(content: &str) -> Result<DeploymentFile> {
    let mut deployment_file: DeploymentFile = serde_yaml::from_str(content)
        .inspect_err(|e| error!("parse config error: {}", e))?;

    // Apply defaults
    if deployment_file.settings.logging.is_none() {
        deployment_file.settings.logging = Some(LoggingConfig::new(
            DEFAULT_LOG_LEVEL.to_owned(),
            LogFormat::from_env(),
        ));
    }
    debug!(deployments = deployment_file.deployments.len(), "config parsed");

    Ok(deployment_file)
}

/// Parse and validate in one go.
pub fn parse_and_validate(content: &str) -> Result<DeploymentFile> {
    let deployment_file = parse_config(&expand_env_vars(content)?)?;
    proc_validator::validate_deployment_file(&deployment_file).map_err(|errors| {
        anyhow!(
            "config is not valid, total errors:{}, \n{}",
            errors.len(),
            errors.join("\n")
        )
    })?;
    Ok(deployment_file)
}

/// `${VAR}` or `${VAR:default}`; unset variables without a default become "".
pub fn expand_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{(\w+)(?::([^\}]+))?\}")?;
    Ok(re
        .replace_all(input, |caps: &regex::Captures| {
            let var = &caps[1];
            let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            std::env::var(var).unwrap_or_else(|_| default.to_string())
        })
        .to_string())
}
