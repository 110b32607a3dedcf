use std::path::Path;
use anyhow::{anyhow, Result};

use crate::config::deployments::DeploymentFile;
use crate::config::proc_loader::file_to_config;
use crate::config::proc_validator::validate_deployment_file;

pub fn run(config_path: &str) -> Result<DeploymentFile> {
    let path = Path::new(config_path);
    file_to_config(path).map_err(|e| anyhow!(format!("Invalid config format: {}", e)))
}

pub fn validate(deployment_file: &DeploymentFile) -> Result<()> {
    validate_deployment_file(deployment_file).map_err(|errors| {
        anyhow!(
            "config is not valid, total errors:{}, \n{}",
            errors.len(),
            errors.join("\n")
        )
    })
}
