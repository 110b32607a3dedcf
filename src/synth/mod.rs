//! Turn a deployment file into one template.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::config::deployments::{DeploymentConfig, DeploymentFile};
use crate::config::settings::DeploymentContext;
use crate::pool::assembler::assemble_pool_with_cache;
use crate::proxy::assembler::assemble_proxy;
use crate::template::graph::{ResourceGraph, Template};

pub const DEFAULT_TEMPLATE_DESCRIPTION: &str = "Cognito M2M token cache";

/// Assemble a single deployment unit.
pub fn assemble(deployment: &DeploymentConfig, context: &DeploymentContext) -> ResourceGraph {
    match deployment {
        DeploymentConfig::Proxy(proxy) => assemble_proxy(&proxy.to_proxy_config()),
        DeploymentConfig::PoolWithCache(pool) => {
            assemble_pool_with_cache(&pool.to_pool_config(), context).graph
        }
    }
}

/// Assemble every deployment unit and merge the graphs. Fails only when two
/// units produce the same logical id.
pub fn synthesize(deployment_file: &DeploymentFile) -> Result<Template> {
    let context = &deployment_file.settings.environment;
    let mut graph = ResourceGraph::new();

    for (name, deployment) in &deployment_file.deployments {
        let unit = assemble(deployment, context);
        info!(deployment = %name, stage = %deployment.stage(), resources = unit.len(), "deployment assembled");
        graph
            .merge(unit)
            .with_context(|| format!("deployment '{}' collides with an earlier one", name))?;
    }

    let description = deployment_file
        .settings
        .description
        .clone()
        .unwrap_or_else(|| DEFAULT_TEMPLATE_DESCRIPTION.to_owned());

    Ok(Template::new(Some(description), graph))
}

/// Write the template as pretty JSON to `out`, or stdout when `None`.
pub fn write_template(template: &Template, out: Option<&Path>) -> Result<()> {
    let json = template.to_json_pretty()?;
    match out {
        Some(path) => {
            fs::write(path, json + "\n")
                .with_context(|| format!("cannot write template to '{}'", path.display()))?;
            info!(path = %path.display(), resources = template.graph.len(), "template written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}
