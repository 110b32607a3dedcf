use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use m2m_token_cache::synth;
use m2m_token_cache::utils::config_loader;
use m2m_token_cache::utils::constants::DEFAULT_CONFIG_PATH;
use m2m_token_cache::utils::logging;
use m2m_token_cache::utils::logging::LogLevel;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: String,
    /// Where to write the template; stdout when omitted
    #[arg(short, long, env = "OUT")]
    out: Option<PathBuf>,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let deployment_file = config_loader::run(&args.config)?;
    logging::run(&deployment_file.settings, args.log_level);

    // -------------------------------
    // 2. Validate
    // -------------------------------

    config_loader::validate(&deployment_file)?;

    // -------------------------------
    // 3. Assemble every deployment unit and write the template
    // -------------------------------

    info!(config = %args.config, deployments = deployment_file.deployments.len(), "synthesizing");
    let template = synth::synthesize(&deployment_file)?;
    synth::write_template(&template, args.out.as_deref())?;

    Ok(())
}
