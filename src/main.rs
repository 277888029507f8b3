//! provision-assistant — create the math tutor / weather assistant and record its id.
//!
//! Usage:
//!   provision-assistant                  Create the assistant, update assistants.json
//!   provision-assistant --print-schemas  Print the tool list and exit

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing::info;

use assistant_provisioner::config::{self, ProvisionerConfig};
use assistant_provisioner::instructions::math_tutor_spec;
use assistant_provisioner::openai::{AssistantsClient, Credential};
use assistant_provisioner::provision::Provisioner;
use assistant_provisioner::tools::tool_declarations;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "provision-assistant")]
#[command(version)]
#[command(about = "Register a tool-enabled assistant and record its id locally")]
struct Cli {
    /// Path to the optional TOML config file.
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: String,

    /// Override the registry file path from config.
    #[arg(long)]
    registry: Option<String>,

    /// Log level (debug, info, warn, error). Overrides config.
    #[arg(long)]
    log_level: Option<String>,

    /// Print the tool declarations as JSON and exit without network access.
    #[arg(long)]
    print_schemas: bool,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let dotenv_loaded = config::load_dotenv();

    let config_path = PathBuf::from(shellexpand::tilde(&cli.config).into_owned());
    let cfg = config::load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Initialize logging
    let level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if dotenv_loaded {
        info!("Loaded environment from .env");
    }

    if cli.print_schemas {
        return print_schemas();
    }

    let registry_path = match &cli.registry {
        Some(path) => PathBuf::from(cfg.resolve_path(path)),
        None => PathBuf::from(cfg.resolved_registry_path()),
    };

    run(&cfg, &registry_path).await
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

async fn run(cfg: &ProvisionerConfig, registry_path: &Path) -> Result<()> {
    let spec = math_tutor_spec(&cfg.assistant_name, &cfg.model);

    println!(
        "{} Creating assistant '{}' (model: {}, tools: {})",
        ">>>".green().bold(),
        spec.name,
        spec.model,
        spec.tools.len(),
    );

    let credential = Credential::from_env(&cfg.api_key_env)?;
    let provisioner = Provisioner::new(AssistantsClient::new(&cfg.api_base_url, credential));

    let replacement = provisioner
        .provision_and_record(&cfg.registry_label, &spec, registry_path)
        .await?;

    println!(
        "{} {} -> {} (saved to {})",
        ">>>".green().bold(),
        cfg.registry_label,
        replacement.record.id.bold(),
        registry_path.display(),
    );
    if let Some(previous) = replacement.previous {
        println!(
            "{} previous assistant {} is no longer registered",
            "!!!".yellow().bold(),
            previous,
        );
    }

    Ok(())
}

fn print_schemas() -> Result<()> {
    let json = serde_json::to_string_pretty(&tool_declarations())
        .context("Failed to serialize tool declarations")?;
    println!("{json}");
    Ok(())
}
