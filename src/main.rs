//! CLI entry point for daq_template.
//!
//! A minimal run-control driver. It loads the application configuration, creates every
//! enabled module through the registry and drives it through one run:
//!
//! ```text
//! init -> conf -> start -> stop -> (report telemetry) -> scrap
//! ```
//!
//! # Usage
//!
//! ```bash
//! daq_template run --config config/daq_template.toml
//! daq_template list
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use daq_template::appfwk::{DaqModule, ModuleRegistry};
use daq_template::config::{AppConfig, DEFAULT_CONFIG_PATH};
use daq_template::opmon::InfoCollector;
use daq_template::tracing_setup;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daq_template")]
#[command(about = "Drive template DAQ modules through one run", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the configured modules and run them through the command sequence
    Run {
        /// Application configuration file
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// List the module types this build can create
    List,
}

const RUN_SEQUENCE: [&str; 2] = ["start", "stop"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config } => run(config),
        Commands::List => {
            for module_type in ModuleRegistry::with_builtin().list_types() {
                println!("{module_type}");
            }
            Ok(())
        }
    }
}

fn run(config_path: PathBuf) -> Result<()> {
    let config = AppConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    config.validate()?;
    tracing_setup::init_from_config(&config)?;

    tracing::info!(application = %config.application.name, "starting run control");

    let registry = ModuleRegistry::with_builtin();
    let mut modules: Vec<Box<dyn DaqModule>> = Vec::new();
    for def in config.enabled_modules() {
        let mut module = registry.create(&def.r#type, def.name.clone())?;
        module.init(&def.init_payload()?)?;
        module.execute_command("conf", &def.conf_payload()?)?;
        modules.push(module);
    }

    for command in RUN_SEQUENCE {
        for module in &mut modules {
            module
                .execute_command(command, &serde_json::Value::Null)
                .with_context(|| format!("{command} on {}", module.name()))?;
        }
    }

    for module in &modules {
        let mut collector = InfoCollector::new();
        module.get_info(&mut collector, config.application.opmon_level)?;
        tracing::info!(module = module.name(), info = %collector.to_json(), "telemetry");
    }

    for module in &mut modules {
        module.execute_command("scrap", &serde_json::Value::Null)?;
    }

    tracing::info!(modules = modules.len(), "run complete");
    Ok(())
}
