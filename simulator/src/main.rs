mod config;
mod logger;
mod scenario;

use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use crate::{config::Config, scenario::Scenario};

fn main() -> Result<()> {
    let mut config: Config = Config::parse();
    if let Some(path) = config.config_file.as_ref() {
        if config.generate_config_template {
            if Path::new(path).exists() {
                eprintln!("Config file already exists at {}", path);
                return Ok(());
            }

            let mut file = File::create(path).context("Error while creating config file")?;
            let json = serde_json::to_string_pretty(&config)
                .context("Error while serializing config file")?;
            file.write_all(json.as_bytes())
                .context("Error while writing config file")?;
            println!("Config file template generated at {}", path);
            return Ok(());
        }

        let file = File::open(path).context("Error while opening config file")?;
        config = serde_json::from_reader(file).context("Error while reading config file")?;
    } else if config.generate_config_template {
        eprintln!("Provided config file path is required to generate the template with --config-file");
        return Ok(());
    }

    logger::init(&config.log)?;
    info!("Pet Arena Simulator v{}", config::VERSION);

    let path = config
        .scenario
        .as_ref()
        .context("No scenario provided, use --scenario <FILE>")?;
    let json = fs::read_to_string(path)
        .with_context(|| format!("Error while reading scenario {}", path))?;
    let scenario = Scenario::from_json(&json)?;
    debug!(
        "Loaded scenario {} with {} accounts and {} steps",
        path,
        scenario.accounts.len(),
        scenario.steps.len()
    );

    let ledger = scenario.run(config.seed)?;
    info!(
        "Scenario complete at block {} ({} pets, {} competitions)",
        ledger.block_height(),
        ledger.storage().pets.len(),
        ledger.storage().competitions.len()
    );

    let snapshot = serde_json::to_string_pretty(&ledger.snapshot())
        .context("Error while serializing ledger snapshot")?;
    match config.output.as_ref() {
        Some(output) => {
            fs::write(output, snapshot)
                .with_context(|| format!("Error while writing snapshot to {}", output))?;
            info!("Snapshot written to {}", output);
        }
        None => println!("{}", snapshot),
    }

    Ok(())
}
