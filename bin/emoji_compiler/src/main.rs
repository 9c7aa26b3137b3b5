extern crate tracing as log;

use std::path::Path;

use anyhow::Context;

pub mod cli;
pub mod config;
pub mod logging;

use crate::config::Config;
use ::config::Configuration;

fn load_config(args: &cli::CliOptions) -> anyhow::Result<Config> {
    let mut config = match args.config {
        Some(ref path) => {
            log::info!("Loading config from: {}", path.display());

            ::config::load::<Config>(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => Config::default(),
    };

    log::debug!("Applying environment overrides to configuration");
    config.configure();

    if let Some(ref grouped) = args.grouped {
        config.sources.grouped = grouped.clone();
    }

    if let Some(ref ordered) = args.ordered {
        config.sources.ordered = ordered.clone();
    }

    if let Some(ref dir) = args.out_dir {
        config.output.dir = dir.clone();
    }

    Ok(config)
}

fn read_source(path: &Path) -> anyhow::Result<String> {
    log::debug!("Reading {}", path.display());

    std::fs::read_to_string(path).with_context(|| format!("reading source {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = cli::CliOptions::parse()?;

    log::dispatcher::set_global_default(logging::generate(args.verbose)?)?;

    log::debug!("Arguments: {:?}", args);

    let config = load_config(&args)?;

    let grouped = read_source(&config.sources.grouped)?;
    let ordered = read_source(&config.sources.ordered)?;

    let data = match emoji_data::compile(&grouped, &ordered) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Compilation failed: {e}");
            return Err(e).context("compiling emoji data");
        }
    };

    log::info!(
        "Compiled {} emojis in {} groups ({} ordered, {} components)",
        data.by_emoji.len(),
        data.by_group.len(),
        data.ordered.len(),
        data.components.len()
    );

    let artifacts = emoji_data::emit::render(&data, &config.output.layout())?;

    if args.check {
        log::info!("Check passed, skipping write of {} documents", artifacts.len());
        return Ok(());
    }

    for path in emoji_data::emit::write_all(&artifacts, &config.output.dir)? {
        log::info!("Wrote {}", path.display());
    }

    Ok(())
}
