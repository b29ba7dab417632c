//! agentgen CLI - installer asset generator
//!
//! Usage: agentgen [-v] <COMMAND> [--dir <DIR>]
//!
//! Commands:
//!   generate       Produce the NMState manifest and acquire the base ISO
//!   validate       Reload and validate the persisted NMState manifest
//!   node-zero-ip   Print the bootstrap IP of the first host
//!   network-files  Print the rendered NetworkManager files

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use agentgen::application::{AssetFactory, GenerateUseCase, InspectUseCase};
use agentgen::config::{self, GeneratorConfig};
use agentgen::infrastructure::{AssetWriter, DirectoryFetcher};

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dir = cli.command.dir().clone();
    let (config, warnings) = config::load(Some(dir.as_path())).context("failed to load configuration")?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    match &cli.command {
        Commands::Generate { .. } => cmd_generate(&dir, &config, cli.json),
        Commands::Validate { .. } => cmd_validate(&dir, &config, cli.json),
        Commands::NodeZeroIp { .. } => cmd_node_zero_ip(&dir, &config, cli.json),
        Commands::NetworkFiles { .. } => cmd_network_files(&dir, &config, cli.json),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_generate(dir: &Path, config: &GeneratorConfig, json: bool) -> Result<()> {
    let factory = AssetFactory::new(config);
    let mut use_case = GenerateUseCase::new(factory.nmstate_config(), factory.base_iso());

    let result = use_case
        .execute(&DirectoryFetcher::new(dir), &AssetWriter::new(dir))
        .with_context(|| format!("failed to generate assets in {}", dir.display()))?;

    if json {
        let output = serde_json::json!({
            "written": result.written,
            "manifest_reused": result.manifest_reused,
            "base_iso": result.base_iso,
        });
        println!("{}", output);
        return Ok(());
    }

    for path in &result.written {
        println!("wrote {}", path.display());
    }
    if result.manifest_reused {
        println!("reused existing NMState manifest");
    }
    if let Some(iso) = &result.base_iso {
        println!("base ISO {}", iso.display());
    }
    Ok(())
}

fn inspect(dir: &Path, config: &GeneratorConfig) -> Result<InspectUseCase> {
    let factory = AssetFactory::new(config);
    InspectUseCase::load(factory.nmstate_config(), &DirectoryFetcher::new(dir))
        .with_context(|| format!("failed to load NMState manifest from {}", dir.display()))
}

fn cmd_validate(dir: &Path, config: &GeneratorConfig, json: bool) -> Result<()> {
    let inspect = inspect(dir, config)?;
    let names = inspect.record_names();

    if json {
        println!("{}", serde_json::json!({ "valid": true, "records": names }));
    } else {
        println!("NMState manifest is valid ({} hosts)", names.len());
        for name in names {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn cmd_node_zero_ip(dir: &Path, config: &GeneratorConfig, json: bool) -> Result<()> {
    let ip = inspect(dir, config)?
        .node_zero_ip()
        .context("failed to determine node zero IP")?;

    if json {
        println!("{}", serde_json::json!({ "node_zero_ip": ip }));
    } else {
        println!("{}", ip);
    }
    Ok(())
}

fn cmd_network_files(dir: &Path, config: &GeneratorConfig, json: bool) -> Result<()> {
    let files = inspect(dir, config)?
        .network_config_files()
        .context("failed to render network files")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
        return Ok(());
    }

    for file in files {
        println!("# {}", file.file_path);
        print!("{}", file.file_contents);
        if !file.file_contents.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
