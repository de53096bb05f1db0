pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod http;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::{Dataset, ImportService, ProbeService, ServerService};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_import(dataset: Dataset, path: &Path) -> Result<()> {
    let config = AppConfig::new();
    let service = ImportService::new(config)?;
    service.run(dataset, path)?;
    Ok(())
}

pub fn handle_probe(urls: &[String], attempts: Option<usize>, delay_ms: Option<u64>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = ProbeService::new(&config, attempts, delay_ms)?;
        service.run(urls).await?;
        Ok(())
    })
}
