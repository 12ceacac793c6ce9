pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod export;
pub mod search;
pub mod services;
pub mod stats;

#[cfg(test)]
mod fixtures;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::report::ReportService;
use crate::services::server::ServerService;

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

pub fn handle_top_reviewers(limit: Option<usize>) -> Result<()> {
    ReportService::new(AppConfig::new())?.top_reviewers(limit)
}

pub fn handle_search(query: &str) -> Result<()> {
    ReportService::new(AppConfig::new())?.search(query)
}

pub fn handle_stats() -> Result<()> {
    ReportService::new(AppConfig::new())?.stats()
}

pub fn handle_export(dir: Option<&str>) -> Result<()> {
    ReportService::new(AppConfig::new())?.export(dir)
}
