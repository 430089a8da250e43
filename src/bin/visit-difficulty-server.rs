// ABOUTME: Binary entry point for the visit difficulty HTTP server
// ABOUTME: Loads environment configuration, applies CLI overrides, and serves until Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Visit Difficulty Server Binary

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use visit_difficulty_server::{config::ServerConfig, logging, server, ServerResources};

#[derive(Parser)]
#[command(name = "visit-difficulty-server")]
#[command(about = "Visit difficulty API - congestion scores for Jeonju tourist areas")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the served area id
    #[arg(long)]
    area: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let config = ServerConfig::from_env()?.with_overrides(args.http_port, args.area)?;
    info!("{}", config.summary());

    let resources = ServerResources::from_config(config)?;
    display_available_endpoints(&resources.config.host, resources.config.http_port);

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    info!("Server stopped");
    Ok(())
}

/// Log the available endpoints
fn display_available_endpoints(host: &str, port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Status:     http://{host}:{port}/api/status");
    info!("   Areas:      http://{host}:{port}/api/areas?search=");
    info!("   Health:     http://{host}:{port}/health");
    info!("   Readiness:  http://{host}:{port}/ready");
    info!("=== End of Endpoint List ===");
}
