// Copyright (c) 2025 - Cowboy AI, Inc.
//! PBM Profiles Tool
//!
//! Lists storage requirement profiles, or resolves one profile name to its id.
//!
//! Run with: cargo run --bin pbm-profiles --features http [-- <profile name>]
//! See `--help` for usage.
//!
//! Prerequisites:
//! 1. vCenter reachable via the PBM_URL environment variable
//! 2. An authenticated session cookie in PBM_SESSION
//!
//! Optional: PBM_TIMEOUT_SECS, PBM_INSECURE.

use anyhow::{Context, Result};
use clap::Parser;
use pbm_client::{
    adapters::HttpSession, Client, PbmConfig, Profile, ProfileCategory, ProfileResourceType,
};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "pbm-profiles")]
#[command(about = "List storage requirement profiles or resolve a profile name to its id")]
struct Args {
    /// Profile name to resolve; lists all profiles when omitted
    name: Option<String>,
}

/// Column layout of the profile table
const HEADERS: [&str; 3] = ["Id:", "Name:", "Description:"];

fn profile_rows(profiles: &[Profile]) -> Vec<[String; 3]> {
    profiles
        .iter()
        .map(|p| {
            let base = p.base();
            [
                base.profile_id.to_string(),
                base.name.clone(),
                base.description.clone().unwrap_or_default(),
            ]
        })
        .collect()
}

/// Render rows as left-aligned columns separated by two spaces
fn render_table(rows: &[[String; 3]]) -> String {
    let mut widths = HEADERS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(str::to_string);
    for row in std::iter::once(&header).chain(rows) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = PbmConfig::from_env().context("Invalid PBM configuration")?;
    info!("Connecting to PBM at {}{}", config.base_url, config.endpoint_path);

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let session = HttpSession::new(&config).context("Failed to create HTTP session")?;
    let client = Client::with_endpoint(&cancel, &session, config.endpoint())
        .await
        .context("Failed to connect to PBM")?;

    if let Some(name) = args.name {
        match client.profile_id_by_name(&cancel, &name).await {
            Ok(id) => println!("{}", id),
            Err(e) => {
                error!("{}", e);
                return Err(e.into());
            }
        }
        return Ok(());
    }

    let ids = client
        .query_profile(&cancel, &ProfileResourceType::storage(), ProfileCategory::Requirement)
        .await
        .context("Failed to query profiles")?;
    let profiles = client
        .retrieve_content(&cancel, &ids)
        .await
        .context("Failed to retrieve profiles")?;

    print!("{}", render_table(&profile_rows(&profiles)));
    Ok(())
}
