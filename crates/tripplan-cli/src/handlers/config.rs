use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tripplan_runtime::{ApiUrlSource, HttpPlanningClient, ResolvedApiUrl};

use crate::context::AppContext;
use crate::types::OutputFormat;

#[derive(Serialize)]
struct ConfigReport<'a> {
    data_dir: &'a Path,
    config_path: &'a Path,
    config_file_exists: bool,
    api_base_url: Option<&'a str>,
    effective_api_url: &'a ResolvedApiUrl,
    endpoint: Option<String>,
}

pub fn show(ctx: &AppContext) -> Result<()> {
    let endpoint = HttpPlanningClient::new(&ctx.api_url.url)
        .ok()
        .map(|client| client.endpoint().to_string());

    let report = ConfigReport {
        data_dir: &ctx.data_dir,
        config_path: &ctx.config_path,
        config_file_exists: ctx.config_path.exists(),
        api_base_url: ctx.config.api_base_url.as_deref(),
        effective_api_url: &ctx.api_url,
        endpoint,
    };

    match ctx.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Plain => {
            println!("Data directory: {}", report.data_dir.display());
            let suffix = if report.config_file_exists { "" } else { " (not created)" };
            println!("Config file:    {}{}", report.config_path.display(), suffix);
            println!(
                "API base URL:   {} (from {})",
                ctx.api_url.url, ctx.api_url.source
            );
            match &report.endpoint {
                Some(endpoint) => println!("Endpoint:       {}", endpoint),
                None => println!("Endpoint:       invalid base URL"),
            }
            if ctx.api_url.source != ApiUrlSource::ConfigFile
                && let Some(saved) = report.api_base_url
            {
                println!("Saved URL:      {} (overridden)", saved);
            }
        }
    }

    Ok(())
}

pub fn set(ctx: &AppContext, url: &str) -> Result<()> {
    let url = url.trim();
    let client = HttpPlanningClient::new(url)?;

    let mut config = ctx.config.clone();
    config.api_base_url = Some(url.to_string());
    save(ctx, &config)?;

    tracing::info!(path = %ctx.config_path.display(), "saved api base url");
    println!("API base URL set to {}", url);
    println!("Trip requests will be sent to {}", client.endpoint());
    Ok(())
}

pub fn unset(ctx: &AppContext) -> Result<()> {
    if ctx.config.api_base_url.is_none() {
        println!("No API base URL is saved");
        return Ok(());
    }

    let mut config = ctx.config.clone();
    config.api_base_url = None;
    save(ctx, &config)?;

    println!("Removed saved API base URL");
    Ok(())
}

fn save(ctx: &AppContext, config: &tripplan_runtime::Config) -> Result<()> {
    config
        .save_to(&ctx.config_path)
        .with_context(|| format!("Failed to write {}", ctx.config_path.display()))
}
