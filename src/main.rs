#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use bicshare_core::{HttpSubmitter, UploadConfig, DEFAULT_ENDPOINT};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

/// bicshare - character upload wizard
#[derive(Parser, Debug)]
#[command(name = "bicshare-desktop")]
#[command(about = "Upload Neverwinter Nights characters with server, expiration and build tags")]
struct Args {
    /// Endpoint the multipart upload form is posted to
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Window title
    #[arg(short, long, default_value = "bicshare")]
    title: String,

    /// Tracing filter directive (overrides RUST_LOG)
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = match args.log_filter.as_deref() {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = UploadConfig::new(&args.endpoint)?;
    let submitter = HttpSubmitter::new(config.endpoint.clone())?;
    tracing::info!("Starting '{}' posting uploads to {}", args.title, submitter.endpoint());

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&args.title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .with_context(config)
        .with_context(submitter)
        .launch(app::App);

    Ok(())
}
