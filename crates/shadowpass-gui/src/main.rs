//! ShadowPass - password generator and strength checker
//!
//! Built with GTK4 and Relm4.

mod app;
mod components;
mod config;

use anyhow::Result;
use clap::Parser;
use relm4::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// ShadowPass - generate, score, copy and save passwords
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse before GTK sees the arguments
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("shadowpass=info".parse()?))
        .init();

    tracing::info!("Starting ShadowPass");

    let config = config::Config::load(args.config)?;

    let app = RelmApp::new("io.github.shadowpass");
    // GTK would reject our own flags
    app.with_args(Vec::<String>::new()).run::<app::App>(config);

    Ok(())
}
