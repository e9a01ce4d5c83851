//! clipcopy - a window with a text area and a button that copies it to the clipboard.

use anyhow::Result;
use clap::Parser;
use clipcopy::app;
use clipcopy::utils::AppSettings;

#[derive(Parser)]
#[command(version, about)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt::init();

    app::run(AppSettings::default())?;

    Ok(())
}
