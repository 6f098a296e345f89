mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use scal::{JalaliDate, Renderer};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let today = JalaliDate::from(chrono::Local::now().date_naive());
    let request = cli
        .options()
        .resolve(today)
        .context("validation error")?;

    // colored already honours NO_COLOR, CLICOLOR and a non-terminal stdout
    if cli.no_color {
        colored::control::set_override(false);
    }
    let color = !cli.no_color;
    info!(%today, mode = %request.mode, color, "rendering calendar");

    let renderer = Renderer::new().with_color(color).with_today(today);
    print!("{}", renderer.render(&request));
    Ok(())
}
