use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use consumption_stats::config::{Cli, OutputFormat};
use consumption_stats::data::{filter, loader};
use consumption_stats::build_report;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let dataset = match &cli.input {
        Some(path) => loader::load_file(path)?,
        None => loader::embedded_dataset()?,
    };

    let filter = cli.region_filter();
    let dataset = filter::apply(&dataset, &filter);
    if !filter.is_empty() {
        info!("{} regions after filtering", dataset.len());
    }

    let report = build_report(&dataset).context("computing statistics")?;

    match cli.format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json().context("encoding JSON")?),
    }
    Ok(())
}
