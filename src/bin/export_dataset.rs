use std::path::PathBuf;

use anyhow::Result;

use consumption_stats::data::loader;

/// Write the built-in regional table to Parquet so it can be fed back
/// through `consumption-stats --input`.
fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("consumption.parquet"));

    let dataset = loader::embedded_dataset()?;
    loader::write_parquet(&dataset, &output_path)?;

    println!("Wrote {} regions to {}", dataset.len(), output_path.display());
    Ok(())
}
