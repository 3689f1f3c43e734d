use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::data::filter::RegionFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One sentence per statistic
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Command-line options. Log verbosity comes from `RUST_LOG`.
#[derive(Debug, Parser)]
#[command(name = "consumption-stats")]
#[command(about = "Descriptive statistics of regional alcohol and tobacco spend")]
#[command(version)]
pub struct Cli {
    /// Read the table from a .csv, .json or .parquet file instead of the built-in one
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only include these regions (repeatable)
    #[arg(short, long = "region", value_name = "NAME")]
    pub regions: Vec<String>,

    /// Leave out these regions (repeatable)
    #[arg(short, long = "exclude", value_name = "NAME")]
    pub excluded: Vec<String>,
}

impl Cli {
    pub fn region_filter(&self) -> RegionFilter {
        RegionFilter::new(&self.regions, &self.excluded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_embedded_text_report() {
        let cli = Cli::try_parse_from(["consumption-stats"]).unwrap();
        assert!(cli.input.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.region_filter().is_empty());
    }

    #[test]
    fn repeated_region_flags_accumulate() {
        let cli = Cli::try_parse_from([
            "consumption-stats",
            "--region",
            "Wales",
            "-r",
            "Scotland",
            "--exclude",
            "North",
            "--format",
            "json",
        ])
        .unwrap();
        let filter = cli.region_filter();
        assert_eq!(filter.include.len(), 2);
        assert!(filter.exclude.contains("North"));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["consumption-stats", "--format", "xml"]).is_err());
    }
}
