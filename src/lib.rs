//! Descriptive statistics (range, mean, mode, median, variance, standard
//! deviation) over regional alcohol and tobacco consumption figures.

pub mod config;
pub mod data;
pub mod report;
pub mod stats;

pub use data::model::{Column, ConsumptionDataset, RegionRecord};
pub use report::{Report, SeriesSummary, build_report, summarize};
pub use stats::StatsError;
