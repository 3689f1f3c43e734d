/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  embedded table / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → ConsumptionDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────────┐
///   │ ConsumptionDataset │  Vec<RegionRecord>, column series
///   └────────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  include / exclude regions → subset
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
