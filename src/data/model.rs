use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column – a numeric column of the consumption table
// ---------------------------------------------------------------------------

/// The numeric columns a series can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Alcohol,
    Tobacco,
}

impl Column {
    /// All numeric columns in report order.
    pub const ALL: [Column; 2] = [Column::Alcohol, Column::Tobacco];

    /// Lower-case series name used in the report.
    pub fn name(self) -> &'static str {
        match self {
            Column::Alcohol => "alcohol",
            Column::Tobacco => "tobacco",
        }
    }

    /// Header as it appears in the source table.
    pub fn header(self) -> &'static str {
        match self {
            Column::Alcohol => "Alcohol",
            Column::Tobacco => "Tobacco",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// RegionRecord – one row of the table
// ---------------------------------------------------------------------------

/// Average weekly household spend for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionRecord {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Alcohol")]
    pub alcohol: f64,
    #[serde(rename = "Tobacco")]
    pub tobacco: f64,
}

impl RegionRecord {
    pub fn value(&self, column: Column) -> f64 {
        match column {
            Column::Alcohol => self.alcohol,
            Column::Tobacco => self.tobacco,
        }
    }
}

// ---------------------------------------------------------------------------
// ConsumptionDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// All rows in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsumptionDataset {
    pub records: Vec<RegionRecord>,
}

impl ConsumptionDataset {
    pub fn from_records(records: Vec<RegionRecord>) -> Self {
        ConsumptionDataset { records }
    }

    /// Values of one column in row order.
    pub fn series(&self, column: Column) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    pub fn alcohol(&self) -> Vec<f64> {
        self.series(Column::Alcohol)
    }

    pub fn tobacco(&self) -> Vec<f64> {
        self.series(Column::Tobacco)
    }

    /// Region names in row order.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.region.as_str())
    }

    /// Rows at `indices`, in the order given.
    pub fn subset(&self, indices: &[usize]) -> Self {
        let records = indices
            .iter()
            .filter_map(|&i| self.records.get(i).cloned())
            .collect();
        ConsumptionDataset { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
