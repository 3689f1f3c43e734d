use log::debug;
use serde::Serialize;

use crate::data::model::{Column, ConsumptionDataset};
use crate::stats::{self, StatsError};

// ---------------------------------------------------------------------------
// SeriesSummary – the six statistics of one series
// ---------------------------------------------------------------------------

/// Statistics of one named series, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    pub name: String,
    pub range: (f64, f64),
    pub mean: f64,
    pub mode: f64,
    pub median: f64,
    /// Un-normalized sum of squared deviations.
    pub variance: f64,
    /// `sqrt(variance) / (n - 1)`.
    pub standard_deviation: f64,
}

/// Compute all six statistics for `series`.
pub fn summarize(name: &str, series: &[f64]) -> Result<SeriesSummary, StatsError> {
    let summary = SeriesSummary {
        name: name.to_string(),
        range: stats::range_of(series)?,
        mean: stats::mean(series)?,
        mode: stats::mode(series)?,
        median: stats::median(series)?,
        variance: stats::variance(series)?,
        standard_deviation: stats::stdev(series)?,
    };
    debug!("summarized {name} over {} values", series.len());
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Report – every series of the dataset
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub series: Vec<SeriesSummary>,
}

/// Summarize alcohol, then tobacco.
pub fn build_report(dataset: &ConsumptionDataset) -> Result<Report, StatsError> {
    let series = Column::ALL
        .iter()
        .map(|&col| summarize(col.name(), &dataset.series(col)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Report { series })
}

impl Report {
    /// Six lines per series: range, mean, mode, median, variance, standard deviation.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for s in &self.series {
            let name = &s.name;
            let lines = [
                format!(
                    "The range for {name} is {} to {}",
                    fmt_value(s.range.0),
                    fmt_value(s.range.1)
                ),
                format!("The mean of {name} is {}", fmt_value(s.mean)),
                format!("The mode of {name} is {}", fmt_value(s.mode)),
                format!("The median of {name} is {}", fmt_value(s.median)),
                format!("The variance of {name} is {}", fmt_value(s.variance)),
                format!(
                    "The standard deviation of {name} is {}",
                    fmt_value(s.standard_deviation)
                ),
            ];
            for line in &lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Shortest round-trip form, always with a decimal point (`2.0`, not `2`).
pub fn fmt_value(v: f64) -> String {
    format!("{v:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers_keep_decimal_point() {
        assert_eq!(fmt_value(2.0), "2.0");
        assert_eq!(fmt_value(4.02), "4.02");
        assert_eq!(fmt_value(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn summary_of_small_series() {
        let s = summarize("x", &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(s.range, (1.0, 4.0));
        assert_eq!(s.mean, 2.5);
        assert_eq!(s.mode, 1.0);
        assert_eq!(s.median, 2.5);
        assert_eq!(s.variance, 5.0);
    }

    #[test]
    fn single_value_series_fails_on_stdev() {
        assert_eq!(summarize("x", &[1.0]), Err(StatsError::DivisionByZero));
    }

    #[test]
    fn text_lines_follow_report_order() {
        let report = Report {
            series: vec![summarize("x", &[1.0, 2.0, 3.0]).unwrap()],
        };
        let text = report.render_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "The range for x is 1.0 to 3.0",
                "The mean of x is 2.0",
                "The mode of x is 1.0",
                "The median of x is 2.0",
                "The variance of x is 2.0",
                "The standard deviation of x is 0.7071067811865476",
            ]
        );
    }

    #[test]
    fn two_series_render_twelve_newline_terminated_lines() {
        let report = Report {
            series: vec![
                summarize("a", &[1.0, 2.0]).unwrap(),
                summarize("b", &[3.0, 5.0]).unwrap(),
            ],
        };
        let text = report.render_text();
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 12);
        assert_eq!(text.lines().nth(6), Some("The range for b is 3.0 to 5.0"));
    }
}
