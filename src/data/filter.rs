use std::collections::BTreeSet;

use log::warn;

use super::model::ConsumptionDataset;

// ---------------------------------------------------------------------------
// Region filter: which rows enter the statistics
// ---------------------------------------------------------------------------

/// Include / exclude sets of region names.
///
/// An empty include set means "every region". Exclusion is applied after
/// inclusion, so a region named in both is dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionFilter {
    pub include: BTreeSet<String>,
    pub exclude: BTreeSet<String>,
}

impl RegionFilter {
    pub fn new<I, E>(include: I, exclude: E) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        RegionFilter {
            include: normalize(include),
            exclude: normalize(exclude),
        }
    }

    /// Whether the filter lets every row through.
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn accepts(&self, region: &str) -> bool {
        (self.include.is_empty() || self.include.contains(region)) && !self.exclude.contains(region)
    }
}

fn normalize<I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|n| n.as_ref().trim().to_string())
        .filter(|n| !n.is_empty())
        .collect()
}

/// Return indices of rows that pass the filter.
///
/// Names that match no region are logged and otherwise ignored.
pub fn filtered_indices(dataset: &ConsumptionDataset, filter: &RegionFilter) -> Vec<usize> {
    let known: BTreeSet<&str> = dataset.regions().collect();
    for name in filter.include.iter().chain(&filter.exclude) {
        if !known.contains(name.as_str()) {
            warn!("region filter names unknown region '{name}'");
        }
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| filter.accepts(&r.region))
        .map(|(i, _)| i)
        .collect()
}

/// Convenience: the filtered dataset itself.
pub fn apply(dataset: &ConsumptionDataset, filter: &RegionFilter) -> ConsumptionDataset {
    if filter.is_empty() {
        return dataset.clone();
    }
    dataset.subset(&filtered_indices(dataset, filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::RegionRecord;

    fn dataset() -> ConsumptionDataset {
        ConsumptionDataset::from_records(
            ["North", "Wales", "Scotland"]
                .iter()
                .enumerate()
                .map(|(i, r)| RegionRecord {
                    region: r.to_string(),
                    alcohol: i as f64,
                    tobacco: i as f64,
                })
                .collect(),
        )
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &RegionFilter::default()), vec![0, 1, 2]);
    }

    #[test]
    fn include_then_exclude() {
        let ds = dataset();
        let f = RegionFilter::new([" Wales", "Scotland"], ["Scotland"]);
        assert_eq!(filtered_indices(&ds, &f), vec![1]);
    }

    #[test]
    fn exclude_only() {
        let ds = dataset();
        let f = RegionFilter::new(Vec::<String>::new(), ["North"]);
        let sub = apply(&ds, &f);
        assert_eq!(sub.regions().collect::<Vec<_>>(), vec!["Wales", "Scotland"]);
    }

    #[test]
    fn unknown_region_selects_nothing() {
        let ds = dataset();
        let f = RegionFilter::new(["Atlantis"], Vec::<String>::new());
        assert!(apply(&ds, &f).is_empty());
    }
}
