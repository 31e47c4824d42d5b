use std::fmt;

use super::model::{LaunchDataset, LaunchRecord};

/// Dropdown value standing for "every site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Control state: the two user inputs
// ---------------------------------------------------------------------------

/// Site dropdown selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value; [`ALL_SITES`] maps to [`SiteSelection::All`].
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.site == *site,
        }
    }

    /// Label shown in the dropdown.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{ALL_SITES}"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

/// Inclusive payload mass interval in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        PayloadRange { min, max }
    }

    /// An inverted range (`min > max`) contains nothing.
    pub fn contains(&self, mass: f64) -> bool {
        self.min <= mass && mass <= self.max
    }
}

/// Everything the view functions read besides the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl ControlState {
    /// Initial controls: all sites, payload range spanning the dataset.
    /// Falls back to `fallback` when the dataset is empty.
    pub fn for_dataset(dataset: &LaunchDataset, fallback: PayloadRange) -> Self {
        let payload = dataset
            .payload_bounds
            .map(|(lo, hi)| PayloadRange::new(lo, hi))
            .unwrap_or(fallback);
        ControlState {
            site: SiteSelection::All,
            payload,
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Records belonging to the selected site (all records for `All`),
/// in dataset order.
pub fn site_records<'a>(
    dataset: &'a LaunchDataset,
    site: &'a SiteSelection,
) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
    dataset.records.iter().filter(move |rec| site.matches(rec))
}

/// Return indices of records shown on the scatter chart.
///
/// A record passes when:
/// * it belongs to the selected site (any site for `All`)
/// * its payload mass lies inside the inclusive payload range
pub fn scatter_indices(dataset: &LaunchDataset, controls: &ControlState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            controls.site.matches(rec) && controls.payload.contains(rec.payload_mass_kg)
        })
        .map(|(i, _)| i)
        .collect()
}

/// Chart title for the scatter view.
pub fn scatter_title(site: &SiteSelection) -> String {
    format!("Correlation between Payload and Success for site {site}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::OutcomeClass;

    fn rec(site: &str, mass: f64, class: OutcomeClass) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome: class,
            booster_category: "FT".to_string(),
        }
    }

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            rec("A", 500.0, OutcomeClass::Success),
            rec("A", 1500.0, OutcomeClass::Failure),
            rec("B", 800.0, OutcomeClass::Success),
        ])
    }

    fn controls(site: SiteSelection, min: f64, max: f64) -> ControlState {
        ControlState {
            site,
            payload: PayloadRange::new(min, max),
        }
    }

    #[test]
    fn all_sites_with_range_keeps_in_range_records_in_order() {
        let ds = sample();
        let idx = scatter_indices(&ds, &controls(SiteSelection::All, 0.0, 1000.0));
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn site_selection_restricts_before_range() {
        let ds = sample();
        let c = controls(SiteSelection::from_value("A"), 0.0, 10000.0);
        assert_eq!(scatter_indices(&ds, &c), vec![0, 1]);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = sample();
        let c = controls(SiteSelection::All, 500.0, 1500.0);
        assert_eq!(scatter_indices(&ds, &c), vec![0, 1, 2]);
    }

    #[test]
    fn dataset_extremes_include_everything() {
        let ds = sample();
        let c = ControlState::for_dataset(&ds, PayloadRange::new(0.0, 10000.0));
        assert_eq!(c.payload, PayloadRange::new(500.0, 1500.0));
        assert_eq!(scatter_indices(&ds, &c).len(), ds.len());
    }

    #[test]
    fn inverted_range_is_empty() {
        let ds = sample();
        let c = controls(SiteSelection::All, 2000.0, 100.0);
        assert!(scatter_indices(&ds, &c).is_empty());
    }

    #[test]
    fn output_is_exactly_the_in_range_subset() {
        let ds = sample();
        for (lo, hi) in [(0.0, 499.0), (500.0, 500.0), (600.0, 1600.0), (0.0, 10000.0)] {
            let c = controls(SiteSelection::All, lo, hi);
            let expected: Vec<usize> = ds
                .records
                .iter()
                .enumerate()
                .filter(|(_, r)| lo <= r.payload_mass_kg && r.payload_mass_kg <= hi)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(scatter_indices(&ds, &c), expected, "range [{lo}, {hi}]");
        }
    }

    #[test]
    fn repeated_evaluation_is_identical() {
        let ds = sample();
        let c = controls(SiteSelection::from_value("B"), 0.0, 1000.0);
        assert_eq!(scatter_indices(&ds, &c), scatter_indices(&ds, &c));
    }

    #[test]
    fn sentinel_round_trips_through_display() {
        assert_eq!(SiteSelection::from_value(ALL_SITES), SiteSelection::All);
        assert_eq!(SiteSelection::All.to_string(), "ALL");
        assert_eq!(
            scatter_title(&SiteSelection::from_value("KSC LC-39A")),
            "Correlation between Payload and Success for site KSC LC-39A"
        );
    }

    #[test]
    fn empty_dataset_falls_back_to_slider_bounds() {
        let ds = LaunchDataset::default();
        let c = ControlState::for_dataset(&ds, PayloadRange::new(0.0, 10000.0));
        assert_eq!(c.payload, PayloadRange::new(0.0, 10000.0));
        assert!(scatter_indices(&ds, &c).is_empty());
    }
}
