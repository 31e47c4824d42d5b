use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::SchemaError;

// ---------------------------------------------------------------------------
// Column names of the source table
// ---------------------------------------------------------------------------

pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";
pub const COL_BOOSTER: &str = "Booster Version Category";

// ---------------------------------------------------------------------------
// OutcomeClass – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome. The discriminants match the values stored in the `class`
/// column so they can be plotted directly on the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutcomeClass {
    Failure = 0,
    Success = 1,
}

impl OutcomeClass {
    /// Interpret a raw `class` cell. Accepts `0`, `1`, `0.0` and `1.0`.
    pub fn from_value(row: usize, value: f64) -> Result<Self, SchemaError> {
        if value == 0.0 {
            Ok(OutcomeClass::Failure)
        } else if value == 1.0 {
            Ok(OutcomeClass::Success)
        } else {
            Err(SchemaError::InvalidClass { row, value })
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.as_u8())
    }
}

impl fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
    pub booster_category: String,
}

/// Row layout shared by the CSV and JSON readers and the sample generator.
/// Extra columns in the source are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    pub site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "class")]
    pub class: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl RawLaunchRow {
    pub fn into_record(self, row: usize) -> Result<LaunchRecord, SchemaError> {
        Ok(LaunchRecord {
            outcome: OutcomeClass::from_value(row, self.class)?,
            site: self.site,
            payload_mass_kg: self.payload_mass_kg,
            booster_category: self.booster_category,
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed summaries.
#[derive(Debug, Clone, Default)]
pub struct LaunchDataset {
    /// All launches, in file order.
    pub records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    pub sites: Vec<String>,
    /// Sorted distinct booster categories.
    pub booster_categories: BTreeSet<String>,
    /// (min, max) payload mass; `None` for an empty dataset.
    pub payload_bounds: Option<(f64, f64)>,
}

impl LaunchDataset {
    /// Build the summaries from the loaded records.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories = BTreeSet::new();
        let mut payload_bounds: Option<(f64, f64)> = None;

        for rec in &records {
            if !sites.contains(&rec.site) {
                sites.push(rec.site.clone());
            }
            booster_categories.insert(rec.booster_category.clone());

            let m = rec.payload_mass_kg;
            payload_bounds = Some(match payload_bounds {
                None => (m, m),
                Some((lo, hi)) => (lo.min(m), hi.max(m)),
            });
        }

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(site: &str, mass: f64, class: OutcomeClass, booster: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome: class,
            booster_category: booster.to_string(),
        }
    }

    #[test]
    fn summaries_follow_first_appearance_and_bounds() {
        let ds = LaunchDataset::from_records(vec![
            rec("KSC LC-39A", 2500.0, OutcomeClass::Success, "FT"),
            rec("CCAFS LC-40", 0.0, OutcomeClass::Failure, "v1.0"),
            rec("KSC LC-39A", 9600.0, OutcomeClass::Success, "B4"),
        ]);

        assert_eq!(ds.sites, vec!["KSC LC-39A", "CCAFS LC-40"]);
        assert_eq!(ds.payload_bounds, Some((0.0, 9600.0)));
        assert_eq!(
            ds.booster_categories.iter().cloned().collect::<Vec<_>>(),
            vec!["B4", "FT", "v1.0"]
        );
        assert!(ds.has_site("CCAFS LC-40"));
        assert!(!ds.has_site("VAFB SLC-4E"));
    }

    #[test]
    fn empty_dataset_has_no_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_bounds, None);
        assert!(ds.sites.is_empty());
    }

    #[test]
    fn class_values_outside_binary_are_rejected() {
        assert_eq!(OutcomeClass::from_value(0, 1.0), Ok(OutcomeClass::Success));
        assert_eq!(OutcomeClass::from_value(0, 0.0), Ok(OutcomeClass::Failure));
        assert_eq!(
            OutcomeClass::from_value(7, 2.0),
            Err(SchemaError::InvalidClass { row: 7, value: 2.0 })
        );
    }
}
