use super::filter::{site_records, SiteSelection};
use super::model::{LaunchDataset, OutcomeClass};

// ---------------------------------------------------------------------------
// Pie chart aggregation
// ---------------------------------------------------------------------------

/// What a pie slice stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliceKey {
    /// Successful launches at one site (all-sites view).
    Site(String),
    /// Launches with one outcome (single-site view).
    Outcome(OutcomeClass),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub key: SliceKey,
    pub count: usize,
}

impl PieSlice {
    pub fn label(&self) -> String {
        match &self.key {
            SliceKey::Site(site) => site.clone(),
            SliceKey::Outcome(class) => class.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// Build the pie chart for the current site selection.
///
/// * `All` sums the `class` column per site, one slice per distinct site
///   in first-appearance order (sites without successes get a zero slice).
/// * `Site(s)` counts that site's launches per outcome. Outcomes that never
///   occur are omitted, so an unknown or empty site yields no slices.
pub fn pie_chart(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let slices = dataset
                .sites
                .iter()
                .map(|s| PieSlice {
                    key: SliceKey::Site(s.clone()),
                    count: dataset
                        .records
                        .iter()
                        .filter(|r| r.site == *s && r.outcome == OutcomeClass::Success)
                        .count(),
                })
                .collect();
            PieChart {
                title: "Total Success Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(name) => {
            let mut counts = [0usize; 2];
            for rec in site_records(dataset, site) {
                counts[rec.outcome.as_u8() as usize] += 1;
            }

            let mut slices: Vec<PieSlice> = [OutcomeClass::Failure, OutcomeClass::Success]
                .into_iter()
                .zip(counts)
                .filter(|(_, n)| *n > 0)
                .map(|(class, count)| PieSlice {
                    key: SliceKey::Outcome(class),
                    count,
                })
                .collect();
            // Largest first; stable sort keeps Failure ahead on ties.
            slices.sort_by(|a, b| b.count.cmp(&a.count));

            PieChart {
                title: format!("Total Success Launches for site {name}"),
                slices,
            }
        }
    }
}
