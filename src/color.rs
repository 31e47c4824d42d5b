use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::aggregate::SliceKey;
use crate::data::model::OutcomeClass;

/// Fixed outcome colours for the single-site pie.
pub const FAILURE_COLOR: Color32 = Color32::RED;
pub const SUCCESS_COLOR: Color32 = Color32::from_rgb(0x5b, 0xef, 0x67);

pub fn outcome_color(class: OutcomeClass) -> Color32 {
    match class {
        OutcomeClass::Failure => FAILURE_COLOR,
        OutcomeClass::Success => SUCCESS_COLOR,
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → Color32
// ---------------------------------------------------------------------------

/// Maps the labels of a categorical column (booster category, launch site)
/// to distinct colours.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a String>) -> Self {
        let labels: BTreeSet<&String> = labels.into_iter().collect();
        let palette = generate_palette(labels.len());
        let mapping = labels
            .into_iter()
            .zip(palette)
            .map(|(label, c)| (label.clone(), c))
            .collect();
        ColorMap { mapping }
    }

    /// Look up the colour for a label; unknown labels are grey.
    pub fn color_for(&self, label: &str) -> Color32 {
        self.mapping.get(label).copied().unwrap_or(Color32::GRAY)
    }

    /// Colour of a pie slice: outcome slices use the fixed red/green pair.
    pub fn slice_color(&self, key: &SliceKey) -> Color32 {
        match key {
            SliceKey::Site(site) => self.color_for(site),
            SliceKey::Outcome(class) => outcome_color(*class),
        }
    }
}
