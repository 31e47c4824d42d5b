use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::aggregate::{pie_chart, PieChart};
use crate::data::filter::{scatter_indices, ControlState, SiteSelection};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded dataset; replaced wholesale by File → Open….
    pub dataset: LaunchDataset,

    /// Current dropdown and slider values.
    pub controls: ControlState,

    /// Pie aggregate for the current site selection.
    pub pie: PieChart,

    /// Indices of records passing the scatter filter.
    pub scatter_indices: Vec<usize>,

    /// Colours for the all-sites pie.
    pub site_colors: ColorMap,

    /// Colours for the scatter points.
    pub booster_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig, dataset: LaunchDataset) -> Self {
        let controls = ControlState::for_dataset(&LaunchDataset::default(), config.slider_bounds);
        let mut state = Self {
            config,
            dataset: LaunchDataset::default(),
            controls,
            pie: PieChart::default(),
            scatter_indices: Vec::new(),
            site_colors: ColorMap::default(),
            booster_colors: ColorMap::default(),
            status_message: None,
        };
        state.set_dataset(dataset);
        state
    }

    /// Ingest a newly loaded dataset, reset the controls and colours.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.controls = ControlState::for_dataset(&dataset, self.config.slider_bounds);
        self.site_colors = ColorMap::new(&dataset.sites);
        self.booster_colors = ColorMap::new(&dataset.booster_categories);
        self.dataset = dataset;
        self.status_message = None;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Change the dropdown. Unknown sites are ignored.
    pub fn set_site(&mut self, site: SiteSelection) {
        if let SiteSelection::Site(name) = &site {
            if !self.dataset.has_site(name) {
                log::warn!("Ignoring unknown launch site {name:?}");
                return;
            }
        }
        if self.controls.site == site {
            return;
        }
        log::debug!("Site selection changed to {site}");
        self.controls.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    /// Move the low end of the payload range, pushing the high end up if needed.
    pub fn set_payload_min(&mut self, min: f64) {
        let payload = &mut self.controls.payload;
        payload.min = min;
        if payload.max < min {
            payload.max = min;
        }
        self.refresh_scatter();
    }

    /// Move the high end of the payload range, pushing the low end down if needed.
    pub fn set_payload_max(&mut self, max: f64) {
        let payload = &mut self.controls.payload;
        payload.max = max;
        if payload.min > max {
            payload.min = max;
        }
        self.refresh_scatter();
    }

    fn refresh_pie(&mut self) {
        self.pie = pie_chart(&self.dataset, &self.controls.site);
    }

    fn refresh_scatter(&mut self) {
        self.scatter_indices = scatter_indices(&self.dataset, &self.controls);
        log::debug!(
            "Scatter: {} of {} launches in [{}, {}] kg",
            self.scatter_indices.len(),
            self.dataset.len(),
            self.controls.payload.min,
            self.controls.payload.max
        );
    }
}
