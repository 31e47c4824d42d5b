use std::path::PathBuf;

use crate::data::filter::PayloadRange;

/// Environment variable naming the dataset when no argument is given.
pub const DATA_ENV_VAR: &str = "LAUNCH_DASH_DATA";
pub const DEFAULT_DATA_FILE: &str = "spacex_launch_dash.csv";

/// Startup settings for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub dataset_path: PathBuf,
    /// Outer limits of the payload sliders (kg).
    pub slider_bounds: PayloadRange,
    pub slider_step: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATA_FILE),
            slider_bounds: PayloadRange::new(0.0, 10000.0),
            slider_step: 1000.0,
        }
    }
}

impl DashboardConfig {
    /// Resolve the dataset path: first positional argument, then
    /// [`DATA_ENV_VAR`], then [`DEFAULT_DATA_FILE`].
    pub fn resolve(mut args: impl Iterator<Item = String>, env_path: Option<String>) -> Self {
        let dataset_path = args
            .next()
            .or(env_path)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self {
            dataset_path,
            ..Self::default()
        }
    }

    pub fn from_env() -> Self {
        Self::resolve(std::env::args().skip(1), std::env::var(DATA_ENV_VAR).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_wins_over_environment() {
        let cfg = DashboardConfig::resolve(
            vec!["launches.parquet".to_string()].into_iter(),
            Some("env.csv".to_string()),
        );
        assert_eq!(cfg.dataset_path, PathBuf::from("launches.parquet"));
    }

    #[test]
    fn environment_then_default() {
        let cfg = DashboardConfig::resolve(std::iter::empty(), Some("env.csv".to_string()));
        assert_eq!(cfg.dataset_path, PathBuf::from("env.csv"));

        let cfg = DashboardConfig::resolve(std::iter::empty(), None);
        assert_eq!(cfg, DashboardConfig::default());
        assert_eq!(cfg.slider_step, 1000.0);
    }
}
