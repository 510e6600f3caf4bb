use std::path::Path;

use anyhow::{Context, Result};
use orbis_calendar::{DEFAULT_CYCLE_LENGTH_DAYS, DEFAULT_RESET_HOUR_UTC};
use orbis_rotation::{DEFAULT_FEATURED_FRACTION, DEFAULT_SEED, DatasetDescriptor};
use serde::Deserialize;

/// Top-level Orbis configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OrbisConfig {
    /// Day boundary settings.
    #[serde(default)]
    pub schedule: ScheduleToml,

    /// Rotation settings.
    #[serde(default)]
    pub rotation: RotationToml,

    /// The dataset registry.
    #[serde(default)]
    pub datasets: Vec<DatasetDescriptor>,
}

impl OrbisConfig {
    /// Reads and parses a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Returns the registry category of `id`, if it is registered.
    pub fn category_of(&self, id: &str) -> Option<&str> {
        self.datasets
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.category.as_str())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    #[serde(default = "default_reset_hour_utc")]
    pub reset_hour_utc: u8,
    #[serde(default = "default_cycle_length_days")]
    pub cycle_length_days: u32,
}

impl Default for ScheduleToml {
    fn default() -> Self {
        Self {
            reset_hour_utc: default_reset_hour_utc(),
            cycle_length_days: default_cycle_length_days(),
        }
    }
}

fn default_reset_hour_utc() -> u8 {
    DEFAULT_RESET_HOUR_UTC
}
fn default_cycle_length_days() -> u32 {
    DEFAULT_CYCLE_LENGTH_DAYS
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationToml {
    #[serde(default = "default_seed")]
    pub seed: String,
    #[serde(default = "default_featured_fraction")]
    pub featured_fraction: f64,
    #[serde(default = "default_true")]
    pub weighting_enabled: bool,
    /// Featured dataset ids.
    #[serde(default)]
    pub featured: Vec<String>,
    /// Pool used when no registry dataset is suitable.
    #[serde(default)]
    pub fallback: Vec<String>,
}

impl Default for RotationToml {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            featured_fraction: default_featured_fraction(),
            weighting_enabled: true,
            featured: Vec::new(),
            fallback: Vec::new(),
        }
    }
}

fn default_seed() -> String {
    DEFAULT_SEED.to_string()
}
fn default_featured_fraction() -> f64 {
    DEFAULT_FEATURED_FRACTION
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbis_rotation::AvailabilityTier;

    #[test]
    fn empty_file_uses_defaults() {
        let config: OrbisConfig = toml::from_str("").unwrap();
        assert_eq!(config.schedule.reset_hour_utc, 5);
        assert_eq!(config.schedule.cycle_length_days, 365);
        assert_eq!(config.rotation.seed, "orbis-daily-rotation-v1");
        assert!((config.rotation.featured_fraction - 0.7).abs() < 1e-12);
        assert!(config.rotation.weighting_enabled);
        assert!(config.datasets.is_empty());
    }

    #[test]
    fn parses_full_file() {
        let config: OrbisConfig = toml::from_str(
            r#"
            [schedule]
            reset_hour_utc = 0

            [rotation]
            seed = "season-2"
            featured = ["gdp_per_capita"]
            fallback = ["population"]

            [[datasets]]
            id = "gdp_per_capita"
            category = "economy"
            tier = "high"

            [[datasets]]
            id = "bird_species"
            category = "environment"
            availability_tier = "low"
            "#,
        )
        .unwrap();
        assert_eq!(config.schedule.reset_hour_utc, 0);
        assert_eq!(config.schedule.cycle_length_days, 365);
        assert_eq!(config.rotation.seed, "season-2");
        assert_eq!(config.rotation.fallback, ["population"]);
        assert_eq!(config.datasets[1].tier, AvailabilityTier::Low);
        assert_eq!(config.category_of("gdp_per_capita"), Some("economy"));
        assert_eq!(config.category_of("population"), None);
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(toml::from_str::<OrbisConfig>("[rotation]\nsead = \"x\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = OrbisConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }

    #[test]
    fn bundled_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("orbis.toml");
        let config = OrbisConfig::load(&path).unwrap();
        assert!(!config.datasets.is_empty());
    }
}
