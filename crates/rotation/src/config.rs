//! Configuration for the rotation scheduler.

use crate::error::RotationError;

/// Seed used when none is configured.
pub const DEFAULT_SEED: &str = "orbis-daily-rotation-v1";

/// Default share of days drawn from the featured set.
pub const DEFAULT_FEATURED_FRACTION: f64 = 0.7;

/// Configuration for the rotation scheduler.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use orbis_rotation::RotationConfig;
///
/// let config = RotationConfig::new()
///     .with_seed("test")
///     .with_featured(["gdp_per_capita", "life_expectancy"])
///     .with_featured_fraction(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RotationConfig {
    seed: String,
    featured: Vec<String>,
    featured_fraction: f64,
    weighting_enabled: bool,
}

impl RotationConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `seed = DEFAULT_SEED`, no featured datasets,
    /// `featured_fraction = 0.7`, `weighting_enabled = true`.
    pub fn new() -> Self {
        Self {
            seed: DEFAULT_SEED.to_string(),
            featured: Vec::new(),
            featured_fraction: DEFAULT_FEATURED_FRACTION,
            weighting_enabled: true,
        }
    }

    /// Sets the base seed all cycle seeds derive from.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the featured dataset ids.
    pub fn with_featured<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.featured = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the target share of featured days. Values outside `[0, 1]` are clamped.
    pub fn with_featured_fraction(mut self, fraction: f64) -> Self {
        self.featured_fraction = fraction;
        self
    }

    /// Enables or disables featured weighting.
    pub fn with_weighting(mut self, enabled: bool) -> Self {
        self.weighting_enabled = enabled;
        self
    }

    // --- Accessors ---

    /// Returns the base seed.
    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Returns the configured featured ids.
    pub fn featured(&self) -> &[String] {
        &self.featured
    }

    /// Returns the featured fraction as configured (possibly out of range).
    pub fn featured_fraction(&self) -> f64 {
        self.featured_fraction
    }

    /// Returns the featured fraction clamped to `[0, 1]`.
    pub fn effective_featured_fraction(&self) -> f64 {
        self.featured_fraction.clamp(0.0, 1.0)
    }

    /// Returns whether featured weighting is enabled.
    pub fn weighting_enabled(&self) -> bool {
        self.weighting_enabled
    }

    /// Validates this configuration.
    ///
    /// Any seed string is accepted, including the empty one. A fraction
    /// outside `[0, 1]`, infinities included, is clamped at use; only NaN
    /// is rejected.
    pub fn validate(&self) -> Result<(), RotationError> {
        if self.featured_fraction.is_nan() {
            return Err(RotationError::InvalidConfig {
                reason: "featured_fraction must be a number, got NaN".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self::new()
    }
}
