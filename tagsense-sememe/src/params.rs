use tagsense_core::config::{defaults, SememeConfig};

/// Scoring constants of the sememe model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SememeParams {
    pub alfa: f64,
    pub beta: [f64; 4],
    pub gama: f64,
    pub delta: f64,
    pub unreachable_distance: f64,
}

impl Default for SememeParams {
    fn default() -> Self {
        Self {
            alfa: defaults::DEFAULT_ALFA,
            beta: defaults::DEFAULT_BETA,
            gama: defaults::DEFAULT_GAMA,
            delta: defaults::DEFAULT_DELTA,
            unreachable_distance: defaults::DEFAULT_UNREACHABLE_DISTANCE,
        }
    }
}

impl From<&SememeConfig> for SememeParams {
    /// A `beta` of the wrong length (rejected by config validation) falls
    /// back to the default weights.
    fn from(config: &SememeConfig) -> Self {
        Self {
            alfa: config.alfa,
            beta: config
                .beta
                .as_slice()
                .try_into()
                .unwrap_or(defaults::DEFAULT_BETA),
            gama: config.gama,
            delta: config.delta,
            unreachable_distance: config.unreachable_distance,
        }
    }
}
