use serde::{Deserialize, Serialize};

/// Availability of the similarity components after loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub overall_status: HealthStatus,
    pub components: Vec<ComponentHealth>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    pub message: Option<String>,
}

impl HealthReport {
    /// Build a report; overall status is derived from the components.
    ///
    /// All healthy → `Healthy`; none healthy → `Unhealthy`; otherwise `Degraded`.
    pub fn from_components(components: Vec<ComponentHealth>) -> Self {
        let healthy = components
            .iter()
            .filter(|c| c.status == HealthStatus::Healthy)
            .count();
        let overall_status = if !components.is_empty() && healthy == components.len() {
            HealthStatus::Healthy
        } else if healthy == 0 {
            HealthStatus::Unhealthy
        } else {
            HealthStatus::Degraded
        };
        Self {
            overall_status,
            components,
        }
    }

    pub fn component(&self, name: &str) -> Option<&ComponentHealth> {
        self.components.iter().find(|c| c.name == name)
    }
}
