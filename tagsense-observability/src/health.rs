//! Health and degradation reporting.

use tagsense_core::models::{DegradationEvent, HealthReport, HealthStatus};

use crate::tracing_setup::events;

pub fn status_name(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Healthy => "healthy",
        HealthStatus::Degraded => "degraded",
        HealthStatus::Unhealthy => "unhealthy",
    }
}

/// Emit the report as one event per component followed by a summary event.
pub fn log_health(report: &HealthReport) {
    for component in &report.components {
        events::component_status(
            &component.name,
            status_name(component.status),
            component.message.as_deref(),
        );
    }
    events::health_summary(status_name(report.overall_status), report.components.len());
}

/// Emit one warning per degradation event.
pub fn log_degradations(degradations: &[DegradationEvent]) {
    for event in degradations {
        events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_names() {
        assert_eq!(status_name(HealthStatus::Healthy), "healthy");
        assert_eq!(status_name(HealthStatus::Degraded), "degraded");
        assert_eq!(status_name(HealthStatus::Unhealthy), "unhealthy");
    }
}
