//! Structured log events for model health.

/// Log one component's status.
pub fn component_status(component: &str, status: &str, message: Option<&str>) {
    tracing::info!(
        event = "component_status",
        component = %component,
        status = %status,
        message = message.unwrap_or(""),
        "component status"
    );
}

/// Log the overall status.
pub fn health_summary(status: &str, components: usize) {
    tracing::info!(
        event = "health_summary",
        status = %status,
        components = components,
        "similarity engine health"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}
