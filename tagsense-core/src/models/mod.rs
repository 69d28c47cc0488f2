mod degradation_event;
mod evidence;
mod health_report;
mod label_match;
mod load_stats;
mod sentence;
mod similarity_matrix;

pub use degradation_event::DegradationEvent;
pub use evidence::DocumentEvidence;
pub use health_report::{ComponentHealth, HealthReport, HealthStatus};
pub use label_match::{LabelMatch, MatchOutcome};
pub use load_stats::LoadStats;
pub use sentence::Sentence;
pub use similarity_matrix::SimilarityMatrix;
