use crate::errors::LabelError;
use crate::models::ClusterStats;

/// Turns cluster statistics into a short display name.
///
/// Implementations may call out to a remote model. A failure only costs the
/// cluster its generated name; callers keep the existing one.
pub trait ILabelGenerator: Send + Sync {
    /// Generate a 1-3 word label for one cluster.
    fn generate(&self, stats: &ClusterStats) -> Result<String, LabelError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this generator can currently serve requests.
    fn is_available(&self) -> bool {
        true
    }
}

/// Generator used when no provider is configured. Always unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpLabelGenerator;

impl ILabelGenerator for NoOpLabelGenerator {
    fn generate(&self, _stats: &ClusterStats) -> Result<String, LabelError> {
        Err(LabelError::Unavailable {
            provider: self.name().to_string(),
        })
    }

    fn name(&self) -> &str {
        "noop"
    }

    fn is_available(&self) -> bool {
        false
    }
}
