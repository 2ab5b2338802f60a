//! Tensor configuration

/// Element count at or below which matmul uses the direct kernel.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 48;

/// Extent at or below which matmul always uses the direct kernel.
pub const STRASSEN_BASE_CASE: usize = 4;

/// Per-tensor configuration, fixed at construction
///
/// # Examples
///
/// ```
/// use ntensor_core::{TensorConfig, DEFAULT_STRASSEN_THRESHOLD};
///
/// let config = TensorConfig::default();
/// assert_eq!(config.strassen_threshold, DEFAULT_STRASSEN_THRESHOLD);
///
/// let eager = TensorConfig::new().with_strassen_threshold(0);
/// assert_eq!(eager.strassen_threshold, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TensorConfig {
    /// Left-operand element count at or below which Strassen falls back to
    /// the direct kernel
    pub strassen_threshold: usize,
}

impl TensorConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Strassen crossover
    pub fn with_strassen_threshold(mut self, threshold: usize) -> Self {
        self.strassen_threshold = threshold;
        self
    }
}

impl Default for TensorConfig {
    fn default() -> Self {
        Self {
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_other_defaults() {
        let config = TensorConfig::new().with_strassen_threshold(128);
        assert_eq!(config.strassen_threshold, 128);
        assert_ne!(config, TensorConfig::default());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_round_trip() {
        let config = TensorConfig::new().with_strassen_threshold(256);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"strassen_threshold":256}"#);

        let back: TensorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde_missing_field_uses_default() {
        let config: TensorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, TensorConfig::default());
        assert_eq!(config.strassen_threshold, DEFAULT_STRASSEN_THRESHOLD);
    }
}
