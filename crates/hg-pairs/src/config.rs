//! Sampling configuration.

use hg_core::{Real, ensure_finite};

use crate::error::{PairError, PairResult};

/// Knobs controlling negative sampling and batching.
///
/// Each `ratio_*` caps one sampling phase at `ratio * degree(v)` negatives
/// per vertex `v`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairConfig {
    /// Cap multiplier for vertex-to-second-neighbor negatives.
    pub ratio_to_second: Real,
    /// Cap multiplier for negatives between distinct first neighbors.
    pub ratio_between_first: Real,
    /// Cap multiplier for purely random negatives.
    pub ratio_random: Real,
    /// Pairs per batch; the final batch may be shorter.
    pub batch_size: usize,
    /// RNG seed; identical seeds reproduce identical pair sets.
    pub seed: u64,
}

impl Default for PairConfig {
    fn default() -> Self {
        Self {
            ratio_to_second: 2.0,
            ratio_between_first: 1.0,
            ratio_random: 1.0,
            batch_size: 1,
            seed: 0,
        }
    }
}

impl PairConfig {
    /// Reject non-finite or negative ratios and empty batches.
    pub fn validate(&self) -> PairResult<()> {
        for (what, ratio) in [
            ("ratio_to_second", self.ratio_to_second),
            ("ratio_between_first", self.ratio_between_first),
            ("ratio_random", self.ratio_random),
        ] {
            ensure_finite(ratio, what)?;
            if ratio < 0.0 {
                return Err(PairError::InvalidConfig {
                    what: format!("{what} must be non-negative, got {ratio}"),
                });
            }
        }
        if self.batch_size == 0 {
            return Err(PairError::InvalidConfig {
                what: "batch_size must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(PairConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_ratio() {
        let config = PairConfig {
            ratio_random: -0.5,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(format!("{err}").contains("ratio_random"));
    }

    #[test]
    fn rejects_non_finite_ratio() {
        let config = PairConfig {
            ratio_to_second: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PairError::Numeric(_))
        ));
    }

    #[test]
    fn rejects_zero_batch() {
        let config = PairConfig {
            batch_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
