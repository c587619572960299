//! Library configuration stored as TOML (e.g. `primer.toml`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::sequence::GrowthPolicy;

/// Largest accepted `sequence.growth_factor`.
pub const MAX_GROWTH_FACTOR: usize = 16;

/// Largest accepted `sequence.min_capacity`.
pub const MAX_MIN_CAPACITY: usize = 1 << 20;

/// Top-level configuration (TOML).
///
/// Missing fields default to the values the components use when no
/// configuration is supplied.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrimerConfig {
    pub sequence: SequenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SequenceConfig {
    /// Multiplicative growth applied when an append overflows capacity.
    pub growth_factor: usize,

    /// Lower bound for any reallocated capacity.
    pub min_capacity: usize,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        let policy = GrowthPolicy::default();
        Self {
            growth_factor: policy.factor,
            min_capacity: policy.min_capacity,
        }
    }
}

impl SequenceConfig {
    pub fn policy(&self) -> GrowthPolicy {
        GrowthPolicy {
            factor: self.growth_factor,
            min_capacity: self.min_capacity,
        }
    }
}

impl PrimerConfig {
    pub fn validate(&self) -> Result<()> {
        let factor = self.sequence.growth_factor;
        if !(2..=MAX_GROWTH_FACTOR).contains(&factor) {
            return Err(anyhow!(
                "sequence.growth_factor must be between 2 and {} (got {})",
                MAX_GROWTH_FACTOR,
                factor
            ));
        }
        if self.sequence.min_capacity > MAX_MIN_CAPACITY {
            return Err(anyhow!(
                "sequence.min_capacity must be <= {} (got {})",
                MAX_MIN_CAPACITY,
                self.sequence.min_capacity
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PrimerConfig::default()`.
pub fn load_config(path: &Path) -> Result<PrimerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        return Ok(PrimerConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PrimerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sequence::GrowableSequence;

    fn load_str(contents: &str) -> Result<PrimerConfig> {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("primer.toml");
        fs::write(&path, contents).expect("write");
        load_config(&path)
    }

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, PrimerConfig::default());
        assert_eq!(cfg.sequence.policy(), GrowthPolicy::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let cfg = load_str("[sequence]\ngrowth_factor = 3\n").expect("load");
        assert_eq!(cfg.sequence.growth_factor, 3);
        assert_eq!(cfg.sequence.min_capacity, 0);
    }

    #[test]
    fn full_file_is_loaded() {
        let cfg = load_str("[sequence]\ngrowth_factor = 4\nmin_capacity = 8\n").expect("load");
        assert_eq!(
            cfg.sequence,
            SequenceConfig {
                growth_factor: 4,
                min_capacity: 8,
            }
        );
    }

    #[test]
    fn rejects_growth_factor_below_two() {
        let err = load_str("[sequence]\ngrowth_factor = 1\n").expect_err("invalid factor");
        assert!(format!("{:#}", err).contains("growth_factor"));
    }

    #[test]
    fn rejects_oversized_growth_factor() {
        let err = load_str("[sequence]\ngrowth_factor = 18446744073709551615\n")
            .expect_err("oversized factor");
        assert!(format!("{:#}", err).contains("growth_factor"));
    }

    #[test]
    fn rejects_oversized_min_capacity() {
        let err = load_str("[sequence]\nmin_capacity = 18446744073709551615\n")
            .expect_err("oversized min_capacity");
        assert!(format!("{:#}", err).contains("min_capacity"));
    }

    #[test]
    fn largest_accepted_policy_appends() {
        let cfg = PrimerConfig {
            sequence: SequenceConfig {
                growth_factor: MAX_GROWTH_FACTOR,
                min_capacity: MAX_MIN_CAPACITY,
            },
        };
        cfg.validate().expect("within bounds");
        let mut seq =
            GrowableSequence::with_growth(1, 1, cfg.sequence.policy()).expect("sequence");
        seq.append(7);
        assert_eq!(seq.as_slice(), &[0, 7]);
        assert_eq!(seq.cap(), MAX_MIN_CAPACITY);
    }
}
