use crate::error::{RegistryError, Result};
use crate::policy::OverflowStrategy;
use crate::retry::DEFAULT_MAX_ADMIT_ATTEMPTS;

/// Plain, loadable registry settings.
///
/// With the `serde` feature this deserializes from any serde format, e.g.
///
/// ```json
/// { "capacity": 64, "overflow_strategy": "remove_oldest_less_important" }
/// ```
///
/// `capacity` is required; the other fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(deny_unknown_fields))]
pub struct RegistryConfig {
  /// Maximum number of items held at once. Must be at least 1.
  pub capacity: usize,
  #[cfg_attr(feature = "serde", serde(default))]
  pub overflow_strategy: OverflowStrategy,
  /// Upper bound on push retries during a single admission.
  #[cfg_attr(feature = "serde", serde(default = "default_max_admit_attempts"))]
  pub max_admit_attempts: u32,
}

#[cfg(feature = "serde")]
fn default_max_admit_attempts() -> u32 {
  DEFAULT_MAX_ADMIT_ATTEMPTS
}

impl RegistryConfig {
  pub fn new(capacity: usize) -> Self {
    Self {
      capacity,
      overflow_strategy: OverflowStrategy::default(),
      max_admit_attempts: DEFAULT_MAX_ADMIT_ATTEMPTS,
    }
  }

  pub fn with_overflow_strategy(mut self, strategy: OverflowStrategy) -> Self {
    self.overflow_strategy = strategy;
    self
  }

  pub fn validate(&self) -> Result<()> {
    if self.capacity < 1 {
      return Err(RegistryError::ZeroCapacity);
    }
    if self.max_admit_attempts == 0 {
      return Err(RegistryError::InvalidConfig {
        field: "max_admit_attempts",
        message: "must be at least 1".to_string(),
      });
    }
    Ok(())
  }
}
