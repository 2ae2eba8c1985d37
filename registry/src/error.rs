use thiserror::Error;

/// Errors surfaced by the registry.
///
/// A full registry is not an error: admission reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
  /// The registry was configured with a capacity of zero.
  #[error("capacity must be positive")]
  ZeroCapacity,

  /// The given value does not name a priority tier.
  #[error("invalid priority: {0}")]
  InvalidPriority(String),

  #[error("invalid configuration value for '{field}': {message}")]
  InvalidConfig { field: &'static str, message: String },

  /// Admission kept losing the freed slot to concurrent callers until the
  /// retry budget ran out. This indicates a logic defect, not a full registry.
  #[error("cannot admit new item: retry exhausted after {attempts} attempts")]
  RetryExhausted { attempts: u32 },
}

impl RegistryError {
  /// Returns `true` for errors caused by invalid caller input.
  pub fn is_invalid_argument(&self) -> bool {
    matches!(
      self,
      RegistryError::ZeroCapacity
        | RegistryError::InvalidPriority(_)
        | RegistryError::InvalidConfig { .. }
    )
  }
}

/// A specialized `Result` type for registry operations.
pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
