use crate::error::{RegistryError, Result};

/// The default number of times admission retries a push after evicting.
pub const DEFAULT_MAX_ADMIT_ATTEMPTS: u32 = 1024;

/// A bounded retry counter.
///
/// Each failed attempt consumes one unit. Running out is reported as
/// [`RegistryError::RetryExhausted`] and signals a logic defect rather than
/// any ordinary outcome.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RetryBudget {
  max_attempts: u32,
  used: u32,
}

impl RetryBudget {
  pub(crate) fn new(max_attempts: u32) -> Self {
    Self {
      max_attempts,
      used: 0,
    }
  }

  /// Number of attempts consumed so far.
  #[inline]
  pub(crate) fn used(&self) -> u32 {
    self.used
  }

  /// Records a failed attempt, failing once the budget is spent.
  pub(crate) fn consume(&mut self) -> Result<()> {
    if self.used >= self.max_attempts {
      return Err(RegistryError::RetryExhausted {
        attempts: self.used,
      });
    }
    self.used += 1;
    Ok(())
  }
}
