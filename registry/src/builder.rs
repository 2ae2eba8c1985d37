use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::id::{IdSource, UuidSource};
use crate::listener::{NoopListener, RemovalListener};
use crate::metrics::Metrics;
use crate::policy::{OverflowPolicy, OverflowStrategy};
use crate::queue::BoundedQueue;
use crate::registry::Registry;
use crate::retry::DEFAULT_MAX_ADMIT_ATTEMPTS;
use crate::shared::RegistryShared;

use core::fmt;
use std::sync::Arc;

/// A builder for creating `Registry` instances.
///
/// A capacity must be set before calling [`build`](Self::build); everything
/// else has a default:
///
/// - overflow strategy: [`OverflowStrategy::Skip`]
/// - removal listener: [`NoopListener`]
/// - id source: [`UuidSource`]
/// - max admit attempts: [`DEFAULT_MAX_ADMIT_ATTEMPTS`]
pub struct RegistryBuilder {
  capacity: usize,
  strategy: OverflowStrategy,
  custom_policy: Option<Arc<dyn OverflowPolicy>>,
  listener: Option<Arc<dyn RemovalListener>>,
  id_source: Option<Arc<dyn IdSource>>,
  max_admit_attempts: u32,
}

impl fmt::Debug for RegistryBuilder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RegistryBuilder")
      .field("capacity", &self.capacity)
      .field("strategy", &self.strategy)
      .field("has_custom_policy", &self.custom_policy.is_some())
      .field("has_listener", &self.listener.is_some())
      .field("max_admit_attempts", &self.max_admit_attempts)
      .finish_non_exhaustive()
  }
}

impl Default for RegistryBuilder {
  fn default() -> Self {
    Self::new()
  }
}

impl RegistryBuilder {
  pub fn new() -> Self {
    Self {
      capacity: 0,
      strategy: OverflowStrategy::default(),
      custom_policy: None,
      listener: None,
      id_source: None,
      max_admit_attempts: DEFAULT_MAX_ADMIT_ATTEMPTS,
    }
  }

  /// Starts from loaded settings. Validation happens in `build`.
  pub fn from_config(config: &RegistryConfig) -> Self {
    Self::new()
      .capacity(config.capacity)
      .overflow_strategy(config.overflow_strategy)
      .max_admit_attempts(config.max_admit_attempts)
  }

  /// Sets the maximum number of items held at once.
  pub fn capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Selects one of the built-in overflow policies.
  ///
  /// Clears any custom policy set earlier.
  pub fn overflow_strategy(mut self, strategy: OverflowStrategy) -> Self {
    self.strategy = strategy;
    self.custom_policy = None;
    self
  }

  /// Installs a custom overflow policy in place of the built-in strategies.
  pub fn overflow_policy<Policy>(mut self, policy: Policy) -> Self
  where
    Policy: OverflowPolicy + 'static,
  {
    self.custom_policy = Some(Arc::new(policy));
    self
  }

  /// Sets the teardown hook run for every evicted or removed item.
  pub fn removal_listener<Listener>(mut self, listener: Listener) -> Self
  where
    Listener: RemovalListener + 'static,
  {
    self.listener = Some(Arc::new(listener));
    self
  }

  /// Sets the source of item ids.
  pub fn id_source<Source>(mut self, source: Source) -> Self
  where
    Source: IdSource + 'static,
  {
    self.id_source = Some(Arc::new(source));
    self
  }

  /// Bounds how many times a single admission may retry its push after
  /// losing a freed slot to a concurrent caller.
  pub fn max_admit_attempts(mut self, attempts: u32) -> Self {
    self.max_admit_attempts = attempts;
    self
  }

  pub fn build(self) -> Result<Registry> {
    if self.capacity < 1 {
      return Err(RegistryError::ZeroCapacity);
    }
    if self.max_admit_attempts == 0 {
      return Err(RegistryError::InvalidConfig {
        field: "max_admit_attempts",
        message: "must be at least 1".to_string(),
      });
    }

    let (policy, strategy) = match self.custom_policy {
      Some(policy) => (policy, None),
      None => (
        Arc::new(self.strategy) as Arc<dyn OverflowPolicy>,
        Some(self.strategy),
      ),
    };

    tracing::debug!(
      capacity = self.capacity,
      strategy = ?strategy,
      max_admit_attempts = self.max_admit_attempts,
      "building registry"
    );

    let shared = RegistryShared {
      queue: BoundedQueue::new(self.capacity),
      policy,
      strategy,
      listener: self.listener.unwrap_or_else(|| Arc::new(NoopListener)),
      id_source: self.id_source.unwrap_or_else(|| Arc::new(UuidSource)),
      max_admit_attempts: self.max_admit_attempts,
      metrics: Metrics::new(),
    };

    Ok(Registry {
      shared: Arc::new(shared),
    })
  }
}
