use crate::id::IdSource;
use crate::item::Item;
use crate::listener::{RemovalListener, RemovalReason};
use crate::metrics::Metrics;
use crate::policy::{OverflowPolicy, OverflowStrategy};
use crate::queue::BoundedQueue;

use core::fmt;
use std::sync::Arc;

/// The state shared by every clone of a `Registry` handle.
pub(crate) struct RegistryShared {
  pub(crate) queue: BoundedQueue,
  pub(crate) policy: Arc<dyn OverflowPolicy>,
  // `None` when a custom policy was installed.
  pub(crate) strategy: Option<OverflowStrategy>,
  pub(crate) listener: Arc<dyn RemovalListener>,
  pub(crate) id_source: Arc<dyn IdSource>,
  pub(crate) max_admit_attempts: u32,
  pub(crate) metrics: Metrics,
}

impl fmt::Debug for RegistryShared {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RegistryShared")
      .field("queue", &self.queue)
      .field("strategy", &self.strategy)
      .field("max_admit_attempts", &self.max_admit_attempts)
      .finish_non_exhaustive()
  }
}

impl RegistryShared {
  /// Records a removal and runs the teardown hook. Must be called without
  /// holding the queue lock.
  pub(crate) fn on_removed(&self, item: &Item, reason: RemovalReason) {
    match reason {
      RemovalReason::Evicted => Metrics::incr(&self.metrics.evicted),
      RemovalReason::Removed => Metrics::incr(&self.metrics.removed),
    }
    self.listener.on_remove(item, reason);
  }
}
