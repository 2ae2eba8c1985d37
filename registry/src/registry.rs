use crate::builder::RegistryBuilder;
use crate::error::{RegistryError, Result};
use crate::item::{Item, Priority};
use crate::listener::RemovalReason;
use crate::metrics::{Metrics, MetricsSnapshot};
use crate::policy::OverflowStrategy;
use crate::queue::Eviction;
use crate::retry::RetryBudget;
use crate::shared::RegistryShared;

use std::sync::Arc;

/// A bounded, priority-aware registry of in-flight items.
///
/// `Registry` is a cheap handle around shared state; clone it to share one
/// registry between threads. All operations are non-blocking apart from the
/// short internal lock: admission either succeeds or fails immediately.
#[derive(Debug, Clone)]
pub struct Registry {
  pub(crate) shared: Arc<RegistryShared>,
}

impl Registry {
  /// Creates a registry with the given capacity and overflow strategy.
  ///
  /// Fails with [`RegistryError::ZeroCapacity`] if `capacity` is zero.
  pub fn new(capacity: usize, strategy: OverflowStrategy) -> Result<Self> {
    RegistryBuilder::new()
      .capacity(capacity)
      .overflow_strategy(strategy)
      .build()
  }

  /// Creates a registry that rejects new items while full.
  pub fn with_capacity(capacity: usize) -> Result<Self> {
    Self::new(capacity, OverflowStrategy::Skip)
  }

  pub fn builder() -> RegistryBuilder {
    RegistryBuilder::new()
  }

  /// Admits a new item with the given priority.
  ///
  /// # Returns
  ///
  /// - `Ok(Some(item))` if the item was admitted, possibly after evicting
  ///   a victim chosen by the overflow policy.
  /// - `Ok(None)` if the registry is full and the policy found no victim.
  /// - `Err(RegistryError::RetryExhausted)` if the retry budget ran out.
  pub fn admit(&self, priority: Priority) -> Result<Option<Item>> {
    let shared = &*self.shared;
    let item = Item::new(shared.id_source.next_id(), priority);
    let mut pending = item.clone();
    let mut budget = RetryBudget::new(shared.max_admit_attempts);

    loop {
      match shared.queue.try_push(pending) {
        Ok(()) => {
          Metrics::incr(&shared.metrics.admitted);
          tracing::trace!(id = item.id(), %priority, "admitted item");
          return Ok(Some(item));
        }
        Err(returned) => pending = returned,
      }

      if budget.used() > 0 {
        // The slot freed on the previous pass was taken by someone else.
        Metrics::incr(&shared.metrics.admit_retries);
        tracing::warn!(
          id = item.id(),
          %priority,
          attempt = budget.used(),
          "freed slot was taken concurrently; retrying admission"
        );
      }

      if let Err(err) = budget.consume() {
        tracing::error!(id = item.id(), %priority, error = %err, "admission retry budget exhausted");
        return Err(err);
      }

      match shared.queue.evict_with(shared.policy.as_ref(), priority) {
        Eviction::Room => {}
        Eviction::Evicted(victim) => {
          tracing::debug!(
            victim = victim.id(),
            victim_priority = %victim.priority(),
            incoming = %priority,
            "evicted item to make room"
          );
          shared.on_removed(&victim, RemovalReason::Evicted);
        }
        Eviction::Rejected => {
          Metrics::incr(&shared.metrics.rejected);
          tracing::debug!(
            %priority,
            capacity = shared.queue.capacity(),
            "registry full; admission rejected"
          );
          return Ok(None);
        }
      }
    }
  }

  /// Admits an item from an untyped priority such as `"high"` or `2u8`.
  ///
  /// Fails with [`RegistryError::InvalidPriority`] if the value does not
  /// name a priority; otherwise behaves like [`admit`](Self::admit).
  pub fn try_admit<P>(&self, priority: P) -> Result<Option<Item>>
  where
    P: TryInto<Priority, Error = RegistryError>,
  {
    self.admit(priority.try_into()?)
  }

  /// Removes `item` if it is present. Order of the remaining items is kept.
  ///
  /// Returns `false` if the item is not in this registry.
  pub fn remove(&self, item: &Item) -> bool {
    let removed = self.shared.queue.remove(item);
    if removed {
      tracing::trace!(id = item.id(), "removed item");
      self.shared.on_removed(item, RemovalReason::Removed);
    }
    removed
  }

  /// Removes the item with the given id if it is present.
  pub fn remove_by_id(&self, id: &str) -> bool {
    match self.shared.queue.remove_by_id(id) {
      Some(item) => {
        tracing::trace!(id, "removed item");
        self.shared.on_removed(&item, RemovalReason::Removed);
        true
      }
      None => false,
    }
  }

  /// Removes every item present when the call starts.
  ///
  /// Items admitted concurrently after the snapshot is taken may survive.
  /// Returns `true` if the snapshot was non-empty.
  pub fn remove_all(&self) -> bool {
    let snapshot = self.list();
    self.remove_each(&snapshot)
  }

  /// Removes every item of `priority` present when the call starts, keeping
  /// the relative order of the survivors.
  ///
  /// Returns `true` if at least one matching item was present.
  pub fn remove_all_with_priority(&self, priority: Priority) -> bool {
    let snapshot = self
      .shared
      .queue
      .snapshot_where(|item| item.priority() == priority);
    tracing::debug!(%priority, matched = snapshot.len(), "removing all items with priority");
    self.remove_each(&snapshot)
  }

  fn remove_each(&self, snapshot: &[Item]) -> bool {
    for item in snapshot {
      self.remove(item);
    }
    !snapshot.is_empty()
  }

  /// Returns a copy of the current contents, oldest first.
  pub fn list(&self) -> Vec<Item> {
    self.shared.queue.snapshot()
  }

  /// Looks up a present item by id.
  pub fn get(&self, id: &str) -> Option<Item> {
    self.shared.queue.find(id)
  }

  pub fn contains(&self, item: &Item) -> bool {
    self.shared.queue.contains(item)
  }

  pub fn len(&self) -> usize {
    self.shared.queue.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  pub fn capacity(&self) -> usize {
    self.shared.queue.capacity()
  }

  /// The built-in strategy in use, or `None` if a custom policy was installed.
  pub fn overflow_strategy(&self) -> Option<OverflowStrategy> {
    self.shared.strategy
  }

  pub fn metrics(&self) -> MetricsSnapshot {
    self.shared.metrics.snapshot(self.len())
  }
}
