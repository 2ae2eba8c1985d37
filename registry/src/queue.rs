use crate::item::{Item, Priority};
use crate::policy::{AdmissionDecision, OverflowPolicy};

use core::fmt;
use std::collections::VecDeque;

use parking_lot::Mutex;

/// Largest capacity reserved up front; larger queues grow on demand.
const MAX_PREALLOCATED: usize = 1024;

/// What an eviction attempt did to the queue.
#[derive(Debug)]
pub(crate) enum Eviction {
  /// The queue had room by the time the lock was taken. Nothing was evicted.
  Room,
  /// The victim chosen by the policy was removed.
  Evicted(Item),
  /// The policy found no victim.
  Rejected,
}

/// A fixed-capacity, arrival-ordered queue of items behind a single lock.
///
/// Every public method takes the lock for exactly one container operation, so
/// the capacity check and the push in `try_push` are atomic with respect to
/// each other.
pub(crate) struct BoundedQueue {
  items: Mutex<VecDeque<Item>>,
  capacity: usize,
}

impl fmt::Debug for BoundedQueue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BoundedQueue")
      .field("capacity", &self.capacity)
      .field("len", &self.len())
      .finish()
  }
}

impl BoundedQueue {
  pub(crate) fn new(capacity: usize) -> Self {
    Self {
      items: Mutex::new(VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED))),
      capacity,
    }
  }

  #[inline]
  pub(crate) fn capacity(&self) -> usize {
    self.capacity
  }

  pub(crate) fn len(&self) -> usize {
    self.items.lock().len()
  }

  /// Appends `item` if there is room, handing it back otherwise.
  pub(crate) fn try_push(&self, item: Item) -> Result<(), Item> {
    let mut items = self.items.lock();
    if items.len() >= self.capacity {
      return Err(item);
    }
    items.push_back(item);
    Ok(())
  }

  /// Asks `policy` for a victim and removes it, all under one lock.
  pub(crate) fn evict_with(&self, policy: &dyn OverflowPolicy, incoming: Priority) -> Eviction {
    let mut items = self.items.lock();
    if items.len() < self.capacity {
      return Eviction::Room;
    }
    match policy.on_overflow(&items, incoming) {
      AdmissionDecision::Reject => Eviction::Rejected,
      AdmissionDecision::Evict(index) => match items.remove(index) {
        Some(victim) => Eviction::Evicted(victim),
        None => {
          tracing::warn!(
            index,
            len = items.len(),
            "overflow policy chose a victim index out of range; rejecting"
          );
          Eviction::Rejected
        }
      },
    }
  }

  /// Removes the first item equal to `item`, keeping the order of the rest.
  pub(crate) fn remove(&self, item: &Item) -> bool {
    let mut items = self.items.lock();
    match items.iter().position(|present| present == item) {
      Some(index) => items.remove(index).is_some(),
      None => false,
    }
  }

  pub(crate) fn remove_by_id(&self, id: &str) -> Option<Item> {
    let mut items = self.items.lock();
    let index = items.iter().position(|present| present.id() == id)?;
    items.remove(index)
  }

  pub(crate) fn find(&self, id: &str) -> Option<Item> {
    self.items.lock().iter().find(|item| item.id() == id).cloned()
  }

  pub(crate) fn contains(&self, item: &Item) -> bool {
    self.items.lock().contains(item)
  }

  /// Copies the current contents in arrival order.
  pub(crate) fn snapshot(&self) -> Vec<Item> {
    self.items.lock().iter().cloned().collect()
  }

  /// Copies the items matching `filter`, in arrival order.
  pub(crate) fn snapshot_where<F>(&self, filter: F) -> Vec<Item>
  where
    F: Fn(&Item) -> bool,
  {
    self
      .items
      .lock()
      .iter()
      .filter(|item| filter(item))
      .cloned()
      .collect()
  }
}
