pub mod less_important;
pub mod oldest;
pub mod skip;

use crate::item::{Item, Priority};

use std::collections::VecDeque;
use std::fmt;

/// The outcome of consulting an overflow policy on a full registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionDecision {
  /// No victim exists; the incoming item is discarded.
  Reject,
  /// Evict the item at this index (arrival order, 0 = oldest) and retry.
  Evict(usize),
}

/// A trait for deciding what happens when an item arrives at a full registry.
///
/// `on_overflow` runs while the registry lock is held, so it must be quick
/// and must not call back into the registry. `items` is in arrival order.
pub trait OverflowPolicy: Send + Sync {
  fn on_overflow(&self, items: &VecDeque<Item>, incoming: Priority) -> AdmissionDecision;
}

/// The built-in overflow policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OverflowStrategy {
  /// Never evict. Admission fails while the registry is full.
  #[default]
  Skip,
  /// Evict the oldest item regardless of its priority.
  RemoveOldest,
  /// Evict the oldest item of the lowest tier that the incoming item outranks.
  RemoveOldestLessImportant,
}

impl fmt::Display for OverflowStrategy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OverflowStrategy::Skip => write!(f, "skip"),
      OverflowStrategy::RemoveOldest => write!(f, "remove_oldest"),
      OverflowStrategy::RemoveOldestLessImportant => write!(f, "remove_oldest_less_important"),
    }
  }
}

impl OverflowPolicy for OverflowStrategy {
  fn on_overflow(&self, items: &VecDeque<Item>, incoming: Priority) -> AdmissionDecision {
    match self {
      OverflowStrategy::Skip => skip::Skip.on_overflow(items, incoming),
      OverflowStrategy::RemoveOldest => oldest::RemoveOldest.on_overflow(items, incoming),
      OverflowStrategy::RemoveOldestLessImportant => {
        less_important::RemoveOldestLessImportant.on_overflow(items, incoming)
      }
    }
  }
}
