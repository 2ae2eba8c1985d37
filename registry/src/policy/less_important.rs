use super::{AdmissionDecision, OverflowPolicy};
use crate::item::{Item, Priority};

use std::collections::VecDeque;

/// A policy that evicts the oldest item of a strictly less important tier.
///
/// Tiers are searched in the order of [`Priority::EVICTION_TIERS`]. The
/// search stops at the first tier the incoming item does not outrank, so:
///
/// - `High` may evict the oldest `Low`, or failing that the oldest `Medium`.
/// - `Medium` may evict only the oldest `Low`.
/// - `Low` never evicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOldestLessImportant;

impl RemoveOldestLessImportant {
  /// Returns the index of the oldest victim for `incoming`, if any.
  pub fn find_victim(items: &VecDeque<Item>, incoming: Priority) -> Option<usize> {
    for tier in Priority::EVICTION_TIERS {
      if !incoming.is_more_important_than(tier) {
        return None;
      }
      if let Some(index) = items.iter().position(|item| item.priority() == tier) {
        return Some(index);
      }
    }
    None
  }
}

impl OverflowPolicy for RemoveOldestLessImportant {
  fn on_overflow(&self, items: &VecDeque<Item>, incoming: Priority) -> AdmissionDecision {
    match Self::find_victim(items, incoming) {
      Some(index) => AdmissionDecision::Evict(index),
      None => AdmissionDecision::Reject,
    }
  }
}
