use super::{AdmissionDecision, OverflowPolicy};
use crate::item::{Item, Priority};

use std::collections::VecDeque;

/// A policy that evicts in First-In, First-Out order, ignoring priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOldest;

impl OverflowPolicy for RemoveOldest {
  fn on_overflow(&self, items: &VecDeque<Item>, _incoming: Priority) -> AdmissionDecision {
    if items.is_empty() {
      return AdmissionDecision::Reject;
    }
    AdmissionDecision::Evict(0)
  }
}
