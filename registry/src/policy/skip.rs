use super::{AdmissionDecision, OverflowPolicy};
use crate::item::{Item, Priority};

use std::collections::VecDeque;

/// A policy that never evicts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skip;

impl OverflowPolicy for Skip {
  fn on_overflow(&self, _items: &VecDeque<Item>, _incoming: Priority) -> AdmissionDecision {
    AdmissionDecision::Reject
  }
}
