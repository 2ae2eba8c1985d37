#![allow(dead_code)]

use std::sync::Arc;

use fibre_registry::{
  Item, OverflowStrategy, Priority, Registry, RemovalListener, RemovalReason, SequentialIdSource,
};
use parking_lot::Mutex;

/// A listener that records every teardown call, in order.
#[derive(Clone, Default)]
pub struct RecordingListener {
  pub calls: Arc<Mutex<Vec<(Item, RemovalReason)>>>,
}

impl RecordingListener {
  pub fn calls(&self) -> Vec<(Item, RemovalReason)> {
    self.calls.lock().clone()
  }

  pub fn ids_with(&self, reason: RemovalReason) -> Vec<String> {
    self
      .calls
      .lock()
      .iter()
      .filter(|(_, r)| *r == reason)
      .map(|(item, _)| item.id().to_string())
      .collect()
  }
}

impl RemovalListener for RecordingListener {
  fn on_remove(&self, item: &Item, reason: RemovalReason) {
    self.calls.lock().push((item.clone(), reason));
  }
}

pub fn build_registry(capacity: usize, strategy: OverflowStrategy) -> Registry {
  Registry::builder()
    .capacity(capacity)
    .overflow_strategy(strategy)
    .id_source(SequentialIdSource::new("item"))
    .build()
    .unwrap()
}

pub fn build_recording_registry(
  capacity: usize,
  strategy: OverflowStrategy,
) -> (Registry, RecordingListener) {
  let listener = RecordingListener::default();
  let registry = Registry::builder()
    .capacity(capacity)
    .overflow_strategy(strategy)
    .id_source(SequentialIdSource::new("item"))
    .removal_listener(listener.clone())
    .build()
    .unwrap();
  (registry, listener)
}

/// Admits one item per priority, asserting each admission succeeds.
pub fn fill(registry: &Registry, priorities: &[Priority]) -> Vec<Item> {
  priorities
    .iter()
    .map(|p| {
      registry
        .admit(*p)
        .unwrap()
        .unwrap_or_else(|| panic!("admission of {} should succeed", p))
    })
    .collect()
}

pub fn priorities(registry: &Registry) -> Vec<Priority> {
  registry.list().iter().map(Item::priority).collect()
}
