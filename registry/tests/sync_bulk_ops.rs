mod common;

use common::{build_recording_registry, build_registry, fill, priorities};
use fibre_registry::{OverflowStrategy, Priority, RemovalReason};
use pretty_assertions::assert_eq;

#[test]
fn test_remove_all_returns_true_if_items_were_present() {
  let registry = build_registry(3, OverflowStrategy::Skip);
  fill(&registry, &[Priority::High, Priority::High, Priority::High]);

  assert!(registry.remove_all());
  assert!(registry.list().is_empty());
}

#[test]
fn test_remove_all_returns_false_if_empty() {
  let registry = build_registry(3, OverflowStrategy::Skip);

  assert!(!registry.remove_all());
  assert!(registry.list().is_empty());
}

#[test]
fn test_remove_all_fires_listener_per_item() {
  let (registry, listener) = build_recording_registry(3, OverflowStrategy::Skip);
  let items = fill(&registry, &[Priority::Low, Priority::Medium, Priority::High]);

  assert!(registry.remove_all());
  let expected: Vec<String> = items.iter().map(|i| i.id().to_string()).collect();
  assert_eq!(listener.ids_with(RemovalReason::Removed), expected);
}

#[test]
fn test_remove_all_with_priority_keeps_survivor_order() {
  let registry = build_registry(4, OverflowStrategy::RemoveOldestLessImportant);
  let items = fill(
    &registry,
    &[Priority::Low, Priority::High, Priority::High, Priority::Medium],
  );

  assert!(registry.remove_all_with_priority(Priority::High));
  assert_eq!(registry.list(), vec![items[0].clone(), items[3].clone()]);
}

#[test]
fn test_remove_all_with_priority_returns_false_without_matches() {
  let registry = build_registry(4, OverflowStrategy::RemoveOldestLessImportant);
  let items = fill(&registry, &[Priority::Low, Priority::Medium]);

  assert!(!registry.remove_all_with_priority(Priority::High));
  assert_eq!(registry.list(), items);
}

#[test]
fn test_remove_all_with_priority_removes_only_that_tier() {
  let (registry, listener) = build_recording_registry(6, OverflowStrategy::Skip);
  fill(
    &registry,
    &[
      Priority::Medium,
      Priority::Low,
      Priority::Medium,
      Priority::High,
      Priority::Low,
      Priority::Medium,
    ],
  );

  assert!(registry.remove_all_with_priority(Priority::Medium));
  assert_eq!(priorities(&registry), vec![Priority::Low, Priority::High, Priority::Low]);
  assert_eq!(listener.ids_with(RemovalReason::Removed).len(), 3);

  assert!(registry.remove_all_with_priority(Priority::Low));
  assert_eq!(priorities(&registry), vec![Priority::High]);
  assert!(!registry.remove_all_with_priority(Priority::Low));
}

#[test]
fn test_bulk_removal_frees_capacity() {
  let registry = build_registry(2, OverflowStrategy::Skip);
  fill(&registry, &[Priority::Low, Priority::Low]);
  assert!(registry.admit(Priority::High).unwrap().is_none());

  assert!(registry.remove_all_with_priority(Priority::Low));
  assert!(registry.admit(Priority::High).unwrap().is_some());
  assert_eq!(registry.metrics().removed, 2);
}
