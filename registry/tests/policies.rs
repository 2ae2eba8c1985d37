// registry/tests/policies.rs

mod common;

use common::{build_registry, fill, priorities};
use fibre_registry::Priority::{High, Low, Medium};
use fibre_registry::{OverflowStrategy, Priority};

// --- Skip Policy Tests ---
mod skip {
  use super::*;

  #[test]
  fn test_full_registry_rejects_new_item() {
    let registry = build_registry(1, OverflowStrategy::Skip);
    let first = registry.admit(Low).unwrap();
    let second = registry.admit(Low).unwrap();

    assert!(first.is_some());
    assert!(second.is_none());
    assert_eq!(registry.list(), vec![first.unwrap()]);
  }

  #[test]
  fn test_priority_does_not_matter() {
    let registry = build_registry(2, OverflowStrategy::Skip);
    let items = fill(&registry, &[Low, Low]);

    assert!(registry.admit(High).unwrap().is_none());
    assert_eq!(registry.list(), items);
  }
}

// --- RemoveOldest Policy Tests ---
mod remove_oldest {
  use super::*;

  #[test]
  fn test_new_item_evicts_oldest() {
    let registry = build_registry(1, OverflowStrategy::RemoveOldest);
    let first = registry.admit(Low).unwrap();
    let second = registry.admit(Low).unwrap();

    assert!(first.is_some());
    assert!(second.is_some());
    assert_eq!(registry.list(), vec![second.unwrap()]);
  }

  #[test]
  fn test_priority_is_ignored() {
    let registry = build_registry(3, OverflowStrategy::RemoveOldest);
    let items = fill(&registry, &[High, High, Medium]);

    let newcomer = registry.admit(Low).unwrap().unwrap();
    assert_eq!(
      registry.list(),
      vec![items[1].clone(), items[2].clone(), newcomer]
    );
  }

  #[test]
  fn test_registry_stays_at_capacity() {
    let registry = build_registry(3, OverflowStrategy::RemoveOldest);
    let mut admitted = Vec::new();
    for i in 0..20 {
      let p = Priority::ALL[i % 3];
      admitted.push(registry.admit(p).unwrap().unwrap());
      assert!(registry.len() <= 3);
    }
    assert_eq!(registry.list(), admitted[17..].to_vec());
  }
}

// --- RemoveOldestLessImportant Policy Tests ---
mod remove_oldest_less_important {
  use super::*;

  #[test]
  fn test_high_evicts_oldest_low() {
    let registry = build_registry(5, OverflowStrategy::RemoveOldestLessImportant);
    let items = fill(&registry, &[High, Medium, Low, Low, Medium]);

    let newcomer = registry.admit(High).unwrap().unwrap();
    assert_eq!(
      registry.list(),
      vec![
        items[0].clone(),
        items[1].clone(),
        items[3].clone(),
        items[4].clone(),
        newcomer,
      ]
    );
  }

  #[test]
  fn test_medium_evicts_oldest_low() {
    let registry = build_registry(5, OverflowStrategy::RemoveOldestLessImportant);
    let items = fill(&registry, &[High, Medium, Low, Low, Medium]);

    let newcomer = registry.admit(Medium).unwrap().unwrap();
    assert_eq!(
      registry.list(),
      vec![
        items[0].clone(),
        items[1].clone(),
        items[3].clone(),
        items[4].clone(),
        newcomer,
      ]
    );
  }

  #[test]
  fn test_low_is_rejected_when_full() {
    let registry = build_registry(5, OverflowStrategy::RemoveOldestLessImportant);
    let items = fill(&registry, &[High, Medium, Low, Low, Medium]);

    assert!(registry.admit(Low).unwrap().is_none());
    assert_eq!(registry.list(), items);
  }

  #[test]
  fn test_low_is_rejected_for_any_mix() {
    for mix in [[Low, Low], [Medium, High], [High, High], [Low, High]] {
      let registry = build_registry(2, OverflowStrategy::RemoveOldestLessImportant);
      let items = fill(&registry, &mix);
      assert!(registry.admit(Low).unwrap().is_none());
      assert_eq!(registry.list(), items);
    }
  }

  #[test]
  fn test_high_evicts_oldest_medium_when_no_low() {
    let registry = build_registry(4, OverflowStrategy::RemoveOldestLessImportant);
    let items = fill(&registry, &[High, Medium, Medium, High]);

    let newcomer = registry.admit(High).unwrap().unwrap();
    assert_eq!(
      registry.list(),
      vec![items[0].clone(), items[2].clone(), items[3].clone(), newcomer]
    );
  }

  #[test]
  fn test_medium_is_rejected_when_no_low() {
    let registry = build_registry(4, OverflowStrategy::RemoveOldestLessImportant);
    let items = fill(&registry, &[High, Medium, Medium, High]);

    assert!(registry.admit(Medium).unwrap().is_none());
    assert_eq!(registry.list(), items);
  }

  #[test]
  fn test_high_is_rejected_when_only_high() {
    let registry = build_registry(1, OverflowStrategy::RemoveOldestLessImportant);
    let items = fill(&registry, &[High]);

    assert!(registry.admit(High).unwrap().is_none());
    assert_eq!(registry.list(), items);
  }

  #[test]
  fn test_repeated_high_admissions_drain_lower_tiers_in_order() {
    let registry = build_registry(4, OverflowStrategy::RemoveOldestLessImportant);
    fill(&registry, &[Medium, Low, Medium, Low]);

    for _ in 0..4 {
      registry.admit(High).unwrap().unwrap();
    }
    assert_eq!(priorities(&registry), vec![High, High, High, High]);
    assert!(registry.admit(High).unwrap().is_none());
  }

  #[test]
  fn test_eviction_order_lows_then_mediums() {
    let registry = build_registry(4, OverflowStrategy::RemoveOldestLessImportant);
    let items = fill(&registry, &[Medium, Low, Medium, Low]);

    registry.admit(High).unwrap().unwrap();
    assert!(!registry.contains(&items[1]), "Oldest low goes first");
    registry.admit(High).unwrap().unwrap();
    assert!(!registry.contains(&items[3]), "Then the remaining low");
    registry.admit(High).unwrap().unwrap();
    assert!(!registry.contains(&items[0]), "Then the oldest medium");
    assert!(registry.contains(&items[2]));
  }
}
