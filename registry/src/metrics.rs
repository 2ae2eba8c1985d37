use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crossbeam_utils::CachePadded;

/// A thread-safe, internal metrics collector for the registry.
/// All fields are atomic to allow for lock-free updates.
#[derive(Debug)]
pub(crate) struct Metrics {
  pub(crate) admitted: CachePadded<AtomicU64>,
  pub(crate) rejected: CachePadded<AtomicU64>,
  pub(crate) evicted: CachePadded<AtomicU64>,
  pub(crate) removed: CachePadded<AtomicU64>,
  // Pushes that lost a freed slot to a concurrent caller.
  pub(crate) admit_retries: CachePadded<AtomicU64>,

  created_at: Instant,
}

impl Default for Metrics {
  fn default() -> Self {
    Self {
      admitted: CachePadded::new(AtomicU64::new(0)),
      rejected: CachePadded::new(AtomicU64::new(0)),
      evicted: CachePadded::new(AtomicU64::new(0)),
      removed: CachePadded::new(AtomicU64::new(0)),
      admit_retries: CachePadded::new(AtomicU64::new(0)),
      created_at: Instant::now(),
    }
  }
}

impl Metrics {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub(crate) fn incr(counter: &AtomicU64) {
    counter.fetch_add(1, Ordering::Relaxed);
  }

  /// Creates a point-in-time snapshot of the current metrics.
  pub(crate) fn snapshot(&self, current_len: usize) -> MetricsSnapshot {
    MetricsSnapshot {
      admitted: self.admitted.load(Ordering::Relaxed),
      rejected: self.rejected.load(Ordering::Relaxed),
      evicted: self.evicted.load(Ordering::Relaxed),
      removed: self.removed.load(Ordering::Relaxed),
      admit_retries: self.admit_retries.load(Ordering::Relaxed),
      current_len,
      uptime_secs: self.created_at.elapsed().as_secs(),
    }
  }
}

/// A point-in-time, public-facing snapshot of the registry's metrics.
#[derive(Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
  /// The number of successful admissions.
  pub admitted: u64,
  /// The number of admissions rejected by the overflow policy.
  pub rejected: u64,
  /// The number of items evicted to make room for new ones.
  pub evicted: u64,
  /// The number of items removed by explicit or bulk removal.
  pub removed: u64,
  /// The number of pushes retried after a concurrent caller took the freed slot.
  pub admit_retries: u64,
  /// The number of items present when the snapshot was taken.
  pub current_len: usize,
  /// The number of seconds the registry has existed.
  pub uptime_secs: u64,
}

impl fmt::Debug for MetricsSnapshot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("MetricsSnapshot")
      .field("admitted", &self.admitted)
      .field("rejected", &self.rejected)
      .field("evicted", &self.evicted)
      .field("removed", &self.removed)
      .field("admit_retries", &self.admit_retries)
      .field("current_len", &self.current_len)
      .field("uptime_secs", &self.uptime_secs)
      .finish()
  }
}
