use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// A source of unique item identifiers, consulted once per admission.
///
/// Implementations must never return the same id twice.
pub trait IdSource: Send + Sync {
  fn next_id(&self) -> String;
}

/// The default id source: random (v4) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
  fn next_id(&self) -> String {
    Uuid::new_v4().to_string()
  }
}

/// Issues `"{prefix}-{n}"` ids from a monotonically increasing counter.
///
/// Deterministic, which makes it handy for tests and logs.
pub struct SequentialIdSource {
  prefix: String,
  next: AtomicU64,
}

impl SequentialIdSource {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self {
      prefix: prefix.into(),
      next: AtomicU64::new(1),
    }
  }
}

impl fmt::Debug for SequentialIdSource {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SequentialIdSource")
      .field("prefix", &self.prefix)
      .field("next", &self.next.load(Ordering::Relaxed))
      .finish()
  }
}

impl IdSource for SequentialIdSource {
  fn next_id(&self) -> String {
    let n = self.next.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", self.prefix, n)
  }
}

impl<F> IdSource for F
where
  F: Fn() -> String + Send + Sync,
{
  fn next_id(&self) -> String {
    self()
  }
}
