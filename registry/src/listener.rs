use crate::item::Item;

use std::fmt;
use std::sync::Arc;

/// Describes why an item left the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
  /// The item was evicted by the overflow policy to make room for a new one.
  Evicted,
  /// The item was removed by an explicit or bulk removal call.
  Removed,
}

impl fmt::Display for RemovalReason {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RemovalReason::Evicted => write!(f, "evicted to make room"),
      RemovalReason::Removed => write!(f, "explicitly removed"),
    }
  }
}

/// A teardown hook that is notified when items leave the registry.
///
/// `on_remove` is called exactly once for each successful removal, on the
/// calling thread, after the registry lock has been released. It may call
/// back into the registry.
pub trait RemovalListener: Send + Sync {
  fn on_remove(&self, item: &Item, reason: RemovalReason);
}

/// The default listener. Does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl RemovalListener for NoopListener {
  fn on_remove(&self, _item: &Item, _reason: RemovalReason) {}
}

impl<L> RemovalListener for Arc<L>
where
  L: RemovalListener + ?Sized,
{
  fn on_remove(&self, item: &Item, reason: RemovalReason) {
    (**self).on_remove(item, reason);
  }
}
