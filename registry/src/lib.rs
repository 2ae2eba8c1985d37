//! A bounded, priority-aware registry of in-flight work items.
//!
//! Callers admit items with a [`Priority`]; the registry holds at most
//! `capacity` of them in arrival order. When an item arrives at a full
//! registry, the configured [`OverflowStrategy`] decides whether an existing
//! item is evicted to make room:
//!
//! - [`Skip`](OverflowStrategy::Skip): never evict, reject the newcomer.
//! - [`RemoveOldest`](OverflowStrategy::RemoveOldest): evict the oldest item.
//! - [`RemoveOldestLessImportant`](OverflowStrategy::RemoveOldestLessImportant):
//!   evict the oldest `Low` (then `Medium`) item the newcomer outranks.
//!
//! A full registry is an ordinary outcome and is reported as `Ok(None)`;
//! only invalid input and internal invariant violations are errors.
//!
//! ```
//! use fibre_registry::{OverflowStrategy, Priority, Registry};
//!
//! let registry = Registry::new(1, OverflowStrategy::RemoveOldest).unwrap();
//! let first = registry.admit(Priority::Low).unwrap().unwrap();
//! let second = registry.admit(Priority::Low).unwrap().unwrap();
//!
//! assert!(!registry.contains(&first));
//! assert_eq!(registry.list(), vec![second]);
//! ```

// Public modules that form the API
pub mod builder;
pub mod config;
pub mod error;
pub mod id;
pub mod item;
pub mod listener;
pub mod metrics;
pub mod policy;
pub mod registry;

// Internal, crate-only modules
mod queue;
mod retry;
mod shared;

pub use builder::RegistryBuilder;
pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use id::{IdSource, SequentialIdSource, UuidSource};
pub use item::{Item, Priority};
pub use listener::{NoopListener, RemovalListener, RemovalReason};
pub use metrics::MetricsSnapshot;
pub use policy::{AdmissionDecision, OverflowPolicy, OverflowStrategy};
pub use registry::Registry;
pub use retry::DEFAULT_MAX_ADMIT_ATTEMPTS;
