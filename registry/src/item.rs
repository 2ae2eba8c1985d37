use crate::error::RegistryError;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// The importance class of an item. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Priority {
  Low,
  Medium,
  High,
}

impl Priority {
  /// Every priority, least important first.
  pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

  /// Tiers searched, in order, by the remove-oldest-less-important policy.
  pub const EVICTION_TIERS: [Priority; 2] = [Priority::Low, Priority::Medium];

  /// Strict ordinal comparison: `High > Medium > Low`.
  #[inline]
  pub fn is_more_important_than(self, other: Priority) -> bool {
    self > other
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Priority::Low => "low",
      Priority::Medium => "medium",
      Priority::High => "high",
    }
  }
}

impl fmt::Display for Priority {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Priority {
  type Err = RegistryError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "low" => Ok(Priority::Low),
      "medium" => Ok(Priority::Medium),
      "high" => Ok(Priority::High),
      _ => Err(RegistryError::InvalidPriority(s.to_string())),
    }
  }
}

impl TryFrom<&str> for Priority {
  type Error = RegistryError;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl TryFrom<u8> for Priority {
  type Error = RegistryError;

  /// Maps the ordinal (`0 = Low`, `1 = Medium`, `2 = High`) to a priority.
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Priority::ALL
      .get(value as usize)
      .copied()
      .ok_or_else(|| RegistryError::InvalidPriority(value.to_string()))
  }
}

/// An admitted unit of work: an opaque unique id and a priority tag.
///
/// Items are only produced by [`Registry::admit`](crate::Registry::admit).
/// Cloning is cheap; the id is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
  id: Arc<str>,
  priority: Priority,
}

impl Item {
  pub(crate) fn new(id: impl Into<Arc<str>>, priority: Priority) -> Self {
    Self {
      id: id.into(),
      priority,
    }
  }

  #[inline]
  pub fn id(&self) -> &str {
    &self.id
  }

  #[inline]
  pub fn priority(&self) -> Priority {
    self.priority
  }
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}({})", self.priority, self.id)
  }
}
