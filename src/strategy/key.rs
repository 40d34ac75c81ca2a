//! Routing keys for the strategy router.

use std::fmt;
use std::str::FromStr;

use crate::error::StrategyError;

/// Closed set of keys a request can be routed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RoutingKey {
    /// Max-heap over all elements, read the top.
    Heapify,
    /// Sort ascending, read the last element.
    Sorting,
    /// Single linear pass.
    Scan,
}

impl RoutingKey {
    /// Every member, in declaration order.
    pub const ALL: [RoutingKey; 3] = [RoutingKey::Heapify, RoutingKey::Sorting, RoutingKey::Scan];

    /// Canonical upper-case name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoutingKey::Heapify => "HEAPIFY",
            RoutingKey::Sorting => "SORTING",
            RoutingKey::Scan => "SCAN",
        }
    }
}

impl fmt::Display for RoutingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoutingKey {
    type Err = StrategyError;

    /// Case-insensitive lookup by name. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| StrategyError::UnrecognizedRoutingKey { key: s.to_string() })
    }
}
