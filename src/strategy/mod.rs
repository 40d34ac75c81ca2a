//! Runtime-selectable maximum-element algorithms.
//!
//! - [`key`]: the closed [`RoutingKey`] set, parsed case-insensitively
//! - [`max`]: the [`MaxStrategy`] trait and its reference implementations
//! - [`router`]: the immutable [`StrategyRouter`] and its builder

pub mod key;
pub mod max;
pub mod router;

pub use key::RoutingKey;
pub use max::{HeapStrategy, MaxStrategy, ScanStrategy, SortingStrategy};
pub use router::{StrategyRouter, StrategyRouterBuilder};
