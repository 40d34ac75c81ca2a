use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::error::StrategyError;

use super::key::RoutingKey;
use super::max::{HeapStrategy, MaxStrategy, ScanStrategy, SortingStrategy};

/// Fixed mapping from [`RoutingKey`] to a strategy.
///
/// The mapping is complete and immutable once built, so a router can be
/// shared across threads without locking.
///
/// Use [`StrategyRouterBuilder`] to wire custom implementations, or
/// [`StrategyRouter::standard`] for the reference ones.
pub struct StrategyRouter {
    strategies: HashMap<RoutingKey, Arc<dyn MaxStrategy>>,
}

impl StrategyRouter {
    /// Create a builder with no strategies registered.
    #[must_use]
    pub fn builder() -> StrategyRouterBuilder {
        StrategyRouterBuilder::new()
    }

    /// Router over [`HeapStrategy`], [`SortingStrategy`] and [`ScanStrategy`].
    #[must_use]
    pub fn standard() -> Self {
        let strategies: HashMap<RoutingKey, Arc<dyn MaxStrategy>> = HashMap::from([
            (RoutingKey::Heapify, Arc::new(HeapStrategy) as Arc<dyn MaxStrategy>),
            (RoutingKey::Sorting, Arc::new(SortingStrategy) as Arc<dyn MaxStrategy>),
            (RoutingKey::Scan, Arc::new(ScanStrategy) as Arc<dyn MaxStrategy>),
        ]);
        Self { strategies }
    }

    /// Resolve `key_text` case-insensitively and run the mapped strategy.
    ///
    /// # Errors
    /// [`StrategyError::UnrecognizedRoutingKey`] when `key_text` names no key,
    /// otherwise whatever the strategy itself returns.
    pub fn evaluate(&self, input: &[i64], key_text: &str) -> Result<i64, StrategyError> {
        let key: RoutingKey = key_text.parse()?;
        self.evaluate_key(input, key)
    }

    /// Run the strategy mapped to `key`.
    pub fn evaluate_key(&self, input: &[i64], key: RoutingKey) -> Result<i64, StrategyError> {
        let strategy = self.resolve(key);
        debug!(%key, strategy = strategy.name(), "Routing request");
        strategy.max_element(input)
    }

    /// The strategy mapped to `key`.
    #[must_use]
    pub fn resolve(&self, key: RoutingKey) -> &dyn MaxStrategy {
        // The builder guarantees every key is present.
        self.strategies[&key].as_ref()
    }

    /// All routing keys, in declaration order.
    #[must_use]
    pub fn keys(&self) -> Vec<RoutingKey> {
        RoutingKey::ALL.to_vec()
    }
}

impl Default for StrategyRouter {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for StrategyRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for key in self.keys() {
            map.entry(&key, &self.resolve(key).name());
        }
        map.finish()
    }
}

/// Builder for [`StrategyRouter`].
///
/// # Example
///
/// ```
/// use patterns::strategy::{HeapStrategy, ScanStrategy, SortingStrategy, StrategyRouter};
///
/// let router = StrategyRouter::builder()
///     .heapify(HeapStrategy)
///     .sorting(SortingStrategy)
///     .scan(ScanStrategy)
///     .build()
///     .unwrap();
/// assert_eq!(router.evaluate(&[2, 7, 1], "Heapify"), Ok(7));
/// ```
#[derive(Default)]
pub struct StrategyRouterBuilder {
    strategies: HashMap<RoutingKey, Arc<dyn MaxStrategy>>,
}

impl StrategyRouterBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `key` to `strategy`, replacing any earlier mapping for it.
    #[must_use]
    pub fn register(mut self, key: RoutingKey, strategy: Arc<dyn MaxStrategy>) -> Self {
        self.strategies.insert(key, strategy);
        self
    }

    #[must_use]
    pub fn heapify(self, strategy: impl MaxStrategy + 'static) -> Self {
        self.register(RoutingKey::Heapify, Arc::new(strategy))
    }

    #[must_use]
    pub fn sorting(self, strategy: impl MaxStrategy + 'static) -> Self {
        self.register(RoutingKey::Sorting, Arc::new(strategy))
    }

    #[must_use]
    pub fn scan(self, strategy: impl MaxStrategy + 'static) -> Self {
        self.register(RoutingKey::Scan, Arc::new(strategy))
    }

    /// Build the router.
    ///
    /// # Errors
    /// [`StrategyError::MissingStrategy`] naming the first key without an
    /// implementation.
    pub fn build(self) -> Result<StrategyRouter, StrategyError> {
        if let Some(key) = RoutingKey::ALL
            .into_iter()
            .find(|key| !self.strategies.contains_key(key))
        {
            return Err(StrategyError::MissingStrategy { key });
        }
        Ok(StrategyRouter {
            strategies: self.strategies,
        })
    }
}
