//! Patterns - a lazily constructed singleton and a runtime strategy router.
//!
//! # Modules
//!
//! - [`singleton`] - Double-checked lazy construction of one log-backed instance
//! - [`strategy`] - Routing keys mapped to interchangeable max-element algorithms
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//! - [`cli`] - Console drivers for both demonstrations
//!
//! # Example
//!
//! ```no_run
//! use patterns::singleton::Singleton;
//! use patterns::strategy::StrategyRouter;
//!
//! let singleton = Singleton::new("application.log");
//! let first = singleton.get_instance(5).unwrap();
//! let again = singleton.get_instance(99).unwrap();
//! assert_eq!(first.identity(), again.identity());
//! assert_eq!(again.value(), 5);
//!
//! let router = StrategyRouter::standard();
//! assert_eq!(router.evaluate(&[3, 1, 4], "heapify").unwrap(), 4);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod singleton;
pub mod strategy;
