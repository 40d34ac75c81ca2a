//! Lazily constructed single instance backed by a log file.
//!
//! - [`guard`]: [`LazySlot`], the double-checked one-time initialization cell
//! - [`sink`]: [`LogSink`], the append-only log file
//! - [`instance`]: [`Instance`] and its [`InstanceId`] identity token
//! - [`holder`]: [`Singleton`], the explicitly passed owner of the instance

pub mod guard;
pub mod holder;
pub mod instance;
pub mod sink;

pub use guard::LazySlot;
pub use holder::Singleton;
pub use instance::{Instance, InstanceId};
pub use sink::LogSink;
