//! Configuration loading and resolution.
//!
//! Files, environment variables, and CLI flags are merged into a
//! [`RawConfig`](raw::RawConfig) and then validated into the
//! [`ResolvedConfig`] that drives the application. `load` is the entry point.

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::ResolvedConfig;
