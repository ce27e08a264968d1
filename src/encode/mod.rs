//! Frame sinks.
//!
//! Sinks consume scene snapshots in timeline order and are driven by `Scene::play`.

/// Sink trait and built-in sinks.
pub mod sink;
