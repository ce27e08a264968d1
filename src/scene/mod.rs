//! Scene graph and the owned snapshots handed to frame sinks.

/// Ordered, identity-keyed set of on-screen objects.
pub mod graph;
