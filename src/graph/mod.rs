//! Graph state of a playback session.

/// Vertex placement.
pub mod layout;
/// Name-addressed vertex and edge registry.
pub mod registry;
