//! Renderer collaborator contract and the built-in in-memory renderer.

/// The [`Renderer`](backend::Renderer) trait.
pub mod backend;
/// In-memory renderer for tests and the CLI.
pub mod memory;
