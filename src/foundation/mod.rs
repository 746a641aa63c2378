//! Shared identifiers, colours and the crate error type.

/// Identifiers, colours and edge styles.
pub mod core;
/// Error taxonomy.
pub mod error;
