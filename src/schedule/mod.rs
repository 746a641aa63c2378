//! Virtual-time scheduling of visual effects.

/// Monotonic playback clock.
pub mod clock;
/// Timed effect records.
pub mod effect;
/// Deferred-effect queue ordered by fire time.
pub mod scheduler;
