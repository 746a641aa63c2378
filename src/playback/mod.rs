//! Playback session: the step-driven state machine and the effect player.

/// Step events to scheduled effects.
pub mod driver;
/// Timed effects to renderer calls.
pub mod player;
