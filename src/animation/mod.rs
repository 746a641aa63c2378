//! Time-based interpolation used by effect playback.

/// Linear tweens and the two-phase node pulse.
pub mod tween;
