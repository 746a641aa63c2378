//! hkplay plays back a Hopcroft–Karp matching trace as a timed animation.
//!
//! The crate never draws anything itself. It turns a step log into an ordered stream of timed
//! effects and applies that stream to a caller-supplied [`Renderer`].
//!
//! # Pipeline overview
//!
//! 1. **Load**: text → [`StepLog`] (non-blank lines with line numbers)
//! 2. **Parse**: line → [`StepEvent`] via [`parse_step`]
//! 3. **Drive**: [`PlaybackDriver`] updates the [`GraphRegistry`], asks [`narration`] for text and
//!    stamps [`TimedEffect`]s on the virtual timeline kept by the [`Scheduler`]
//! 4. **Play**: [`Player`] walks the effect stream on a virtual clock, tweening colours and
//!    calling the [`Renderer`]
//!
//! Bad lines and unresolvable vertices or edges never abort a session: the offending line or
//! effect is logged through `tracing` and skipped.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod graph;
pub mod narration;
mod playback;
mod render;
mod schedule;
mod step;

pub use animation::tween::{Lerp, Pulse, Tween};
pub use config::PlaybackConfig;
pub use foundation::core::{EdgeKey, EdgeStyle, Point, Rgba8, Side, VertexId, VertexPair};
pub use foundation::error::{ParseError, PlaybackError, PlaybackResult, RegistryError};
pub use graph::layout::RowLayout;
pub use graph::registry::{EdgeInfo, EdgeLookup, GraphRegistry, VertexInfo};
pub use playback::driver::{Playback, PlaybackDriver, PlaybackState, PlaybackStats, build_playback};
pub use playback::player::{CancelToken, PlayReport, Player};
pub use render::backend::Renderer;
pub use render::memory::{RecordingRenderer, RenderedEdge, RenderedNode};
pub use schedule::clock::PlaybackClock;
pub use schedule::effect::{EffectKind, TextSlot, TimedEffect};
pub use schedule::scheduler::{FRONT_SPRITE_ORDER, Scheduler};
pub use step::log::{StepLine, StepLog};
pub use step::parse::{StepEvent, parse_step};
