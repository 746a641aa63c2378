use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::animation::tween::{Pulse, Tween};
use crate::config::PlaybackConfig;
use crate::foundation::core::{EdgeKey, EdgeStyle, Rgba8, VertexId};
use crate::foundation::error::{PlaybackError, PlaybackResult};
use crate::render::backend::Renderer;
use crate::schedule::effect::{EffectKind, TextSlot, TimedEffect};

// Tolerance for comparing tick times against fire times.
const TIME_EPS: f64 = 1e-9;

/// Cooperative stop request for a [`Player`].
///
/// Checked only between effect dispatches: tweens already running finish normally.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// New, not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// True once [`cancel`](Self::cancel) was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Outcome of [`Player::play`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct PlayReport {
    /// Effects dispatched to the renderer.
    pub applied: usize,
    /// Effects dropped because their target was missing or the renderer refused them.
    pub skipped: usize,
    /// Effects never dispatched because playback was cancelled.
    pub cancelled: usize,
    /// Number of sampling ticks run.
    pub ticks: usize,
    /// Virtual time of the last tick.
    pub end_time: f64,
}

enum Active {
    Edge {
        key: EdgeKey,
        tween: Tween<Rgba8>,
        style: EdgeStyle,
    },
    Node {
        id: VertexId,
        pulse: Pulse,
    },
}

impl Active {
    fn apply(&self, now: f64, renderer: &mut dyn Renderer) -> PlaybackResult<()> {
        match self {
            Self::Edge { key, tween, style } => renderer.set_edge_style(
                key,
                EdgeStyle {
                    color: tween.sample(now),
                    ..*style
                },
            ),
            Self::Node { id, pulse } => renderer.set_node_color(id, pulse.sample(now)),
        }
    }

    fn is_done(&self, now: f64) -> bool {
        match self {
            Self::Edge { tween, .. } => tween.is_done(now),
            Self::Node { pulse, .. } => pulse.is_done(now),
        }
    }
}

/// Applies a timed-effect stream to a [`Renderer`] on a virtual clock.
///
/// A single loop steps time by the configured smoothness: due effects are dispatched first, then
/// every running tween is sampled. Effects that share a fire time dispatch in stream order.
#[derive(Clone, Debug)]
pub struct Player {
    smoothness: f64,
    edge_color_change_duration: f64,
    node_highlight_duration: f64,
    cancel: Option<CancelToken>,
}

impl Player {
    /// Player using the timing of `config`.
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            smoothness: config.smoothness,
            edge_color_change_duration: config.edge_color_change_duration,
            node_highlight_duration: config.node_highlight_duration,
            cancel: None,
        }
    }

    /// Honour `token` between effect dispatches.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Play `effects` to completion (or cancellation) against `renderer`.
    #[tracing::instrument(skip_all)]
    pub fn play(
        &self,
        effects: impl IntoIterator<Item = TimedEffect>,
        renderer: &mut dyn Renderer,
    ) -> PlayReport {
        let mut pending: Vec<TimedEffect> = effects.into_iter().collect();
        pending.sort_by(|a, b| a.fire_at().total_cmp(&b.fire_at()).then(a.seq.cmp(&b.seq)));
        let mut pending = pending.into_iter().peekable();

        let mut active: Vec<Active> = Vec::new();
        let mut report = PlayReport::default();
        let mut tick = 0usize;

        loop {
            if active.is_empty() {
                // Nothing to sample: jump straight to the tick of the next effect.
                if let Some(next) = pending.peek() {
                    let target = (next.fire_at() / self.smoothness - TIME_EPS).ceil().max(0.0);
                    tick = tick.max(target as usize);
                }
            }
            let now = tick as f64 * self.smoothness;

            while pending.peek().is_some_and(|e| e.fire_at() <= now + TIME_EPS) {
                if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
                    report.cancelled += pending.len();
                    tracing::debug!(dropped = report.cancelled, "playback cancelled");
                    pending = Vec::new().into_iter().peekable();
                    break;
                }
                let Some(effect) = pending.next() else {
                    break;
                };
                match self.dispatch(&effect, renderer) {
                    Ok(Some(anim)) => {
                        active.push(anim);
                        report.applied += 1;
                    }
                    Ok(None) => report.applied += 1,
                    Err(err) => {
                        tracing::warn!(
                            effect = effect.effect.name(),
                            at = effect.fire_at(),
                            error = %err,
                            "skipping effect"
                        );
                        report.skipped += 1;
                    }
                }
            }

            active.retain(|anim| match anim.apply(now, renderer) {
                Ok(()) => !anim.is_done(now),
                Err(err) => {
                    tracing::warn!(error = %err, "dropping running tween");
                    false
                }
            });

            report.ticks += 1;
            report.end_time = now;
            if active.is_empty() && pending.peek().is_none() {
                break;
            }
            tick += 1;
        }

        report
    }

    fn dispatch(
        &self,
        effect: &TimedEffect,
        renderer: &mut dyn Renderer,
    ) -> PlaybackResult<Option<Active>> {
        let start = effect.fire_at();
        match &effect.effect {
            EffectKind::CreateNode {
                id,
                side,
                position,
                color,
                label,
            } => {
                renderer.create_node(id, *side, *position, *color, label)?;
                Ok(None)
            }
            EffectKind::CreateEdge {
                key,
                from,
                to,
                style,
            } => {
                renderer.create_edge(key, *from, *to)?;
                renderer.set_edge_style(key, *style)?;
                Ok(None)
            }
            EffectKind::RecolorEdge { key, style, .. } => {
                let current = renderer
                    .find_edge(key)
                    .ok_or_else(|| PlaybackError::render(format!("no edge '{key}'")))?;
                // Width and order switch immediately; only the colour is tweened.
                renderer.set_edge_style(
                    key,
                    EdgeStyle {
                        color: current.color,
                        ..*style
                    },
                )?;
                Ok(Some(Active::Edge {
                    key: key.clone(),
                    tween: Tween::new(
                        current.color,
                        style.color,
                        start,
                        self.edge_color_change_duration,
                    ),
                    style: *style,
                }))
            }
            EffectKind::HighlightNode { id, base } => {
                if renderer.find_node(id).is_none() {
                    return Err(PlaybackError::render(format!("no node '{id}'")));
                }
                Ok(Some(Active::Node {
                    id: id.clone(),
                    pulse: Pulse::new(*base, Rgba8::WHITE, start, self.node_highlight_duration),
                }))
            }
            EffectKind::SetNarrationText { text } => {
                renderer.set_text(TextSlot::Narration, text)?;
                Ok(None)
            }
            EffectKind::SetPhaseText { text } => {
                renderer.set_text(TextSlot::Phase, text)?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/player.rs"]
mod tests;
