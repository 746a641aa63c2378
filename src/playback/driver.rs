use crate::config::PlaybackConfig;
use crate::foundation::core::{EdgeStyle, Point, Rgba8, Side, VertexId, VertexPair};
use crate::foundation::error::{PlaybackResult, RegistryError};
use crate::graph::layout::RowLayout;
use crate::graph::registry::GraphRegistry;
use crate::narration;
use crate::schedule::effect::{EffectKind, TimedEffect};
use crate::schedule::scheduler::{FRONT_SPRITE_ORDER, Scheduler};
use crate::step::log::StepLog;
use crate::step::parse::{StepEvent, parse_step};

/// Lifecycle of a playback session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum PlaybackState {
    /// No step processed yet.
    Idle,
    /// Registering the vertex sets of the first `Initialize` step.
    Initializing,
    /// Processing steps.
    Running,
    /// Final narration scheduled; further steps are ignored.
    Finished,
}

/// Counters of one session.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PlaybackStats {
    /// Lines fed to the driver.
    pub lines: usize,
    /// Lines that parsed into a step.
    pub events: usize,
    /// Lines dropped because they did not parse.
    pub skipped_lines: usize,
    /// Effects dropped because a vertex or edge could not be resolved.
    pub skipped_effects: usize,
}

/// Result of a finished session: the final graph and the timed-effect stream in fire order.
#[derive(Clone, Debug)]
pub struct Playback {
    /// Graph state after the last step.
    pub registry: GraphRegistry,
    /// Every scheduled effect, ordered by fire time then enqueue order.
    pub effects: Vec<TimedEffect>,
    /// Session counters.
    pub stats: PlaybackStats,
    /// Fire time of the last effect.
    pub end_time: f64,
}

/// Turns step events into registry updates and scheduled effects.
///
/// One driver owns one session: its registry, clock and z-order counter are never shared.
#[derive(Debug)]
pub struct PlaybackDriver {
    config: PlaybackConfig,
    layout: RowLayout,
    registry: GraphRegistry,
    scheduler: Scheduler,
    state: PlaybackState,
    terminal_result: Option<String>,
    stats: PlaybackStats,
}

impl PlaybackDriver {
    /// Start an idle session.
    pub fn new(config: PlaybackConfig) -> PlaybackResult<Self> {
        config.validate()?;
        Ok(Self {
            layout: config.layout(),
            registry: GraphRegistry::new(config.edge_lookup),
            scheduler: Scheduler::new(),
            state: PlaybackState::Idle,
            terminal_result: None,
            stats: PlaybackStats::default(),
            config,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Graph state so far.
    pub fn registry(&self) -> &GraphRegistry {
        &self.registry
    }

    /// Pending effects and timeline state.
    pub fn scheduler(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    /// Playback clock value.
    pub fn now(&self) -> f64 {
        self.scheduler.now()
    }

    /// Session counters so far.
    pub fn stats(&self) -> &PlaybackStats {
        &self.stats
    }

    /// Feed every line of `log`, then finish the session.
    #[tracing::instrument(skip_all, fields(steps = log.len()))]
    pub fn feed_log(&mut self, log: &StepLog) {
        for line in log.lines() {
            self.feed_line_numbered(line.number, &line.text);
        }
        self.finish();
    }

    /// Parse and process one raw line. Lines that do not parse are logged and skipped.
    pub fn feed_line(&mut self, line: &str) -> bool {
        self.feed_line_numbered(self.stats.lines + 1, line)
    }

    fn feed_line_numbered(&mut self, number: usize, line: &str) -> bool {
        self.stats.lines += 1;
        match parse_step(line) {
            Ok(event) => {
                self.process(&event);
                true
            }
            Err(err) => {
                tracing::warn!(line = number, error = %err, "skipping step line");
                self.stats.skipped_lines += 1;
                false
            }
        }
    }

    /// Apply one step: mutate the registry and schedule its effects.
    pub fn process(&mut self, event: &StepEvent) {
        match self.state {
            PlaybackState::Finished => {
                tracing::warn!(kind = event.kind_name(), "step after playback finished");
                return;
            }
            PlaybackState::Idle if !matches!(event, StepEvent::Initialize { .. }) => {
                tracing::warn!(
                    kind = event.kind_name(),
                    "step before Initialize; vertex lookups will fail"
                );
                self.set_state(PlaybackState::Running);
            }
            _ => {}
        }
        self.stats.events += 1;

        match event {
            StepEvent::Initialize { left, right } => self.initialize(left, right),
            StepEvent::AddEdge(pairs) => self.add_edges(pairs),
            StepEvent::AddPath(pairs) => {
                self.scheduler.advance(self.config.step_duration);
                for (i, pair) in pairs.iter().enumerate() {
                    let color = if i % 2 == 0 { Rgba8::GREEN } else { Rgba8::WHITE };
                    let width = self.config.highlight_width;
                    self.restyle(pair, color, width, FRONT_SPRITE_ORDER);
                }
                self.narrate(narration::add_path_text(pairs));
            }
            StepEvent::UpdateMatch(pairs) => {
                self.scheduler.advance(self.config.step_duration);
                for pair in pairs {
                    let width = self.config.highlight_width;
                    self.restyle(pair, Rgba8::YELLOW, width, FRONT_SPRITE_ORDER);
                }
                self.narrate(narration::update_match_text(pairs));
            }
            StepEvent::DisregardVertices(pairs) => {
                self.scheduler.advance(self.config.step_duration);
                for pair in pairs {
                    let z_order = self.scheduler.next_background_order();
                    let width = self.config.disregard_width;
                    self.restyle(pair, Rgba8::GREY, width, z_order);
                }
                self.narrate(narration::disregard_text(pairs));
            }
            StepEvent::BeginPhase { label } => {
                self.scheduler.advance(self.config.step_duration);
                let text = narration::begin_phase_text(label);
                self.narrate(text.narration);
                self.scheduler.schedule(EffectKind::SetPhaseText { text: text.label });
            }
            StepEvent::MaximumMatching { result } => {
                self.scheduler.advance(self.config.step_duration);
                let text = narration::maximum_matching_text(result);
                self.narrate(text.narration);
                self.scheduler.schedule(EffectKind::SetPhaseText { text: text.label });
                self.terminal_result = Some(result.clone());
            }
        }
    }

    /// Schedule the closing narration one step after the clock and stop accepting steps.
    pub fn finish(&mut self) {
        if self.state == PlaybackState::Finished {
            return;
        }
        let text = match &self.terminal_result {
            Some(result) => narration::maximum_matching_text(result).label,
            None => narration::FINAL_MATCHING_TEXT.to_owned(),
        };
        let at = self.scheduler.now() + self.config.step_duration;
        self.scheduler.schedule_at(at, EffectKind::SetNarrationText { text });
        self.set_state(PlaybackState::Finished);
    }

    /// Finish the session and hand out its results.
    pub fn into_playback(mut self) -> Playback {
        self.finish();
        let end_time = self.scheduler.horizon();
        let effects = self.scheduler.drain().collect();
        Playback {
            registry: self.registry,
            effects,
            stats: self.stats,
            end_time,
        }
    }

    fn initialize(&mut self, left: &[VertexId], right: &[VertexId]) {
        self.set_state(PlaybackState::Initializing);

        let mut added = Vec::with_capacity(left.len() + right.len());
        for (names, side) in [(left, Side::Left), (right, Side::Right)] {
            for name in names {
                match self.registry.add_vertex(name, side) {
                    Ok(_) => added.push(name),
                    Err(err) => self.skip("create_node", &err),
                }
            }
        }

        // Positions depend on the final row sizes, so nodes are placed after registration.
        for name in added {
            let Ok(position) = self.position_of(name) else {
                continue;
            };
            let Ok(side) = self.registry.lookup_vertex(name).map(|info| info.side) else {
                continue;
            };
            let color = self.side_color(side);
            self.scheduler.schedule(EffectKind::CreateNode {
                id: name.clone(),
                side,
                position,
                color,
                label: name.to_string(),
            });
        }

        self.narrate(narration::initialize_text(left, right));
        self.set_state(PlaybackState::Running);
    }

    fn add_edges(&mut self, pairs: &[VertexPair]) {
        let style = EdgeStyle {
            color: self.config.edge_color,
            width: self.config.edge_width,
            z_order: 0,
        };
        for pair in pairs {
            let endpoints = self
                .position_of(&pair.from)
                .and_then(|from| Ok((from, self.position_of(&pair.to)?)));
            let created = endpoints.and_then(|(from, to)| {
                let key = self.registry.add_edge(&pair.from, &pair.to, style)?.key.clone();
                Ok((key, from, to))
            });
            match created {
                Ok((key, from, to)) => {
                    self.scheduler.schedule(EffectKind::CreateEdge {
                        key,
                        from,
                        to,
                        style,
                    });
                }
                Err(err) => self.skip("create_edge", &err),
            }
        }
        self.narrate(narration::add_edge_text(pairs));
        self.scheduler.add_settle(self.config.settle_delay);
    }

    /// Recolour one edge and pulse both of its endpoints.
    fn restyle(&mut self, pair: &VertexPair, color: Rgba8, width: f64, z_order: i32) {
        let style = EdgeStyle {
            color,
            width,
            z_order,
        };
        match self.registry.restyle_edge(&pair.from, &pair.to, style) {
            Ok((key, previous)) => {
                self.scheduler.schedule(EffectKind::RecolorEdge {
                    key,
                    from: previous.color,
                    style,
                });
            }
            Err(err) => self.skip("recolor_edge", &err),
        }
        self.highlight(&pair.from);
        self.highlight(&pair.to);
    }

    fn highlight(&mut self, id: &VertexId) {
        match self.registry.lookup_vertex(id) {
            Ok(info) => {
                let base = self.side_color(info.side);
                self.scheduler.schedule(EffectKind::HighlightNode {
                    id: id.clone(),
                    base,
                });
            }
            Err(err) => self.skip("highlight_node", &err),
        }
    }

    fn narrate(&mut self, text: String) {
        self.scheduler.schedule(EffectKind::SetNarrationText { text });
    }

    fn position_of(&self, id: &VertexId) -> Result<Point, RegistryError> {
        let info = self.registry.lookup_vertex(id)?;
        let count = self.registry.side_count(info.side);
        Ok(self.layout.position(info.side, info.index, count))
    }

    fn side_color(&self, side: Side) -> Rgba8 {
        match side {
            Side::Left => self.config.left_color,
            Side::Right => self.config.right_color,
        }
    }

    fn skip(&mut self, effect: &'static str, err: &RegistryError) {
        tracing::warn!(effect, error = %err, "dropping effect");
        self.stats.skipped_effects += 1;
    }

    fn set_state(&mut self, next: PlaybackState) {
        if self.state != next {
            tracing::debug!(from = ?self.state, to = ?next, "playback state");
            self.state = next;
        }
    }
}

/// Run a whole step log through a fresh driver.
#[tracing::instrument(skip_all, fields(steps = log.len()))]
pub fn build_playback(log: &StepLog, config: PlaybackConfig) -> PlaybackResult<Playback> {
    let mut driver = PlaybackDriver::new(config)?;
    driver.feed_log(log);
    Ok(driver.into_playback())
}

#[cfg(test)]
#[path = "../../tests/unit/playback/driver.rs"]
mod tests;
