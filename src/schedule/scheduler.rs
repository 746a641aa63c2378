use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::schedule::clock::PlaybackClock;
use crate::schedule::effect::{EffectKind, TimedEffect};

/// Sort order that places an edge in front of every other edge.
pub const FRONT_SPRITE_ORDER: i32 = -1;

/// Min-heap of timed effects plus the timeline state used to stamp them.
///
/// Ordering rule: effects pop by fire time, then by enqueue order, so the stream stays in step
/// order even when several effects fire together.
#[derive(Debug)]
pub struct Scheduler {
    clock: PlaybackClock,
    settle: f64,
    lowest_sprite_order: i32,
    next_seq: u64,
    horizon: f64,
    queue: BinaryHeap<Reverse<Queued>>,
}

#[derive(Debug)]
struct Queued(TimedEffect);

impl Queued {
    fn key(&self) -> (f64, u64) {
        (self.0.fire_at(), self.0.seq)
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        let (at_a, seq_a) = self.key();
        let (at_b, seq_b) = other.key();
        at_a.total_cmp(&at_b).then(seq_a.cmp(&seq_b))
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    /// Empty scheduler at time zero.
    pub fn new() -> Self {
        Self {
            clock: PlaybackClock::new(),
            settle: 0.0,
            lowest_sprite_order: FRONT_SPRITE_ORDER,
            next_seq: 0,
            horizon: 0.0,
            queue: BinaryHeap::new(),
        }
    }

    /// Current playback clock value.
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Settle delay every newly scheduled effect receives.
    pub fn settle(&self) -> f64 {
        self.settle
    }

    /// Advance the playback clock by one step and return the new time.
    pub fn advance(&mut self, step: f64) -> f64 {
        self.clock.advance(step)
    }

    /// Delay every effect scheduled from now on by `delay`.
    pub fn add_settle(&mut self, delay: f64) {
        if delay.is_finite() && delay > 0.0 {
            self.settle += delay;
        }
    }

    /// Next background sort order; each call is one lower than the last.
    pub fn next_background_order(&mut self) -> i32 {
        self.lowest_sprite_order = self.lowest_sprite_order.saturating_sub(1);
        self.lowest_sprite_order
    }

    /// Schedule `effect` at the current clock value.
    pub fn schedule(&mut self, effect: EffectKind) -> u64 {
        let now = self.clock.now();
        self.schedule_at(now, effect)
    }

    /// Schedule `effect` at an explicit time, never earlier than the current clock.
    pub fn schedule_at(&mut self, time: f64, effect: EffectKind) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        let timed = TimedEffect {
            time: time.max(self.clock.now()),
            settle: self.settle,
            seq,
            effect,
        };
        self.horizon = self.horizon.max(timed.fire_at());
        self.queue.push(Reverse(Queued(timed)));
        seq
    }

    /// Number of pending effects.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Latest fire time of anything scheduled so far.
    pub fn horizon(&self) -> f64 {
        self.horizon
    }

    /// Fire time of the next pending effect.
    pub fn peek_fire_at(&self) -> Option<f64> {
        self.queue.peek().map(|Reverse(q)| q.0.fire_at())
    }

    /// Pop the next effect regardless of time.
    pub fn pop(&mut self) -> Option<TimedEffect> {
        self.queue.pop().map(|Reverse(q)| q.0)
    }

    /// Pop the next effect if it fires at or before `now`.
    pub fn pop_due(&mut self, now: f64) -> Option<TimedEffect> {
        if self.peek_fire_at()? <= now {
            self.pop()
        } else {
            None
        }
    }

    /// Lazily yield every pending effect in fire order.
    pub fn drain(&mut self) -> impl Iterator<Item = TimedEffect> + '_ {
        std::iter::from_fn(move || self.pop())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/scheduler.rs"]
mod tests;
