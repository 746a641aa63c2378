//! Playback timing, colours and layout.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{PlaybackError, PlaybackResult};
use crate::graph::layout::RowLayout;
use crate::graph::registry::EdgeLookup;

/// Tunables of one playback session. Every field has a default, so a config file only needs the
/// values it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Clock advance of every time-consuming step.
    pub step_duration: f64,
    /// Start-waiter delay added after each `Add_edge` step.
    pub settle_delay: f64,
    /// Length of an edge recolour tween.
    pub edge_color_change_duration: f64,
    /// Virtual time between two tween samples.
    pub smoothness: f64,
    /// Full length of a node pulse (to white and back).
    pub node_highlight_duration: f64,
    /// Fill colour of left vertices.
    pub left_color: Rgba8,
    /// Fill colour of right vertices.
    pub right_color: Rgba8,
    /// Colour of freshly drawn edges.
    pub edge_color: Rgba8,
    /// Width of freshly drawn edges.
    pub edge_width: f64,
    /// Width of edges on an augmenting path or in the matching.
    pub highlight_width: f64,
    /// Width of disregarded edges.
    pub disregard_width: f64,
    /// Row `y` of the left set.
    pub left_row_y: f64,
    /// Row `y` of the right set.
    pub right_row_y: f64,
    /// Edge key order policy.
    pub edge_lookup: EdgeLookup,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_duration: 2.0,
            settle_delay: 5.0,
            edge_color_change_duration: 0.5,
            smoothness: 0.02,
            node_highlight_duration: 1.0,
            left_color: Rgba8::RED,
            right_color: Rgba8::BLUE,
            edge_color: Rgba8::WHITE,
            edge_width: 0.05,
            highlight_width: 0.08,
            disregard_width: 0.05,
            left_row_y: 2.0,
            right_row_y: -2.0,
            edge_lookup: EdgeLookup::OrderSensitive,
        }
    }
}

impl PlaybackConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> PlaybackResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| PlaybackError::config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> PlaybackResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))
            .map_err(PlaybackError::Other)?;
        Self::from_json_str(&text)
    }

    /// Reject non-finite or out-of-range values.
    pub fn validate(&self) -> PlaybackResult<()> {
        let durations = [
            ("step_duration", self.step_duration),
            ("settle_delay", self.settle_delay),
            ("edge_color_change_duration", self.edge_color_change_duration),
            ("node_highlight_duration", self.node_highlight_duration),
        ];
        for (name, v) in durations {
            if !v.is_finite() || v < 0.0 {
                return Err(PlaybackError::config(format!(
                    "{name} must be finite and >= 0 (got {v})"
                )));
            }
        }
        if !self.smoothness.is_finite() || self.smoothness <= 0.0 {
            return Err(PlaybackError::config("smoothness must be finite and > 0"));
        }
        let widths = [
            ("edge_width", self.edge_width),
            ("highlight_width", self.highlight_width),
            ("disregard_width", self.disregard_width),
        ];
        for (name, v) in widths {
            if !v.is_finite() || v <= 0.0 {
                return Err(PlaybackError::config(format!(
                    "{name} must be finite and > 0 (got {v})"
                )));
            }
        }
        if !self.left_row_y.is_finite() || !self.right_row_y.is_finite() {
            return Err(PlaybackError::config("row positions must be finite"));
        }
        Ok(())
    }

    /// Row layout derived from the configured row positions.
    pub fn layout(&self) -> RowLayout {
        RowLayout {
            left_row_y: self.left_row_y,
            right_row_y: self.right_row_y,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
