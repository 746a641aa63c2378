use crate::foundation::core::{EdgeKey, EdgeStyle, Point, Rgba8, Side, VertexId};

/// Text areas a renderer exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextSlot {
    /// Step narration.
    Narration,
    /// Short phase / result label.
    Phase,
}

/// A visual mutation a renderer applies.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EffectKind {
    /// Spawn a vertex.
    CreateNode {
        /// Vertex name.
        id: VertexId,
        /// Side it belongs to.
        side: Side,
        /// World position.
        position: Point,
        /// Base fill colour.
        color: Rgba8,
        /// Text drawn on the node.
        label: String,
    },
    /// Draw an edge between two node positions.
    CreateEdge {
        /// Edge key.
        key: EdgeKey,
        /// Position of the first endpoint.
        from: Point,
        /// Position of the second endpoint.
        to: Point,
        /// Initial style.
        style: EdgeStyle,
    },
    /// Tween an edge from its current colour to `style.color`; width and order apply at once.
    RecolorEdge {
        /// Edge key.
        key: EdgeKey,
        /// Colour before the change.
        from: Rgba8,
        /// Target style.
        style: EdgeStyle,
    },
    /// Pulse a node to white and back to `base`.
    HighlightNode {
        /// Vertex name.
        id: VertexId,
        /// Colour the node returns to.
        base: Rgba8,
    },
    /// Replace the narration text.
    SetNarrationText {
        /// New text.
        text: String,
    },
    /// Replace the phase label.
    SetPhaseText {
        /// New text.
        text: String,
    },
}

impl EffectKind {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateNode { .. } => "create_node",
            Self::CreateEdge { .. } => "create_edge",
            Self::RecolorEdge { .. } => "recolor_edge",
            Self::HighlightNode { .. } => "highlight_node",
            Self::SetNarrationText { .. } => "set_narration_text",
            Self::SetPhaseText { .. } => "set_phase_text",
        }
    }
}

/// An effect stamped with its place on the playback timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimedEffect {
    /// Playback clock value when the source step was processed.
    pub time: f64,
    /// Start-waiter delay accumulated from earlier `Add_edge` steps.
    pub settle: f64,
    /// Enqueue order; breaks ties between effects that fire together.
    pub seq: u64,
    /// What to apply.
    pub effect: EffectKind,
}

impl TimedEffect {
    /// Virtual time the effect becomes visible.
    pub fn fire_at(&self) -> f64 {
        self.time + self.settle
    }
}
