use crate::foundation::core::{EdgeKey, EdgeStyle, Point, Rgba8, Side, VertexId};
use crate::foundation::error::PlaybackResult;
use crate::schedule::effect::TextSlot;

/// Drawing surface driven by effect playback.
///
/// Implementations own the actual scene. Playback only talks to the scene through these calls
/// and queries it with [`find_node`](Self::find_node) / [`find_edge`](Self::find_edge) before
/// touching existing elements.
pub trait Renderer {
    /// Spawn a vertex.
    fn create_node(
        &mut self,
        id: &VertexId,
        side: Side,
        position: Point,
        color: Rgba8,
        label: &str,
    ) -> PlaybackResult<()>;

    /// Spawn an edge between two positions.
    fn create_edge(&mut self, key: &EdgeKey, from: Point, to: Point) -> PlaybackResult<()>;

    /// Apply colour, width and sort order to an existing edge.
    fn set_edge_style(&mut self, key: &EdgeKey, style: EdgeStyle) -> PlaybackResult<()>;

    /// Change the fill colour of an existing vertex.
    fn set_node_color(&mut self, id: &VertexId, color: Rgba8) -> PlaybackResult<()>;

    /// Replace the text shown in `slot`.
    fn set_text(&mut self, slot: TextSlot, value: &str) -> PlaybackResult<()>;

    /// Current fill colour of a vertex, if it exists.
    fn find_node(&self, id: &VertexId) -> Option<Rgba8>;

    /// Current style of an edge, if it exists.
    fn find_edge(&self, key: &EdgeKey) -> Option<EdgeStyle>;
}
