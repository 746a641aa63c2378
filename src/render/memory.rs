use std::collections::BTreeMap;

use crate::foundation::core::{EdgeKey, EdgeStyle, Point, Rgba8, Side, VertexId};
use crate::foundation::error::{PlaybackError, PlaybackResult};
use crate::render::backend::Renderer;
use crate::schedule::effect::TextSlot;

/// A vertex as the in-memory renderer holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedNode {
    /// Side of the vertex.
    pub side: Side,
    /// World position.
    pub position: Point,
    /// Current fill colour.
    pub color: Rgba8,
    /// Label text.
    pub label: String,
}

/// An edge as the in-memory renderer holds it.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedEdge {
    /// First endpoint position.
    pub from: Point,
    /// Second endpoint position.
    pub to: Point,
    /// Current style.
    pub style: EdgeStyle,
}

/// Renderer that keeps the scene in maps. Used by tests and the CLI.
#[derive(Clone, Debug)]
pub struct RecordingRenderer {
    default_edge_style: EdgeStyle,
    nodes: BTreeMap<VertexId, RenderedNode>,
    edges: BTreeMap<EdgeKey, RenderedEdge>,
    narration: String,
    phase: String,
    /// Every text change in order.
    pub text_history: Vec<(TextSlot, String)>,
    /// Number of `set_edge_style` calls.
    pub edge_style_updates: usize,
    /// Number of `set_node_color` calls.
    pub node_color_updates: usize,
}

impl RecordingRenderer {
    /// Empty scene; new edges start with `default_edge_style`.
    pub fn new(default_edge_style: EdgeStyle) -> Self {
        Self {
            default_edge_style,
            nodes: BTreeMap::new(),
            edges: BTreeMap::new(),
            narration: String::new(),
            phase: String::new(),
            text_history: Vec::new(),
            edge_style_updates: 0,
            node_color_updates: 0,
        }
    }

    /// Vertices in name order.
    pub fn nodes(&self) -> &BTreeMap<VertexId, RenderedNode> {
        &self.nodes
    }

    /// Edges in key order.
    pub fn edges(&self) -> &BTreeMap<EdgeKey, RenderedEdge> {
        &self.edges
    }

    /// Current text of `slot`.
    pub fn text(&self, slot: TextSlot) -> &str {
        match slot {
            TextSlot::Narration => &self.narration,
            TextSlot::Phase => &self.phase,
        }
    }
}

impl Renderer for RecordingRenderer {
    fn create_node(
        &mut self,
        id: &VertexId,
        side: Side,
        position: Point,
        color: Rgba8,
        label: &str,
    ) -> PlaybackResult<()> {
        if self.nodes.contains_key(id) {
            return Err(PlaybackError::render(format!("node '{id}' already exists")));
        }
        self.nodes.insert(
            id.clone(),
            RenderedNode {
                side,
                position,
                color,
                label: label.to_owned(),
            },
        );
        Ok(())
    }

    fn create_edge(&mut self, key: &EdgeKey, from: Point, to: Point) -> PlaybackResult<()> {
        if self.edges.contains_key(key) {
            return Err(PlaybackError::render(format!("edge '{key}' already exists")));
        }
        self.edges.insert(
            key.clone(),
            RenderedEdge {
                from,
                to,
                style: self.default_edge_style,
            },
        );
        Ok(())
    }

    fn set_edge_style(&mut self, key: &EdgeKey, style: EdgeStyle) -> PlaybackResult<()> {
        let edge = self
            .edges
            .get_mut(key)
            .ok_or_else(|| PlaybackError::render(format!("no edge '{key}'")))?;
        edge.style = style;
        self.edge_style_updates += 1;
        Ok(())
    }

    fn set_node_color(&mut self, id: &VertexId, color: Rgba8) -> PlaybackResult<()> {
        let node = self
            .nodes
            .get_mut(id)
            .ok_or_else(|| PlaybackError::render(format!("no node '{id}'")))?;
        node.color = color;
        self.node_color_updates += 1;
        Ok(())
    }

    fn set_text(&mut self, slot: TextSlot, value: &str) -> PlaybackResult<()> {
        match slot {
            TextSlot::Narration => value.clone_into(&mut self.narration),
            TextSlot::Phase => value.clone_into(&mut self.phase),
        }
        self.text_history.push((slot, value.to_owned()));
        Ok(())
    }

    fn find_node(&self, id: &VertexId) -> Option<Rgba8> {
        self.nodes.get(id).map(|n| n.color)
    }

    fn find_edge(&self, key: &EdgeKey) -> Option<EdgeStyle> {
        self.edges.get(key).map(|e| e.style)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/memory.rs"]
mod tests;
