use std::collections::BTreeMap;

use crate::foundation::core::{EdgeKey, EdgeStyle, Side, VertexId};
use crate::foundation::error::RegistryError;

/// How edge lookups treat the order of the two vertex names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLookup {
    /// Only the exact `"<v1>_<v2>"` key used at creation is found.
    #[default]
    OrderSensitive,
    /// `(v2, v1)` also finds an edge created as `(v1, v2)`.
    Unordered,
}

/// Registered vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexInfo {
    /// Side fixed at creation.
    pub side: Side,
    /// Creation index within its side.
    pub index: usize,
}

/// Registered edge with its current logical style.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeInfo {
    /// Key the edge was created under.
    pub key: EdgeKey,
    /// First endpoint as written at creation.
    pub from: VertexId,
    /// Second endpoint as written at creation.
    pub to: VertexId,
    /// Style after every restyle enqueued so far.
    pub style: EdgeStyle,
}

/// Name-addressed vertices and edges of one playback session, independent of rendering.
#[derive(Clone, Debug)]
pub struct GraphRegistry {
    vertices: BTreeMap<VertexId, VertexInfo>,
    edges: BTreeMap<EdgeKey, EdgeInfo>,
    left_count: usize,
    right_count: usize,
    lookup: EdgeLookup,
}

impl Default for GraphRegistry {
    fn default() -> Self {
        Self::new(EdgeLookup::default())
    }
}

impl GraphRegistry {
    /// Empty registry with the given edge lookup policy.
    pub fn new(lookup: EdgeLookup) -> Self {
        Self {
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            left_count: 0,
            right_count: 0,
            lookup,
        }
    }

    /// Register a vertex on `side`. Names are unique across both sides.
    pub fn add_vertex(&mut self, name: &VertexId, side: Side) -> Result<VertexInfo, RegistryError> {
        if self.vertices.contains_key(name) {
            return Err(RegistryError::DuplicateVertex(name.clone()));
        }
        let counter = match side {
            Side::Left => &mut self.left_count,
            Side::Right => &mut self.right_count,
        };
        let info = VertexInfo {
            side,
            index: *counter,
        };
        *counter += 1;
        self.vertices.insert(name.clone(), info);
        Ok(info)
    }

    /// Register the edge `(v1, v2)` under the key `"<v1>_<v2>"`.
    ///
    /// Under [`EdgeLookup::Unordered`] the reversed pair counts as the same edge.
    pub fn add_edge(
        &mut self,
        v1: &VertexId,
        v2: &VertexId,
        style: EdgeStyle,
    ) -> Result<&EdgeInfo, RegistryError> {
        self.lookup_vertex(v1)?;
        self.lookup_vertex(v2)?;

        if let Ok(existing) = self.resolve_key(v1, v2) {
            return Err(RegistryError::DuplicateEdge(existing));
        }
        let key = EdgeKey::new(v1, v2);
        let info = EdgeInfo {
            key: key.clone(),
            from: v1.clone(),
            to: v2.clone(),
            style,
        };
        Ok(self.edges.entry(key).or_insert(info))
    }

    /// Find a vertex by name.
    pub fn lookup_vertex(&self, name: &VertexId) -> Result<VertexInfo, RegistryError> {
        self.vertices
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownVertex(name.clone()))
    }

    /// Find an edge. Under [`EdgeLookup::OrderSensitive`] only the creation order matches.
    pub fn lookup_edge(&self, v1: &VertexId, v2: &VertexId) -> Result<&EdgeInfo, RegistryError> {
        let key = self.resolve_key(v1, v2)?;
        Ok(&self.edges[&key])
    }

    /// Replace the logical style of an existing edge and return the previous one.
    pub fn restyle_edge(
        &mut self,
        v1: &VertexId,
        v2: &VertexId,
        style: EdgeStyle,
    ) -> Result<(EdgeKey, EdgeStyle), RegistryError> {
        let key = self.resolve_key(v1, v2)?;
        let edge = self
            .edges
            .get_mut(&key)
            .ok_or_else(|| RegistryError::EdgeNotFound(key.clone()))?;
        let previous = std::mem::replace(&mut edge.style, style);
        Ok((key, previous))
    }

    /// Number of vertices on both sides.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of vertices on one side.
    pub fn side_count(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left_count,
            Side::Right => self.right_count,
        }
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Vertices in name order.
    pub fn vertices(&self) -> impl Iterator<Item = (&VertexId, &VertexInfo)> {
        self.vertices.iter()
    }

    /// Edges in key order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeInfo> {
        self.edges.values()
    }

    fn resolve_key(&self, v1: &VertexId, v2: &VertexId) -> Result<EdgeKey, RegistryError> {
        let key = EdgeKey::new(v1, v2);
        if self.edges.contains_key(&key) {
            return Ok(key);
        }
        if self.lookup == EdgeLookup::Unordered {
            let reversed = EdgeKey::new(v2, v1);
            if self.edges.contains_key(&reversed) {
                return Ok(reversed);
            }
        }
        Err(RegistryError::EdgeNotFound(key))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/registry.rs"]
mod tests;
