use std::fmt;

pub use kurbo::Point;

/// Vertex label as written in the step log.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct VertexId(pub String);

impl VertexId {
    /// Wrap a vertex name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the raw name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Side of the bipartite graph a vertex belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    /// Left vertex set.
    Left,
    /// Right vertex set.
    Right,
}

/// Edge identity: `"<v1>_<v2>"` in the order the step log wrote the pair.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EdgeKey(pub String);

impl EdgeKey {
    /// Build the key for the ordered pair `(v1, v2)`.
    pub fn new(v1: &VertexId, v2: &VertexId) -> Self {
        Self(format!("{}_{}", v1.0, v2.0))
    }

    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One `v1,v2` pair from an edge-bearing step, order preserved.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VertexPair {
    /// First name as written.
    pub from: VertexId,
    /// Second name as written.
    pub to: VertexId,
}

impl VertexPair {
    /// Build a pair from two names.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: VertexId::new(from),
            to: VertexId::new(to),
        }
    }

    /// Key of the edge this pair addresses.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(&self.from, &self.to)
    }
}

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::opaque(0, 255, 0);
    /// Opaque yellow (slightly warm, as most engines define it).
    pub const YELLOW: Self = Self::opaque(255, 235, 4);
    /// Opaque mid grey.
    pub const GREY: Self = Self::opaque(128, 128, 128);
    /// Opaque red.
    pub const RED: Self = Self::opaque(255, 0, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::opaque(0, 0, 255);

    /// Fully opaque colour from RGB.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Logical drawing style of an edge.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeStyle {
    /// Stroke colour.
    pub color: Rgba8,
    /// Stroke width in world units.
    pub width: f64,
    /// Sprite sort order; lower draws further behind.
    pub z_order: i32,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
