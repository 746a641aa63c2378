use crate::foundation::core::{Point, Side};

/// Row placement of the two vertex sets.
///
/// Each side is a horizontal row centred on `x = 0` with unit spacing: for `n` vertices the
/// vertex at creation index `i` sits at `x = -(n / 2) + 0.5 + i`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    /// `y` of the left set's row.
    pub left_row_y: f64,
    /// `y` of the right set's row.
    pub right_row_y: f64,
}

impl RowLayout {
    /// Position of vertex `index` out of `count` on `side`.
    pub fn position(&self, side: Side, index: usize, count: usize) -> Point {
        let start_x = -(count as f64 / 2.0) + 0.5;
        let y = match side {
            Side::Left => self.left_row_y,
            Side::Right => self.right_row_y,
        };
        Point::new(start_x + index as f64, y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/layout.rs"]
mod tests;
