//! Narration strings for each step kind.
//!
//! Every function is pure: the same payload always yields the same text.

use crate::foundation::core::{VertexId, VertexPair};

/// Longest edge listing shown verbatim by [`add_edge_text`].
pub const ADD_EDGE_TEXT_LIMIT: usize = 75;

/// Replacement for edge listings longer than [`ADD_EDGE_TEXT_LIMIT`].
pub const ADD_EDGE_SUMMARY: &str = "Add the edges.";

/// Shown for a `Disregard_vertices:` step without edges.
pub const NO_EDGES_TO_IGNORE: &str = "No edges to ignore.";

/// Final narration when the log ends without a `Maximum matching:` step.
pub const FINAL_MATCHING_TEXT: &str = "Found final matching!";

/// Narration plus the short label shown in the phase slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledText {
    /// Main narration line.
    pub narration: String,
    /// Short label.
    pub label: String,
}

/// Narration for `Initialize`.
pub fn initialize_text(left: &[VertexId], right: &[VertexId]) -> String {
    format!(
        "Set up the bipartite graph with the left verticies ({}) and the right verticies ({}) and create an empty matching. ",
        join_names(left),
        join_names(right)
    )
}

/// Narration for `Add_edge`; long listings collapse to [`ADD_EDGE_SUMMARY`].
pub fn add_edge_text(pairs: &[VertexPair]) -> String {
    let listing: String = pairs
        .iter()
        .map(|p| format!("({}  , {})", p.from, p.to))
        .collect();
    let text = format!("Add edges between {listing}");
    if text.chars().count() > ADD_EDGE_TEXT_LIMIT {
        ADD_EDGE_SUMMARY.to_owned()
    } else {
        text
    }
}

/// Narration for `Add_path`.
pub fn add_path_text(pairs: &[VertexPair]) -> String {
    format!(
        "Found an augmenting path from {}",
        join_pairs(pairs, " to ")
    )
}

/// Narration for `Update_match`.
pub fn update_match_text(pairs: &[VertexPair]) -> String {
    format!("Found match(es): {}", join_pairs(pairs, " and "))
}

/// Narration for `Disregard_vertices`.
pub fn disregard_text(pairs: &[VertexPair]) -> String {
    if pairs.is_empty() {
        return NO_EDGES_TO_IGNORE.to_owned();
    }
    format!("Ignore edges between {}", join_pairs(pairs, " and "))
}

/// Narration and phase label for `Begin_Phase`.
pub fn begin_phase_text(label: &str) -> LabeledText {
    LabeledText {
        narration: format!("Begin Phase {label}"),
        label: format!("Phase {label}"),
    }
}

/// Narration and result label for `Maximum matching:`.
pub fn maximum_matching_text(result: &str) -> LabeledText {
    LabeledText {
        narration: "Finished".to_owned(),
        label: format!("Maximum matching is {result}"),
    }
}

fn join_names(names: &[VertexId]) -> String {
    names
        .iter()
        .map(VertexId::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

// "Node a<sep>Node b, Node c<sep>Node d"
fn join_pairs(pairs: &[VertexPair], sep: &str) -> String {
    pairs
        .iter()
        .map(|p| format!("Node {}{sep}Node {}", p.from, p.to))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../tests/unit/narration.rs"]
mod tests;
