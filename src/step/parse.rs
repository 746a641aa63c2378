use crate::foundation::core::{VertexId, VertexPair};
use crate::foundation::error::ParseError;

const INITIALIZE: &str = "Initialize:";
const ADD_EDGE: &str = "Add_edge:";
const ADD_PATH: &str = "Add_path:";
const UPDATE_MATCH: &str = "Update_match";
const DISREGARD_VERTICES: &str = "Disregard_vertices:";
const BEGIN_PHASE: &str = "Begin_Phase";
const MAXIMUM_MATCHING: &str = "Maximum matching:";

/// One parsed instruction of a matching-algorithm trace.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum StepEvent {
    /// Declare both vertex sets and start with an empty matching.
    Initialize {
        /// Left vertex names in log order.
        left: Vec<VertexId>,
        /// Right vertex names in log order.
        right: Vec<VertexId>,
    },
    /// Draw edges.
    AddEdge(Vec<VertexPair>),
    /// Highlight an augmenting path.
    AddPath(Vec<VertexPair>),
    /// Mark edges as matched.
    UpdateMatch(Vec<VertexPair>),
    /// Grey out edges that no longer matter.
    DisregardVertices(Vec<VertexPair>),
    /// Start a new phase; the label is kept verbatim.
    BeginPhase {
        /// Text following `Begin_Phase`.
        label: String,
    },
    /// Terminal step with the final result text, verbatim.
    MaximumMatching {
        /// Text following `Maximum matching:`.
        result: String,
    },
}

impl StepEvent {
    /// Short name used in logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Initialize { .. } => "Initialize",
            Self::AddEdge(_) => "AddEdge",
            Self::AddPath(_) => "AddPath",
            Self::UpdateMatch(_) => "UpdateMatch",
            Self::DisregardVertices(_) => "DisregardVertices",
            Self::BeginPhase { .. } => "BeginPhase",
            Self::MaximumMatching { .. } => "MaximumMatching",
        }
    }
}

/// Parse one raw step line.
///
/// Prefixes are tried in a fixed priority order and the first match wins. A trailing carriage
/// return is ignored so logs written on Windows parse the same.
pub fn parse_step(line: &str) -> Result<StepEvent, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    if let Some(rest) = line.strip_prefix(INITIALIZE) {
        return parse_initialize(line, rest);
    }
    if let Some(rest) = line.strip_prefix(ADD_EDGE) {
        return Ok(StepEvent::AddEdge(parse_pair_list(rest)?));
    }
    if let Some(rest) = line.strip_prefix(ADD_PATH) {
        return Ok(StepEvent::AddPath(parse_pair_list(rest)?));
    }
    if let Some(rest) = line.strip_prefix(UPDATE_MATCH) {
        return Ok(StepEvent::UpdateMatch(parse_pair_list(rest)?));
    }
    if let Some(rest) = line.strip_prefix(DISREGARD_VERTICES) {
        return Ok(StepEvent::DisregardVertices(parse_pair_list(rest)?));
    }
    if let Some(label) = line.strip_prefix(BEGIN_PHASE) {
        return Ok(StepEvent::BeginPhase {
            label: label.to_owned(),
        });
    }
    if let Some(result) = line.strip_prefix(MAXIMUM_MATCHING) {
        return Ok(StepEvent::MaximumMatching {
            result: result.to_owned(),
        });
    }

    Err(ParseError::UnknownStepKind {
        line: line.to_owned(),
    })
}

fn parse_initialize(line: &str, payload: &str) -> Result<StepEvent, ParseError> {
    let stripped: String = payload
        .chars()
        .filter(|c| !matches!(c, '(' | ')'))
        .collect();
    let groups: Vec<&str> = stripped.split(' ').filter(|g| !g.is_empty()).collect();
    let [left, right, ..] = groups.as_slice() else {
        return Err(ParseError::MalformedInitialize {
            line: line.to_owned(),
        });
    };

    Ok(StepEvent::Initialize {
        left: split_names(left),
        right: split_names(right),
    })
}

fn split_names(group: &str) -> Vec<VertexId> {
    group
        .split(',')
        .filter(|n| !n.is_empty())
        .map(VertexId::new)
        .collect()
}

/// Shared grammar of the edge-bearing steps: `(a,b) (c,d)` after the step prefix.
///
/// One leading `:` is skipped, since `Update_match` may be written with or without it. A payload
/// without any parenthesis is an empty list, not an error. Parentheses also act as separators, so
/// `(a,b)(c,d)` reads the same as `(a,b) (c,d)`.
fn parse_pair_list(rest: &str) -> Result<Vec<VertexPair>, ParseError> {
    let payload = rest.strip_prefix(':').unwrap_or(rest).trim();
    if !payload.contains(['(', ')']) {
        return Ok(Vec::new());
    }

    payload
        .split(['(', ')', ' '])
        .filter(|t| !t.is_empty())
        .map(parse_pair)
        .collect()
}

fn parse_pair(token: &str) -> Result<VertexPair, ParseError> {
    let mut parts = token.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(from), Some(to), None) if !from.is_empty() && !to.is_empty() => {
            Ok(VertexPair::new(from, to))
        }
        _ => Err(ParseError::MalformedEdgePair {
            token: token.to_owned(),
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/step/parse.rs"]
mod tests;
