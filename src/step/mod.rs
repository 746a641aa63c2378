//! Step-log input: raw line loading and the step grammar.

/// Loading newline-separated step logs.
pub mod log;
/// Parsing one step line into a [`StepEvent`](parse::StepEvent).
pub mod parse;
