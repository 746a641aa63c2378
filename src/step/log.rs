use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{PlaybackError, PlaybackResult};

/// One non-blank line of a step log with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepLine {
    /// 1-based position in the source text.
    pub number: usize,
    /// Raw line text, line terminator removed.
    pub text: String,
}

/// Raw contents of a step log, ready to be fed to a playback driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepLog {
    lines: Vec<StepLine>,
}

impl StepLog {
    /// Split newline-separated text into step lines, skipping blank ones.
    pub fn parse_str(text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty())
            .map(|(i, l)| StepLine {
                number: i + 1,
                text: l.to_owned(),
            })
            .collect();
        Self { lines }
    }

    /// Read a step log from disk.
    pub fn from_path(path: impl AsRef<Path>) -> PlaybackResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read step log '{}'", path.display()))
            .map_err(PlaybackError::Other)?;
        Ok(Self::parse_str(&text))
    }

    /// Borrow the lines in log order.
    pub fn lines(&self) -> &[StepLine] {
        &self.lines
    }

    /// Number of non-blank lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the log has no steps.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/step/log.rs"]
mod tests;
