//! Ordered record of the lines a demo emits.
//!
//! Demos never print directly. They push lines into a [`Transcript`], which
//! the catalog runner later writes to stdout and which tests inspect.

use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends a pretty-printed JSON rendering of `value`, one transcript
    /// line per JSON line.
    pub fn dump<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let rendered = serde_json::to_string_pretty(value)?;
        self.lines.extend(rendered.lines().map(str::to_string));
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
