use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File content as an ordered list of lines.
///
/// Lines are split on `\n` only, so a file ending in a newline yields a trailing empty
/// line and `Document::parse(s).render() == s` for every input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<String>,
}

impl Document {
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
        }
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LineOutcome {
    /// No declaration marker on the line.
    Untouched,
    /// Marker present but a protected name is mentioned.
    Protected,
    /// Marker present, no protected or target name.
    Unmatched,
    Replaced { target: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacedLine {
    /// 1-based.
    pub line_number: usize,
    pub original: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatchReport {
    pub file: String,
    pub total_lines: usize,
    pub untouched: usize,
    pub protected: usize,
    pub unmatched: usize,
    pub replaced: Vec<ReplacedLine>,
    pub written: bool,
    pub backup: Option<String>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl PatchReport {
    pub fn record(&mut self, line_number: usize, original: &str, outcome: &LineOutcome) {
        self.total_lines += 1;
        match outcome {
            LineOutcome::Untouched => self.untouched += 1,
            LineOutcome::Protected => self.protected += 1,
            LineOutcome::Unmatched => self.unmatched += 1,
            LineOutcome::Replaced { target } => self.replaced.push(ReplacedLine {
                line_number,
                original: original.to_string(),
                target: target.clone(),
            }),
        }
    }

    pub fn has_changes(&self) -> bool {
        !self.replaced.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub document: Document,
    pub report: PatchReport,
}
