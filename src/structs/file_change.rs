use serde::{Deserialize, Serialize};
use crate::enums::change_type::ChangeType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileChange {
    pub path: String,
    pub change_type: ChangeType,
    pub diff_text: String,
    pub line_delta: usize,
}

impl FileChange {
    pub fn new(path: &str, change_type: ChangeType, diff_text: &str) -> Self {
        Self {
            path: path.to_string(),
            change_type,
            diff_text: diff_text.to_string(),
            line_delta: Self::estimate_line_delta(diff_text),
        }
    }

    pub fn with_line_delta(mut self, line_delta: usize) -> Self {
        self.line_delta = line_delta;
        self
    }

    /// Counts added and removed lines in a unified diff, skipping file headers.
    pub fn estimate_line_delta(diff_text: &str) -> usize {
        diff_text
            .lines()
            .filter(|line| {
                (line.starts_with('+') && !line.starts_with("+++"))
                    || (line.starts_with('-') && !line.starts_with("---"))
            })
            .count()
    }
}
