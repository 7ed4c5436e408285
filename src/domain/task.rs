//! Catalog entries

use serde::{Deserialize, Serialize};

use super::amount::DaySpan;

/// One task from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TaskRecord {
    pub tag: String,
    pub task: String,
    pub description: String,
    /// Relative selection weight, never negative.
    pub pickup_priority: f64,
    pub days: DaySpan,
    pub remarks: String,
    /// Free-form text for the remark generator.
    pub prompt: String,
    /// Catalog file the record came from.
    pub file: String,
}

impl TaskRecord {
    pub fn new(tag: &str, task: &str) -> Self {
        Self {
            tag: tag.to_string(),
            task: task.to_string(),
            description: String::new(),
            pickup_priority: 0.0,
            days: DaySpan::default(),
            remarks: String::new(),
            prompt: String::new(),
            file: String::new(),
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_priority(mut self, pickup_priority: f64) -> Self {
        self.pickup_priority = pickup_priority;
        self
    }

    pub fn with_days(mut self, days: DaySpan) -> Self {
        self.days = days;
        self
    }

    pub fn with_remarks(mut self, remarks: &str, prompt: &str) -> Self {
        self.remarks = remarks.to_string();
        self.prompt = prompt.to_string();
        self
    }

    /// Remarks text carried into an assignment: catalog remarks followed by
    /// the prompt.
    pub fn remarks_with_prompt(&self) -> String {
        match (self.remarks.trim(), self.prompt.trim()) {
            ("", prompt) => prompt.to_string(),
            (remarks, "") => remarks.to_string(),
            (remarks, prompt) => format!("{} {}", remarks, prompt),
        }
    }
}
