//! A dated week whose tag-slots are bound (or not yet) to concrete tasks

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::schedule::WeeklySlotSchedule;
use super::task::TaskRecord;
use crate::error::{PlanError, Result};

/// Date format used on the command line and in reports: `27-May-2024`.
pub const DATE_FORMAT: &str = "%d-%b-%Y";

/// Parse a `DD-Mon-YYYY` date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| PlanError::InvalidDate(text.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Name given to stand-in assignments for a tag.
pub fn placeholder_name(tag: &str) -> String {
    format!("generic-{}", tag)
}

/// Progress of an assignment. A fresh plan only ever holds `NotStarted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not started")]
    NotStarted,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not started",
        }
    }
}

/// A catalog task (or stand-in) bound to one slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskAssignment {
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub tag: String,
    pub remarks: String,
    /// Filled in later by the remark generator; always empty here.
    pub summary: String,
    /// No concrete catalog task backs this slot.
    pub placeholder: bool,
}

impl TaskAssignment {
    pub fn from_task(task: &TaskRecord) -> Self {
        Self {
            name: task.task.clone(),
            description: task.description.clone(),
            status: TaskStatus::NotStarted,
            tag: task.tag.clone(),
            remarks: task.remarks_with_prompt(),
            summary: String::new(),
            placeholder: false,
        }
    }

    pub fn placeholder(tag: &str) -> Self {
        Self {
            name: placeholder_name(tag),
            description: format!("No {} task available for the remaining budget", tag),
            status: TaskStatus::NotStarted,
            tag: tag.to_string(),
            remarks: String::new(),
            summary: String::new(),
            placeholder: true,
        }
    }
}

/// One dated day: its tags and a parallel list of slot assignments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub tags: Vec<String>,
    pub slots: Vec<Option<TaskAssignment>>,
}

impl DayPlan {
    pub fn new(date: NaiveDate, tags: Vec<String>) -> Self {
        let slots = vec![None; tags.len()];
        Self { date, tags, slots }
    }

    /// Index of the first unfilled slot carrying `tag`.
    pub fn first_empty_slot(&self, tag: &str) -> Option<usize> {
        self.tags
            .iter()
            .zip(&self.slots)
            .position(|(t, slot)| t == tag && slot.is_none())
    }

    /// Fill the first unfilled `tag` slot; false if none is left.
    pub fn fill(&mut self, tag: &str, assignment: TaskAssignment) -> bool {
        match self.first_empty_slot(tag) {
            Some(index) => {
                self.slots[index] = Some(assignment);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

/// Seven dated days; the terminal product handed to the exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekDistribution {
    pub days: Vec<DayPlan>,
}

impl WeekDistribution {
    /// Dated skeleton of a tag schedule with every slot unfilled. Leading `#`
    /// markers on tags are stripped.
    pub fn skeleton(schedule: &WeeklySlotSchedule, start_date: NaiveDate) -> Self {
        let days = schedule
            .days()
            .iter()
            .enumerate()
            .map(|(offset, tags)| {
                let tags = tags.iter().map(|t| t.trim_start_matches('#').to_string()).collect();
                DayPlan::new(start_date + Duration::days(offset as i64), tags)
            })
            .collect();
        Self { days }
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    /// Same skeleton with all assignments dropped.
    pub fn cleared(&self) -> Self {
        let mut week = self.clone();
        week.days.iter_mut().for_each(DayPlan::clear);
        week
    }

    /// Assignments carrying `tag` across the week.
    pub fn assigned_count(&self, tag: &str) -> usize {
        self.assignments().filter(|a| a.tag == tag).count()
    }

    pub fn assignments(&self) -> impl Iterator<Item = &TaskAssignment> {
        self.days.iter().flat_map(|d| d.slots.iter().flatten())
    }

    pub fn unfilled_count(&self) -> usize {
        self.days.iter().map(|d| d.slots.iter().filter(|s| s.is_none()).count()).sum()
    }
}
