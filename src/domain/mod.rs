//! Domain types for weekplan
//!
//! - Amount / DaySpan: configured integer ranges
//! - TagPriority / Priorities / TagRange: per-tag scheduling rules
//! - WeeklySlotSchedule: seven days of tag-slots
//! - TaskRecord: a catalog entry
//! - WeekDistribution: dated days with slots bound to tasks

pub mod amount;
pub mod distribution;
pub mod schedule;
pub mod tag;
pub mod task;

pub use amount::{Amount, DaySpan};
pub use distribution::{
    DATE_FORMAT, DayPlan, TaskAssignment, TaskStatus, WeekDistribution, format_date, parse_date, placeholder_name,
};
pub use schedule::{TagCounts, TagRanges, WeeklySlotSchedule};
pub use tag::{DAYS_PER_WEEK, Priorities, TagPriority, TagRange};
pub use task::TaskRecord;
