//! Scheduling engine.
//!
//! - `generator`: draw an initial week of tag-slots
//! - `adjust`: move the week one occurrence easier or harder
//! - `select`: priority-weighted random choice
//! - `distribute`: bind catalog tasks to the slots of a dated week

pub mod adjust;
pub mod distribute;
pub mod generator;
pub mod select;

pub use adjust::{AdjustOutcome, Direction, adjust_schedule, eligible_tags};
pub use distribute::{PlannedUnit, distribute, place_unit, plan_tag};
pub use generator::{GeneratedSchedule, generate_schedule};
pub use select::{choose_weighted_by, effective_weight, weighted_index};
