//! Single-step difficulty adjustment of a tag-slot week.
//!
//! Relax removes one occurrence, intensify adds one. A tag qualifies only
//! while its weekly total stays inside its range and some day still has room
//! inside the daily amount. Repeated calls walk the week one slot at a time.

use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

use crate::domain::{DAYS_PER_WEEK, Priorities, TagCounts, TagPriority, TagRanges, WeeklySlotSchedule};

/// Which way to move the week's difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Remove one occurrence.
    Relax,
    /// Add one occurrence.
    Intensify,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Relax => write!(f, "relax"),
            Direction::Intensify => write!(f, "intensify"),
        }
    }
}

/// What a single adjustment step did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjustOutcome {
    Adjusted {
        tag: String,
        day: usize,
        direction: Direction,
    },
    /// Nothing qualified; the week is unchanged.
    NoAdjustment,
}

impl AdjustOutcome {
    pub fn is_adjusted(&self) -> bool {
        matches!(self, AdjustOutcome::Adjusted { .. })
    }
}

/// Days on which `priority`'s tag can move one step in `direction`.
fn eligible_days(schedule: &WeeklySlotSchedule, priority: &TagPriority, direction: Direction) -> Vec<usize> {
    let tag = priority.tag.as_str();
    (0..DAYS_PER_WEEK)
        .filter(|&day| {
            let count = schedule.count_on(day, tag);
            match direction {
                Direction::Relax => count > priority.daily_amount.min(),
                Direction::Intensify => count < priority.daily_amount.max(),
            }
        })
        .collect()
}

/// Tags that can move one step in `direction`, in sorting order.
pub fn eligible_tags<'a>(
    schedule: &WeeklySlotSchedule,
    counts: &TagCounts,
    ranges: &TagRanges,
    priorities: &'a Priorities,
    direction: Direction,
) -> Vec<&'a TagPriority> {
    priorities
        .iter()
        .filter(|priority| {
            let (Some(&count), Some(range)) = (counts.get(&priority.tag), ranges.get(&priority.tag)) else {
                return false;
            };
            let within_total = match direction {
                Direction::Relax => count > range.min,
                Direction::Intensify => count < range.max,
            };
            within_total && !eligible_days(schedule, priority, direction).is_empty()
        })
        .collect()
}

/// Move the week one occurrence easier or harder.
///
/// Picks an eligible tag uniformly, then one of its eligible days uniformly,
/// and mutates `schedule` and `counts` in place. The touched day is re-sorted.
pub fn adjust_schedule<R: Rng + ?Sized>(
    schedule: &mut WeeklySlotSchedule,
    counts: &mut TagCounts,
    ranges: &TagRanges,
    priorities: &Priorities,
    direction: Direction,
    rng: &mut R,
) -> AdjustOutcome {
    let candidates = eligible_tags(schedule, counts, ranges, priorities, direction);
    let Some(priority) = candidates.choose(rng).copied() else {
        info!("No {} adjustment possible", direction);
        return AdjustOutcome::NoAdjustment;
    };

    let days = eligible_days(schedule, priority, direction);
    let Some(&day) = days.choose(rng) else {
        return AdjustOutcome::NoAdjustment;
    };

    let tag = priority.tag.clone();
    match direction {
        Direction::Relax => {
            if !schedule.remove_one(day, &tag) {
                return AdjustOutcome::NoAdjustment;
            }
            if let Some(count) = counts.get_mut(&tag) {
                *count -= 1;
            }
        }
        Direction::Intensify => {
            schedule.push(day, &tag, 1);
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    schedule.sort_day(day, priorities);

    debug!("{} {} on day {}", direction, tag, day + 1);
    AdjustOutcome::Adjusted { tag, day, direction }
}
