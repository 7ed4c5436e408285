//! A week of tag-slots, before any task is bound to them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::tag::{DAYS_PER_WEEK, Priorities, TagRange};

/// Total weekly occurrences per tag.
pub type TagCounts = BTreeMap<String, u32>;

/// Legal weekly occurrence bounds per tag.
pub type TagRanges = BTreeMap<String, TagRange>;

/// Seven ordered sequences of tag occurrences, one per day.
///
/// Every mutation that goes through `sort_day`/`sort_all` keeps a day
/// non-decreasing in sorting index; the sort is stable so equal indices keep
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySlotSchedule {
    days: [Vec<String>; DAYS_PER_WEEK],
}

impl WeeklySlotSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from explicit day sequences (missing days stay empty).
    pub fn from_days(days: Vec<Vec<String>>) -> Self {
        let mut schedule = Self::new();
        for (slot, tags) in schedule.days.iter_mut().zip(days) {
            *slot = tags;
        }
        schedule
    }

    pub fn day(&self, day: usize) -> &[String] {
        &self.days[day]
    }

    pub fn days(&self) -> &[Vec<String>] {
        &self.days
    }

    /// Occurrences of `tag` on one day.
    pub fn count_on(&self, day: usize, tag: &str) -> u32 {
        self.days[day].iter().filter(|t| t.as_str() == tag).count() as u32
    }

    /// Occurrences of `tag` across the week.
    pub fn total(&self, tag: &str) -> u32 {
        (0..DAYS_PER_WEEK).map(|day| self.count_on(day, tag)).sum()
    }

    /// Number of distinct days `tag` appears on.
    pub fn active_days(&self, tag: &str) -> u32 {
        (0..DAYS_PER_WEEK).filter(|&day| self.count_on(day, tag) > 0).count() as u32
    }

    /// Per-day counts for the days `tag` appears on, in day order.
    pub fn daily_counts(&self, tag: &str) -> Vec<u32> {
        (0..DAYS_PER_WEEK)
            .map(|day| self.count_on(day, tag))
            .filter(|&count| count > 0)
            .collect()
    }

    /// Append `amount` occurrences of `tag` to a day (unsorted).
    pub fn push(&mut self, day: usize, tag: &str, amount: u32) {
        self.days[day].extend(std::iter::repeat_n(tag.to_string(), amount as usize));
    }

    /// Remove one occurrence of `tag` from a day; false if it was absent.
    pub fn remove_one(&mut self, day: usize, tag: &str) -> bool {
        match self.days[day].iter().position(|t| t == tag) {
            Some(index) => {
                self.days[day].remove(index);
                true
            }
            None => false,
        }
    }

    pub fn sort_day(&mut self, day: usize, priorities: &Priorities) {
        self.days[day].sort_by_key(|tag| priorities.sorting_index(tag));
    }

    pub fn sort_all(&mut self, priorities: &Priorities) {
        for day in 0..DAYS_PER_WEEK {
            self.sort_day(day, priorities);
        }
    }

    /// True when every day is non-decreasing in sorting index.
    pub fn is_sorted(&self, priorities: &Priorities) -> bool {
        self.days.iter().all(|tags| {
            tags.windows(2)
                .all(|pair| priorities.sorting_index(&pair[0]) <= priorities.sorting_index(&pair[1]))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, TagPriority};

    fn priorities() -> Priorities {
        Priorities::new(vec![
            TagPriority::new("HLT", 1, Amount::fixed(3), Amount::new(1, 2).unwrap()),
            TagPriority::new("DEV", 2, Amount::fixed(2), Amount::fixed(1)),
        ])
    }

    #[test]
    fn test_new_schedule_is_empty() {
        let schedule = WeeklySlotSchedule::new();
        assert!(schedule.is_empty());
        assert_eq!(schedule.days().len(), 7);
    }

    #[test]
    fn test_push_and_counts() {
        let mut schedule = WeeklySlotSchedule::new();
        schedule.push(0, "HLT", 2);
        schedule.push(3, "HLT", 1);
        schedule.push(3, "DEV", 1);

        assert_eq!(schedule.count_on(0, "HLT"), 2);
        assert_eq!(schedule.total("HLT"), 3);
        assert_eq!(schedule.active_days("HLT"), 2);
        assert_eq!(schedule.daily_counts("HLT"), vec![2, 1]);
        assert_eq!(schedule.total("ART"), 0);
    }

    #[test]
    fn test_remove_one() {
        let mut schedule = WeeklySlotSchedule::new();
        schedule.push(2, "HLT", 2);
        assert!(schedule.remove_one(2, "HLT"));
        assert_eq!(schedule.count_on(2, "HLT"), 1);
        assert!(!schedule.remove_one(2, "DEV"));
    }

    #[test]
    fn test_sort_day_is_stable_by_sorting_index() {
        let priorities = priorities();
        let mut schedule = WeeklySlotSchedule::new();
        schedule.push(1, "DEV", 1);
        schedule.push(1, "HLT", 2);
        assert!(!schedule.is_sorted(&priorities));

        schedule.sort_all(&priorities);
        assert_eq!(schedule.day(1), ["HLT", "HLT", "DEV"]);
        assert!(schedule.is_sorted(&priorities));
    }

    #[test]
    fn test_from_days_pads_to_a_week() {
        let schedule = WeeklySlotSchedule::from_days(vec![vec!["HLT".to_string()]]);
        assert_eq!(schedule.day(0), ["HLT"]);
        assert!(schedule.day(6).is_empty());
    }
}
