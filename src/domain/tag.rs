//! Tag priorities and the weekly ranges derived from them

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::amount::Amount;

/// Days in a planned week.
pub const DAYS_PER_WEEK: usize = 7;

/// Per-tag scheduling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TagPriority {
    /// Tag identifier (the configuration map key).
    #[serde(skip)]
    pub tag: String,

    /// Display/processing order within a day.
    pub sorting_index: i64,

    /// Min/max distinct days per week.
    #[serde(alias = "weekly-amount-days")]
    pub weekly_amount: Amount,

    /// Min/max occurrences per active day.
    pub daily_amount: Amount,

    /// Display hint, opaque to scheduling.
    #[serde(default)]
    pub color: String,
}

impl TagPriority {
    pub fn new(tag: &str, sorting_index: i64, weekly_amount: Amount, daily_amount: Amount) -> Self {
        Self {
            tag: tag.to_string(),
            sorting_index,
            weekly_amount,
            daily_amount,
            color: String::new(),
        }
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// Weekly amount limited to the days a week actually has.
    pub fn weekly_days(&self) -> Amount {
        self.weekly_amount.clamped(DAYS_PER_WEEK as u32)
    }

    /// Legal bound on the tag's total weekly occurrences.
    pub fn range(&self) -> TagRange {
        let weekly = self.weekly_days();
        TagRange {
            min: weekly.min() * self.daily_amount.min(),
            max: weekly.max() * self.daily_amount.max(),
        }
    }
}

/// Inclusive bound on a tag's total weekly occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRange {
    pub min: u32,
    pub max: u32,
}

impl TagRange {
    pub fn contains(&self, count: u32) -> bool {
        self.min <= count && count <= self.max
    }
}

/// All configured tags, kept ordered by sorting index (then tag id).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, TagPriority>", into = "BTreeMap<String, TagPriority>")]
pub struct Priorities {
    tags: Vec<TagPriority>,
}

impl From<BTreeMap<String, TagPriority>> for Priorities {
    fn from(map: BTreeMap<String, TagPriority>) -> Self {
        Self::new(
            map.into_iter()
                .map(|(tag, mut priority)| {
                    priority.tag = tag;
                    priority
                })
                .collect(),
        )
    }
}

impl From<Priorities> for BTreeMap<String, TagPriority> {
    fn from(priorities: Priorities) -> Self {
        priorities.tags.into_iter().map(|p| (p.tag.clone(), p)).collect()
    }
}

impl Priorities {
    pub fn new(mut tags: Vec<TagPriority>) -> Self {
        tags.sort_by(|a, b| a.sorting_index.cmp(&b.sorting_index).then_with(|| a.tag.cmp(&b.tag)));
        Self { tags }
    }

    pub fn get(&self, tag: &str) -> Option<&TagPriority> {
        self.tags.iter().find(|p| p.tag == tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.get(tag).is_some()
    }

    /// Sort key for a tag occurrence; unknown tags sink to the end of a day.
    pub fn sorting_index(&self, tag: &str) -> i64 {
        self.get(tag).map(|p| p.sorting_index).unwrap_or(i64::MAX)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagPriority> {
        self.tags.iter()
    }

    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|p| p.tag.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
