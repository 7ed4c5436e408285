//! Initial tag-slot week generation.
//!
//! Each tag is drawn independently:
//! - a weekly amount from its configured values (clamped to 7)
//! - that many distinct days, uniformly without replacement
//! - a daily amount in `[daily-min, daily-max]` for each chosen day
//!
//! Every day is then stably sorted by sorting index.

use log::{debug, info};
use rand::Rng;
use rand::seq::{IndexedRandom, index};

use crate::domain::{DAYS_PER_WEEK, Priorities, TagCounts, TagRanges, WeeklySlotSchedule};

/// A freshly generated week together with its bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedSchedule {
    pub schedule: WeeklySlotSchedule,
    /// Total occurrences per tag; every configured tag has an entry.
    pub counts: TagCounts,
    pub ranges: TagRanges,
}

/// Generate a week of tag-slots. No state survives between calls; pass a
/// seeded rng for reproducible weeks.
pub fn generate_schedule<R: Rng + ?Sized>(priorities: &Priorities, rng: &mut R) -> GeneratedSchedule {
    let mut generated = GeneratedSchedule::default();

    for priority in priorities.iter() {
        let tag = priority.tag.as_str();
        let daily = priority.daily_amount;

        let weekly_amount = priority
            .weekly_amount
            .choices()
            .choose(rng)
            .copied()
            .unwrap_or(0)
            .min(DAYS_PER_WEEK as u32);

        generated.ranges.insert(tag.to_string(), priority.range());

        let days = index::sample(rng, DAYS_PER_WEEK, weekly_amount as usize).into_vec();
        debug!("{}: weekly amount {} on days {:?}", tag, weekly_amount, days);

        let mut total = 0;
        for day in days {
            let daily_amount = rng.random_range(daily.min()..=daily.max());
            generated.schedule.push(day, tag, daily_amount);
            total += daily_amount;
        }
        generated.counts.insert(tag.to_string(), total);
    }

    generated.schedule.sort_all(priorities);

    info!(
        "Generated tag schedule for {} tags ({} slots)",
        priorities.len(),
        generated.counts.values().sum::<u32>()
    );
    generated
}
