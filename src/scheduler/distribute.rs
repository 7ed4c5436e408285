//! Binding catalog tasks to the tag-slots of a dated week.
//!
//! Per tag, the weekly count is a budget of slots. Tasks are drawn from a
//! private copy of the catalog (no repeats within one pass), weighted by
//! pickup priority, and each draw gets a day span. Spans are then placed
//! day by day, one slot per day, into the first free slot of that tag.

use log::{debug, info, warn};
use rand::Rng;

use super::select::choose_weighted_by;
use crate::domain::{TagCounts, TaskAssignment, TaskRecord, WeekDistribution};

/// One draw for a tag: a concrete task (or a stand-in) and the number of
/// distinct days it should occupy.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedUnit<'a> {
    pub tag: String,
    pub task: Option<&'a TaskRecord>,
    pub span: u32,
}

impl PlannedUnit<'_> {
    fn assignment(&self) -> TaskAssignment {
        match self.task {
            Some(task) => TaskAssignment::from_task(task),
            None => TaskAssignment::placeholder(&self.tag),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.task.is_none()
    }
}

/// Draw the units that spend `budget` slots of `tag`.
///
/// `pool` is the working copy for the whole pass; picked tasks are removed
/// from it. `catalog` is only consulted for the placeholder span when no
/// pooled task fits.
pub fn plan_tag<'a, R: Rng + ?Sized>(
    tag: &str,
    budget: u32,
    pool: &mut Vec<&'a TaskRecord>,
    catalog: &'a [TaskRecord],
    rng: &mut R,
) -> Vec<PlannedUnit<'a>> {
    let mut units = Vec::new();
    let mut budget = budget;

    while budget > 0 {
        let candidates: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, task)| task.tag == tag && task.days.min() <= budget)
            .map(|(i, _)| i)
            .collect();

        if candidates.is_empty() {
            let smallest = catalog.iter().filter(|t| t.tag == tag).map(|t| t.days.min()).min();
            let consumed = match smallest {
                Some(min_span) => min_span.max(1).min(budget),
                None => budget,
            };
            debug!("{}: no task fits budget {}, placeholder for {} slot(s)", tag, budget, consumed);
            units.push(PlannedUnit {
                tag: tag.to_string(),
                task: None,
                span: consumed,
            });
            budget -= consumed;
            if smallest.is_none() {
                break;
            }
            continue;
        }

        let Some(&choice) = choose_weighted_by(&candidates, |&i| pool[i].pickup_priority, rng) else {
            break;
        };
        let task = pool.remove(choice);

        let upper = task.days.max().min(budget);
        let span = rng.random_range(task.days.min()..=upper);
        debug!("{}: picked '{}' for {} day(s), budget {}", tag, task.task, span, budget);

        units.push(PlannedUnit {
            tag: tag.to_string(),
            task: Some(task),
            span,
        });
        budget -= span;
    }

    units
}

/// Place one unit into the week, earliest days first. A task takes at most
/// one slot per day; a placeholder may take several. Returns how many slots
/// were filled.
pub fn place_unit(week: &mut WeekDistribution, unit: &PlannedUnit<'_>) -> u32 {
    let per_day = if unit.is_placeholder() { u32::MAX } else { 1 };
    let mut remaining = unit.span;
    for day in week.days.iter_mut() {
        let mut taken = 0;
        while remaining > 0 && taken < per_day && day.fill(&unit.tag, unit.assignment()) {
            remaining -= 1;
            taken += 1;
        }
        if remaining == 0 {
            break;
        }
    }

    if remaining > 0 {
        warn!(
            "{}: only {} of {} day(s) placed for '{}', not enough free slots",
            unit.tag,
            unit.span - remaining,
            unit.span,
            unit.assignment().name
        );
    }
    unit.span - remaining
}

/// Fill a week skeleton with tasks from `catalog`.
///
/// Any assignment already present in `skeleton` is discarded; calling this
/// again on the same skeleton redraws the whole week. `catalog` itself is
/// never modified.
pub fn distribute<R: Rng + ?Sized>(
    skeleton: &WeekDistribution,
    catalog: &[TaskRecord],
    counts: &TagCounts,
    rng: &mut R,
) -> WeekDistribution {
    let mut week = skeleton.cleared();
    let mut pool: Vec<&TaskRecord> = catalog.iter().collect();

    for (tag, &budget) in counts.iter().filter(|(_, budget)| **budget > 0) {
        let units = plan_tag(tag, budget, &mut pool, catalog, rng);
        for unit in &units {
            place_unit(&mut week, unit);
        }
    }

    info!(
        "Distributed {} assignment(s), {} slot(s) left unfilled",
        week.assignments().count(),
        week.unfilled_count()
    );
    week
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DaySpan, WeeklySlotSchedule, parse_date};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn span(min: u32, max: u32) -> DaySpan {
        DaySpan::new(min, max).unwrap()
    }

    fn skeleton(days: Vec<Vec<&str>>) -> WeekDistribution {
        let days: Vec<Vec<String>> = days.into_iter().map(|d| d.into_iter().map(String::from).collect()).collect();
        let schedule = WeeklySlotSchedule::from_days(days);
        WeekDistribution::skeleton(&schedule, parse_date("27-May-2024").unwrap())
    }

    fn counts(pairs: &[(&str, u32)]) -> TagCounts {
        pairs.iter().map(|(t, c)| (t.to_string(), *c)).collect()
    }

    #[test]
    fn test_span_capped_by_task_ceiling() {
        let catalog = vec![TaskRecord::new("HLT", "Training block").with_priority(1.0).with_days(span(2, 4))];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool: Vec<&TaskRecord> = catalog.iter().collect();
            let units = plan_tag("HLT", 5, &mut pool, &catalog, &mut rng);

            let first = &units[0];
            assert_eq!(first.task.map(|t| t.task.as_str()), Some("Training block"));
            assert!((2..=4).contains(&first.span), "seed {} span {}", seed, first.span);
            assert_eq!(units.iter().map(|u| u.span).sum::<u32>(), 5);
            assert!(units[1..].iter().all(|u| u.is_placeholder()));
        }
    }

    #[test]
    fn test_oversized_tasks_fall_back_to_placeholders() {
        let catalog = vec![
            TaskRecord::new("HLT", "Stretch").with_priority(1.0),
            TaskRecord::new("HLT", "Marathon block").with_priority(5.0).with_days(span(5, 5)),
        ];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut pool: Vec<&TaskRecord> = catalog.iter().collect();
            let units = plan_tag("HLT", 3, &mut pool, &catalog, &mut rng);

            assert_eq!(units.iter().map(|u| u.span).sum::<u32>(), 3);
            assert!(units.iter().all(|u| u.span >= 1));
            assert!(units.iter().all(|u| u.task.map(|t| t.task.as_str()) != Some("Marathon block")));
            assert_eq!(units.iter().filter(|u| !u.is_placeholder()).count(), 1);
        }
    }

    #[test]
    fn test_missing_tag_gets_placeholders() {
        let week = skeleton(vec![vec!["ART"], vec![], vec!["ART"]]);
        let catalog = vec![TaskRecord::new("HLT", "Run").with_priority(1.0)];
        let mut rng = StdRng::seed_from_u64(1);

        let filled = distribute(&week, &catalog, &counts(&[("ART", 2)]), &mut rng);

        let names: Vec<&str> = filled.assignments().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["generic-ART", "generic-ART"]);
        assert!(filled.assignments().all(|a| a.placeholder));
        assert_eq!(filled.unfilled_count(), 0);
    }

    #[test]
    fn test_no_task_repeats_while_pool_has_alternatives() {
        let catalog = vec![
            TaskRecord::new("DEV", "Refactor").with_priority(5.0),
            TaskRecord::new("DEV", "Write tests").with_priority(1.0),
            TaskRecord::new("DEV", "Docs").with_priority(0.0),
        ];
        let mut rng = StdRng::seed_from_u64(9);
        let mut pool: Vec<&TaskRecord> = catalog.iter().collect();
        let units = plan_tag("DEV", 3, &mut pool, &catalog, &mut rng);

        let mut names: Vec<&str> = units.iter().filter_map(|u| u.task).map(|t| t.task.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Docs", "Refactor", "Write tests"]);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_exhausted_pool_falls_back_to_placeholder() {
        let catalog = vec![TaskRecord::new("LNG", "Vocabulary").with_priority(1.0)];
        let mut rng = StdRng::seed_from_u64(2);
        let mut pool: Vec<&TaskRecord> = catalog.iter().collect();
        let units = plan_tag("LNG", 3, &mut pool, &catalog, &mut rng);

        assert_eq!(units.len(), 3);
        assert!(!units[0].is_placeholder());
        assert!(units[1].is_placeholder() && units[2].is_placeholder());
        assert!(units.iter().all(|u| u.span == 1));
    }

    #[test]
    fn test_oversized_task_uses_smallest_span_for_placeholder() {
        let catalog = vec![TaskRecord::new("PRJ", "Big project").with_days(span(3, 5))];
        let mut rng = StdRng::seed_from_u64(3);
        let mut pool: Vec<&TaskRecord> = catalog.iter().collect();
        let units = plan_tag("PRJ", 2, &mut pool, &catalog, &mut rng);

        assert_eq!(units.len(), 1);
        assert!(units[0].is_placeholder());
        assert_eq!(units[0].span, 2);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_span_occupies_distinct_days() {
        let week = skeleton(vec![
            vec!["HLT", "HLT"],
            vec!["HLT"],
            vec![],
            vec!["HLT"],
            vec![],
            vec![],
            vec![],
        ]);
        let catalog = vec![TaskRecord::new("HLT", "Stretching").with_days(span(3, 3))];
        let mut rng = StdRng::seed_from_u64(4);

        let filled = distribute(&week, &catalog, &counts(&[("HLT", 4)]), &mut rng);

        let stretching_days: Vec<usize> = filled
            .days
            .iter()
            .enumerate()
            .filter(|(_, d)| d.slots.iter().flatten().any(|a| a.name == "Stretching"))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(stretching_days, vec![0, 1, 3]);
        assert_eq!(filled.days[0].slots.iter().flatten().filter(|a| a.name == "Stretching").count(), 1);
        assert_eq!(filled.assigned_count("HLT"), 4);
        assert_eq!(filled.unfilled_count(), 0);
    }

    #[test]
    fn test_placeholder_fills_several_slots_on_one_day() {
        let week = skeleton(vec![vec!["ART", "ART"], vec!["ART"]]);
        let mut rng = StdRng::seed_from_u64(8);

        let filled = distribute(&week, &[], &counts(&[("ART", 3)]), &mut rng);

        assert_eq!(filled.assigned_count("ART"), 3);
        assert_eq!(filled.unfilled_count(), 0);
    }

    #[test]
    fn test_shortfall_places_what_fits() {
        let mut week = skeleton(vec![vec!["EDU"], vec!["EDU"]]);
        let task = TaskRecord::new("EDU", "Course").with_days(span(3, 3));
        let unit = PlannedUnit {
            tag: "EDU".to_string(),
            task: Some(&task),
            span: 3,
        };

        assert_eq!(place_unit(&mut week, &unit), 2);
        assert_eq!(week.assigned_count("EDU"), 2);
    }

    #[test]
    fn test_never_exceeds_counts() {
        let week = skeleton(vec![vec!["HLT", "DEV"], vec!["HLT", "DEV"], vec!["HLT"]]);
        let catalog = vec![
            TaskRecord::new("HLT", "Run").with_priority(1.0).with_days(span(1, 3)),
            TaskRecord::new("DEV", "Code").with_priority(1.0).with_days(span(1, 2)),
        ];
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let filled = distribute(&week, &catalog, &counts(&[("HLT", 2), ("DEV", 1)]), &mut rng);
            assert!(filled.assigned_count("HLT") <= 2);
            assert!(filled.assigned_count("DEV") <= 1);
        }
    }

    #[test]
    fn test_redistribute_discards_previous_assignments() {
        let week = skeleton(vec![vec!["HLT"], vec!["HLT"]]);
        let catalog = vec![
            TaskRecord::new("HLT", "Run").with_priority(1.0),
            TaskRecord::new("HLT", "Swim").with_priority(1.0),
        ];
        let mut rng = StdRng::seed_from_u64(5);
        let first = distribute(&week, &catalog, &counts(&[("HLT", 2)]), &mut rng);
        let second = distribute(&first, &catalog, &counts(&[("HLT", 2)]), &mut rng);

        assert_eq!(second.assigned_count("HLT"), 2);
        assert_eq!(catalog.len(), 2);
        let mut names: Vec<&str> = second.assignments().map(|a| a.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["Run", "Swim"]);
    }
}
