//! Console rendering of tag weeks, filled weeks and the catalog.
//!
//! Everything returns a `String`; printing and clearing the terminal is
//! left to the front end.

use colored::Colorize;

use super::color::ColorResolver;
use crate::catalog::Catalog;
use crate::domain::{Priorities, TaskRecord, WeekDistribution, format_date, placeholder_name};
use crate::scheduler::GeneratedSchedule;

/// Catalog values longer than this are shortened when listed.
pub const MAX_VALUE_LEN: usize = 24;

fn paint(text: &str, tag: &str, priorities: &Priorities, colors: &dyn ColorResolver) -> String {
    let hint = priorities.get(tag).map(|p| p.color.as_str()).unwrap_or("");
    text.color(colors.resolve(hint)).to_string()
}

/// `day N. TAG TAG ...` lines followed by the per-tag counts.
///
/// Verbose mode adds the range, active days and per-day counts per tag.
pub fn render_tag_week(
    generated: &GeneratedSchedule,
    priorities: &Priorities,
    colors: &dyn ColorResolver,
    verbose: bool,
) -> String {
    let mut out = String::new();
    let schedule = &generated.schedule;

    for (index, tags) in schedule.days().iter().enumerate() {
        let painted: Vec<String> = tags.iter().map(|t| paint(t, t, priorities, colors)).collect();
        out.push_str(&format!("day {}. {}\n", index + 1, painted.join(" ")));
    }

    out.push_str("\nTag Counts and Ranges:\n");
    for priority in priorities.iter() {
        let tag = priority.tag.as_str();
        let count = generated.counts.get(tag).copied().unwrap_or(0);
        let line = if verbose {
            let range = generated.ranges.get(tag).copied().unwrap_or_else(|| priority.range());
            let daily_counts: Vec<String> = schedule.daily_counts(tag).iter().map(u32::to_string).collect();
            format!(
                "{}: tag-sum:{}-{}(cur:{}), weekly-amount-days: {}(cur:{}), daily-amount: {}(cur:{})",
                tag,
                range.min,
                range.max,
                count,
                priority.weekly_amount,
                schedule.active_days(tag),
                priority.daily_amount,
                daily_counts.join(", ")
            )
        } else {
            format!("{}: {}", tag, count)
        };
        out.push_str(&format!("{}\n", paint(&line, tag, priorities, colors)));
    }

    out
}

/// Dated days with one `TAG task` line per slot; unfilled slots show the
/// tag's placeholder name.
pub fn render_week(week: &WeekDistribution, priorities: &Priorities, colors: &dyn ColorResolver) -> String {
    let mut out = String::new();

    for day in &week.days {
        out.push_str(&format!("{}\n", format_date(day.date).bold()));
        for (tag, slot) in day.tags.iter().zip(&day.slots) {
            let label = paint(tag, tag, priorities, colors);
            match slot {
                Some(assignment) if assignment.placeholder => {
                    out.push_str(&format!("  {} {}\n", label, assignment.name.dimmed()));
                }
                Some(assignment) => {
                    out.push_str(&format!("  {} {}\n", label, assignment.name));
                }
                None => {
                    out.push_str(&format!("  {} {}\n", label, placeholder_name(tag).dimmed()));
                }
            }
        }
    }

    out
}

fn shorten(value: &str) -> String {
    if value.chars().count() <= MAX_VALUE_LEN {
        value.to_string()
    } else {
        let kept: String = value.chars().take(MAX_VALUE_LEN - 3).collect();
        format!("{}...", kept)
    }
}

fn render_record(record: &TaskRecord) -> String {
    format!(
        "{} | {} | {} | {} | {} | {} | {} | {}",
        record.file,
        record.tag,
        shorten(&record.task),
        shorten(&record.description),
        record.pickup_priority,
        record.days,
        shorten(&record.remarks),
        shorten(&record.prompt)
    )
}

/// One shortened line per catalog record, then any load warnings.
pub fn render_catalog(catalog: &Catalog) -> String {
    let mut out = String::new();

    if catalog.is_empty() {
        out.push_str("No data to display.\n");
    }
    for record in catalog.records() {
        out.push_str(&format!("{}\n", render_record(record)));
    }
    out.push_str(&format!("Total lines loaded: {}\n", catalog.len()));

    for warning in &catalog.warnings {
        out.push_str(&format!("{} {}\n", "warning:".yellow(), warning));
    }

    out
}
