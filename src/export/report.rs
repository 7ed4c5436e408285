//! Semicolon-delimited week report.
//!
//! One row per slot in day order, a blank row after each day, and the
//! free-text summary rows once at the end.

use log::info;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::domain::{TaskStatus, WeekDistribution, format_date, placeholder_name};
use crate::error::Result;

pub const REPORT_HEADER: [&str; 7] = ["Task", "Description", "Status", "Date", "Tags", "Remarks", "Summary"];

/// Trailing rows left for the user to fill in.
pub const SUMMARY_ROWS: [&str; 3] = ["Task focus", "Week goal", "Week summary"];

const BLANK_ROW: [&str; 7] = [""; 7];

/// Write the report for `week` to any writer.
pub fn write_report<W: io::Write>(week: &WeekDistribution, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
    wtr.write_record(REPORT_HEADER)?;

    for day in &week.days {
        let date = format_date(day.date);
        for (tag, slot) in day.tags.iter().zip(&day.slots) {
            let tag_cell = format!("#{}", tag);
            match slot {
                Some(a) => wtr.write_record([
                    a.name.as_str(),
                    a.description.as_str(),
                    a.status.as_str(),
                    date.as_str(),
                    tag_cell.as_str(),
                    a.remarks.as_str(),
                    a.summary.as_str(),
                ])?,
                None => {
                    let name = placeholder_name(tag);
                    wtr.write_record([
                        name.as_str(),
                        "",
                        TaskStatus::NotStarted.as_str(),
                        date.as_str(),
                        tag_cell.as_str(),
                        "",
                        "",
                    ])?
                }
            }
        }
        wtr.write_record(BLANK_ROW)?;
    }

    for label in SUMMARY_ROWS {
        wtr.write_record([label, "", "", "", "", "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file.
pub fn save_report(week: &WeekDistribution, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_report(week, file)?;
    info!("Week plan written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{TaskAssignment, TaskRecord, WeeklySlotSchedule, parse_date};

    fn render(week: &WeekDistribution) -> String {
        let mut buf = Vec::new();
        write_report(week, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn week() -> WeekDistribution {
        let schedule = WeeklySlotSchedule::from_days(vec![
            vec!["HLT".to_string(), "DEV".to_string()],
            vec!["ART".to_string()],
        ]);
        let mut week = WeekDistribution::skeleton(&schedule, parse_date("27-May-2024").unwrap());
        let run = TaskRecord::new("HLT", "Run 5k")
            .with_description("Morning run")
            .with_remarks("Go slow.", "Give a tip.");
        week.days[0].fill("HLT", TaskAssignment::from_task(&run));
        week.days[0].fill("DEV", TaskAssignment::placeholder("DEV"));
        week
    }

    #[test]
    fn test_header_and_rows() {
        let out = render(&week());
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Task;Description;Status;Date;Tags;Remarks;Summary");
        assert_eq!(lines[1], "Run 5k;Morning run;Not started;27-May-2024;#HLT;Go slow. Give a tip.;");
        assert!(lines[2].starts_with("generic-DEV;"));
        assert!(lines[2].contains(";#DEV;"));
        assert_eq!(lines[3], ";;;;;;");
        assert_eq!(lines[4], "generic-ART;;Not started;28-May-2024;#ART;;");
    }

    #[test]
    fn test_blank_row_after_every_day_and_summary_rows() {
        let out = render(&week());
        let lines: Vec<&str> = out.lines().collect();

        let blanks = lines.iter().filter(|l| **l == ";;;;;;").count();
        assert_eq!(blanks, 7);
        let tail: Vec<&str> = lines[lines.len() - 3..].to_vec();
        assert_eq!(tail, vec!["Task focus;;;;;;", "Week goal;;;;;;", "Week summary;;;;;;"]);
    }

    #[test]
    fn test_save_report_writes_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("27-May-2024-week-plan.csv");
        save_report(&week(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("Task;Description"));
    }
}
