//! Semicolon-delimited catalog files.
//!
//! Rows are admitted even when a cell is missing or malformed; each such
//! problem becomes a warning and the cell falls back to its default. A file
//! whose rows disagree on column count is rejected whole.

use log::{debug, info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::Catalog;
use crate::domain::{DaySpan, Priorities, TaskRecord};
use crate::error::{PlanError, Result};

/// Header names a catalog file is expected to carry.
pub const COLUMNS: [&str; 7] = [
    "tag",
    "task",
    "description",
    "pickup-priority",
    "days",
    "remarks",
    "prompt",
];

const TAG: usize = 0;
const TASK: usize = 1;
const DESCRIPTION: usize = 2;
const PICKUP_PRIORITY: usize = 3;
const DAYS: usize = 4;
const REMARKS: usize = 5;
const PROMPT: usize = 6;

/// Load every `*.csv` file directly inside `dir`, in path order.
///
/// A missing directory yields an empty catalog; a rejected file is skipped.
pub fn load_dir(dir: &Path, priorities: &Priorities) -> Result<Catalog> {
    let mut catalog = Catalog::default();

    if !dir.is_dir() {
        let message = format!("Tasks directory {} does not exist", dir.display());
        warn!("{}", message);
        catalog.warnings.push(message);
        return Ok(catalog);
    }

    let pattern = dir.join("*.csv");
    let pattern = pattern.to_string_lossy();
    let mut paths: Vec<_> = glob::glob(&pattern)
        .map_err(|e| PlanError::Catalog(format!("bad tasks-dir pattern {}: {}", pattern, e)))?
        .filter_map(|entry| entry.ok())
        .collect();
    paths.sort();

    for path in paths {
        debug!("Loading file: {}", path.display());
        match load_file(&path, priorities) {
            Ok(loaded) => catalog.merge(loaded),
            Err(e) => {
                let message = format!("Skipping {}: {}", path.display(), e);
                warn!("{}", message);
                catalog.warnings.push(message);
            }
        }
    }

    info!("Loaded {} task(s) from {}", catalog.len(), dir.display());
    Ok(catalog)
}

/// Load a single catalog file.
pub fn load_file(path: &Path, priorities: &Priorities) -> Result<Catalog> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file = File::open(path)?;
    parse_records(file, &file_name, priorities)
}

/// Parse catalog rows from any reader; `file_name` is recorded on each task.
pub fn parse_records<R: Read>(reader: R, file_name: &str, priorities: &Priorities) -> Result<Catalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let positions: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|column| headers.iter().position(|h| h == *column))
        .collect();

    let mut catalog = Catalog::default();
    for (column, position) in COLUMNS.iter().zip(&positions) {
        if position.is_none() {
            let message = format!("{}: '{}' key not found", file_name, column);
            warn!("{}", message);
            catalog.warnings.push(message);
        }
    }

    let mut warn_row = |row_number: usize, message: String| {
        let message = format!("{} row {}: {}", file_name, row_number, message);
        warn!("{}", message);
        catalog.warnings.push(message);
    };

    let mut records = Vec::new();
    for (index, row) in rdr.records().enumerate() {
        let row = row?;
        let row_number = index + 2;

        if row.len() != headers.len() {
            return Err(PlanError::Catalog(format!(
                "{}: inconsistent number of columns at row {}, expected {} but got {}",
                file_name,
                row_number,
                headers.len(),
                row.len()
            )));
        }

        let cell = |column: usize| positions[column].and_then(|p| row.get(p)).unwrap_or("");

        let tag = cell(TAG);
        if !priorities.contains(tag) {
            warn_row(row_number, format!("'{}' tag found which is not a configured tag", tag));
        }

        let task = cell(TASK);
        if task.is_empty() {
            warn_row(row_number, "empty value for the task".to_string());
        }

        let pickup_priority = match cell(PICKUP_PRIORITY).parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => value,
            _ => {
                warn_row(
                    row_number,
                    format!("'{}' has wrong value for pickup-priority", cell(PICKUP_PRIORITY)),
                );
                0.0
            }
        };

        let days = match cell(DAYS).parse::<DaySpan>() {
            Ok(days) => days,
            Err(_) => {
                warn_row(row_number, format!("'{}' has wrong value for days", cell(DAYS)));
                DaySpan::default()
            }
        };

        records.push(TaskRecord {
            tag: tag.to_string(),
            task: task.to_string(),
            description: cell(DESCRIPTION).to_string(),
            pickup_priority,
            days,
            remarks: cell(REMARKS).to_string(),
            prompt: cell(PROMPT).to_string(),
            file: file_name.to_string(),
        });
    }

    catalog.records = records;
    Ok(catalog)
}
