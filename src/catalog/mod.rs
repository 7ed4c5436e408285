//! Task catalog: the pool of concrete tasks a week is filled from.

pub mod loader;

pub use loader::{COLUMNS, load_dir, load_file, parse_records};

use crate::domain::TaskRecord;

/// Loaded catalog records plus the non-fatal problems met while loading.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<TaskRecord>,
    pub warnings: Vec<String>,
}

impl Catalog {
    pub fn new(records: Vec<TaskRecord>) -> Self {
        Self {
            records,
            warnings: Vec::new(),
        }
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append another catalog's records and warnings.
    pub fn merge(&mut self, other: Catalog) {
        self.records.extend(other.records);
        self.warnings.extend(other.warnings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_order_and_warnings() {
        let mut first = Catalog::new(vec![TaskRecord::new("HLT", "Run")]);
        let mut second = Catalog::new(vec![TaskRecord::new("DEV", "Code")]);
        second.warnings.push("b.csv row 2: empty value for the task".to_string());

        first.merge(second);
        assert_eq!(first.len(), 2);
        assert_eq!(first.records()[1].task, "Code");
        assert_eq!(first.warnings.len(), 1);
    }
}
