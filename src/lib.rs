//! weekplan - turns per-tag priorities and a task catalog into a week plan
//!
//! The pipeline is: configured priorities, a generated week of tag-slots,
//! optional one-step adjustments, then tasks drawn from the catalog into
//! those slots and exported as a report.

pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod scheduler;
pub mod session;

pub use error::{PlanError, Result};
