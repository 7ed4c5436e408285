//! Handing a planned week to the user: console rendering and the report file.

pub mod color;
pub mod render;
pub mod report;

pub use color::{AnsiPalette, ColorResolver};
pub use render::{MAX_VALUE_LEN, render_catalog, render_tag_week, render_week};
pub use report::{REPORT_HEADER, SUMMARY_ROWS, save_report, write_report};
