//! Dashboard Projections
//!
//! Pure functions from fetched payloads to display-ready values:
//!
//! - [`render_table`]: expense list to table rows
//! - [`render_statistics`]: analytics to the summary cards

mod stats;
mod table;

pub use stats::{render_statistics, StatLine, StatisticsPanel, MISSING_CATEGORY};
pub use table::{render_table, TableBody, TableRow, EMPTY_TABLE_MESSAGE, MISSING_DESCRIPTION};
