//! Terminal Front End
//!
//! Implementations of the controller's ports for a plain text terminal:
//!
//! - [`TerminalView`]: table, statistics and form state on stdout
//! - [`TerminalPrompt`]: y/N confirmation on stdin, one line per notice
//! - [`TextChartFactory`]: bar-chart drawings of the trend and the breakdown

mod chart;
mod prompt;
mod view;

pub use chart::{draw_category, draw_trend, TextChart, TextChartFactory, DEFAULT_BAR_WIDTH};
pub use prompt::{is_affirmative, notice_line, ConfirmMode, TerminalPrompt};
pub use view::{statistics_lines, table_lines, TerminalView};
