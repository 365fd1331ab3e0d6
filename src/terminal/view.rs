//! Terminal dashboard view
//!
//! Prints the table and statistics as plain text blocks.

use chrono::NaiveDate;
use std::io::Write;

use crate::controller::DashboardView;
use crate::format::date_field_value;
use crate::model::ExpenseForm;
use crate::render::{StatisticsPanel, TableBody};

const TABLE_HEADERS: [&str; 5] = ["Date", "Category", "Amount", "Description", "ID"];

/// Lay out the table body as aligned text lines
pub fn table_lines(body: &TableBody) -> Vec<String> {
    let rows: Vec<[String; 5]> = match body {
        TableBody::Placeholder(message) => {
            return vec!["Expenses".to_string(), format!("  {}", message)];
        }
        TableBody::Rows(rows) => rows
            .iter()
            .map(|row| {
                [
                    row.date.clone(),
                    format!("[{}]", row.category),
                    row.amount.clone(),
                    row.description.clone(),
                    row.delete_target.to_string(),
                ]
            })
            .collect(),
    };

    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |cells: [&str; 5]| {
        cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec!["Expenses".to_string(), format_line(TABLE_HEADERS)];
    lines.push("-".repeat(widths.iter().sum::<usize>() + 2 * (widths.len() - 1)));
    for row in &rows {
        lines.push(format_line([&row[0], &row[1], &row[2], &row[3], &row[4]]));
    }
    lines
}

/// Lay out the statistics cards as text lines
pub fn statistics_lines(panel: &StatisticsPanel) -> Vec<String> {
    vec![
        "Summary".to_string(),
        format!("  Total spent:      {}", panel.total),
        format!(
            "  Highest category: {} ({})",
            panel.highest.category, panel.highest.amount
        ),
        format!(
            "  Lowest category:  {} ({})",
            panel.lowest.category, panel.lowest.amount
        ),
    ]
}

/// View writing to a terminal (or any writer)
pub struct TerminalView<W: Write + Send> {
    out: W,
    form: ExpenseForm,
}

impl TerminalView<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            form: ExpenseForm::default(),
        }
    }

    /// Current form field contents
    pub fn form(&self) -> &ExpenseForm {
        &self.form
    }

    /// Type values into the form; a `None` date keeps the preset one
    pub fn fill_form(&mut self, category: &str, amount: &str, date: Option<&str>, description: &str) {
        self.form.category = category.to_string();
        self.form.amount = amount.to_string();
        if let Some(date) = date {
            self.form.date = date.to_string();
        }
        self.form.description = description.to_string();
    }

    fn print_block(&mut self, lines: &[String]) {
        let mut block = lines.join("\n");
        block.push_str("\n\n");
        if let Err(e) = self.out.write_all(block.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write dashboard output");
        }
    }
}

impl<W: Write + Send> DashboardView for TerminalView<W> {
    fn set_form_date(&mut self, date: NaiveDate) {
        self.form.date = date_field_value(date);
        tracing::debug!(date = %self.form.date, "Form date set");
    }

    fn reset_form(&mut self) {
        self.form = ExpenseForm::default();
    }

    fn show_table(&mut self, body: &TableBody) {
        let lines = table_lines(body);
        self.print_block(&lines);
    }

    fn show_statistics(&mut self, panel: &StatisticsPanel) {
        let lines = statistics_lines(panel);
        self.print_block(&lines);
    }
}
