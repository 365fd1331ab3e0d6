//! Expense Table Projection
//!
//! Turns the fetched expense list into display rows, newest first.

use crate::format::{format_currency, format_date};
use crate::model::{Expense, ExpenseId};

/// Text shown in place of the table body when there are no expenses
pub const EMPTY_TABLE_MESSAGE: &str = "No expenses yet. Add your first expense above!";

/// Shown when an expense has no description
pub const MISSING_DESCRIPTION: &str = "-";

/// Rendered contents of the expense table body
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// Single explanatory row for an empty collection
    Placeholder(&'static str),
    /// One row per expense, sorted by date descending
    Rows(Vec<TableRow>),
}

impl TableBody {
    /// Number of rows the body occupies (a placeholder counts as one)
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Placeholder(_) => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }

    pub fn rows(&self) -> &[TableRow] {
        match self {
            TableBody::Placeholder(_) => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}

/// One formatted expense row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: String,
    /// Category badge text
    pub category: String,
    pub amount: String,
    pub description: String,
    /// Expense the row's delete control acts on
    pub delete_target: ExpenseId,
}

impl From<&Expense> for TableRow {
    fn from(expense: &Expense) -> Self {
        Self {
            date: format_date(expense.date),
            category: expense.category.clone(),
            amount: format_currency(expense.amount),
            description: expense
                .description()
                .unwrap_or(MISSING_DESCRIPTION)
                .to_string(),
            delete_target: expense.id.clone(),
        }
    }
}

/// Project an expense collection into table rows
///
/// Sorts a copy by date, newest first. The sort is stable, so expenses sharing
/// a date keep the order the backend returned them in.
pub fn render_table(expenses: &[Expense]) -> TableBody {
    if expenses.is_empty() {
        return TableBody::Placeholder(EMPTY_TABLE_MESSAGE);
    }

    let mut sorted: Vec<&Expense> = expenses.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    TableBody::Rows(sorted.into_iter().map(TableRow::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(id: u64, date: &str, category: &str, amount: f64) -> Expense {
        Expense {
            id: ExpenseId::from(id),
            category: category.to_string(),
            amount,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            description: None,
        }
    }

    #[test]
    fn test_empty_renders_placeholder() {
        let body = render_table(&[]);
        assert_eq!(body, TableBody::Placeholder(EMPTY_TABLE_MESSAGE));
        assert_eq!(body.row_count(), 1);
        assert!(body.rows().is_empty());
    }

    #[test]
    fn test_sorted_newest_first() {
        let expenses = vec![
            expense(1, "2024-01-01", "Food", 10.0),
            expense(2, "2024-03-01", "Rent", 500.0),
            expense(3, "2024-02-01", "Fuel", 40.0),
        ];

        let body = render_table(&expenses);
        let ids: Vec<&str> = body.rows().iter().map(|r| r.delete_target.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);

        // Input untouched
        assert_eq!(expenses[0].id, ExpenseId::from(1));
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let expenses = vec![
            expense(5, "2024-01-01", "A", 1.0),
            expense(3, "2024-01-02", "B", 1.0),
            expense(9, "2024-01-01", "C", 1.0),
            expense(1, "2024-01-01", "D", 1.0),
        ];

        let first = render_table(&expenses);
        let second = render_table(&expenses);
        assert_eq!(first, second);

        let ids: Vec<&str> = first.rows().iter().map(|r| r.delete_target.as_str()).collect();
        assert_eq!(ids, vec!["3", "5", "9", "1"]);
    }

    #[test]
    fn test_row_formatting() {
        let mut lunch = expense(7, "2024-01-05", "Food", 12.5);
        lunch.description = Some("Lunch".to_string());
        let bus = expense(8, "2024-01-04", "Transport", 2.0);

        let body = render_table(&[lunch, bus]);
        let rows = body.rows();

        assert_eq!(rows[0].date, "Jan 5, 2024");
        assert_eq!(rows[0].category, "Food");
        assert_eq!(rows[0].amount, "$12.50");
        assert_eq!(rows[0].description, "Lunch");
        assert_eq!(rows[1].description, MISSING_DESCRIPTION);
    }
}
