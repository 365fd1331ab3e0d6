//! Expense form and validated draft
//!
//! The form holds the raw field text captured once at submit time. Turning it
//! into an [`ExpenseDraft`] is the only way to build a draft, so every draft
//! that reaches the gateway already has a usable amount and date.

use chrono::NaiveDate;

use super::error::ValidationError;
use crate::format::{date_field_value, parse_date};

/// Raw contents of the add-expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub category: String,
    pub amount: String,
    pub date: String,
    pub description: String,
}

impl ExpenseForm {
    /// Empty form with the date field preset
    pub fn with_date(date: NaiveDate) -> Self {
        Self {
            date: date_field_value(date),
            ..Self::default()
        }
    }

    /// Builder method: set category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder method: set amount text
    pub fn amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = amount.into();
        self
    }

    /// Builder method: set date text
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Builder method: set description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Validate the fields into a draft ready for submission
    pub fn to_draft(&self) -> Result<ExpenseDraft, ValidationError> {
        let category = self.category.trim();
        if category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }

        let amount_text = self.amount.trim();
        let amount: f64 = amount_text
            .parse()
            .map_err(|_| ValidationError::InvalidAmount(amount_text.to_string()))?;
        if !amount.is_finite() {
            return Err(ValidationError::NonFiniteAmount);
        }
        if amount < 0.0 {
            return Err(ValidationError::NegativeAmount(amount));
        }

        let date =
            parse_date(&self.date).ok_or_else(|| ValidationError::InvalidDate(self.date.clone()))?;

        let description = self.description.trim();
        let description = (!description.is_empty()).then(|| description.to_string());

        Ok(ExpenseDraft {
            category: category.to_string(),
            amount,
            date,
            description,
        })
    }
}

/// A validated expense that has not been persisted yet
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    category: String,
    amount: f64,
    date: NaiveDate,
    description: Option<String>,
}

impl ExpenseDraft {
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Always finite and non-negative
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_form() -> ExpenseForm {
        ExpenseForm::default()
            .category("Food")
            .amount("12.5")
            .date("2024-01-01")
    }

    #[test]
    fn test_valid_form() {
        let draft = food_form().to_draft().unwrap();
        assert_eq!(draft.category(), "Food");
        assert_eq!(draft.amount(), 12.5);
        assert_eq!(draft.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(draft.description(), None);
    }

    #[test]
    fn test_description_trimmed() {
        let draft = food_form().description("  lunch ").to_draft().unwrap();
        assert_eq!(draft.description(), Some("lunch"));
    }

    #[test]
    fn test_rejects_blank_category() {
        let err = food_form().category("   ").to_draft().unwrap_err();
        assert_eq!(err, ValidationError::MissingCategory);
    }

    #[test]
    fn test_rejects_bad_amounts() {
        assert_eq!(
            food_form().amount("twelve").to_draft().unwrap_err(),
            ValidationError::InvalidAmount("twelve".to_string())
        );
        assert_eq!(
            food_form().amount("").to_draft().unwrap_err(),
            ValidationError::InvalidAmount(String::new())
        );
        assert_eq!(
            food_form().amount("inf").to_draft().unwrap_err(),
            ValidationError::NonFiniteAmount
        );
        assert_eq!(
            food_form().amount("NaN").to_draft().unwrap_err(),
            ValidationError::NonFiniteAmount
        );
        assert_eq!(
            food_form().amount("-3").to_draft().unwrap_err(),
            ValidationError::NegativeAmount(-3.0)
        );
    }

    #[test]
    fn test_zero_amount_allowed() {
        assert_eq!(food_form().amount("0").to_draft().unwrap().amount(), 0.0);
    }

    #[test]
    fn test_rejects_bad_date() {
        let err = food_form().date("01/01/2024").to_draft().unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("01/01/2024".to_string()));
    }

    #[test]
    fn test_with_date_presets_field() {
        let form = ExpenseForm::with_date(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(form.date, "2024-06-30");
        assert!(form.category.is_empty());
        assert!(form.amount.is_empty());
    }
}
