//! Expense Data Model
//!
//! Types shared by the gateway, the renderers and the controller:
//!
//! - [`Expense`]: one backend record
//! - [`Analytics`]: backend-computed summary
//! - [`ExpenseForm`] / [`ExpenseDraft`]: raw form input and its validated form

mod error;
mod form;
mod types;

pub use error::ValidationError;
pub use form::{ExpenseDraft, ExpenseForm};
pub use types::{Analytics, CategoryBreakdown, CategoryTotal, Expense, ExpenseId, TrendPoint};
