//! Remote Data Gateway
//!
//! The four backend round trips the dashboard needs. Each call is a single
//! request with no retries; failures surface once as a [`GatewayError`].
//!
//! - [`Gateway`]: the seam the controller talks to
//! - [`HttpGateway`]: reqwest implementation of the JSON contract

mod client;
mod error;

pub use client::{GatewayConfig, HttpGateway};
pub use error::{GatewayError, GatewayResult};

use async_trait::async_trait;

use crate::model::{Analytics, Expense, ExpenseDraft, ExpenseId};

/// Backend operations used by the dashboard
#[async_trait]
pub trait Gateway: Send + Sync {
    /// `GET /expenses`
    async fn list_expenses(&self) -> GatewayResult<Vec<Expense>>;

    /// `GET /analytics`
    async fn fetch_analytics(&self) -> GatewayResult<Analytics>;

    /// `POST /expenses`, returns the stored record with its assigned id
    async fn create_expense(&self, draft: &ExpenseDraft) -> GatewayResult<Expense>;

    /// `DELETE /expenses/{id}`
    async fn delete_expense(&self, id: &ExpenseId) -> GatewayResult<()>;
}
