//! Backend REST Client
//!
//! HTTP client for the expense backend's JSON API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{GatewayError, GatewayResult};
use super::Gateway;
use crate::format::date_field_value;
use crate::model::{Analytics, Expense, ExpenseDraft, ExpenseId};

/// Backend connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    /// Base URL every endpoint is relative to (e.g., "http://localhost:8080/api")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Gateway backed by the expense backend's REST API
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway for the configured backend
    pub fn new(config: &GatewayConfig) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Client(e.to_string()))?;

        Ok(Self {
            client,
            // Normalize: remove trailing slash
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn expenses_url(&self) -> String {
        format!("{}/expenses", self.base_url)
    }

    fn expense_url(&self, id: &ExpenseId) -> String {
        format!("{}/expenses/{}", self.base_url, urlencoding::encode(id.as_str()))
    }

    fn analytics_url(&self) -> String {
        format!("{}/analytics", self.base_url)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_expenses(&self) -> GatewayResult<Vec<Expense>> {
        let response = self.client.get(self.expenses_url()).send().await?;
        read_json(response).await
    }

    async fn fetch_analytics(&self) -> GatewayResult<Analytics> {
        let response = self.client.get(self.analytics_url()).send().await?;
        read_json(response).await
    }

    async fn create_expense(&self, draft: &ExpenseDraft) -> GatewayResult<Expense> {
        let body = CreateExpenseRequest {
            category: draft.category(),
            amount: draft.amount(),
            date: date_field_value(draft.date()),
            description: draft.description().unwrap_or_default(),
        };

        let response = self.client.post(self.expenses_url()).json(&body).send().await?;
        let created: Expense = read_json(response).await?;

        tracing::debug!(id = %created.id, category = %created.category, "Expense created");
        Ok(created)
    }

    async fn delete_expense(&self, id: &ExpenseId) -> GatewayResult<()> {
        let response = self.client.delete(self.expense_url(id)).send().await?;
        check_status(response).await?;

        tracing::debug!(id = %id, "Expense deleted");
        Ok(())
    }
}

/// Fail on non-success status, otherwise hand the response back
async fn check_status(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(GatewayError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> GatewayResult<T> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

// ============================================
// Request DTOs
// ============================================

/// `POST /expenses` body; the backend expects `""` for a missing description
#[derive(Debug, Serialize)]
struct CreateExpenseRequest<'a> {
    category: &'a str,
    amount: f64,
    date: String,
    description: &'a str,
}
