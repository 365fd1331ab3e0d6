//! # Spendboard
//!
//! Expense-tracking dashboard client. Fetches expenses and backend-computed
//! analytics from a REST service, renders them as a sorted table, summary
//! statistics and two charts, and submits creations and deletions.
//!
//! ## Modules
//!
//! - [`model`]: expense records, analytics payload, form validation
//! - [`gateway`]: the four backend round trips over HTTP
//! - [`render`]: table rows and statistics cards
//! - [`charts`]: chart specs and the widget lifecycle manager
//! - [`controller`]: startup load, submit and delete orchestration
//! - [`terminal`]: text front end for the controller's ports
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spendboard::controller::DashboardController;
//! use spendboard::gateway::{GatewayConfig, HttpGateway};
//! use spendboard::terminal::{TerminalPrompt, TerminalView, TextChartFactory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = HttpGateway::new(&GatewayConfig::default())?;
//!     let dashboard = DashboardController::new(
//!         gateway,
//!         TerminalView::stdout(),
//!         TerminalPrompt::interactive(),
//!         TextChartFactory::stdout(),
//!     );
//!
//!     dashboard.start().await;
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod config;
pub mod controller;
pub mod format;
pub mod gateway;
pub mod model;
pub mod render;
pub mod terminal;

pub use config::Config;
pub use controller::DashboardController;
pub use gateway::{Gateway, GatewayError, HttpGateway};
pub use model::{Analytics, Expense, ExpenseForm, ExpenseId};
