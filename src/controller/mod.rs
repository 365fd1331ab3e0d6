//! Dashboard Orchestration
//!
//! ## Architecture
//!
//! - **DashboardController**: startup load, form submission, delete actions
//! - **Ports**: view, prompt and clock seams injected into the controller
//!
//! ## Data Flow
//!
//! 1. Startup presets the form date and fetches expenses + analytics concurrently
//! 2. Each fetch renders its own targets as soon as it completes
//! 3. A successful create/delete re-runs both fetches before acknowledging

mod dashboard;
mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use dashboard::{
    DashboardController, DeleteOutcome, SubmitOutcome, ADD_FAILED, ADD_SUCCEEDED,
    DELETE_FAILED, DELETE_QUESTION, DELETE_SUCCEEDED, LOAD_EXPENSES_FAILED,
};
pub use ports::{Clock, DashboardView, Notice, NoticeKind, SystemClock, UserPrompt};
