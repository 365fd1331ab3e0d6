//! UI seams the controller drives
//!
//! Front ends implement these; the controller never touches a concrete UI.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::render::{StatisticsPanel, TableBody};

/// Render targets and form fields of the dashboard
pub trait DashboardView: Send {
    /// Set the form's date field
    fn set_form_date(&mut self, date: NaiveDate);

    /// Clear every form field
    fn reset_form(&mut self);

    /// Replace the table body
    fn show_table(&mut self, body: &TableBody);

    /// Replace the statistics text targets
    fn show_statistics(&mut self, panel: &StatisticsPanel);
}

/// Interactive acknowledgement and confirmation
///
/// Each call is one blocking exchange with the user: `notify` returns once the
/// message has been acknowledged.
#[async_trait]
pub trait UserPrompt: Send + Sync {
    /// Ask a yes/no question
    async fn confirm(&self, question: &str) -> bool;

    /// Show one message and wait for it to be acknowledged
    async fn notify(&self, notice: Notice);
}

/// Source of "today" for the form's default date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Severity of a user notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A single message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}
