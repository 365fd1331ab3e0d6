//! Dashboard Controller
//!
//! Wires the gateway to the view, the statistics panel and the chart manager.
//!
//! Rendering is always driven by a fresh fetch: after any successful mutation
//! the same two fetches used at startup run again, and nothing is patched
//! locally. Mutations are serialized, so a second submit or delete waits until
//! the previous one's refresh has been applied.

use tokio::sync::Mutex;

use super::ports::{Clock, DashboardView, Notice, SystemClock, UserPrompt};
use crate::charts::{ChartManager, WidgetFactory};
use crate::gateway::{Gateway, GatewayError};
use crate::model::{Expense, ExpenseForm, ExpenseId, ValidationError};
use crate::render::{render_statistics, render_table};

pub const LOAD_EXPENSES_FAILED: &str = "Failed to load expenses";
pub const ADD_SUCCEEDED: &str = "Expense added successfully!";
pub const ADD_FAILED: &str = "Failed to add expense";
pub const DELETE_QUESTION: &str = "Are you sure you want to delete this expense?";
pub const DELETE_SUCCEEDED: &str = "Expense deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete expense";

/// Result of a form submission
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Backend stored the expense; the dashboard has been refreshed
    Created(Expense),
    /// Form rejected locally, nothing was sent
    Invalid(ValidationError),
    /// Backend or network failure, form left as submitted
    Failed(GatewayError),
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Created(_))
    }
}

/// Result of a delete action
#[derive(Debug)]
pub enum DeleteOutcome {
    /// Backend removed the expense; the dashboard has been refreshed
    Deleted,
    /// User declined the confirmation
    Cancelled,
    /// Backend or network failure
    Failed(GatewayError),
}

impl DeleteOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

/// Top-level dashboard orchestrator
pub struct DashboardController<G, V, P, F: WidgetFactory> {
    gateway: G,
    prompt: P,
    clock: Box<dyn Clock>,
    view: Mutex<V>,
    charts: Mutex<ChartManager<F>>,
    mutations: Mutex<()>,
}

impl<G, V, P, F> DashboardController<G, V, P, F>
where
    G: Gateway,
    V: DashboardView,
    P: UserPrompt,
    F: WidgetFactory,
{
    /// Create a controller using the system clock
    pub fn new(gateway: G, view: V, prompt: P, factory: F) -> Self {
        Self {
            gateway,
            prompt,
            clock: Box::new(SystemClock),
            view: Mutex::new(view),
            charts: Mutex::new(ChartManager::new(factory)),
            mutations: Mutex::new(()),
        }
    }

    /// Builder method: replace the clock
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Initial load: preset the form date, then fetch and render everything
    ///
    /// Returns whether the expense list loaded; see [`refresh`](Self::refresh).
    pub async fn start(&self) -> bool {
        let today = self.clock.today();
        self.view.lock().await.set_form_date(today);

        tracing::info!(date = %today, "Loading dashboard");
        self.refresh().await
    }

    /// Fetch the expense list and the analytics concurrently
    ///
    /// Each result is rendered as soon as it arrives; neither waits for the
    /// other. Returns `false` when the expense list failed to load. An
    /// analytics failure is not reported here.
    pub async fn refresh(&self) -> bool {
        let (listed, ()) = tokio::join!(self.load_expenses(), self.load_analytics());
        listed
    }

    async fn load_expenses(&self) -> bool {
        match self.gateway.list_expenses().await {
            Ok(expenses) => {
                let body = render_table(&expenses);
                self.view.lock().await.show_table(&body);
                tracing::debug!(expenses = expenses.len(), "Expense table rendered");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Error loading expenses");
                self.prompt.notify(Notice::error(LOAD_EXPENSES_FAILED)).await;
                false
            }
        }
    }

    async fn load_analytics(&self) {
        match self.gateway.fetch_analytics().await {
            Ok(analytics) => {
                let panel = render_statistics(&analytics);
                self.view.lock().await.show_statistics(&panel);
                self.charts.lock().await.refresh(&analytics);
                tracing::debug!(total = analytics.total, "Analytics rendered");
            }
            Err(e) => {
                // Previous statistics and charts stay on screen
                tracing::warn!(error = %e, "Error loading analytics");
            }
        }
    }

    /// Handle the add-expense form
    ///
    /// `form` is the snapshot of the fields taken when the user submitted.
    pub async fn submit(&self, form: ExpenseForm) -> SubmitOutcome {
        let _serialized = self.mutations.lock().await;

        let draft = match form.to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected expense form");
                self.prompt.notify(Notice::error(format!("{}: {}", ADD_FAILED, e))).await;
                return SubmitOutcome::Invalid(e);
            }
        };

        match self.gateway.create_expense(&draft).await {
            Ok(created) => {
                tracing::info!(id = %created.id, category = %created.category, amount = created.amount, "Expense added");

                {
                    let today = self.clock.today();
                    let mut view = self.view.lock().await;
                    view.reset_form();
                    view.set_form_date(today);
                }

                self.refresh().await;
                self.prompt.notify(Notice::success(ADD_SUCCEEDED)).await;
                SubmitOutcome::Created(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error adding expense");
                self.prompt.notify(Notice::error(ADD_FAILED)).await;
                SubmitOutcome::Failed(e)
            }
        }
    }

    /// Handle a row's delete control
    pub async fn delete(&self, id: &ExpenseId) -> DeleteOutcome {
        if !self.prompt.confirm(DELETE_QUESTION).await {
            tracing::debug!(id = %id, "Delete cancelled");
            return DeleteOutcome::Cancelled;
        }

        let _serialized = self.mutations.lock().await;

        match self.gateway.delete_expense(id).await {
            Ok(()) => {
                tracing::info!(id = %id, "Expense deleted");
                self.refresh().await;
                self.prompt.notify(Notice::success(DELETE_SUCCEEDED)).await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Error deleting expense");
                self.prompt.notify(Notice::error(DELETE_FAILED)).await;
                DeleteOutcome::Failed(e)
            }
        }
    }
}
