//! In-memory fakes for the controller's collaborators

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use super::ports::{Clock, DashboardView, Notice, UserPrompt};
use crate::charts::{CategoryChartSpec, ChartSpec, ChartWidget, WidgetFactory, WidgetKind};
use crate::gateway::{Gateway, GatewayError, GatewayResult};
use crate::model::{
    Analytics, CategoryBreakdown, CategoryTotal, Expense, ExpenseDraft, ExpenseId, TrendPoint,
};
use crate::render::{StatisticsPanel, TableBody};

pub fn expense(id: u64, date: &str, category: &str, amount: f64) -> Expense {
    Expense {
        id: ExpenseId::from(id),
        category: category.to_string(),
        amount,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        description: None,
    }
}

/// Analytics with the given breakdown and a one-bucket trend
///
/// `highest` is the first category, `lowest` is absent.
pub fn analytics_with_categories(categories: &[(&str, f64)]) -> Analytics {
    let total: f64 = categories.iter().map(|(_, amount)| amount).sum();
    Analytics {
        total,
        highest: categories.first().map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount: *amount,
        }),
        lowest: None,
        trend: vec![TrendPoint {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            amount: total,
        }],
        by_category: categories.iter().map(|(c, a)| (*c, *a)).collect::<CategoryBreakdown>(),
    }
}

// ============================================
// Gateway
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    List,
    Analytics,
    Create,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Analytics,
    Create(ExpenseDraft),
    Delete(ExpenseId),
}

impl Call {
    pub fn kind(&self) -> CallKind {
        match self {
            Call::List => CallKind::List,
            Call::Analytics => CallKind::Analytics,
            Call::Create(_) => CallKind::Create,
            Call::Delete(_) => CallKind::Delete,
        }
    }
}

struct GatewayState {
    expenses: Vec<Expense>,
    analytics: Analytics,
    failing: HashSet<CallKind>,
    calls: Vec<Call>,
    next_id: u64,
}

/// Scripted backend; clones share state
#[derive(Clone)]
pub struct FakeGateway {
    state: Arc<Mutex<GatewayState>>,
    list_gate: Option<Arc<Notify>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(GatewayState {
                expenses: Vec::new(),
                analytics: analytics_with_categories(&[]),
                failing: HashSet::new(),
                calls: Vec::new(),
                next_id: 100,
            })),
            list_gate: None,
        }
    }

    pub fn with_expenses(self, expenses: Vec<Expense>) -> Self {
        self.state.lock().unwrap().expenses = expenses;
        self
    }

    pub fn with_analytics(self, analytics: Analytics) -> Self {
        self.set_analytics(analytics);
        self
    }

    pub fn failing(self, kind: CallKind) -> Self {
        self.set_failing(kind, true);
        self
    }

    /// Hold list responses until an analytics request has been answered
    pub fn with_list_gate(mut self, gate: Arc<Notify>) -> Self {
        self.list_gate = Some(gate);
        self
    }

    pub fn set_analytics(&self, analytics: Analytics) {
        self.state.lock().unwrap().analytics = analytics;
    }

    pub fn set_failing(&self, kind: CallKind, failing: bool) {
        let mut state = self.state.lock().unwrap();
        if failing {
            state.failing.insert(kind);
        } else {
            state.failing.remove(&kind);
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, kind: CallKind) -> usize {
        self.state
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|c| c.kind() == kind)
            .count()
    }

    /// Record the call and report whether it should fail
    fn record(&self, call: Call) -> GatewayResult<()> {
        let mut state = self.state.lock().unwrap();
        let kind = call.kind();
        state.calls.push(call);
        if state.failing.contains(&kind) {
            Err(GatewayError::Status {
                status: 500,
                message: "scripted failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn list_expenses(&self) -> GatewayResult<Vec<Expense>> {
        let result = self.record(Call::List);
        if let Some(gate) = &self.list_gate {
            gate.notified().await;
        }
        result?;
        Ok(self.state.lock().unwrap().expenses.clone())
    }

    async fn fetch_analytics(&self) -> GatewayResult<Analytics> {
        let result = self.record(Call::Analytics);
        if let Some(gate) = &self.list_gate {
            gate.notify_one();
        }
        result?;
        Ok(self.state.lock().unwrap().analytics.clone())
    }

    async fn create_expense(&self, draft: &ExpenseDraft) -> GatewayResult<Expense> {
        self.record(Call::Create(draft.clone()))?;
        tokio::task::yield_now().await;

        let mut state = self.state.lock().unwrap();
        state.next_id += 1;
        let created = Expense {
            id: ExpenseId::from(state.next_id),
            category: draft.category().to_string(),
            amount: draft.amount(),
            date: draft.date(),
            description: draft.description().map(str::to_string),
        };
        state.expenses.push(created.clone());
        Ok(created)
    }

    async fn delete_expense(&self, id: &ExpenseId) -> GatewayResult<()> {
        self.record(Call::Delete(id.clone()))?;
        tokio::task::yield_now().await;

        self.state.lock().unwrap().expenses.retain(|e| &e.id != id);
        Ok(())
    }
}

// ============================================
// View and prompt
// ============================================

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    FormDate(NaiveDate),
    FormReset,
    Table(TableBody),
    Statistics(StatisticsPanel),
}

/// View that records every update; clones share the record
#[derive(Clone, Default)]
pub struct FakeView {
    events: Arc<Mutex<Vec<ViewEvent>>>,
}

impl FakeView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_table(&self) -> Option<TableBody> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Table(body) => Some(body),
            _ => None,
        })
    }

    pub fn last_statistics(&self) -> Option<StatisticsPanel> {
        self.events().into_iter().rev().find_map(|e| match e {
            ViewEvent::Statistics(panel) => Some(panel),
            _ => None,
        })
    }
}

impl DashboardView for FakeView {
    fn set_form_date(&mut self, date: NaiveDate) {
        self.events.lock().unwrap().push(ViewEvent::FormDate(date));
    }

    fn reset_form(&mut self) {
        self.events.lock().unwrap().push(ViewEvent::FormReset);
    }

    fn show_table(&mut self, body: &TableBody) {
        self.events.lock().unwrap().push(ViewEvent::Table(body.clone()));
    }

    fn show_statistics(&mut self, panel: &StatisticsPanel) {
        self.events.lock().unwrap().push(ViewEvent::Statistics(panel.clone()));
    }
}

#[derive(Default)]
struct PromptState {
    questions: Vec<String>,
    notices: Vec<Notice>,
}

/// Prompt with a fixed confirmation answer; clones share the record
#[derive(Clone)]
pub struct FakePrompt {
    answer: bool,
    state: Arc<Mutex<PromptState>>,
}

impl FakePrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            state: Arc::default(),
        }
    }

    pub fn questions(&self) -> Vec<String> {
        self.state.lock().unwrap().questions.clone()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.state.lock().unwrap().notices.clone()
    }
}

#[async_trait]
impl UserPrompt for FakePrompt {
    async fn confirm(&self, question: &str) -> bool {
        self.state.lock().unwrap().questions.push(question.to_string());
        self.answer
    }

    async fn notify(&self, notice: Notice) {
        self.state.lock().unwrap().notices.push(notice);
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

// ============================================
// Chart widgets
// ============================================

#[derive(Default)]
struct WidgetCounts {
    created: usize,
    destroyed: usize,
    live_trend: usize,
    live_category: usize,
    max_live: usize,
    last_category: Option<CategoryChartSpec>,
}

/// Shared counters of widget lifecycles
#[derive(Clone, Default)]
pub struct WidgetLog(Arc<Mutex<WidgetCounts>>);

impl WidgetLog {
    pub fn created(&self) -> usize {
        self.0.lock().unwrap().created
    }

    pub fn destroyed(&self) -> usize {
        self.0.lock().unwrap().destroyed
    }

    pub fn live(&self, kind: WidgetKind) -> usize {
        let counts = self.0.lock().unwrap();
        match kind {
            WidgetKind::Trend => counts.live_trend,
            WidgetKind::Category => counts.live_category,
        }
    }

    /// Highest number of simultaneously live widgets ever observed
    pub fn max_live(&self) -> usize {
        self.0.lock().unwrap().max_live
    }

    pub fn last_category_spec(&self) -> Option<CategoryChartSpec> {
        self.0.lock().unwrap().last_category.clone()
    }

    pub fn last_category_segments(&self) -> Option<usize> {
        self.last_category_spec().map(|spec| spec.segments.len())
    }
}

/// Widget that only reports its lifecycle
pub struct RecordingWidget {
    kind: WidgetKind,
    log: WidgetLog,
    destroyed: bool,
}

impl ChartWidget for RecordingWidget {
    fn destroy(&mut self) {
        assert!(!self.destroyed, "{} widget destroyed twice", self.kind);
        self.destroyed = true;

        let mut counts = self.log.0.lock().unwrap();
        counts.destroyed += 1;
        match self.kind {
            WidgetKind::Trend => counts.live_trend -= 1,
            WidgetKind::Category => counts.live_category -= 1,
        }
    }
}

#[derive(Default)]
pub struct RecordingFactory {
    log: WidgetLog,
}

impl RecordingFactory {
    pub fn log(&self) -> WidgetLog {
        self.log.clone()
    }
}

impl WidgetFactory for RecordingFactory {
    type Widget = RecordingWidget;

    fn create(&mut self, spec: ChartSpec) -> RecordingWidget {
        let kind = spec.kind();
        let mut counts = self.log.0.lock().unwrap();
        counts.created += 1;
        match spec {
            ChartSpec::Trend(_) => {
                counts.live_trend += 1;
                assert_eq!(counts.live_trend, 1, "second live trend widget");
            }
            ChartSpec::Category(category) => {
                counts.live_category += 1;
                assert_eq!(counts.live_category, 1, "second live category widget");
                counts.last_category = Some(category);
            }
        }
        counts.max_live = counts.max_live.max(counts.live_trend + counts.live_category);

        RecordingWidget {
            kind,
            log: self.log.clone(),
            destroyed: false,
        }
    }
}
