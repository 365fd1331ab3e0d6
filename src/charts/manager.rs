//! Chart Manager
//!
//! Owns the trend and category widget instances. Every analytics refresh
//! destroys the live instance in each slot before building its replacement,
//! so a slot never holds more than one widget and legends never keep entries
//! for categories that disappeared.

use super::spec::{CategoryChartSpec, ChartSpec, TrendChartSpec, WidgetKind};
use super::{ChartWidget, WidgetFactory};
use crate::model::Analytics;

/// Lifecycle owner for the dashboard's two chart widgets
pub struct ChartManager<F: WidgetFactory> {
    factory: F,
    trend: Option<F::Widget>,
    category: Option<F::Widget>,
    refreshes: u64,
}

impl<F: WidgetFactory> ChartManager<F> {
    /// Create a manager with both slots empty
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            trend: None,
            category: None,
            refreshes: 0,
        }
    }

    /// Rebuild both widgets from a freshly fetched analytics payload
    pub fn refresh(&mut self, analytics: &Analytics) {
        self.refreshes += 1;

        let trend = ChartSpec::Trend(TrendChartSpec::from_trend(&analytics.trend));
        Self::replace(&mut self.factory, &mut self.trend, trend);

        let category = ChartSpec::Category(CategoryChartSpec::from_breakdown(&analytics.by_category));
        Self::replace(&mut self.factory, &mut self.category, category);

        tracing::debug!(
            refresh = self.refreshes,
            trend_points = analytics.trend.len(),
            categories = analytics.by_category.len(),
            "Charts rebuilt"
        );
    }

    fn replace(factory: &mut F, slot: &mut Option<F::Widget>, spec: ChartSpec) {
        let kind = spec.kind();
        if let Some(mut previous) = slot.take() {
            previous.destroy();
            tracing::trace!(widget = %kind, "Destroyed chart widget");
        }
        *slot = Some(factory.create(spec));
    }

    /// Whether the slot currently holds a widget
    pub fn is_active(&self, kind: WidgetKind) -> bool {
        match kind {
            WidgetKind::Trend => self.trend.is_some(),
            WidgetKind::Category => self.category.is_some(),
        }
    }

    /// Number of completed refreshes
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }
}

impl<F: WidgetFactory> Drop for ChartManager<F> {
    fn drop(&mut self) {
        for mut widget in [self.trend.take(), self.category.take()].into_iter().flatten() {
            widget.destroy();
        }
    }
}
