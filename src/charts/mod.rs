//! Chart Widgets
//!
//! The dashboard shows two charts: spend over time (TREND) and spend per
//! category (CATEGORY). Concrete widgets are opaque to this module; they are
//! built through a [`WidgetFactory`] and torn down through [`ChartWidget`].
//!
//! - [`ChartManager`]: owns the two live widgets, destroy-then-recreate on refresh
//! - [`ChartSpec`]: labels, values, colors and tooltip text for one widget

mod manager;
mod spec;

pub use manager::ChartManager;
pub use spec::{
    palette_color, CategoryChartSpec, ChartSpec, Segment, TrendChartSpec, WidgetKind,
    CATEGORY_PALETTE, TREND_DATASET_LABEL, TREND_FILL_COLOR, TREND_LINE_COLOR,
};

/// A live chart bound to one render target
pub trait ChartWidget: Send {
    /// Release the render target. Called exactly once, before any replacement
    /// is created on the same target.
    fn destroy(&mut self);
}

/// Builds widgets on the dashboard's chart targets
pub trait WidgetFactory: Send {
    type Widget: ChartWidget;

    /// Construct a widget on the target matching `spec.kind()`
    fn create(&mut self, spec: ChartSpec) -> Self::Widget;
}
