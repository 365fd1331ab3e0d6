//! Chart descriptions
//!
//! What each widget is built from: labels, values, colors and the text shown
//! on axes and tooltips. Widgets receive a finished [`ChartSpec`] and never
//! see the raw analytics payload.

use crate::format::{format_currency, format_date};
use crate::model::{CategoryBreakdown, TrendPoint};

/// Dataset label of the trend line
pub const TREND_DATASET_LABEL: &str = "Daily Expenses";

/// Trend line stroke color
pub const TREND_LINE_COLOR: &str = "#667eea";

/// Trend area fill color
pub const TREND_FILL_COLOR: &str = "rgba(102, 126, 234, 0.1)";

/// Category segment colors, reused cyclically past the eighth category
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#667eea", "#764ba2", "#f093fb", "#4facfe", "#43e97b", "#fa709a", "#fee140", "#30cfd0",
];

/// Color for the category at `index` in response order
pub fn palette_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}

/// Which of the two dashboard widgets a spec or slot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Trend,
    Category,
}

impl std::fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetKind::Trend => write!(f, "trend"),
            WidgetKind::Category => write!(f, "category"),
        }
    }
}

/// Everything needed to construct one widget instance
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSpec {
    Trend(TrendChartSpec),
    Category(CategoryChartSpec),
}

impl ChartSpec {
    pub fn kind(&self) -> WidgetKind {
        match self {
            ChartSpec::Trend(_) => WidgetKind::Trend,
            ChartSpec::Category(_) => WidgetKind::Category,
        }
    }
}

/// Line chart of spend per trend bucket
#[derive(Debug, Clone, PartialEq)]
pub struct TrendChartSpec {
    pub dataset_label: &'static str,
    /// X-axis labels in the order the backend sent the buckets
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub line_color: &'static str,
    pub fill_color: &'static str,
}

impl TrendChartSpec {
    /// Build from the trend sequence without reordering it
    pub fn from_trend(points: &[TrendPoint]) -> Self {
        Self {
            dataset_label: TREND_DATASET_LABEL,
            labels: points.iter().map(|p| format_date(p.date)).collect(),
            values: points.iter().map(|p| p.amount).collect(),
            line_color: TREND_LINE_COLOR,
            fill_color: TREND_FILL_COLOR,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Y-axis bounds; the axis always starts at zero
    pub fn y_range(&self) -> (f64, f64) {
        let max = self.values.iter().cloned().fold(0.0_f64, f64::max);
        (0.0, if max > 0.0 { max } else { 1.0 })
    }

    /// `steps + 1` evenly spaced tick values from zero to the top of the axis
    pub fn ticks(&self, steps: usize) -> Vec<f64> {
        let (low, high) = self.y_range();
        if steps == 0 {
            return vec![low];
        }
        (0..=steps)
            .map(|i| low + (high - low) * i as f64 / steps as f64)
            .collect()
    }

    /// Y-axis tick text
    pub fn tick_label(&self, value: f64) -> String {
        format_currency(value)
    }

    /// Tooltip for the bucket at `index`
    pub fn tooltip(&self, index: usize) -> Option<String> {
        self.values
            .get(index)
            .map(|value| format!("{}: {}", self.dataset_label, format_currency(*value)))
    }
}

/// One slice of the category breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

impl Segment {
    /// `"<category>: $<amount>"`
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.label, format_currency(self.value))
    }
}

/// Doughnut chart of spend per category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChartSpec {
    pub segments: Vec<Segment>,
}

impl CategoryChartSpec {
    /// One segment per category, colored by its position in the breakdown
    pub fn from_breakdown(breakdown: &CategoryBreakdown) -> Self {
        let segments = breakdown
            .iter()
            .enumerate()
            .map(|(idx, entry)| Segment {
                label: entry.category.clone(),
                value: entry.amount,
                color: palette_color(idx),
            })
            .collect();

        Self { segments }
    }

    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }

    /// Fraction of the total held by the segment at `index`
    pub fn share(&self, index: usize) -> Option<f64> {
        let total = self.total();
        self.segments
            .get(index)
            .map(|s| if total > 0.0 { s.value / total } else { 0.0 })
    }
}
