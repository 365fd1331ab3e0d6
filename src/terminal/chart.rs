//! Text chart widgets
//!
//! Bars are scaled to a fixed column width; the drawing functions are pure so
//! they can be checked without a terminal.

use std::io::Write;

use crate::charts::{CategoryChartSpec, ChartSpec, ChartWidget, TrendChartSpec, WidgetFactory, WidgetKind};

/// Default bar width in columns
pub const DEFAULT_BAR_WIDTH: usize = 40;

const BAR: char = '█';
const TICK_STEPS: usize = 4;

fn bar(value: f64, max: f64, width: usize) -> String {
    let len = if max > 0.0 && value > 0.0 {
        ((value / max) * width as f64).round() as usize
    } else {
        0
    };
    std::iter::repeat(BAR).take(len.min(width)).collect()
}

/// Draw the trend as one horizontal bar per bucket, with a currency tick row
pub fn draw_trend(spec: &TrendChartSpec, width: usize) -> Vec<String> {
    let mut lines = vec![spec.dataset_label.to_string()];
    if spec.is_empty() {
        lines.push("  (no data)".to_string());
        return lines;
    }

    let (_, top) = spec.y_range();
    let label_width = spec.labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    for (idx, label) in spec.labels.iter().enumerate() {
        let value = spec.values.get(idx).copied().unwrap_or(0.0);
        let tooltip = spec.tooltip(idx).unwrap_or_default();
        lines.push(format!(
            "  {:<lw$} |{:<bw$}| {}",
            label,
            bar(value, top, width),
            tooltip,
            lw = label_width,
            bw = width,
        ));
    }

    let ticks: Vec<String> = spec
        .ticks(TICK_STEPS)
        .into_iter()
        .map(|t| spec.tick_label(t))
        .collect();
    lines.push(format!("  {:<lw$}  {}", "", ticks.join("  "), lw = label_width));
    lines
}

/// Draw the breakdown as one bar per segment, sized by its share of the total
pub fn draw_category(spec: &CategoryChartSpec, width: usize) -> Vec<String> {
    let mut lines = vec!["Spending by Category".to_string()];
    if spec.segments.is_empty() {
        lines.push("  (no data)".to_string());
        return lines;
    }

    for (idx, segment) in spec.segments.iter().enumerate() {
        let share = spec.share(idx).unwrap_or(0.0);
        lines.push(format!(
            "  {} {:<bw$} {} ({:.1}%)",
            segment.color,
            bar(share, 1.0, width),
            segment.tooltip(),
            share * 100.0,
            bw = width,
        ));
    }
    lines
}

/// A drawn chart; destroying it discards the drawing
#[derive(Debug)]
pub struct TextChart {
    kind: WidgetKind,
    lines: Vec<String>,
}

impl TextChart {
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_destroyed(&self) -> bool {
        self.lines.is_empty()
    }
}

impl ChartWidget for TextChart {
    fn destroy(&mut self) {
        tracing::trace!(kind = %self.kind, "Destroying chart");
        self.lines.clear();
    }
}

/// Draws each new chart to a writer
pub struct TextChartFactory<W: Write + Send> {
    out: W,
    width: usize,
}

impl TextChartFactory<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TextChartFactory<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: DEFAULT_BAR_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }
}

impl<W: Write + Send> WidgetFactory for TextChartFactory<W> {
    type Widget = TextChart;

    fn create(&mut self, spec: ChartSpec) -> TextChart {
        let kind = spec.kind();
        let lines = match &spec {
            ChartSpec::Trend(trend) => draw_trend(trend, self.width),
            ChartSpec::Category(category) => draw_category(category, self.width),
        };

        let mut block = lines.join("\n");
        block.push_str("\n\n");
        if let Err(e) = self.out.write_all(block.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(kind = %kind, error = %e, "Failed to draw chart");
        }

        TextChart { kind, lines }
    }
}
