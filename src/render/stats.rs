//! Summary statistics panel
//!
//! Displays the backend's totals as-is. Nothing here recomputes extrema.

use crate::format::format_currency;
use crate::model::{Analytics, CategoryTotal};

/// Category text used when the backend sent no extremum
pub const MISSING_CATEGORY: &str = "-";

/// Category/amount pair for the highest or lowest spend card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLine {
    pub category: String,
    pub amount: String,
}

impl From<Option<&CategoryTotal>> for StatLine {
    fn from(total: Option<&CategoryTotal>) -> Self {
        match total {
            Some(total) => Self {
                category: total.category.clone(),
                amount: format_currency(total.amount),
            },
            None => Self {
                category: MISSING_CATEGORY.to_string(),
                amount: format_currency(0.0),
            },
        }
    }
}

/// Text for every statistics target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsPanel {
    pub total: String,
    pub highest: StatLine,
    pub lowest: StatLine,
}

/// Project an analytics payload into the statistics panel
pub fn render_statistics(analytics: &Analytics) -> StatisticsPanel {
    StatisticsPanel {
        total: format_currency(analytics.total),
        highest: StatLine::from(analytics.highest.as_ref()),
        lowest: StatLine::from(analytics.lowest.as_ref()),
    }
}
