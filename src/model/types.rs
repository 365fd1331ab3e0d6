//! Core data types
//!
//! Wire shapes for expenses and backend analytics.

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned expense identifier
///
/// Opaque to the client. The backend may send it as a JSON number or string;
/// both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ExpenseId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Unsigned(u64),
            Signed(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Signed(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub category: String,
    pub amount: f64,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
}

impl Expense {
    /// Description to display, treating an empty string as absent
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// Aggregate spend for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Total spend for one trend bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

/// Backend-computed analytics over all expenses
///
/// `highest` and `lowest` come pre-resolved from the backend, ties included.
/// The client never recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total: f64,
    #[serde(default)]
    pub highest: Option<CategoryTotal>,
    #[serde(default)]
    pub lowest: Option<CategoryTotal>,
    #[serde(default)]
    pub trend: Vec<TrendPoint>,
    #[serde(default)]
    pub by_category: CategoryBreakdown,
}

/// Per-category totals in the order the backend listed them
///
/// The order drives legend order and palette assignment, so this keeps the
/// JSON object's key order instead of hashing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Vec<CategoryTotal>);

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a category, keeping the first position on replace
    pub fn insert(&mut self, category: impl Into<String>, amount: f64) {
        let category = category.into();
        match self.0.iter_mut().find(|entry| entry.category == category) {
            Some(entry) => entry.amount = amount,
            None => self.0.push(CategoryTotal { category, amount }),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.0.iter()
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.amount)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CategoryBreakdown {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut breakdown = Self::new();
        for (category, amount) in iter {
            breakdown.insert(category, amount);
        }
        breakdown
    }
}

impl Serialize for CategoryBreakdown {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in &self.0 {
            map.serialize_entry(&entry.category, &entry.amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryBreakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = CategoryBreakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to amount")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut breakdown = CategoryBreakdown::new();
                while let Some((category, amount)) = access.next_entry::<String, f64>()? {
                    breakdown.insert(category, amount);
                }
                Ok(breakdown)
            }
        }

        deserializer.deserialize_map(BreakdownVisitor)
    }
}
