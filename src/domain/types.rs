//! Shared domain types.
//!
//! These types are intentionally kept lightweight so they can be:
//!
//! - loaded from the forecast/actuals CSVs
//! - reshaped by the view pipeline on every filter change
//! - exported back to CSV or rendered in the terminal

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Retail location identifier, the grouping key shared by both tables.
///
/// Numeric ids are canonicalized (`1`, `1.0` and `01` are the same store);
/// anything else is kept as trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(id: impl Into<String>) -> Self {
        let raw = id.into();
        let raw = raw.trim();
        Self(canonical_number(raw).unwrap_or_else(|| raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StoreId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Integral numbers print without fraction or leading zeros.
fn canonical_number(raw: &str) -> Option<String> {
    let v = raw.parse::<f64>().ok()?;
    if !v.is_finite() || v.fract() != 0.0 || v.abs() >= 1e15 {
        return None;
    }
    Some(format!("{}", v as i64))
}

/// Join key used by aggregation and reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SalesKey {
    pub store: StoreId,
    pub date: NaiveDate,
}

impl SalesKey {
    pub fn new(store: StoreId, date: NaiveDate) -> Self {
        Self { store, date }
    }
}

/// One forecasted week for one store.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub store: StoreId,
    pub date: NaiveDate,
    pub predicted_sales: f64,
}

/// One observed row from the actuals table.
///
/// Several rows may share a `(store, date)` (one per department). `weekly_sales`
/// is `None` when the table has no sales column or the cell is blank.
#[derive(Debug, Clone, PartialEq)]
pub struct ActualRecord {
    pub store: StoreId,
    pub date: NaiveDate,
    pub weekly_sales: Option<f64>,
    pub is_holiday: bool,
}

/// The loaded actuals source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActualsTable {
    pub rows: Vec<ActualRecord>,
    /// `false` for datasets without a `Weekly_Sales` column.
    pub has_weekly_sales: bool,
}

/// Forecast joined with aggregated actuals; the row shape rendered and exported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledRecord {
    #[serde(rename = "Store")]
    pub store: StoreId,
    #[serde(rename = "ds")]
    pub date: NaiveDate,
    #[serde(rename = "Predicted_Weekly_Sales")]
    pub predicted_sales: f64,
    /// `None` means no observation exists for this week; never treat it as zero.
    #[serde(rename = "Actual_Weekly_Sales")]
    pub actual_sales: Option<f64>,
}

/// A holiday week for one of the selected stores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HolidayMark {
    #[serde(rename = "Store")]
    pub store: StoreId,
    #[serde(rename = "Date")]
    pub date: NaiveDate,
}

/// Everything a user interaction can change, as one explicit input tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelection {
    pub stores: BTreeSet<StoreId>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub highlight_holidays: bool,
}

impl ViewSelection {
    /// True when the selection cannot match anything (no stores or inverted window).
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty() || self.start > self.end
    }
}

/// Inclusive date bounds of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateBounds {
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.min, self.max)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min <= date && date <= self.max
    }
}
