//! Sales view builder: filter, aggregate, and reconcile.
//!
//! Every function here is pure. The presentation layers (CLI and TUI) own the
//! current `ViewSelection` and call `build_view` again after each change; no
//! state survives between calls other than the immutable source tables.
//!
//! Empty inputs and empty filters never error; they produce empty output.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::domain::{
    ActualRecord, ActualsTable, ForecastRecord, HolidayMark, ReconciledRecord, SalesKey, StoreId, ViewSelection,
};

pub mod series;

pub use series::*;

/// Holiday markers sit this far above the highest prediction in view.
pub const MARKER_HEADROOM: f64 = 1.05;

/// Summed actual sales per `(store, date)`.
pub type AggregatedActuals = HashMap<SalesKey, f64>;

/// Output of one pipeline invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesView {
    pub records: Vec<ReconciledRecord>,
    /// Empty when holiday highlighting is off.
    pub holidays: Vec<HolidayMark>,
    /// Y position of the holiday overlay; `None` when there is nothing to place it over.
    pub marker_level: Option<f64>,
}

/// Keep forecast rows for the selected stores within `[start, end]` (inclusive).
pub fn filter_forecast(
    records: &[ForecastRecord],
    stores: &BTreeSet<StoreId>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<ForecastRecord> {
    if stores.is_empty() || start > end {
        return Vec::new();
    }

    records
        .iter()
        .filter(|r| stores.contains(&r.store) && start <= r.date && r.date <= end)
        .cloned()
        .collect()
}

/// Sum `weekly_sales` per `(store, date)`.
///
/// Rows without a sales value do not contribute, so a key whose rows are all
/// blank has no entry (and reconciles to an absent actual).
pub fn aggregate_actuals(records: &[ActualRecord]) -> AggregatedActuals {
    let mut out = AggregatedActuals::new();
    for r in records {
        let Some(sales) = r.weekly_sales else { continue };
        *out.entry(SalesKey::new(r.store.clone(), r.date)).or_insert(0.0) += sales;
    }
    out
}

/// Left join: one output per forecast row, in forecast order.
pub fn reconcile(forecast: &[ForecastRecord], aggregated: &AggregatedActuals) -> Vec<ReconciledRecord> {
    forecast
        .iter()
        .map(|f| {
            let key = SalesKey::new(f.store.clone(), f.date);
            ReconciledRecord {
                store: f.store.clone(),
                date: f.date,
                predicted_sales: f.predicted_sales,
                actual_sales: aggregated.get(&key).copied(),
            }
        })
        .collect()
}

/// Holiday-flagged actual rows for the selected stores.
///
/// Department-level duplicates collapse to a single mark per `(store, date)`.
pub fn select_holidays(actuals: &[ActualRecord], stores: &BTreeSet<StoreId>) -> Vec<HolidayMark> {
    let mut seen = BTreeSet::new();
    actuals
        .iter()
        .filter(|r| r.is_holiday && stores.contains(&r.store))
        .filter_map(|r| {
            let mark = HolidayMark {
                store: r.store.clone(),
                date: r.date,
            };
            seen.insert(mark.clone()).then_some(mark)
        })
        .collect()
}

/// Overlay height for holiday markers: `1.05 ×` the highest prediction in view.
///
/// Returns `None` for an empty view, which callers treat as "skip the overlay".
pub fn marker_level(records: &[ReconciledRecord]) -> Option<f64> {
    records
        .iter()
        .map(|r| r.predicted_sales)
        .filter(|v| v.is_finite())
        .reduce(f64::max)
        .map(|max| max * MARKER_HEADROOM)
}

/// Run the full pipeline for one selection.
pub fn build_view(forecast: &[ForecastRecord], actuals: &ActualsTable, selection: &ViewSelection) -> SalesView {
    let filtered = filter_forecast(forecast, &selection.stores, selection.start, selection.end);

    let records = if actuals.has_weekly_sales {
        let aggregated = aggregate_actuals(&actuals.rows);
        reconcile(&filtered, &aggregated)
    } else {
        // No sales column at all: every actual is absent, nothing to aggregate.
        reconcile(&filtered, &AggregatedActuals::new())
    };

    let holidays = if selection.highlight_holidays {
        select_holidays(&actuals.rows, &selection.stores)
    } else {
        Vec::new()
    };

    let marker_level = if holidays.is_empty() { None } else { marker_level(&records) };

    tracing::debug!(
        stores = selection.stores.len(),
        start = %selection.start,
        end = %selection.end,
        records = records.len(),
        holidays = holidays.len(),
        "built sales view"
    );

    SalesView {
        records,
        holidays,
        marker_level,
    }
}
