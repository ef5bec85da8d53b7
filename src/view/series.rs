//! Chart-ready reshaping of a `SalesView`.
//!
//! Kept separate from rendering so the line/gap logic can be tested without a
//! terminal.

use chrono::NaiveDate;

use crate::domain::{ReconciledRecord, StoreId};

use super::SalesView;

/// Lines for one store.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSeries {
    pub store: StoreId,
    /// Drawn dashed.
    pub predicted: Vec<(NaiveDate, f64)>,
    /// Drawn solid. Each inner vec is a run of consecutive weeks with an
    /// observation; absent weeks split the line instead of dropping to zero.
    /// Empty when the store has no actuals in view.
    pub actual_segments: Vec<Vec<(NaiveDate, f64)>>,
}

impl StoreSeries {
    pub fn has_actuals(&self) -> bool {
        !self.actual_segments.is_empty()
    }
}

/// Collect the predicted line and actual segments for `store`, in record order.
pub fn store_series(records: &[ReconciledRecord], store: &StoreId) -> StoreSeries {
    let mut predicted = Vec::new();
    let mut actual_segments: Vec<Vec<(NaiveDate, f64)>> = Vec::new();
    let mut current: Vec<(NaiveDate, f64)> = Vec::new();

    for r in records.iter().filter(|r| &r.store == store) {
        predicted.push((r.date, r.predicted_sales));
        match r.actual_sales {
            Some(v) if v.is_finite() => current.push((r.date, v)),
            _ => {
                if !current.is_empty() {
                    actual_segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        actual_segments.push(current);
    }

    StoreSeries {
        store: store.clone(),
        predicted,
        actual_segments,
    }
}

/// Headline numbers for the header bar and text summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStats {
    pub n_records: usize,
    pub n_stores: usize,
    pub n_with_actuals: usize,
    pub n_holidays: usize,
    pub predicted_min: Option<f64>,
    pub predicted_max: Option<f64>,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn view_stats(view: &SalesView) -> ViewStats {
    let mut stores: Vec<&StoreId> = view.records.iter().map(|r| &r.store).collect();
    stores.sort();
    stores.dedup();

    let predicted = view.records.iter().map(|r| r.predicted_sales).filter(|v| v.is_finite());

    ViewStats {
        n_records: view.records.len(),
        n_stores: stores.len(),
        n_with_actuals: view.records.iter().filter(|r| r.actual_sales.is_some()).count(),
        n_holidays: view.holidays.len(),
        predicted_min: predicted.clone().reduce(f64::min),
        predicted_max: predicted.reduce(f64::max),
        first_date: view.records.iter().map(|r| r.date).min(),
        last_date: view.records.iter().map(|r| r.date).max(),
    }
}
