//! Shared "load + view" logic used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! CSV ingest -> known stores / date bounds -> selection -> view
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::{DateBounds, ForecastRecord, StoreId, ViewSelection};
use crate::error::AppError;
use crate::io::ingest::{ActualsData, ForecastData, load_actuals, load_forecast};
use crate::view::{SalesView, build_view};

/// Where to read the two source tables from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub forecast: PathBuf,
    pub actuals: PathBuf,
}

/// Both source tables, loaded once and treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub forecast: ForecastData,
    pub actuals: ActualsData,
    stores: Vec<StoreId>,
    bounds: DateBounds,
}

impl Datasets {
    pub fn load(paths: &DataPaths) -> Result<Self, AppError> {
        let forecast = load_forecast(&paths.forecast)?;
        let actuals = load_actuals(&paths.actuals)?;
        Self::from_parts(forecast, actuals)
    }

    /// Build from already-ingested tables. Fails only when the forecast holds no usable rows,
    /// since the date controls are bounded by it.
    pub fn from_parts(forecast: ForecastData, actuals: ActualsData) -> Result<Self, AppError> {
        let stores = known_stores(&forecast.records);
        let bounds = date_bounds(&forecast.records).ok_or_else(|| {
            AppError::new(
                3,
                format!("No valid forecast rows in '{}'.", forecast.report.source),
            )
        })?;

        tracing::info!(
            stores = stores.len(),
            start = %bounds.min,
            end = %bounds.max,
            "datasets ready"
        );

        Ok(Self {
            forecast,
            actuals,
            stores,
            bounds,
        })
    }

    /// Stores in order of first appearance in the forecast file.
    pub fn stores(&self) -> &[StoreId] {
        &self.stores
    }

    pub fn bounds(&self) -> DateBounds {
        self.bounds
    }

    /// First known store, full date range, holidays highlighted.
    pub fn default_selection(&self) -> ViewSelection {
        ViewSelection {
            stores: self.stores.first().cloned().into_iter().collect(),
            start: self.bounds.min,
            end: self.bounds.max,
            highlight_holidays: true,
        }
    }

    /// Apply explicit overrides on top of the default selection.
    ///
    /// Unknown store ids are kept (they simply match nothing) but logged.
    pub fn selection_from(
        &self,
        stores: &[String],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        highlight_holidays: bool,
    ) -> ViewSelection {
        let mut selection = self.default_selection();
        if !stores.is_empty() {
            selection.stores = stores.iter().map(|s| StoreId::new(s.as_str())).collect::<BTreeSet<_>>();
            for s in &selection.stores {
                if !self.stores.contains(s) {
                    tracing::warn!(store = %s, "store not present in forecast");
                }
            }
        }
        if let Some(start) = start {
            selection.start = start;
        }
        if let Some(end) = end {
            selection.end = end;
        }
        selection.highlight_holidays = highlight_holidays;
        selection
    }

    pub fn view(&self, selection: &ViewSelection) -> SalesView {
        build_view(&self.forecast.records, &self.actuals.table, selection)
    }
}

/// Load both tables from disk.
pub fn load(paths: &DataPaths) -> Result<Datasets, AppError> {
    Datasets::load(paths)
}

fn known_stores(records: &[ForecastRecord]) -> Vec<StoreId> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.store.clone()))
        .map(|r| r.store.clone())
        .collect()
}

fn date_bounds(records: &[ForecastRecord]) -> Option<DateBounds> {
    let min = records.iter().map(|r| r.date).min()?;
    let max = records.iter().map(|r| r.date).max()?;
    Some(DateBounds { min, max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::{read_actuals, read_forecast};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn datasets() -> Datasets {
        let forecast = "\
Store,ds,Predicted_Weekly_Sales
5,2012-01-13,500
5,2012-01-06,400
2,2012-01-06,200
2,2012-01-13,210
";
        let actuals = "\
Store,Date,Weekly_Sales,IsHoliday
5,2012-01-06,300,False
5,2012-01-06,90,False
2,2012-01-13,205,True
";
        Datasets::from_parts(
            read_forecast(forecast.as_bytes(), "f.csv").unwrap(),
            read_actuals(actuals.as_bytes(), "a.csv").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn stores_keep_first_appearance_order() {
        let ds = datasets();
        assert_eq!(ds.stores(), &[StoreId::from("5"), StoreId::from("2")]);
    }

    #[test]
    fn default_selection_is_first_store_and_full_range() {
        let ds = datasets();
        let sel = ds.default_selection();
        assert_eq!(sel.stores.iter().collect::<Vec<_>>(), vec![&StoreId::from("5")]);
        assert_eq!(sel.start, d(2012, 1, 6));
        assert_eq!(sel.end, d(2012, 1, 13));
        assert!(sel.highlight_holidays);
    }

    #[test]
    fn view_joins_and_marks_holidays() {
        let ds = datasets();
        let sel = ds.selection_from(&["2".to_string(), "5".to_string()], None, None, true);
        let view = ds.view(&sel);

        assert_eq!(view.records.len(), 4);
        assert_eq!(view.records[1].actual_sales, Some(390.0));
        assert_eq!(view.records[0].actual_sales, None);
        assert_eq!(view.records[3].actual_sales, Some(205.0));
        assert_eq!(view.holidays.len(), 1);
        assert!((view.marker_level.unwrap() - 525.0).abs() < 1e-9);
    }

    #[test]
    fn overrides_apply_to_window() {
        let ds = datasets();
        let sel = ds.selection_from(&[], Some(d(2012, 1, 10)), None, false);
        assert_eq!(sel.start, d(2012, 1, 10));
        let view = ds.view(&sel);
        assert_eq!(view.records.len(), 1);
        assert!(view.holidays.is_empty());
    }

    #[test]
    fn empty_forecast_is_rejected() {
        let forecast = read_forecast("Store,ds,Predicted_Weekly_Sales\n".as_bytes(), "f.csv").unwrap();
        let actuals = read_actuals("Store,Date,IsHoliday\n".as_bytes(), "a.csv").unwrap();
        let err = Datasets::from_parts(forecast, actuals).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }
}
