//! CSV ingest and normalization.
//!
//! This module turns the forecast and actuals exports into typed records that
//! the view pipeline can reshape without further checks.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **Optional sales column** on the actuals side (missing is a supported variant)
//! - **Separation of concerns**: no filtering or joining here

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

use crate::domain::{ActualRecord, ActualsTable, ForecastRecord, SalesKey, StoreId};
use crate::error::AppError;

const COL_STORE: &str = "store";
const COL_FORECAST_DATE: &str = "ds";
const COL_PREDICTED: &str = "predicted_weekly_sales";
const COL_ACTUAL_DATE: &str = "date";
const COL_HOLIDAY: &str = "isholiday";
const COL_WEEKLY_SALES: &str = "weekly_sales";

/// A row-level error encountered during ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// What happened while reading one file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub source: String,
    pub rows_read: usize,
    pub rows_used: usize,
    pub row_errors: Vec<RowError>,
    /// Rows kept with a field degraded to absent (e.g. an unreadable sales cell).
    pub row_warnings: Vec<RowError>,
}

impl LoadReport {
    fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            rows_read: 0,
            rows_used: 0,
            row_errors: Vec::new(),
            row_warnings: Vec::new(),
        }
    }
}

/// Forecast ingest output.
#[derive(Debug, Clone)]
pub struct ForecastData {
    pub records: Vec<ForecastRecord>,
    /// Number of `(store, date)` keys seen more than once.
    pub duplicate_keys: usize,
    pub report: LoadReport,
}

/// Actuals ingest output.
#[derive(Debug, Clone)]
pub struct ActualsData {
    pub table: ActualsTable,
    pub report: LoadReport,
}

/// Load the forecast CSV (`Store`, `ds`, `Predicted_Weekly_Sales`).
pub fn load_forecast(path: &Path) -> Result<ForecastData, AppError> {
    let file = open(path)?;
    read_forecast(file, &path.display().to_string())
}

/// Load the actuals CSV (`Store`, `Date`, `IsHoliday`, optional `Weekly_Sales`).
pub fn load_actuals(path: &Path) -> Result<ActualsData, AppError> {
    let file = open(path)?;
    read_actuals(file, &path.display().to_string())
}

fn open(path: &Path) -> Result<File, AppError> {
    File::open(path).map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))
}

pub fn read_forecast<R: Read>(input: R, source: &str) -> Result<ForecastData, AppError> {
    let mut reader = csv_reader(input);
    let header_map = read_header_map(&mut reader, source)?;
    ensure_columns(&header_map, source, &[COL_STORE, COL_FORECAST_DATE, COL_PREDICTED])?;

    let mut report = LoadReport::new(source);
    let mut records = Vec::new();
    let mut seen = HashSet::new();
    let mut duplicate_keys = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records() starts after the header line, and lines are 1-based.
        let line = idx + 2;
        report.rows_read += 1;

        let parsed = result
            .map_err(|e| format!("CSV parse error: {e}"))
            .and_then(|record| parse_forecast_row(&record, &header_map));

        match parsed {
            Ok(row) => {
                if !seen.insert(SalesKey::new(row.store.clone(), row.date)) {
                    duplicate_keys += 1;
                }
                records.push(row);
            }
            Err(message) => report.row_errors.push(RowError { line, message }),
        }
    }

    report.rows_used = records.len();
    log_report(&report);
    if duplicate_keys > 0 {
        tracing::warn!(source, duplicate_keys, "forecast has repeated (store, date) keys");
    }

    Ok(ForecastData {
        records,
        duplicate_keys,
        report,
    })
}

pub fn read_actuals<R: Read>(input: R, source: &str) -> Result<ActualsData, AppError> {
    let mut reader = csv_reader(input);
    let header_map = read_header_map(&mut reader, source)?;
    ensure_columns(&header_map, source, &[COL_STORE, COL_ACTUAL_DATE, COL_HOLIDAY])?;

    let has_weekly_sales = header_map.contains_key(COL_WEEKLY_SALES);
    if !has_weekly_sales {
        tracing::info!(source, "actuals have no `Weekly_Sales` column; actual sales will be absent");
    }

    let mut report = LoadReport::new(source);
    let mut rows = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let line = idx + 2;
        report.rows_read += 1;

        let parsed = result
            .map_err(|e| format!("CSV parse error: {e}"))
            .and_then(|record| parse_actual_row(&record, &header_map));

        match parsed {
            Ok((row, warning)) => {
                if let Some(message) = warning {
                    report.row_warnings.push(RowError { line, message });
                }
                rows.push(row);
            }
            Err(message) => report.row_errors.push(RowError { line, message }),
        }
    }

    report.rows_used = rows.len();
    log_report(&report);

    Ok(ActualsData {
        table: ActualsTable { rows, has_weekly_sales },
        report,
    })
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

fn read_header_map<R: Read>(reader: &mut csv::Reader<R>, source: &str) -> Result<HashMap<String, usize>, AppError> {
    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers of '{source}': {e}")))?;
    Ok(build_header_map(headers))
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn ensure_columns(header_map: &HashMap<String, usize>, source: &str, required: &[&str]) -> Result<(), AppError> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|c| !header_map.contains_key(*c))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(AppError::new(
        2,
        format!(
            "'{source}' is missing required column(s): {}",
            missing.iter().map(|c| format!("`{c}`")).collect::<Vec<_>>().join(", ")
        ),
    ))
}

fn log_report(report: &LoadReport) {
    tracing::info!(
        source = %report.source,
        rows_read = report.rows_read,
        rows_used = report.rows_used,
        row_errors = report.row_errors.len(),
        "loaded CSV"
    );
    for err in report.row_errors.iter().take(20) {
        tracing::warn!(source = %report.source, line = err.line, "skipped row: {}", err.message);
    }
    for w in report.row_warnings.iter().take(20) {
        tracing::warn!(source = %report.source, line = w.line, "kept row: {}", w.message);
    }
}

fn parse_forecast_row(record: &StringRecord, header_map: &HashMap<String, usize>) -> Result<ForecastRecord, String> {
    let store = StoreId::new(get_required(record, header_map, COL_STORE)?);
    let date = parse_date(get_required(record, header_map, COL_FORECAST_DATE)?)?;
    let predicted_sales = parse_f64(get_required(record, header_map, COL_PREDICTED)?, COL_PREDICTED)?;

    Ok(ForecastRecord {
        store,
        date,
        predicted_sales,
    })
}

/// A bad sales cell only blanks the sales value; the row (and its holiday flag) is kept
/// and the problem is returned as a warning.
fn parse_actual_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<(ActualRecord, Option<String>), String> {
    let store = StoreId::new(get_required(record, header_map, COL_STORE)?);
    let date = parse_date(get_required(record, header_map, COL_ACTUAL_DATE)?)?;
    let is_holiday = match get_optional(record, header_map, COL_HOLIDAY) {
        Some(s) => parse_bool(s)?,
        None => false,
    };
    let (weekly_sales, warning) = match get_optional(record, header_map, COL_WEEKLY_SALES) {
        Some(s) => match parse_f64(s, COL_WEEKLY_SALES) {
            Ok(v) => (Some(v), None),
            Err(e) => (None, Some(format!("{e} Treated as missing."))),
        },
        None => (None, None),
    };

    let row = ActualRecord {
        store,
        date,
        weekly_sales,
        is_holiday,
    };
    Ok((row, warning))
}

fn get_required<'a>(
    record: &'a StringRecord,
    header_map: &HashMap<String, usize>,
    name: &str,
) -> Result<&'a str, String> {
    let idx = header_map
        .get(name)
        .ok_or_else(|| format!("Missing required column: `{name}`"))?;
    record
        .get(*idx)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| format!("Missing required value: `{name}`"))
}

fn get_optional<'a>(record: &'a StringRecord, header_map: &HashMap<String, usize>, name: &str) -> Option<&'a str> {
    let idx = header_map.get(name)?;
    record.get(*idx).map(str::trim).filter(|s| !s.is_empty())
}

/// Parse a calendar date, accepting the formats pandas and spreadsheets emit.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    const DATE_FMTS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
    const DATETIME_FMTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

    for fmt in DATE_FMTS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d);
        }
    }
    for fmt in DATETIME_FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.date());
        }
    }
    Err(format!(
        "Invalid date '{s}'. Expected one of: YYYY-MM-DD, YYYY-MM-DD HH:MM:SS, YYYY/MM/DD, MM/DD/YYYY, DD-MM-YYYY."
    ))
}

fn parse_f64(s: &str, name: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(format!("Invalid `{name}` value '{s}'.")),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err(format!("Invalid `IsHoliday` value '{s}'.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_date_accepts_common_formats() {
        let want = d(2012, 2, 10);
        assert_eq!(parse_date("2012-02-10").unwrap(), want);
        assert_eq!(parse_date("2012-02-10 00:00:00").unwrap(), want);
        assert_eq!(parse_date("2012/02/10").unwrap(), want);
        assert_eq!(parse_date("02/10/2012").unwrap(), want);
        assert_eq!(parse_date("10-02-2012").unwrap(), want);
        assert!(parse_date("tenth of feb").is_err());
    }

    #[test]
    fn forecast_rows_with_bad_dates_are_skipped() {
        let csv = "\
Store,ds,Predicted_Weekly_Sales
1,2012-01-06,20000
1,not-a-date,21000
2,2012-01-06 00:00:00,15000.5
3,2012-01-06,
";
        let data = read_forecast(csv.as_bytes(), "forecast.csv").unwrap();

        assert_eq!(data.report.rows_read, 4);
        assert_eq!(data.report.rows_used, 2);
        assert_eq!(data.report.row_errors.len(), 2);
        assert_eq!(data.report.row_errors[0].line, 3);
        assert_eq!(data.report.row_errors[1].line, 5);
        assert_eq!(data.records[1].store, StoreId::from("2"));
        assert_eq!(data.records[1].predicted_sales, 15000.5);
        assert_eq!(data.duplicate_keys, 0);
    }

    #[test]
    fn forecast_duplicates_are_counted_but_kept() {
        let csv = "Store,ds,Predicted_Weekly_Sales\n1,2012-01-06,1\n1,2012-01-06,2\n";
        let data = read_forecast(csv.as_bytes(), "forecast.csv").unwrap();
        assert_eq!(data.records.len(), 2);
        assert_eq!(data.duplicate_keys, 1);
    }

    #[test]
    fn headers_match_case_insensitively_with_bom() {
        let csv = "\u{feff}STORE,DS,predicted_weekly_sales,yhat_lower\n7,2012-03-02,1.5,0.5\n";
        let data = read_forecast(csv.as_bytes(), "forecast.csv").unwrap();
        assert_eq!(data.records.len(), 1);
        assert_eq!(data.records[0].store, StoreId::from("7"));
    }

    #[test]
    fn missing_required_forecast_column_is_an_error() {
        let csv = "Store,ds\n1,2012-01-06\n";
        let err = read_forecast(csv.as_bytes(), "forecast.csv").unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.message().contains("predicted_weekly_sales"));
    }

    #[test]
    fn actuals_with_sales_column() {
        let csv = "\
Store,Dept,Date,Weekly_Sales,IsHoliday
1,1,2012-01-06,19500,False
1,2,2012-01-06,500,FALSE
1,1,2012-02-10,,TRUE
";
        let data = read_actuals(csv.as_bytes(), "test.csv").unwrap();

        assert!(data.table.has_weekly_sales);
        assert_eq!(data.table.rows.len(), 3);
        assert_eq!(data.table.rows[0].weekly_sales, Some(19500.0));
        assert_eq!(data.table.rows[2].weekly_sales, None);
        assert!(data.table.rows[2].is_holiday);
        assert!(data.report.row_errors.is_empty());
    }

    #[test]
    fn unreadable_sales_cell_keeps_row_and_holiday_flag() {
        let csv = "\
Store,Date,Weekly_Sales,IsHoliday
1,2012-02-10,oops,True
1,2012-02-17,120,False
";
        let data = read_actuals(csv.as_bytes(), "test.csv").unwrap();

        assert_eq!(data.table.rows.len(), 2);
        assert_eq!(data.table.rows[0].weekly_sales, None);
        assert!(data.table.rows[0].is_holiday);
        assert!(data.report.row_errors.is_empty());
        assert_eq!(data.report.row_warnings.len(), 1);
        assert_eq!(data.report.row_warnings[0].line, 2);
    }

    #[test]
    fn actuals_rows_with_bad_dates_are_skipped() {
        let csv = "\
Store,Date,Weekly_Sales,IsHoliday
1,2012-02-10,100,True
1,not-a-date,50,False
1,2012-02-17,120,False
";
        let data = read_actuals(csv.as_bytes(), "test.csv").unwrap();

        assert_eq!(data.report.rows_read, 3);
        assert_eq!(data.table.rows.len(), 2);
        assert_eq!(data.report.row_errors.len(), 1);
        assert_eq!(data.report.row_errors[0].line, 3);
        assert!(data.report.row_errors[0].message.contains("not-a-date"));
    }

    #[test]
    fn numeric_store_spellings_join_across_tables() {
        let forecast = read_forecast("Store,ds,Predicted_Weekly_Sales\n1,2012-01-06,100\n".as_bytes(), "f.csv").unwrap();
        let actuals = read_actuals(
            "Store,Date,Weekly_Sales,IsHoliday\n1.0,2012-01-06,90,True\n01,2012-01-06,5,False\n".as_bytes(),
            "a.csv",
        )
        .unwrap();
        let selection = crate::domain::ViewSelection {
            stores: [StoreId::from("1")].into_iter().collect(),
            start: d(2012, 1, 1),
            end: d(2012, 12, 31),
            highlight_holidays: true,
        };

        let view = crate::view::build_view(&forecast.records, &actuals.table, &selection);

        assert_eq!(view.records.len(), 1);
        assert_eq!(view.records[0].actual_sales, Some(95.0));
        assert_eq!(view.holidays.len(), 1);
    }

    #[test]
    fn actuals_without_sales_column_is_supported() {
        let csv = "Store,Dept,Date,IsHoliday\n1,1,2012-11-02,False\n1,1,2012-11-23,True\n";
        let data = read_actuals(csv.as_bytes(), "test.csv").unwrap();

        assert!(!data.table.has_weekly_sales);
        assert_eq!(data.table.rows.len(), 2);
        assert!(data.table.rows.iter().all(|r| r.weekly_sales.is_none()));
        assert!(data.table.rows[1].is_holiday);
        assert!(data.report.row_errors.is_empty());
    }

    #[test]
    fn actuals_bad_holiday_flag_is_a_row_error() {
        let csv = "Store,Date,IsHoliday\n1,2012-11-02,maybe\n1,2012-11-09,\n";
        let data = read_actuals(csv.as_bytes(), "test.csv").unwrap();
        assert_eq!(data.table.rows.len(), 1);
        assert!(!data.table.rows[0].is_holiday);
        assert_eq!(data.report.row_errors.len(), 1);
    }

    #[test]
    fn missing_file_reports_exit_code_two() {
        let err = load_forecast(Path::new("definitely/not/here.csv")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
