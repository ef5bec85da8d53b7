//! Formatted terminal output for the `show` and `stores` commands.
//!
//! We keep formatting code in one place so:
//! - the view pipeline stays clean and testable
//! - output changes are localized (important for snapshot-style tests)

use crate::app::pipeline::Datasets;
use crate::domain::{HolidayMark, ReconciledRecord, ViewSelection};
use crate::io::ingest::LoadReport;
use crate::view::{SalesView, view_stats};

/// Format the load summary plus the current selection and view stats.
pub fn format_view_summary(datasets: &Datasets, selection: &ViewSelection, view: &SalesView) -> String {
    let mut out = String::new();

    out.push_str("=== salesview - Predicted vs Actual Weekly Sales ===\n");
    out.push_str(&format_load_line("Forecast", &datasets.forecast.report));
    out.push_str(&format_load_line("Actuals ", &datasets.actuals.report));
    if !datasets.actuals.table.has_weekly_sales {
        out.push_str("Actuals have no Weekly_Sales column: actual sales shown as missing.\n");
    }
    if datasets.forecast.duplicate_keys > 0 {
        out.push_str(&format!(
            "Warning: {} repeated (store, date) keys in forecast.\n",
            datasets.forecast.duplicate_keys
        ));
    }

    let stores: Vec<String> = selection.stores.iter().map(ToString::to_string).collect();
    out.push_str(&format!(
        "Stores: {}\n",
        if stores.is_empty() { "(none)".to_string() } else { stores.join(", ") }
    ));
    out.push_str(&format!("Window: {} .. {}\n", selection.start, selection.end));

    let stats = view_stats(view);
    out.push_str(&format!(
        "Weeks: n={} | with actuals={} | predicted=[{}, {}]\n",
        stats.n_records,
        stats.n_with_actuals,
        fmt_opt_sales(stats.predicted_min),
        fmt_opt_sales(stats.predicted_max),
    ));
    if selection.highlight_holidays {
        out.push_str(&format!("Holiday weeks: {}\n", stats.n_holidays));
    }

    out
}

fn format_load_line(label: &str, report: &LoadReport) -> String {
    format!(
        "{label}: {} | rows={} used={} skipped={} degraded={}\n",
        report.source,
        report.rows_read,
        report.rows_used,
        report.row_errors.len(),
        report.row_warnings.len()
    )
}

/// Format the reconciled rows; absent actuals print as `-`.
pub fn format_reconciled_table(records: &[ReconciledRecord]) -> String {
    let mut out = String::new();
    push_trimmed(
        &mut out,
        format!("{:<10} {:<10} {:>14} {:>14} {:>12}", "store", "date", "predicted", "actual", "diff"),
    );
    push_trimmed(&mut out, format!("{:-<10} {:-<10} {:-<14} {:-<14} {:-<12}", "", "", "", "", ""));

    if records.is_empty() {
        out.push_str("(no rows for this selection)\n");
        return out;
    }

    for r in records {
        let diff = r.actual_sales.map(|a| a - r.predicted_sales);
        push_trimmed(
            &mut out,
            format!(
                "{:<10} {:<10} {:>14} {:>14} {:>12}",
                truncate(r.store.as_str(), 10),
                r.date,
                fmt_sales(r.predicted_sales),
                fmt_opt_sales(r.actual_sales),
                fmt_opt_sales(diff),
            ),
        );
    }

    out
}

/// Format the holiday weeks table, sorted by store then date.
pub fn format_holiday_table(holidays: &[HolidayMark]) -> String {
    let mut rows = holidays.to_vec();
    rows.sort();

    let mut out = String::new();
    push_trimmed(&mut out, format!("{:<10} {:<10}", "store", "date"));
    push_trimmed(&mut out, format!("{:-<10} {:-<10}", "", ""));
    if rows.is_empty() {
        out.push_str("(no holiday weeks for the selected stores)\n");
    }
    for h in &rows {
        push_trimmed(&mut out, format!("{:<10} {:<10}", truncate(h.store.as_str(), 10), h.date));
    }
    out
}

/// List known stores plus the forecast date range.
pub fn format_store_list(datasets: &Datasets) -> String {
    let bounds = datasets.bounds();
    let mut out = String::new();
    out.push_str(&format!("Forecast dates: {} .. {}\n", bounds.min, bounds.max));
    out.push_str(&format!("Stores ({}):\n", datasets.stores().len()));
    for store in datasets.stores() {
        out.push_str(&format!("  {store}\n"));
    }
    out
}

pub fn fmt_sales(v: f64) -> String {
    format!("{v:.2}")
}

pub fn fmt_opt_sales(v: Option<f64>) -> String {
    v.map(fmt_sales).unwrap_or_else(|| "-".to_string())
}

fn push_trimmed(out: &mut String, line: String) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoreId;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2012, 1, day).unwrap()
    }

    #[test]
    fn reconciled_table_marks_absent_actuals() {
        let records = vec![
            ReconciledRecord {
                store: StoreId::from("1"),
                date: d(6),
                predicted_sales: 20000.0,
                actual_sales: Some(19500.0),
            },
            ReconciledRecord {
                store: StoreId::from("1"),
                date: d(13),
                predicted_sales: 21000.0,
                actual_sales: None,
            },
        ];

        let table = format_reconciled_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].contains("19500.00"));
        assert!(lines[2].ends_with("-500.00"));
        assert!(lines[3].starts_with("1          2012-01-13"));
        assert!(lines[3].ends_with('-'));
    }

    #[test]
    fn empty_tables_say_so() {
        assert!(format_reconciled_table(&[]).contains("no rows"));
        assert!(format_holiday_table(&[]).contains("no holiday weeks"));
    }

    #[test]
    fn holiday_table_is_sorted() {
        let marks = vec![
            HolidayMark {
                store: StoreId::from("2"),
                date: d(6),
            },
            HolidayMark {
                store: StoreId::from("1"),
                date: d(13),
            },
        ];
        let table = format_holiday_table(&marks);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "1          2012-01-13");
        assert_eq!(lines[3], "2          2012-01-06");
    }

    #[test]
    fn truncate_long_store_ids() {
        assert_eq!(truncate("abcdefghijkl", 5), "abcd.");
        assert_eq!(truncate("abc", 5), "abc");
    }
}
