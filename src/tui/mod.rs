//! Ratatui-based terminal UI.
//!
//! The sidebar holds the filters (store multi-select, date window, holiday
//! toggle). Every change produces a new `ViewSelection` and the view is rebuilt
//! from scratch; the chart and holiday table only ever render that view.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState},
};

use crate::app::pipeline::Datasets;
use crate::domain::{DateBounds, StoreId, ViewSelection};
use crate::error::AppError;
use crate::view::{SalesView, store_series, view_stats};

mod plotters_chart;

use plotters_chart::{ChartLine, SalesPlottersChart};

/// Where `e` writes the current view.
const EXPORT_PATH: &str = "salesview_export.csv";

/// Rows moved per PgUp/PgDn in the holiday table.
const HOLIDAY_PAGE: i64 = 5;

/// Line colors, cycled per store.
const PALETTE: [(u8, u8, u8); 6] = [
    (0, 255, 255),
    (255, 255, 0),
    (0, 255, 0),
    (255, 0, 255),
    (100, 149, 237),
    (255, 165, 0),
];

/// Start the TUI.
pub fn run(datasets: Datasets, selection: ViewSelection) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(datasets, selection);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Stores,
    Start,
    End,
    Holidays,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Stores => Focus::Start,
            Focus::Start => Focus::End,
            Focus::End => Focus::Holidays,
            Focus::Holidays => Focus::Stores,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Stores => Focus::Holidays,
            Focus::Start => Focus::Stores,
            Focus::End => Focus::Start,
            Focus::Holidays => Focus::End,
        }
    }
}

struct App {
    datasets: Datasets,
    selection: ViewSelection,
    view: SalesView,
    focus: Focus,
    store_cursor: usize,
    /// First visible row of the holiday table.
    holiday_offset: usize,
    status: String,
}

impl App {
    fn new(datasets: Datasets, selection: ViewSelection) -> Self {
        let view = datasets.view(&selection);
        let status = format!(
            "Loaded {} forecast rows, {} actual rows.",
            datasets.forecast.records.len(),
            datasets.actuals.table.rows.len()
        );
        Self {
            datasets,
            selection,
            view,
            focus: Focus::Stores,
            store_cursor: 0,
            holiday_offset: 0,
            status,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100)).map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Left => self.adjust_date(-1),
            KeyCode::Right => self.adjust_date(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.activate(),
            KeyCode::Char('h') => self.toggle_holidays(),
            KeyCode::Char('a') => {
                self.selection.stores = self.datasets.stores().iter().cloned().collect();
                self.refresh("Selected all stores.");
            }
            KeyCode::Char('c') => {
                self.selection.stores.clear();
                self.refresh("Cleared store selection.");
            }
            KeyCode::Char('r') => {
                self.selection = self.datasets.default_selection();
                self.refresh("Reset filters.");
            }
            KeyCode::Char('e') => self.export(),
            KeyCode::PageDown => {
                self.holiday_offset = scroll_offset(self.holiday_offset, HOLIDAY_PAGE, self.view.holidays.len());
            }
            KeyCode::PageUp => {
                self.holiday_offset = scroll_offset(self.holiday_offset, -HOLIDAY_PAGE, self.view.holidays.len());
            }
            _ => {}
        }
        false
    }

    fn move_cursor(&mut self, delta: i32) {
        if self.focus != Focus::Stores {
            self.focus = if delta < 0 { self.focus.prev() } else { self.focus.next() };
            return;
        }
        let n = self.datasets.stores().len();
        if n == 0 {
            return;
        }
        self.store_cursor = if delta < 0 {
            self.store_cursor.saturating_sub(1)
        } else {
            (self.store_cursor + 1).min(n - 1)
        };
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Stores => {
                let Some(store) = self.datasets.stores().get(self.store_cursor).cloned() else {
                    return;
                };
                let msg = if self.selection.stores.remove(&store) {
                    format!("Removed store {store}.")
                } else {
                    self.selection.stores.insert(store.clone());
                    format!("Added store {store}.")
                };
                self.refresh(&msg);
            }
            Focus::Holidays => self.toggle_holidays(),
            Focus::Start | Focus::End => {}
        }
    }

    fn adjust_date(&mut self, weeks: i64) {
        let bounds = self.datasets.bounds();
        match self.focus {
            Focus::Start => {
                self.selection.start = step_weeks(self.selection.start, weeks, bounds);
                let msg = format!("start: {}", self.selection.start);
                self.refresh(&msg);
            }
            Focus::End => {
                self.selection.end = step_weeks(self.selection.end, weeks, bounds);
                let msg = format!("end: {}", self.selection.end);
                self.refresh(&msg);
            }
            Focus::Holidays => self.toggle_holidays(),
            Focus::Stores => {}
        }
    }

    fn toggle_holidays(&mut self) {
        self.selection.highlight_holidays = !self.selection.highlight_holidays;
        let msg = if self.selection.highlight_holidays {
            "Holiday highlighting on."
        } else {
            "Holiday highlighting off."
        };
        self.refresh(msg);
    }

    fn export(&mut self) {
        let path = PathBuf::from(EXPORT_PATH);
        self.status = match crate::io::export::write_view_csv(&path, &self.view.records) {
            Ok(()) => format!("Wrote {} rows to {}", self.view.records.len(), path.display()),
            Err(err) => format!("Export failed: {err}"),
        };
    }

    /// Rebuild the view from the current selection.
    fn refresh(&mut self, msg: &str) {
        self.view = self.datasets.view(&self.selection);
        self.holiday_offset = scroll_offset(self.holiday_offset, 0, self.view.holidays.len());
        self.status = if self.selection.is_empty() {
            format!("{msg} Nothing to show for this selection.")
        } else {
            msg.to_string()
        };
    }

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let stats = view_stats(&self.view);
        let mut lines = vec![Line::from(vec![
            Span::styled("salesview", Style::default().fg(Color::Cyan)),
            Span::raw(" - Retail Sales Forecast Dashboard"),
        ])];
        lines.push(Line::from(Span::styled(
            format!(
                "stores: {} | window: {} .. {} | weeks: {} | with actuals: {} | holidays: {}",
                self.selection.stores.len(),
                self.selection.start,
                self.selection.end,
                stats.n_records,
                stats.n_with_actuals,
                stats.n_holidays,
            ),
            Style::default().fg(Color::Gray),
        )));

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(0)])
            .split(area);

        let sidebar = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(columns[0]);
        self.draw_stores(frame, sidebar[0]);
        self.draw_filters(frame, sidebar[1]);

        let table_height = if self.selection.highlight_holidays { 9 } else { 0 };
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(table_height)])
            .split(columns[1]);
        self.draw_chart(frame, main[0]);
        if self.selection.highlight_holidays {
            self.draw_holiday_table(frame, main[1]);
        }
    }

    fn draw_stores(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .datasets
            .stores()
            .iter()
            .map(|s| {
                let checked = if self.selection.stores.contains(s) { "[x]" } else { "[ ]" };
                let color = store_color(self.datasets.stores(), s);
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{checked} ")),
                    Span::styled(format!("Store {s}"), Style::default().fg(rgb(color))),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(focus_block("Select Store(s)", self.focus == Focus::Stores))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(self.store_cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_filters(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let selected = Style::default().fg(Color::Black).bg(Color::White);
        let field = |focus: Focus, text: String| {
            if self.focus == focus {
                Line::from(Span::styled(format!("» {text}"), selected))
            } else {
                Line::from(format!("  {text}"))
            }
        };
        let lines = vec![
            field(Focus::Start, format!("From: {}", self.selection.start)),
            field(Focus::End, format!("To:   {}", self.selection.end)),
            field(
                Focus::Holidays,
                format!(
                    "[{}] Highlight Holidays",
                    if self.selection.highlight_holidays { "x" } else { " " }
                ),
            ),
        ];
        let focused = matches!(self.focus, Focus::Start | Focus::End | Focus::Holidays);
        let p = Paragraph::new(Text::from(lines)).block(focus_block("Filters", focused));
        frame.render_widget(p, area);
    }

    fn draw_chart(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default()
            .title("Predicted vs Actual Sales with Holidays")
            .borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(Clear, inner);

        if self.view.records.is_empty() {
            let msg = Paragraph::new("No forecast weeks for this selection.").style(Style::default().fg(Color::Yellow));
            frame.render_widget(msg, inner);
            return;
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        let data = chart_data(&self.view, &self.selection, self.datasets.stores());
        frame.render_widget(Paragraph::new(legend(&data.legend)), rows[0]);

        let widget = SalesPlottersChart {
            lines: &data.lines,
            holidays: &data.holidays,
            x_bounds: data.x_bounds,
            y_bounds: data.y_bounds,
            x_label: "Date",
            y_label: "Weekly Sales",
            fmt_x: fmt_axis_date,
            fmt_y: fmt_axis_sales,
        };
        frame.render_widget(widget, rows[1]);
    }

    fn draw_holiday_table(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let mut marks = self.view.holidays.clone();
        marks.sort();

        let rows: Vec<Row> = marks
            .iter()
            .map(|h| Row::new(vec![h.store.to_string(), h.date.to_string()]))
            .collect();
        let header = Row::new(vec!["Store", "Date"]).style(Style::default().add_modifier(Modifier::BOLD));
        let title = if marks.is_empty() {
            "Holiday Weeks (0)".to_string()
        } else {
            format!(
                "Holiday Weeks ({} from row {}, PgUp/PgDn)",
                marks.len(),
                self.holiday_offset + 1
            )
        };
        let table = Table::new(rows, [Constraint::Length(10), Constraint::Length(12)])
            .header(header)
            .block(Block::default().title(title).borders(Borders::ALL));
        let mut state = TableState::default().with_offset(self.holiday_offset);
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "Tab focus  ↑/↓ move  Space toggle  ←/→ ±1 week  h holidays  a all  c clear  r reset  e export  PgUp/PgDn holidays  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default().title(title).borders(Borders::ALL).border_style(style)
}

/// Move `date` by whole weeks, staying inside the forecast range.
fn step_weeks(date: NaiveDate, weeks: i64, bounds: DateBounds) -> NaiveDate {
    let moved = date
        .checked_add_signed(chrono::Duration::weeks(weeks))
        .unwrap_or(date);
    bounds.clamp(moved)
}

/// Move a table offset by `delta` rows, keeping at least the last row visible.
fn scroll_offset(offset: usize, delta: i64, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    (offset as i64 + delta).clamp(0, max) as usize
}

/// Everything the chart draws, precomputed from the view.
#[derive(Debug, Clone, PartialEq)]
struct ChartData {
    lines: Vec<ChartLine>,
    holidays: Vec<(f64, f64)>,
    legend: Vec<(StoreId, (u8, u8, u8), bool)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

fn chart_data(view: &SalesView, selection: &ViewSelection, known: &[StoreId]) -> ChartData {
    let mut lines = Vec::new();
    let mut legend = Vec::new();

    for store in &selection.stores {
        let series = store_series(&view.records, store);
        if series.predicted.is_empty() {
            continue;
        }
        let color = store_color(known, store);
        lines.push(ChartLine {
            points: series.predicted.iter().map(|&(d, v)| (date_x(d), v)).collect(),
            color,
            dashed: true,
        });
        for segment in &series.actual_segments {
            lines.push(ChartLine {
                points: segment.iter().map(|&(d, v)| (date_x(d), v)).collect(),
                color,
                dashed: false,
            });
        }
        legend.push((store.clone(), color, series.has_actuals()));
    }

    let stats = view_stats(view);
    let (mut x0, mut x1) = match (stats.first_date, stats.last_date) {
        (Some(first), Some(last)) => (date_x(first), date_x(last)),
        _ => (date_x(selection.start), date_x(selection.end)),
    };
    if x1 <= x0 {
        x0 -= 3.5;
        x1 += 3.5;
    }

    let holidays: Vec<(f64, f64)> = match view.marker_level {
        Some(level) => view
            .holidays
            .iter()
            .map(|h| date_x(h.date))
            .filter(|x| (x0..=x1).contains(x))
            .map(|x| (x, level))
            .collect(),
        None => Vec::new(),
    };

    let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &(_, y) in lines.iter().flat_map(|l| l.points.iter()).chain(holidays.iter()) {
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }
    if y_max <= y_min {
        y_min -= 1.0;
        y_max += 1.0;
    }
    let pad = (y_max - y_min).abs() * 0.05;

    ChartData {
        lines,
        holidays,
        legend,
        x_bounds: [x0, x1],
        y_bounds: [y_min - pad, y_max + pad],
    }
}

fn legend(entries: &[(StoreId, (u8, u8, u8), bool)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (store, color, has_actuals) in entries {
        let style = Style::default().fg(rgb(*color));
        spans.push(Span::styled(format!("- - Predicted {store}  "), style));
        if *has_actuals {
            spans.push(Span::styled(format!("── Actual {store}  "), style));
        }
    }
    spans.push(Span::styled("• Holiday", Style::default().fg(Color::Red)));
    Line::from(spans)
}

fn store_color(known: &[StoreId], store: &StoreId) -> (u8, u8, u8) {
    let idx = known.iter().position(|s| s == store).unwrap_or(0);
    PALETTE[idx % PALETTE.len()]
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Dates are plotted as days since the common era so ticks map back exactly.
fn date_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

fn fmt_axis_date(v: f64) -> String {
    NaiveDate::from_num_days_from_ce_opt(v.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn fmt_axis_sales(v: f64) -> String {
    if v.abs() >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v.abs() >= 1_000.0 {
        format!("{:.0}k", v / 1_000.0)
    } else {
        format!("{v:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HolidayMark, ReconciledRecord};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn rec(store: &str, date: NaiveDate, predicted: f64, actual: Option<f64>) -> ReconciledRecord {
        ReconciledRecord {
            store: StoreId::from(store),
            date,
            predicted_sales: predicted,
            actual_sales: actual,
        }
    }

    fn selection(stores: &[&str]) -> ViewSelection {
        ViewSelection {
            stores: stores.iter().map(|s| StoreId::from(*s)).collect(),
            start: d(2012, 1, 6),
            end: d(2012, 3, 30),
            highlight_holidays: true,
        }
    }

    #[test]
    fn step_weeks_stays_in_bounds() {
        let bounds = DateBounds {
            min: d(2012, 1, 6),
            max: d(2012, 3, 30),
        };
        assert_eq!(step_weeks(d(2012, 1, 6), 1, bounds), d(2012, 1, 13));
        assert_eq!(step_weeks(d(2012, 1, 6), -1, bounds), d(2012, 1, 6));
        assert_eq!(step_weeks(d(2012, 3, 30), 1, bounds), d(2012, 3, 30));
    }

    #[test]
    fn holiday_table_scrolls_within_rows() {
        assert_eq!(scroll_offset(0, HOLIDAY_PAGE, 12), 5);
        assert_eq!(scroll_offset(10, HOLIDAY_PAGE, 12), 11);
        assert_eq!(scroll_offset(3, -HOLIDAY_PAGE, 12), 0);
        assert_eq!(scroll_offset(8, 0, 4), 3);
        assert_eq!(scroll_offset(8, 0, 0), 0);
    }

    #[test]
    fn date_axis_round_trips_labels() {
        let date = d(2012, 2, 10);
        assert_eq!(fmt_axis_date(date_x(date)), "2012-02-10");
    }

    #[test]
    fn sales_axis_labels_are_compact() {
        assert_eq!(fmt_axis_sales(1_534_000.0), "1.5M");
        assert_eq!(fmt_axis_sales(21_400.0), "21k");
        assert_eq!(fmt_axis_sales(950.0), "950");
    }

    #[test]
    fn chart_omits_actual_line_when_absent() {
        let view = SalesView {
            records: vec![
                rec("1", d(2012, 1, 6), 100.0, Some(90.0)),
                rec("1", d(2012, 1, 13), 110.0, Some(95.0)),
                rec("2", d(2012, 1, 6), 200.0, None),
                rec("2", d(2012, 1, 13), 210.0, None),
            ],
            holidays: Vec::new(),
            marker_level: None,
        };
        let known = [StoreId::from("1"), StoreId::from("2")];

        let data = chart_data(&view, &selection(&["1", "2"]), &known);

        assert_eq!(data.lines.len(), 3);
        assert_eq!(data.lines.iter().filter(|l| l.dashed).count(), 2);
        assert_eq!(data.legend[1], (StoreId::from("2"), PALETTE[1], false));
        assert_eq!(data.x_bounds, [date_x(d(2012, 1, 6)), date_x(d(2012, 1, 13))]);
        assert!(data.y_bounds[0] < 90.0 && data.y_bounds[1] > 210.0);
    }

    #[test]
    fn holiday_markers_sit_at_marker_level_inside_window() {
        let view = SalesView {
            records: vec![rec("1", d(2012, 1, 6), 100.0, None), rec("1", d(2012, 2, 24), 120.0, None)],
            holidays: vec![
                HolidayMark {
                    store: StoreId::from("1"),
                    date: d(2012, 2, 10),
                },
                HolidayMark {
                    store: StoreId::from("1"),
                    date: d(2012, 11, 23),
                },
            ],
            marker_level: Some(126.0),
        };

        let data = chart_data(&view, &selection(&["1"]), &[StoreId::from("1")]);

        assert_eq!(data.holidays, vec![(date_x(d(2012, 2, 10)), 126.0)]);
        assert!(data.y_bounds[1] > 126.0);
    }

    #[test]
    fn single_week_view_gets_nonzero_x_range() {
        let view = SalesView {
            records: vec![rec("1", d(2012, 1, 6), 100.0, None)],
            holidays: Vec::new(),
            marker_level: None,
        };
        let data = chart_data(&view, &selection(&["1"]), &[StoreId::from("1")]);
        assert!(data.x_bounds[1] > data.x_bounds[0]);
        assert!(data.y_bounds[1] > data.y_bounds[0]);
    }
}
