//! Plotters-powered sales chart widget for Ratatui.
//!
//! Why Plotters instead of Ratatui's built-in `Chart` widget?
//! - dashed line series for the predicted values
//! - nicer axis + tick rendering with custom (date) formatters
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// One polyline on the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub points: Vec<(f64, f64)>,
    pub color: (u8, u8, u8),
    pub dashed: bool,
}

/// A render-only chart description.
///
/// All series and bounds are computed outside the render call, so `render()`
/// only draws.
pub struct SalesPlottersChart<'a> {
    pub lines: &'a [ChartLine],
    /// Holiday marker positions (drawn last, on top of the lines).
    pub holidays: &'a [(f64, f64)],
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub fmt_x: fn(f64) -> String,
    pub fmt_y: fn(f64) -> String,
}

impl<'a> Widget for SalesPlottersChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Plotters may fail to lay out a chart in a tiny area; show a hint instead.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let [x0, x1] = self.x_bounds;
        let [y0, y1] = self.y_bounds;
        if !(x0.is_finite() && x1.is_finite() && y0.is_finite() && y1.is_finite()) || x1 <= x0 || y1 <= y0 {
            return;
        }

        let widget = widget_fn(move |root| {
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                // Terminal cells are low-res, so keep label areas compact.
                .set_label_area_size(LabelAreaPosition::Left, 9)
                .set_label_area_size(LabelAreaPosition::Bottom, 3)
                .build_cartesian_2d(x0..x1, y0..y1)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .disable_y_mesh()
                .x_desc(self.x_label)
                .y_desc(self.y_label)
                .x_labels(5)
                .y_labels(5)
                .x_label_formatter(&|v| (self.fmt_x)(*v))
                .y_label_formatter(&|v| (self.fmt_y)(*v))
                .label_style(("sans-serif", 10).into_font().color(&WHITE))
                .axis_style(&WHITE)
                .bold_line_style(&WHITE)
                .draw()?;

            for line in self.lines {
                let (r, g, b) = line.color;
                // `Color` here is ratatui's; the plotters trait is named explicitly.
                let style = plotters::style::Color::stroke_width(&RGBColor(r, g, b), 1);
                if line.dashed {
                    chart.draw_series(DashedLineSeries::new(line.points.iter().copied(), 3, 2, style))?;
                } else {
                    chart.draw_series(LineSeries::new(line.points.iter().copied(), style))?;
                }
            }

            // `Circle` radii are mapped incorrectly by the ratatui backend, so
            // holidays are drawn as red pixels.
            let holiday_color = RGBColor(255, 0, 0);
            chart.draw_series(self.holidays.iter().map(|&(x, y)| Pixel::new((x, y), holiday_color)))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted_cells(buf: &Buffer) -> usize {
        buf.content().iter().filter(|c| c.symbol() != " ").count()
    }

    #[test]
    fn renders_dashed_and_solid_lines_into_buffer() {
        let lines = vec![
            ChartLine {
                points: vec![(0.0, 1.0), (5.0, 4.0), (10.0, 2.0)],
                color: (0, 255, 255),
                dashed: true,
            },
            ChartLine {
                points: vec![(0.0, 2.0), (10.0, 3.0)],
                color: (255, 255, 0),
                dashed: false,
            },
        ];
        let holidays = vec![(5.0, 4.2)];
        let widget = SalesPlottersChart {
            lines: &lines,
            holidays: &holidays,
            x_bounds: [0.0, 10.0],
            y_bounds: [0.0, 5.0],
            x_label: "Date",
            y_label: "Weekly Sales",
            fmt_x: |v| format!("{v:.0}"),
            fmt_y: |v| format!("{v:.0}"),
        };

        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        assert!(painted_cells(&buf) > 0);
    }

    #[test]
    fn tiny_area_shows_hint() {
        let widget = SalesPlottersChart {
            lines: &[],
            holidays: &[],
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
            x_label: "Date",
            y_label: "Weekly Sales",
            fmt_x: |v| format!("{v}"),
            fmt_y: |v| format!("{v}"),
        };
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "C");
    }
}
