//! Plotters-powered radar chart widget for Ratatui.
//!
//! Why Plotters instead of hand-drawing into the terminal buffer?
//! - float-coordinate line/polygon primitives do the geometry for us
//! - easy to extend later (per-axis coloring, exportable PNG/SVG backends)
//!
//! We render Plotters output into the Ratatui buffer using
//! `plotters-ratatui-backend`.

use plotters::prelude::*;
use plotters_ratatui_backend::widget_fn;
// Ratatui's style types are referenced by full path below: its `Color` type
// would otherwise shadow the Plotters `Color` trait this module leans on.
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::domain::{AXIS_SCALE_MAX, Axis};

/// Fractions of the full radius where grid rings are drawn.
const RING_FRACTIONS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// A lightweight, render-only radar chart description.
///
/// The widget is intentionally data-driven: the five values arrive in fixed
/// axis order and all geometry is derived in the render call. Interpretation
/// happens upstream; this type only draws.
pub struct RadarChart {
    /// Axis values in `Axis::ALL` order.
    pub values: [f64; 5],
}

impl Widget for RadarChart {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 8 {
            buf.set_string(
                area.x,
                area.y,
                "Chart area too small (resize terminal).",
                ratatui::style::Style::default().fg(ratatui::style::Color::Yellow),
            );
            return;
        }

        // The radial scale follows the suggested maximum but stretches when
        // a payload exceeds it, so the polygon always fits the rings.
        let r_max = self.values.iter().copied().fold(AXIS_SCALE_MAX, f64::max);

        let widget = widget_fn(move |root| {
            // A plain cartesian viewport slightly larger than the unit
            // circle; the extra horizontal room keeps the axis labels inside
            // the drawing area. No mesh or axes: a radar chart carries its
            // own grid.
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .build_cartesian_2d(-1.45..1.45, -1.3..1.3)?;

            let grid_color = RGBColor(128, 128, 128);
            let data_color = RGBColor(255, 106, 165);

            // 1) Grid rings at fixed fractions of the radius.
            for fraction in RING_FRACTIONS {
                chart.draw_series(LineSeries::new(ring_points(fraction), &grid_color))?;
            }

            // 2) Spokes, one per axis.
            for i in 0..Axis::ALL.len() {
                let tip = vertex(i, 1.0);
                chart.draw_series(LineSeries::new(vec![(0.0, 0.0), tip], &grid_color))?;
            }

            // 3) Data polygon: translucent fill plus a solid outline.
            let points: Vec<(f64, f64)> = self
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| vertex(i, (v / r_max).clamp(0.0, 1.0)))
                .collect();
            chart.draw_series(std::iter::once(Polygon::new(
                points.clone(),
                data_color.mix(0.25).filled(),
            )))?;
            let mut outline = points.clone();
            outline.push(points[0]);
            chart.draw_series(LineSeries::new(outline, &data_color))?;

            // 4) Axis labels just outside each vertex.
            for (i, axis) in Axis::ALL.iter().enumerate() {
                let pos = vertex(i, 1.14);
                chart.draw_series(std::iter::once(Text::new(
                    axis.wire_name().to_string(),
                    pos,
                    ("sans-serif", 10).into_font().color(&WHITE),
                )))?;
            }

            Ok(())
        });

        widget.render(area, buf);
    }
}

/// Unit-circle vertex for axis `i`, scaled by `r`.
///
/// Axis 0 points straight up; the rest proceed clockwise, matching the
/// fixed display order.
fn vertex(i: usize, r: f64) -> (f64, f64) {
    let step = std::f64::consts::TAU / Axis::ALL.len() as f64;
    let angle = std::f64::consts::FRAC_PI_2 - step * i as f64;
    (r * angle.cos(), r * angle.sin())
}

fn ring_points(fraction: f64) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = (0..Axis::ALL.len())
        .map(|i| vertex(i, fraction))
        .collect();
    points.push(points[0]);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_zero_points_up() {
        let (x, y) = vertex(0, 1.0);
        assert!(x.abs() < 1e-12);
        assert!((y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn vertices_stay_on_the_requested_radius() {
        for i in 0..Axis::ALL.len() {
            let (x, y) = vertex(i, 0.5);
            let r = (x * x + y * y).sqrt();
            assert!((r - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn ring_is_closed() {
        let ring = ring_points(1.0);
        assert_eq!(ring.len(), Axis::ALL.len() + 1);
        assert_eq!(ring.first(), ring.last());
    }
}
