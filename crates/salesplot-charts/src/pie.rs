//! # Quantity Share Pie
//!
//! One slice per product sized by total quantity, labeled with the product
//! name outside the slice and its share (one decimal) inside.
//!
//! ```text
//!            Product B
//!          ╭─────────╮
//!        ╱   22.2%  ╱ ╲
//!       │    ╭─────╯   │   slices start at 140° and run
//!       │   ╱  77.8%   │   counter-clockwise
//!        ╲ ╱          ╱
//!          ╰─────────╯
//!            Product A
//! ```

use std::path::Path;

use plotters::prelude::*;
use salesplot_core::{quantity_shares, AggregateRow};

use crate::artifact::ChartKind;
use crate::error::DrawResult;
use crate::style::{centered_style, FONT, PAIRED, PIE_CHART_SIZE};

/// Angle of the first slice's leading edge, degrees counter-clockwise from 3 o'clock.
pub const START_ANGLE: f64 = 140.0;

/// Arc points per full turn when approximating a slice as a polygon.
const ARC_STEPS: f64 = 360.0;

/// Angular extent of one slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceSpan {
    pub product: String,
    /// Degrees, counter-clockwise from 3 o'clock.
    pub start: f64,
    pub sweep: f64,
    /// Share label, e.g. `77.8%`.
    pub label: String,
}

impl SliceSpan {
    pub fn mid_angle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// Lays out the slices for `rows`. Sweeps always add up to 360°.
pub fn slice_spans(rows: &[AggregateRow]) -> Vec<SliceSpan> {
    let total: i64 = rows.iter().map(|r| r.total_qty).sum();
    if total <= 0 {
        return Vec::new();
    }

    let mut start = START_ANGLE;
    rows.iter()
        .zip(quantity_shares(rows))
        .map(|(row, share)| {
            let sweep = 360.0 * row.total_qty as f64 / total as f64;
            let span = SliceSpan {
                product: row.product.clone(),
                start,
                sweep,
                label: share.label(),
            };
            start += sweep;
            span
        })
        .collect()
}

fn polar(center: (i32, i32), radius: f64, degrees: f64) -> (i32, i32) {
    let radians = degrees.to_radians();
    (
        center.0 + (radius * radians.cos()).round() as i32,
        // Screen y grows downwards.
        center.1 - (radius * radians.sin()).round() as i32,
    )
}

fn slice_polygon(center: (i32, i32), radius: f64, span: &SliceSpan) -> Vec<(i32, i32)> {
    let steps = ((span.sweep / 360.0) * ARC_STEPS).ceil().max(1.0) as usize;

    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for step in 0..=steps {
        let angle = span.start + span.sweep * step as f64 / steps as f64;
        points.push(polar(center, radius, angle));
    }
    points
}

pub fn draw_quantity_pie(path: &Path, rows: &[AggregateRow]) -> DrawResult {
    let root = SVGBackend::new(path, PIE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let area = root.titled(ChartKind::QuantityPie.title(), (FONT, 22))?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.34;

    let spans = slice_spans(rows);

    for (i, span) in spans.iter().enumerate() {
        let color = PAIRED[i % PAIRED.len()];
        area.draw(&Polygon::new(
            slice_polygon(center, radius, span),
            color.filled(),
        ))?;
    }

    for span in &spans {
        let name_at = polar(center, radius * 1.15, span.mid_angle());
        area.draw(&Text::new(span.product.clone(), name_at, centered_style(15)))?;

        let share_at = polar(center, radius * 0.6, span.mid_angle());
        area.draw(&Text::new(span.label.clone(), share_at, centered_style(14)))?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<AggregateRow> {
        vec![
            AggregateRow::new("A", 7, 140.0),
            AggregateRow::new("B", 2, 40.0),
        ]
    }

    #[test]
    fn test_slice_spans_cover_full_turn() {
        let spans = slice_spans(&rows());

        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].start, START_ANGLE);
        assert!((spans[0].sweep - 280.0).abs() < 1e-9);
        assert!((spans[1].start - (START_ANGLE + 280.0)).abs() < 1e-9);

        let total: f64 = spans.iter().map(|s| s.sweep).sum();
        assert!((total - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_slice_labels_use_one_decimal_share() {
        let labels: Vec<String> = slice_spans(&rows()).into_iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["77.8%", "22.2%"]);
    }

    #[test]
    fn test_no_slices_for_empty_rows() {
        assert!(slice_spans(&[]).is_empty());
    }

    #[test]
    fn test_polar_axes() {
        assert_eq!(polar((100, 100), 10.0, 0.0), (110, 100));
        assert_eq!(polar((100, 100), 10.0, 90.0), (100, 90));
    }

    #[test]
    fn test_slice_polygon_starts_at_center() {
        let span = &slice_spans(&rows())[1];
        let points = slice_polygon((50, 50), 20.0, span);

        assert_eq!(points[0], (50, 50));
        assert!(points.len() > 3);
    }

    #[test]
    fn test_pie_file_contains_labels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pie.svg");

        draw_quantity_pie(&path, &rows()).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("77.8%"));
        assert!(svg.contains("22.2%"));
        assert!(svg.contains("<polygon"));
    }
}
