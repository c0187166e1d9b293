//! # Revenue vs Quantity
//!
//! Revenue bars on the left axis, quantity as a line with markers on the
//! right axis, sharing the product axis.

use std::path::Path;

use plotters::prelude::*;
use salesplot_core::AggregateRow;

use crate::artifact::ChartKind;
use crate::error::DrawResult;
use crate::style::{axis_max, product_label, product_range, COMBINED_CHART_SIZE, CORAL, FONT, NAVY};

pub fn draw_revenue_vs_quantity(path: &Path, rows: &[AggregateRow]) -> DrawResult {
    let root = SVGBackend::new(path, COMBINED_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let revenue_max = axis_max(rows.iter().map(|r| r.revenue));
    let quantity_max = axis_max(rows.iter().map(|r| r.total_qty as f64));

    let mut chart = ChartBuilder::on(&root)
        .caption(ChartKind::RevenueVsQuantity.title(), (FONT, 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .right_y_label_area_size(72)
        .build_cartesian_2d(product_range(rows.len()).into_segmented(), 0f64..revenue_max)?
        .set_secondary_coord(product_range(rows.len()).into_segmented(), 0f64..quantity_max);

    let x_formatter = |v: &SegmentValue<i32>| product_label(rows, v);
    let y_formatter = |v: &f64| format!("{v:.0}");

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_desc("Product")
        .y_desc("Revenue (₹)")
        .axis_desc_style((FONT, 16).into_font().color(&CORAL))
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_label_formatter(&y_formatter)
        .y_desc("Quantity")
        .axis_desc_style((FONT, 16).into_font().color(&NAVY))
        .draw()?;

    // Narrower bars than the single-metric chart so the line stays readable.
    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), 0.0),
                (SegmentValue::Exact(i as i32 + 1), row.revenue),
            ],
            CORAL.filled(),
        );
        bar.set_margin(0, 0, 24, 24);
        bar
    }))?;

    let quantity_points: Vec<(SegmentValue<i32>, f64)> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (SegmentValue::CenterOf(i as i32), row.total_qty as f64))
        .collect();

    chart.draw_secondary_series(LineSeries::new(
        quantity_points.iter().cloned(),
        NAVY.stroke_width(2),
    ))?;
    chart.draw_secondary_series(
        quantity_points
            .iter()
            .map(|point| Circle::new(point.clone(), 5, NAVY.filled())),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_chart_has_both_axes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("combined.svg");
        let rows = vec![
            AggregateRow::new("Product A", 7, 140.0),
            AggregateRow::new("Product B", 2, 40.0),
            AggregateRow::new("Product C", 12, 300.0),
        ];

        draw_revenue_vs_quantity(&path, &rows).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("Revenue (₹)"));
        assert!(svg.contains("Quantity"));
        assert!(svg.contains("<circle"));
    }
}
