//! # Bar Charts
//!
//! One bar per product with its value printed just above the bar top.

use std::path::Path;

use plotters::prelude::*;
use salesplot_core::summary::format_revenue;
use salesplot_core::AggregateRow;

use crate::artifact::ChartKind;
use crate::error::DrawResult;
use crate::style::{
    axis_max, product_label, product_range, value_label_style, BAR_CHART_SIZE, FONT,
    MEDIUM_SEA_GREEN, STEEL_BLUE,
};

/// Gap between a bar top and its label, as a fraction of the axis height.
const LABEL_GAP: f64 = 0.01;

struct BarStyle<'a> {
    kind: ChartKind,
    y_desc: &'a str,
    color: RGBColor,
}

/// Revenue per product, labeled like `₹1240`.
pub fn draw_revenue_bars(path: &Path, rows: &[AggregateRow]) -> DrawResult {
    let style = BarStyle {
        kind: ChartKind::RevenueBar,
        y_desc: "Revenue (₹)",
        color: MEDIUM_SEA_GREEN,
    };
    draw_bars(path, rows, &style, |row| row.revenue, |row| format_revenue(row.revenue))
}

/// Total quantity per product, labeled with the integer value.
pub fn draw_quantity_bars(path: &Path, rows: &[AggregateRow]) -> DrawResult {
    let style = BarStyle {
        kind: ChartKind::QuantityBar,
        y_desc: "Quantity",
        color: STEEL_BLUE,
    };
    draw_bars(
        path,
        rows,
        &style,
        |row| row.total_qty as f64,
        |row| row.total_qty.to_string(),
    )
}

fn draw_bars(
    path: &Path,
    rows: &[AggregateRow],
    style: &BarStyle<'_>,
    value: impl Fn(&AggregateRow) -> f64,
    label: impl Fn(&AggregateRow) -> String,
) -> DrawResult {
    let root = SVGBackend::new(path, BAR_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let y_max = axis_max(rows.iter().map(&value));

    let mut chart = ChartBuilder::on(&root)
        .caption(style.kind.title(), (FONT, 24))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(product_range(rows.len()).into_segmented(), 0f64..y_max)?;

    let x_formatter = |v: &SegmentValue<i32>| product_label(rows, v);
    let y_formatter = |v: &f64| format!("{v:.0}");

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter)
        .x_desc("Product")
        .y_desc(style.y_desc)
        .axis_desc_style((FONT, 16))
        .draw()?;

    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        let mut bar = Rectangle::new(
            [
                (SegmentValue::Exact(i as i32), 0.0),
                (SegmentValue::Exact(i as i32 + 1), value(row)),
            ],
            style.color.filled(),
        );
        bar.set_margin(0, 0, 12, 12);
        bar
    }))?;

    let gap = y_max * LABEL_GAP;
    chart.draw_series(rows.iter().enumerate().map(|(i, row)| {
        Text::new(
            label(row),
            (SegmentValue::CenterOf(i as i32), value(row) + gap),
            value_label_style(),
        )
    }))?;

    root.present()?;
    Ok(())
}
