//! Shared chart styling and the categorical product axis.

use std::ops::Range;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontStyle;
use salesplot_core::AggregateRow;

pub(crate) const FONT: &str = "sans-serif";

pub(crate) const BAR_CHART_SIZE: (u32, u32) = (800, 500);
pub(crate) const COMBINED_CHART_SIZE: (u32, u32) = (1000, 600);
pub(crate) const PIE_CHART_SIZE: (u32, u32) = (600, 600);

pub(crate) const MEDIUM_SEA_GREEN: RGBColor = RGBColor(60, 179, 113);
pub(crate) const STEEL_BLUE: RGBColor = RGBColor(70, 130, 180);
pub(crate) const CORAL: RGBColor = RGBColor(255, 127, 80);
pub(crate) const NAVY: RGBColor = RGBColor(0, 0, 128);

/// Qualitative "Paired" palette for pie slices.
pub(crate) const PAIRED: [RGBColor; 12] = [
    RGBColor(166, 206, 227),
    RGBColor(31, 120, 180),
    RGBColor(178, 223, 138),
    RGBColor(51, 160, 44),
    RGBColor(251, 154, 153),
    RGBColor(227, 26, 28),
    RGBColor(253, 191, 111),
    RGBColor(255, 127, 0),
    RGBColor(202, 178, 214),
    RGBColor(106, 61, 154),
    RGBColor(255, 255, 153),
    RGBColor(177, 89, 40),
];

/// Discrete x range with one segment per product.
///
/// Integer ranges are inclusive as discrete coordinates, so `0..n-1` has
/// exactly `n` segments. A single product gets `0..1` to keep the axis
/// from collapsing to a point.
pub(crate) fn product_range(count: usize) -> Range<i32> {
    0..(count as i32 - 1).max(1)
}

/// Product name for an axis key point.
pub(crate) fn product_label(rows: &[AggregateRow], value: &SegmentValue<i32>) -> String {
    match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => usize::try_from(*i)
            .ok()
            .and_then(|i| rows.get(i))
            .map(|row| row.product.clone())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

/// Top of a value axis with headroom for the labels above the bars.
pub(crate) fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0_f64, f64::max);
    if max <= 0.0 {
        1.0
    } else {
        max * 1.15
    }
}

/// Bold label centered horizontally, sitting on its anchor point.
pub(crate) fn value_label_style() -> TextStyle<'static> {
    TextStyle::from((FONT, 14, FontStyle::Bold).into_font())
        .pos(Pos::new(HPos::Center, VPos::Bottom))
}

/// Label centered on its anchor point.
pub(crate) fn centered_style(size: u32) -> TextStyle<'static> {
    TextStyle::from((FONT, size).into_font()).pos(Pos::new(HPos::Center, VPos::Center))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_range_has_one_segment_per_product() {
        assert_eq!(product_range(5), 0..4);
        assert_eq!(product_range(2), 0..1);
        assert_eq!(product_range(1), 0..1);
    }

    #[test]
    fn test_product_label() {
        let rows = vec![
            AggregateRow::new("Product A", 1, 15.0),
            AggregateRow::new("Product B", 2, 30.0),
        ];

        assert_eq!(product_label(&rows, &SegmentValue::CenterOf(1)), "Product B");
        assert_eq!(product_label(&rows, &SegmentValue::Exact(0)), "Product A");
        assert_eq!(product_label(&rows, &SegmentValue::CenterOf(2)), "");
        assert_eq!(product_label(&rows, &SegmentValue::Last), "");
    }

    #[test]
    fn test_axis_max_headroom() {
        assert!((axis_max([100.0, 200.0].into_iter()) - 230.0).abs() < 1e-9);
        assert_eq!(axis_max(std::iter::empty()), 1.0);
    }
}
