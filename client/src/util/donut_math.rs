//! Segment geometry for SVG donut charts.
//!
//! The ring is a circle whose circumference is exactly 100 user units, so a
//! segment's `stroke-dasharray` is its percentage and the running offset
//! places it after the previous one, starting at twelve o'clock.

#[cfg(test)]
#[path = "donut_math_test.rs"]
mod donut_math_test;

use checkins::ChartSlice;

/// Radius giving a circumference of 100 (100 / 2π).
pub const DONUT_RADIUS: f64 = 15.915_494_309_189_533;
pub const DONUT_CENTER: f64 = 21.0;
pub const DONUT_STROKE_WIDTH: f64 = 5.0;

/// Rotates the first segment from three o'clock to twelve o'clock.
const START_OFFSET: f64 = 25.0;

pub const PALETTE: [&str; 8] = [
    "#fa114f", "#00a3e0", "#ffa400", "#4ad981", "#b388ff", "#2ec4b6", "#e6a23c", "#5b9bd5",
];

#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    pub label: String,
    pub value: f64,
    pub percent: f64,
    pub dasharray: String,
    pub dashoffset: f64,
    pub color: &'static str,
}

/// Segments for all positive slices; empty when nothing is positive.
pub fn donut_segments(slices: &[ChartSlice]) -> Vec<DonutSegment> {
    let total: f64 = slices.iter().map(|s| s.value).filter(|v| *v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut consumed = 0.0;
    slices
        .iter()
        .filter(|slice| slice.value > 0.0)
        .enumerate()
        .map(|(index, slice)| {
            let percent = slice.value / total * 100.0;
            let segment = DonutSegment {
                label: slice.label.clone(),
                value: slice.value,
                percent,
                dasharray: format!("{percent:.3} {:.3}", 100.0 - percent),
                dashoffset: START_OFFSET - consumed,
                color: PALETTE[index % PALETTE.len()],
            };
            consumed += percent;
            segment
        })
        .collect()
}

/// Center readout: integers without decimals, everything else to two places.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
