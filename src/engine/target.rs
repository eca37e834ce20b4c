//! Scroll target calculation and per-line geometry measurement
//!
//! Computes the vertical offset that centers the current line within the
//! viewport. Measurement depends on the surface having completed layout, so
//! an unmeasurable result is an expected condition: callers retry on the next
//! frame rather than surfacing a failure.

use super::types::LineGeometry;

/// Measure per-line vertical centers from laid-out heights.
///
/// Lines stack top-down with `line_spacing` between them; each center is
/// relative to the top of the scrollable content.
pub fn measure_line_centers(line_heights: &[f32], line_spacing: f32) -> Vec<LineGeometry> {
    let mut centers = Vec::with_capacity(line_heights.len());
    let mut y = 0.0f32;
    for &height in line_heights {
        centers.push(LineGeometry {
            center_offset_px: y + height / 2.0,
        });
        y += height + line_spacing;
    }
    centers
}

/// Compute the offset that centers `index` within the viewport.
///
/// Returns `None` when the target cannot be measured yet: the surface has no
/// laid-out height, the index has no measured geometry, or the measurement is
/// not finite. The caller must not apply any intent in that case.
pub fn scroll_target(
    index: usize,
    centers: &[LineGeometry],
    viewport_height: f32,
) -> Option<f32> {
    if viewport_height <= 0.0 {
        return None;
    }
    let center = centers.get(index)?.center_offset_px;
    if !center.is_finite() {
        return None;
    }
    Some(viewport_height / 2.0 - center)
}
