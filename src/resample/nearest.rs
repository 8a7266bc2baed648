//! Nearest-neighbor resampling kernel.

use ndarray::ArrayView2;

use super::BorderMode;
use crate::raster::Sample;

/// Sample a 2D array using nearest-neighbor interpolation.
///
/// Pixel centers sit at integer coordinates, so the nearest pixel is found
/// by rounding. Border handling matches [`super::bilinear::sample`].
pub fn sample<T: Sample>(src: &ArrayView2<'_, T>, x: f64, y: f64, border: BorderMode) -> Option<f64> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    let (rows, cols) = src.dim();
    if rows == 0 || cols == 0 {
        return None;
    }

    let max_x = (cols - 1) as f64;
    let max_y = (rows - 1) as f64;
    let (x, y) = match border {
        BorderMode::Clamp => (x.clamp(0.0, max_x), y.clamp(0.0, max_y)),
        BorderMode::Constant(_) => {
            if x < 0.0 || x > max_x || y < 0.0 || y > max_y {
                return None;
            }
            (x, y)
        }
    };

    let col = (x.round() as usize).min(cols - 1);
    let row = (y.round() as usize).min(rows - 1);

    let val = src[(row, col)].to_canonical();
    if val.is_nan() {
        return None;
    }
    Some(val)
}
