//! Bilinear interpolation resampling kernel.

use ndarray::ArrayView2;

use super::BorderMode;
use crate::raster::Sample;

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Sample a 2D array using bilinear interpolation.
///
/// Interpolates the 2×2 neighborhood around `(x, y)` as two horizontal
/// lerps followed by a vertical one, so a constant neighborhood is
/// reproduced exactly.
///
/// With `BorderMode::Clamp` the coordinate is clamped into
/// `[0, cols-1] × [0, rows-1]`; with `BorderMode::Constant` anything outside
/// that rectangle returns `None`. Non-finite coordinates, an empty array, or
/// a NaN neighbor also return `None`.
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

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(cols - 1);
    let y1 = (y0 + 1).min(rows - 1);

    let v00 = src[(y0, x0)].to_canonical();
    let v10 = src[(y0, x1)].to_canonical();
    let v01 = src[(y1, x0)].to_canonical();
    let v11 = src[(y1, x1)].to_canonical();

    if v00.is_nan() || v10.is_nan() || v01.is_nan() || v11.is_nan() {
        return None;
    }

    let dx = x - x0 as f64;
    let dy = y - y0 as f64;

    let top = lerp(v00, v10, dx);
    let bottom = lerp(v01, v11, dx);
    Some(lerp(top, bottom, dy))
}
