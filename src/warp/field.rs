//! Per-pixel source coordinates for a lens conversion.

use ndarray::{Array2, Zip};

use super::plan::LensPlan;

/// For every output pixel, the fractional source coordinate to sample.
///
/// `xs[(row, col)]` and `ys[(row, col)]` are in pixel-index space of the
/// source raster.
#[derive(Clone, Debug)]
pub struct CoordinateField {
    pub xs: Array2<f64>,
    pub ys: Array2<f64>,
}

impl CoordinateField {
    /// Evaluate `plan` at every pixel of a `(rows, cols)` grid, rows in parallel.
    pub fn generate(plan: &LensPlan, shape: (usize, usize)) -> Self {
        let mut xs = Array2::zeros(shape);
        let mut ys = Array2::zeros(shape);

        Zip::indexed(&mut xs)
            .and(&mut ys)
            .par_for_each(|(row, col), x, y| {
                let (sx, sy) = plan.source_coord(col as f64, row as f64);
                *x = sx;
                *y = sy;
            });

        Self { xs, ys }
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        self.xs.dim()
    }

    /// Source coordinate `(x, y)` for output pixel `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> (f64, f64) {
        (self.xs[(row, col)], self.ys[(row, col)])
    }
}
