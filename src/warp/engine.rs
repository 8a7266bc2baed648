//! Inverse-mapping resampling engine.
//!
//! For each output pixel, reads the precomputed source coordinate from a
//! [`CoordinateField`] and samples every channel of the source raster there.

use ndarray::{Array3, ArrayView2, ArrayView3, Axis, Zip};

use super::field::CoordinateField;
use crate::error::WarpError;
use crate::raster::Sample;
use crate::resample::{BorderMode, ResamplingMethod};

/// Resample `src` at the coordinates of `field`.
///
/// # Arguments
/// * `src`: source raster `(rows, cols, channels)`, read-only
/// * `field`: source coordinates per output pixel; its shape is the output's
///   `(rows, cols)`
/// * `method`: resampling method
/// * `border`: policy for coordinates outside the source
///
/// The output has the field's shape and the source's channel count. Rows are
/// processed in parallel.
pub fn remap<T: Sample>(
    src: &ArrayView3<'_, T>,
    field: &CoordinateField,
    method: ResamplingMethod,
    border: BorderMode,
) -> Result<Array3<T>, WarpError> {
    let (dst_rows, dst_cols) = field.shape();
    if field.ys.dim() != (dst_rows, dst_cols) {
        return Err(WarpError::Shape(format!(
            "coordinate planes differ: xs {:?}, ys {:?}",
            field.xs.dim(),
            field.ys.dim()
        )));
    }
    let channels = src.len_of(Axis(2));
    let mut dst = Array3::<T>::zeros((dst_rows, dst_cols, channels));
    if dst.is_empty() {
        return Ok(dst);
    }
    let (src_rows, src_cols, _) = src.dim();
    if src_rows == 0 || src_cols == 0 {
        return Err(WarpError::Resampling(
            "cannot sample an empty source raster".into(),
        ));
    }

    let planes: Vec<ArrayView2<'_, T>> = src.axis_iter(Axis(2)).collect();
    let kernel = method.kernel::<T>();
    let fill = border.fill_value();

    Zip::from(dst.lanes_mut(Axis(2)))
        .and(&field.xs)
        .and(&field.ys)
        .par_for_each(|mut pixel, &x, &y| {
            for (out, plane) in pixel.iter_mut().zip(&planes) {
                *out = T::from_canonical(kernel(plane, x, y, border).unwrap_or(fill));
            }
        });

    Ok(dst)
}
