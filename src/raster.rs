//! Raster boundary: channel sample types and frame/batch handling.
//!
//! A raster is an `(height, width, channels)` array. Pixel values are
//! interpolated in `f64` and converted back to the caller's sample type.

use ndarray::{Array3, Array4, ArrayD, ArrayView3, ArrayViewD, Axis, Ix2, Ix3, Ix4};
use num_traits::Zero;

use crate::error::WarpError;

/// A channel sample type a raster can hold.
pub trait Sample: Copy + Send + Sync + Zero + 'static {
    fn to_canonical(self) -> f64;

    /// Integer types round to nearest and saturate to their range.
    fn from_canonical(v: f64) -> Self;
}

macro_rules! impl_int_sample {
    ($($t:ty),*) => {
        $(
            impl Sample for $t {
                #[inline]
                fn to_canonical(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_canonical(v: f64) -> Self {
                    v.round().clamp(<$t>::MIN as f64, <$t>::MAX as f64) as $t
                }
            }
        )*
    };
}

impl_int_sample!(u8, u16);

impl Sample for f32 {
    #[inline]
    fn to_canonical(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_canonical(v: f64) -> Self {
        v as f32
    }
}

impl Sample for f64 {
    #[inline]
    fn to_canonical(self) -> f64 {
        self
    }

    #[inline]
    fn from_canonical(v: f64) -> Self {
        v
    }
}

/// Apply a per-frame operation to an image of rank 2 (H×W), 3 (H×W×C) or
/// 4 (B×H×W×C), returning an array of the same rank.
///
/// Every frame of a batch is processed; each result must keep its frame's shape.
pub fn map_frames<T, F>(image: ArrayViewD<'_, T>, op: F) -> Result<ArrayD<T>, WarpError>
where
    T: Sample,
    F: Fn(&ArrayView3<'_, T>) -> Result<Array3<T>, WarpError>,
{
    let shape_err = |e: ndarray::ShapeError| WarpError::Shape(e.to_string());
    match image.ndim() {
        2 => {
            let frame = image.into_dimensionality::<Ix2>().map_err(shape_err)?;
            let frame = frame.insert_axis(Axis(2));
            let out = op(&frame)?;
            Ok(out.index_axis_move(Axis(2), 0).into_dyn())
        }
        3 => {
            let frame = image.into_dimensionality::<Ix3>().map_err(shape_err)?;
            Ok(op(&frame)?.into_dyn())
        }
        4 => {
            let batch = image.into_dimensionality::<Ix4>().map_err(shape_err)?;
            let mut out = Array4::<T>::zeros(batch.raw_dim());
            for (frame, mut dst) in batch.outer_iter().zip(out.outer_iter_mut()) {
                let result = op(&frame)?;
                if result.dim() != frame.dim() {
                    return Err(WarpError::Shape(format!(
                        "frame operation changed shape {:?} -> {:?}",
                        frame.dim(),
                        result.dim()
                    )));
                }
                dst.assign(&result);
            }
            Ok(out.into_dyn())
        }
        n => Err(WarpError::Shape(format!(
            "expected an image of 2, 3 or 4 dimensions, got {n}"
        ))),
    }
}
