//! Rectilinear ⇄ fisheye conversion of whole rasters.

use ndarray::{Array3, ArrayView3};

use super::engine;
use super::field::CoordinateField;
use super::plan::LensPlan;
use crate::error::WarpError;
use crate::params::{Direction, LensParams};
use crate::raster::Sample;

/// Treat `image` as rectilinear with field of view `params.pfov` and render
/// it under `params.mapping` with field of view `params.fov`.
pub fn apply<T: Sample>(image: &ArrayView3<'_, T>, params: &LensParams) -> Result<Array3<T>, WarpError> {
    transform(image, params, Direction::Apply)
}

/// Treat `image` as a `params.mapping` fisheye with field of view
/// `params.fov` and render it rectilinear with field of view `params.pfov`.
pub fn remove<T: Sample>(image: &ArrayView3<'_, T>, params: &LensParams) -> Result<Array3<T>, WarpError> {
    transform(image, params, Direction::Remove)
}

/// Convert `image` in either direction.
///
/// The output has the same `(rows, cols, channels)` shape as `image` and is
/// freshly allocated. Parameter errors are reported before any pixel is touched.
pub fn transform<T: Sample>(
    image: &ArrayView3<'_, T>,
    params: &LensParams,
    direction: Direction,
) -> Result<Array3<T>, WarpError> {
    let (rows, cols, _) = image.dim();
    if rows == 0 || cols == 0 {
        params.validate()?;
        return Ok(Array3::zeros(image.raw_dim()));
    }
    let field = coordinate_field(params, direction, (rows, cols))?;
    engine::remap(image, &field, params.method, params.border)
}

/// Source coordinates for every pixel of a `(rows, cols)` output.
pub fn coordinate_field(
    params: &LensParams,
    direction: Direction,
    shape: (usize, usize),
) -> Result<CoordinateField, WarpError> {
    let (rows, cols) = shape;
    let plan = LensPlan::new(direction, params, cols, rows)?;
    Ok(CoordinateField::generate(&plan, shape))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjError;
    use crate::proj::{Format, Mapping};

    #[test]
    fn test_shape_preserved() {
        let img = Array3::from_elem((30, 45, 3), 0.5_f32);
        let params = LensParams::default();
        assert_eq!(apply(&img.view(), &params).unwrap().dim(), (30, 45, 3));
        assert_eq!(remove(&img.view(), &params).unwrap().dim(), (30, 45, 3));
    }

    #[test]
    fn test_constant_gray_invariant() {
        let img = Array3::from_elem((100, 100, 3), 128u8);
        let params = LensParams::new(Mapping::Equidistant, Format::Circular, 180.0, 120.0);
        for out in [
            apply(&img.view(), &params).unwrap(),
            remove(&img.view(), &params).unwrap(),
        ] {
            assert_eq!(out, img);
        }
    }

    #[test]
    fn test_empty_image() {
        let img = Array3::<f32>::zeros((0, 12, 3));
        let out = remove(&img.view(), &LensParams::default()).unwrap();
        assert_eq!(out.dim(), (0, 12, 3));

        let bad = LensParams {
            fov: f64::INFINITY,
            ..LensParams::default()
        };
        assert!(matches!(
            remove(&img.view(), &bad),
            Err(WarpError::Projection(ProjError::InvalidParameter(_)))
        ));
    }

    #[test]
    fn test_zero_channels() {
        let img = Array3::<u8>::zeros((8, 8, 0));
        let out = apply(&img.view(), &LensParams::default()).unwrap();
        assert_eq!(out.dim(), (8, 8, 0));
    }

    #[test]
    fn test_entire_image_apply_keeps_inner_disk() {
        let img = Array3::from_shape_fn((100, 100, 1), |(r, c, _)| (r * 100 + c) as f64);
        let params = LensParams::new(Mapping::Equidistant, Format::Circular, 180.0, 120.0)
            .with_entire_image(true);
        let out = apply(&img.view(), &params).unwrap();

        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for row in 0..100 {
            for col in 0..100 {
                if (col as f64 - 50.0).hypot(row as f64 - 50.0) <= 25.0 {
                    lo = lo.min(out[(row, col, 0)]);
                    hi = hi.max(out[(row, col, 0)]);
                }
            }
        }
        assert!(hi - lo > 2500.0, "inner disk spans {lo}..{hi}");

        // Both sides share f = 50 / tan 60°, so radius 25 samples f·tan(25 / f).
        let f = 50.0 / 60f64.to_radians().tan();
        let expected = 5000.0 + 50.0 + f * (25.0 / f).tan();
        assert!((out[(50, 75, 0)] - expected).abs() < 1e-6);
    }

    #[test]
    fn test_field_shape() {
        let field = coordinate_field(&LensParams::default(), Direction::Apply, (7, 11)).unwrap();
        assert_eq!(field.shape(), (7, 11));
    }
}
