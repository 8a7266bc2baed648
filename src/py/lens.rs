//! PyO3 bindings for apply / remove on numpy images.

use ndarray::ArrayD;
use numpy::{PyArrayDyn, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::params::{Direction, LensParams};
use crate::proj::{Format, Mapping};
use crate::raster::map_frames;
use crate::warp::lens;

fn build_params(
    mapping: &str,
    format: &str,
    fov: f64,
    pfov: f64,
    entire_image: bool,
    wcenter: f64,
    hcenter: f64,
) -> PyResult<LensParams> {
    let mapping = Mapping::from_name(mapping).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let format = Format::from_name(format).map_err(|e| PyValueError::new_err(e.to_string()))?;
    let params = LensParams::new(mapping, format, fov, pfov)
        .with_entire_image(entire_image)
        .with_center(wcenter, hcenter);
    params
        .validate()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(params)
}

fn run<'py>(
    py: Python<'py>,
    image: PyReadonlyArrayDyn<'py, f32>,
    params: LensParams,
    direction: Direction,
) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
    // Copy to owned before releasing the GIL
    let src: ArrayD<f32> = image.as_array().to_owned();

    let result = py
        .allow_threads(move || {
            map_frames(src.view(), |frame| lens::transform(frame, &params, direction))
        })
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    Ok(PyArrayDyn::from_owned_array(py, result))
}

/// Distort a rectilinear image into a fisheye projection.
///
/// Args:
///     image: float32 array shaped (H, W), (H, W, C) or (B, H, W, C).
///     mapping: "equidistant", "equisolid", "orthographic" or "stereographic".
///     format: "fullframe" or "circular".
///     fov: Fisheye field of view in degrees.
///     pfov: Field of view of the input image in degrees.
///     entire_image: Share one focal length so no corner goes uncovered.
///     wcenter: Optical center as a fraction of the width.
///     hcenter: Optical center as a fraction of the height.
///
/// Returns:
///     float32 array with the input's shape.
#[pyfunction]
#[pyo3(signature = (image, mapping="equidistant", format="fullframe", fov=180.0, pfov=120.0, entire_image=false, wcenter=0.5, hcenter=0.5))]
#[allow(clippy::too_many_arguments)]
pub fn apply_fisheye<'py>(
    py: Python<'py>,
    image: PyReadonlyArrayDyn<'py, f32>,
    mapping: &str,
    format: &str,
    fov: f64,
    pfov: f64,
    entire_image: bool,
    wcenter: f64,
    hcenter: f64,
) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
    let params = build_params(mapping, format, fov, pfov, entire_image, wcenter, hcenter)?;
    run(py, image, params, Direction::Apply)
}

/// Rectify a fisheye image.
///
/// Args:
///     image: float32 array shaped (H, W), (H, W, C) or (B, H, W, C).
///     mapping: Fisheye projection of the input image.
///     format: "fullframe" or "circular".
///     fov: Field of view of the input image in degrees.
///     pfov: Field of view of the rectified output in degrees.
///     entire_image: Share one focal length so no corner goes uncovered.
///     wcenter: Optical center as a fraction of the width.
///     hcenter: Optical center as a fraction of the height.
///
/// Returns:
///     float32 array with the input's shape.
#[pyfunction]
#[pyo3(signature = (image, mapping="equidistant", format="fullframe", fov=180.0, pfov=120.0, entire_image=false, wcenter=0.5, hcenter=0.5))]
#[allow(clippy::too_many_arguments)]
pub fn remove_fisheye<'py>(
    py: Python<'py>,
    image: PyReadonlyArrayDyn<'py, f32>,
    mapping: &str,
    format: &str,
    fov: f64,
    pfov: f64,
    entire_image: bool,
    wcenter: f64,
    hcenter: f64,
) -> PyResult<Bound<'py, PyArrayDyn<f32>>> {
    let params = build_params(mapping, format, fov, pfov, entire_image, wcenter, hcenter)?;
    run(py, image, params, Direction::Remove)
}
