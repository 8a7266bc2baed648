//! Rectilinear ⇄ fisheye image conversion.
//!
//! [`apply`] renders a rectilinear image under one of four fisheye
//! projections; [`remove`] rectifies a fisheye image. Both are pure
//! functions of the input raster and [`LensParams`].

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;
pub mod params;
pub mod proj;
pub mod raster;
pub mod resample;
pub mod warp;
#[cfg(feature = "python")]
mod py;

pub use error::{ProjError, WarpError};
pub use params::{Direction, LensParams};
pub use proj::{Format, Mapping};
pub use raster::Sample;
pub use resample::{BorderMode, ResamplingMethod};
pub use warp::{apply, remove};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn fisheye_warp(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
