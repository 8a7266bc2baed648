//! Resampling kernels for the warp engine.
//!
//! Kernels take coordinates in pixel-index space: the center of pixel
//! `(row, col)` sits at `x = col`, `y = row`.

pub mod bilinear;
pub mod nearest;

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::raster::Sample;

/// Available resampling methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResamplingMethod {
    Nearest,
    #[default]
    Bilinear,
}

/// Signature shared by all kernels.
pub type Kernel<T> = fn(&ArrayView2<'_, T>, f64, f64, BorderMode) -> Option<f64>;

impl ResamplingMethod {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "nearest" => Some(Self::Nearest),
            "bilinear" => Some(Self::Bilinear),
            _ => None,
        }
    }

    /// The sampling function for this method.
    pub fn kernel<T: Sample>(&self) -> Kernel<T> {
        match self {
            Self::Nearest => nearest::sample::<T>,
            Self::Bilinear => bilinear::sample::<T>,
        }
    }
}

/// What a kernel reads for coordinates outside the source raster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderMode {
    /// Replicate the nearest edge pixel.
    #[default]
    Clamp,
    /// Fill with a constant value.
    Constant(f64),
}

impl BorderMode {
    /// Value written where a kernel yields nothing.
    pub fn fill_value(&self) -> f64 {
        match self {
            Self::Clamp => 0.0,
            Self::Constant(v) => *v,
        }
    }
}
