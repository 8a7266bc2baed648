//! Focal-length calibration from a field of view and a reference dimension.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::catalog::RadialModel;
use crate::error::ProjError;

/// Smallest half-angle (radians) a field of view resolves to.
pub const MIN_HALF_ANGLE: f64 = 1e-6;

/// Smallest reference dimension (pixels) used for calibration.
pub const MIN_REFERENCE_DIM: f64 = 1.0;

/// Framing convention: which extent of the frame the field of view spans.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// The field of view spans the inscribed circle.
    Circular,
    /// The field of view spans the frame diagonal.
    #[default]
    Fullframe,
}

impl Format {
    /// Parse from a string name.
    pub fn from_name(s: &str) -> Result<Self, ProjError> {
        match s.to_lowercase().as_str() {
            "circular" => Ok(Self::Circular),
            "fullframe" => Ok(Self::Fullframe),
            _ => Err(ProjError::UnknownFormat(s.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Circular => "circular",
            Self::Fullframe => "fullframe",
        }
    }

    /// Pixel extent the field of view is calibrated against.
    pub fn reference_dimension(&self, width: usize, height: usize) -> f64 {
        match self {
            Self::Circular => width.min(height) as f64,
            Self::Fullframe => (width as f64).hypot(height as f64),
        }
    }
}

impl FromStr for Format {
    type Err = ProjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half of `fov_degrees` in radians, clamped into `[MIN_HALF_ANGLE, model.max_angle]`.
///
/// NaN resolves to `MIN_HALF_ANGLE`.
pub fn half_angle(model: &RadialModel, fov_degrees: f64) -> f64 {
    let half = fov_degrees.to_radians() / 2.0;
    if half.is_nan() {
        warn!(model = model.name, "field of view is NaN, using minimum");
        return MIN_HALF_ANGLE;
    }
    let clamped = half.clamp(MIN_HALF_ANGLE, model.max_angle);
    if clamped != half {
        warn!(
            model = model.name,
            fov = fov_degrees,
            resolved = (2.0 * clamped).to_degrees(),
            "field of view outside the projection domain, clamped"
        );
    }
    clamped
}

/// Focal length for which `model` at `half` reaches radius `dim / 2`.
pub fn focal_at(model: &RadialModel, half: f64, dim: f64) -> f64 {
    let dim = if dim >= MIN_REFERENCE_DIM {
        dim
    } else {
        warn!(dim, "reference dimension below minimum, clamped");
        MIN_REFERENCE_DIM
    };
    (dim / 2.0) / model.radius(half.max(MIN_HALF_ANGLE))
}

/// Focal length calibrated from a field of view in degrees.
pub fn focal_length(model: &RadialModel, fov_degrees: f64, dim: f64) -> f64 {
    focal_at(model, half_angle(model, fov_degrees), dim)
}
