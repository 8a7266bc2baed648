//! Transform parameters.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ProjError;
use crate::proj::{Format, Mapping};
use crate::resample::{BorderMode, ResamplingMethod};

/// Which way a transform converts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Rectilinear input, fisheye output.
    Apply,
    /// Fisheye input, rectilinear output.
    Remove,
}

/// Parameters of a lens conversion.
///
/// `fov` always belongs to the fisheye side and `pfov` to the rectilinear
/// side, whichever direction the conversion runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensParams {
    /// Fisheye projection family.
    pub mapping: Mapping,
    /// Framing convention used to calibrate both sides.
    pub format: Format,
    /// Fisheye field of view in degrees.
    pub fov: f64,
    /// Rectilinear field of view in degrees.
    pub pfov: f64,
    /// Put both sides on one focal length so no source corner goes unsampled
    /// and no output corner goes unfilled.
    pub entire_image: bool,
    /// Horizontal position of the optical center as a fraction of the width.
    pub wcenter: f64,
    /// Vertical position of the optical center as a fraction of the height.
    pub hcenter: f64,
    /// Kernel used to read source pixels.
    pub method: ResamplingMethod,
    /// What the kernel reads for coordinates outside the source frame.
    pub border: BorderMode,
}

impl Default for LensParams {
    fn default() -> Self {
        Self {
            mapping: Mapping::Equidistant,
            format: Format::Fullframe,
            fov: 180.0,
            pfov: 120.0,
            entire_image: false,
            wcenter: 0.5,
            hcenter: 0.5,
            method: ResamplingMethod::Bilinear,
            border: BorderMode::Clamp,
        }
    }
}

impl LensParams {
    pub fn new(mapping: Mapping, format: Format, fov: f64, pfov: f64) -> Self {
        Self {
            mapping,
            format,
            fov,
            pfov,
            ..Self::default()
        }
    }

    pub fn with_entire_image(mut self, entire_image: bool) -> Self {
        self.entire_image = entire_image;
        self
    }

    pub fn with_center(mut self, wcenter: f64, hcenter: f64) -> Self {
        self.wcenter = wcenter;
        self.hcenter = hcenter;
        self
    }

    pub fn with_method(mut self, method: ResamplingMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_border(mut self, border: BorderMode) -> Self {
        self.border = border;
        self
    }

    /// Reject values no clamping can give a meaning to.
    pub fn validate(&self) -> Result<(), ProjError> {
        for (name, value) in [
            ("fov", self.fov),
            ("pfov", self.pfov),
            ("wcenter", self.wcenter),
            ("hcenter", self.hcenter),
        ] {
            if !value.is_finite() {
                return Err(ProjError::InvalidParameter(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if let BorderMode::Constant(v) = self.border {
            if v.is_nan() {
                return Err(ProjError::InvalidParameter(
                    "constant border value must not be NaN".into(),
                ));
            }
        }
        Ok(())
    }

    /// Optical center in pixel coordinates, with the fractions clamped into `[0, 1]`.
    pub fn center(&self, width: usize, height: usize) -> (f64, f64) {
        let wc = self.wcenter.clamp(0.0, 1.0);
        let hc = self.hcenter.clamp(0.0, 1.0);
        if wc != self.wcenter || hc != self.hcenter {
            warn!(
                wcenter = self.wcenter,
                hcenter = self.hcenter,
                "optical center outside the frame, clamped"
            );
        }
        (width as f64 * wc, height as f64 * hc)
    }
}
