//! Radial projection laws relating the angle from the optical axis to an
//! image-plane radius.
//!
//! Every law is stored at unit focal length as a pair of plain function
//! handles. `Mapping` indexes the fisheye table; the rectilinear (pinhole)
//! law lives beside it because it is the undistorted side of every transform.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProjError;

/// Distance kept from the pole of a tangent law.
const TANGENT_MARGIN: f64 = 1e-3;

/// A radially symmetric projection law.
#[derive(Clone, Copy, Debug)]
pub struct RadialModel {
    pub name: &'static str,
    radius: fn(f64) -> f64,
    angle: fn(f64) -> f64,
    /// Upper bound (radians) of the half-angle domain on which `radius` is
    /// strictly increasing and finite.
    pub max_angle: f64,
}

impl RadialModel {
    /// Clamp `theta` into `[0, max_angle]`.
    #[inline]
    pub fn clamp_angle(&self, theta: f64) -> f64 {
        theta.clamp(0.0, self.max_angle)
    }

    /// Radius at unit focal length: θ → ρ₁(θ).
    #[inline]
    pub fn radius(&self, theta: f64) -> f64 {
        (self.radius)(self.clamp_angle(theta))
    }

    /// Angle for a radius at unit focal length: ρ₁ → θ.
    ///
    /// Laws with a bounded range saturate at `max_angle`.
    #[inline]
    pub fn angle(&self, rho: f64) -> f64 {
        (self.angle)(rho.max(0.0))
    }

    /// Radius at focal length `focal`.
    #[inline]
    pub fn forward(&self, theta: f64, focal: f64) -> f64 {
        focal * self.radius(theta)
    }

    /// Angle for a radius measured at focal length `focal`.
    #[inline]
    pub fn inverse(&self, rho: f64, focal: f64) -> f64 {
        self.angle(rho / focal)
    }
}

fn identity(v: f64) -> f64 {
    v
}

fn equisolid_radius(theta: f64) -> f64 {
    2.0 * (theta / 2.0).sin()
}

fn equisolid_angle(rho: f64) -> f64 {
    2.0 * (rho / 2.0).min(1.0).asin()
}

fn orthographic_angle(rho: f64) -> f64 {
    rho.min(1.0).asin()
}

fn stereographic_radius(theta: f64) -> f64 {
    2.0 * (theta / 2.0).tan()
}

fn stereographic_angle(rho: f64) -> f64 {
    2.0 * (rho / 2.0).atan()
}

/// Pinhole projection, ρ = f·tan θ.
pub const RECTILINEAR: RadialModel = RadialModel {
    name: "rectilinear",
    radius: f64::tan,
    angle: f64::atan,
    max_angle: FRAC_PI_2 - TANGENT_MARGIN,
};

/// Fisheye laws, in `Mapping` discriminant order.
static CATALOG: [RadialModel; 4] = [
    // ρ = f·θ
    RadialModel {
        name: "equidistant",
        radius: identity,
        angle: identity,
        max_angle: PI,
    },
    // ρ = 2f·sin(θ/2)
    RadialModel {
        name: "equisolid",
        radius: equisolid_radius,
        angle: equisolid_angle,
        max_angle: PI,
    },
    // ρ = f·sin θ
    RadialModel {
        name: "orthographic",
        radius: f64::sin,
        angle: orthographic_angle,
        max_angle: FRAC_PI_2,
    },
    // ρ = 2f·tan(θ/2)
    RadialModel {
        name: "stereographic",
        radius: stereographic_radius,
        angle: stereographic_angle,
        max_angle: PI - TANGENT_MARGIN,
    },
];

/// Fisheye projection family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mapping {
    #[default]
    Equidistant = 0,
    Equisolid = 1,
    Orthographic = 2,
    Stereographic = 3,
}

impl Mapping {
    pub const ALL: [Mapping; 4] = [
        Self::Equidistant,
        Self::Equisolid,
        Self::Orthographic,
        Self::Stereographic,
    ];

    /// Parse from a string name.
    pub fn from_name(s: &str) -> Result<Self, ProjError> {
        match s.to_lowercase().as_str() {
            "equidistant" => Ok(Self::Equidistant),
            "equisolid" => Ok(Self::Equisolid),
            "orthographic" => Ok(Self::Orthographic),
            "stereographic" => Ok(Self::Stereographic),
            _ => Err(ProjError::UnknownMapping(s.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        self.model().name
    }

    /// The projection law for this family.
    pub fn model(&self) -> &'static RadialModel {
        &CATALOG[*self as usize]
    }
}

impl FromStr for Mapping {
    type Err = ProjError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
