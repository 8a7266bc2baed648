//! Full-coverage compensation.
//!
//! Each side of a transform is calibrated against its own field of view, so
//! the two laws' radii at their calibration angles need not coincide. The
//! zoom factor is the ratio of those radii at unit focal length. Scaling the
//! output-side focal length by it gives both sides one common focal length,
//! under which every law agrees with the pinhole near the axis and never
//! exceeds it (ρ₁(θ) ≤ tan θ).

use super::catalog::RadialModel;

/// Ratio of the output law's unit-focal radius at its calibration half-angle
/// to the input law's, `zoom = ρ_out(out_half) / ρ_in(in_half)`.
///
/// Both half-angles are clamped into their law's domain. Falls back to 1
/// whenever the ratio is not a positive finite number.
pub fn zoom_factor(input: &RadialModel, in_half: f64, output: &RadialModel, out_half: f64) -> f64 {
    let source = input.radius(in_half);
    if !(source > 0.0) {
        return 1.0;
    }
    let zoom = output.radius(out_half) / source;
    if zoom.is_finite() && zoom > 0.0 {
        zoom
    } else {
        1.0
    }
}
