//! Per-call resolution of a lens conversion.

use tracing::debug;

use crate::error::ProjError;
use crate::params::{Direction, LensParams};
use crate::proj::{focal_at, half_angle, zoom_factor, RadialModel, RECTILINEAR};

/// Everything the per-pixel stage needs, resolved once per call.
///
/// Model dispatch happens here: `input` and `output` are fixed law handles
/// applied uniformly to every pixel.
#[derive(Clone, Copy, Debug)]
pub struct LensPlan {
    /// Law of the image being sampled.
    pub input: &'static RadialModel,
    /// Law of the image being produced.
    pub output: &'static RadialModel,
    pub f_in: f64,
    /// Output-side focal length, zoom included.
    pub f_out: f64,
    /// Zoom applied to `f_out` (1 unless `entire_image` is set).
    pub zoom: f64,
    /// Optical center (pixels).
    pub cx: f64,
    pub cy: f64,
}

impl LensPlan {
    pub fn new(
        direction: Direction,
        params: &LensParams,
        width: usize,
        height: usize,
    ) -> Result<Self, ProjError> {
        params.validate()?;

        let fisheye = params.mapping.model();
        let (input, in_fov, output, out_fov): (&'static RadialModel, _, &'static RadialModel, _) =
            match direction {
                Direction::Apply => (&RECTILINEAR, params.pfov, fisheye, params.fov),
                Direction::Remove => (fisheye, params.fov, &RECTILINEAR, params.pfov),
            };

        let dim = params.format.reference_dimension(width, height);
        let in_half = half_angle(input, in_fov);
        let out_half = half_angle(output, out_fov);

        let zoom = if params.entire_image {
            zoom_factor(input, in_half, output, out_half)
        } else {
            1.0
        };
        let f_in = focal_at(input, in_half, dim);
        let f_out = focal_at(output, out_half, dim) * zoom;
        let (cx, cy) = params.center(width, height);

        debug!(
            ?direction,
            mapping = %params.mapping,
            format = %params.format,
            dim,
            f_in,
            f_out,
            zoom,
            cx,
            cy,
            "resolved lens plan"
        );

        Ok(Self {
            input,
            output,
            f_in,
            f_out,
            zoom,
            cx,
            cy,
        })
    }

    /// Source coordinate `(x, y)` sampled for output pixel `(col, row)`.
    #[inline]
    pub fn source_coord(&self, col: f64, row: f64) -> (f64, f64) {
        let dx = col - self.cx;
        let dy = row - self.cy;
        let rd = dx.hypot(dy);
        // The general ratio is 0/0 on the axis.
        if rd == 0.0 {
            return (self.cx, self.cy);
        }
        let theta = self.output.inverse(rd, self.f_out);
        let rr = self.input.forward(theta, self.f_in);
        let scale = rr / rd;
        (scale * dx + self.cx, scale * dy + self.cy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::{Format, Mapping};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_sides_follow_direction() {
        let params = LensParams::new(Mapping::Orthographic, Format::Circular, 160.0, 90.0);

        let plan = LensPlan::new(Direction::Apply, &params, 100, 80).unwrap();
        assert_eq!(plan.input.name, "rectilinear");
        assert_eq!(plan.output.name, "orthographic");
        // pinhole 90° over 80 px
        assert_relative_eq!(plan.f_in, 40.0, epsilon = 1e-9);

        let plan = LensPlan::new(Direction::Remove, &params, 100, 80).unwrap();
        assert_eq!(plan.input.name, "orthographic");
        assert_eq!(plan.output.name, "rectilinear");
        assert_relative_eq!(plan.f_out, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zoom_only_when_requested() {
        let params = LensParams::new(Mapping::Equidistant, Format::Circular, 180.0, 120.0);
        for direction in [Direction::Apply, Direction::Remove] {
            let plan = LensPlan::new(direction, &params, 64, 64).unwrap();
            assert_eq!(plan.zoom, 1.0);
        }

        let params = params.with_entire_image(true);
        let remove = LensPlan::new(Direction::Remove, &params, 64, 64).unwrap();
        assert_relative_eq!(remove.zoom, 60f64.to_radians().tan() / FRAC_PI_2, epsilon = 1e-12);
        let apply = LensPlan::new(Direction::Apply, &params, 64, 64).unwrap();
        assert_relative_eq!(apply.zoom, FRAC_PI_2 / 60f64.to_radians().tan(), epsilon = 1e-12);
    }

    #[test]
    fn test_zoom_shares_one_focal_length() {
        for mapping in Mapping::ALL {
            for format in [Format::Circular, Format::Fullframe] {
                let params = LensParams::new(mapping, format, 170.0, 100.0).with_entire_image(true);
                for direction in [Direction::Apply, Direction::Remove] {
                    let plan = LensPlan::new(direction, &params, 80, 60).unwrap();
                    assert_relative_eq!(plan.f_out, plan.f_in, max_relative = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_axis_maps_to_itself() {
        let params = LensParams::default().with_center(0.25, 0.75);
        for direction in [Direction::Apply, Direction::Remove] {
            let plan = LensPlan::new(direction, &params, 200, 100).unwrap();
            assert_eq!(plan.source_coord(50.0, 75.0), (50.0, 75.0));
        }
    }

    #[test]
    fn test_radial_symmetry() {
        let params = LensParams::new(Mapping::Stereographic, Format::Circular, 170.0, 110.0);
        let plan = LensPlan::new(Direction::Remove, &params, 101, 101).unwrap();
        let (c, _) = params.center(101, 101);
        let (x1, y1) = plan.source_coord(c + 20.0, c);
        let (x2, y2) = plan.source_coord(c, c - 20.0);
        assert_relative_eq!(x1 - c, c - y2, epsilon = 1e-9);
        assert_relative_eq!(y1, c, epsilon = 1e-12);
        assert_relative_eq!(x2, c, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = LensParams {
            pfov: f64::NAN,
            ..LensParams::default()
        };
        assert!(LensPlan::new(Direction::Apply, &params, 10, 10).is_err());
    }
}
