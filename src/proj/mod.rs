pub mod catalog;
pub mod focal;
pub mod zoom;

pub use catalog::{Mapping, RadialModel, RECTILINEAR};
pub use focal::{focal_at, focal_length, half_angle, Format};
pub use zoom::zoom_factor;
