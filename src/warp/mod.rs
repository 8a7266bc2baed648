pub mod engine;
pub mod field;
pub mod lens;
pub mod plan;

pub use field::CoordinateField;
pub use lens::{apply, coordinate_field, remove, transform};
pub use plan::LensPlan;
