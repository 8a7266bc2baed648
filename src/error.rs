use thiserror::Error;

#[derive(Error, Debug)]
pub enum WarpError {
    #[error("Projection error: {0}")]
    Projection(#[from] ProjError),

    #[error("Resampling error: {0}")]
    Resampling(String),

    #[error("Invalid shape: {0}")]
    Shape(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum ProjError {
    #[error("Unknown mapping: '{0}' (expected equidistant, equisolid, orthographic or stereographic)")]
    UnknownMapping(String),

    #[error("Unknown format: '{0}' (expected circular or fullframe)")]
    UnknownFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
