use thiserror::Error;

#[derive(Error, Debug)]
pub enum TilerError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode source image: {0}")]
    DecodeError(String),

    #[error("Failed to encode tile: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid pyramid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TilerError>;
