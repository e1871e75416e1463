#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sample requested after the sampler was exhausted")]
    SamplerExhausted,

    #[error("resolution must be at least 1x1, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("pixel ({column}, {row}) lies outside the frame")]
    PixelOutOfBounds { column: u32, row: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse scene file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
