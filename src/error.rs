use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoiseError {
    #[error("octaves must be at least 1")]
    InvalidOctaves,
    #[error("a palette needs 2 or 4 anchor colors, got {0}")]
    InvalidAnchorCount(usize),
    #[error("field has {actual} values but its dimensions require {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("pixel buffer holds {actual} bytes but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("palette bytes must be exactly 768 long, got {0}")]
    InvalidPaletteBytes(usize),
}
