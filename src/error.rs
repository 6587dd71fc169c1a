use thiserror::Error;

/// Errors for the strict construction and parsing surface.
///
/// The conversion functions themselves never fail; out-of-range parameters
/// reaching them are clamped. This enum is only produced by the checked
/// constructors and by [`deserialize_strict`](crate::deserialize_strict).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AngleError {
    #[error("bit width must be in the range 1..=22, got {0}")]
    BitWidthOutOfRange(u32),

    #[error("precision must be in the range -2..=5, got {0}")]
    PrecisionOutOfRange(i32),

    #[error("unconsumed input at byte offset {0}")]
    TrailingInput(usize),
}
