//! Validated conversion parameters.
//!
//! A digit position is named by its *place*, the power of ten it occupies
//! relative to the decimal point of the degree value. The caller-facing
//! *precision* is the negated place of the lowest digit requested:
//!
//! ```text
//! Precision   -2  -1   0   1   2   3   4   5
//! Place        2   1   0  -1  -2  -3  -4  -5
//!            +---+---+---+---+---+---+---+---+
//!            | 3 | 5 | 9 | 9 | 9 | 9 | 9 | 1 |
//!            +---+---+---+---+---+---+---+---+
//!                        ^ decimal point
//! ```

use crate::error::AngleError;

/// The highest representable digit place (hundreds of degrees).
pub(crate) const MAX_PLACE: i32 = -Precision::MIN;
/// The lowest representable digit place (1e-5 degrees).
pub(crate) const MIN_PLACE: i32 = -Precision::MAX;

/// Number of digit places between [`MAX_PLACE`] and [`MIN_PLACE`].
pub(crate) const PLACE_COUNT: usize = (MAX_PLACE - MIN_PLACE + 1) as usize;

/// Clamp a place into the representable range.
///
/// Debug builds additionally assert, so precondition violations fail fast
/// in tests while release builds degrade to the nearest legal place.
pub(crate) fn clamp_place(place: i32) -> i32 {
    debug_assert!(
        (MIN_PLACE..=MAX_PLACE).contains(&place),
        "digit place {place} out of range {MIN_PLACE}..={MAX_PLACE}"
    );
    place.clamp(MIN_PLACE, MAX_PLACE)
}

/// The number of fractional bits of a turn value, in the range `1..=22`.
///
/// The upper bound keeps every intermediate product of the digit generator
/// (`turn * 360` scaled up by a decimal place per step) inside `u32`.
///
/// # Examples
///
/// ```
/// use turn_degrees::BitWidth;
///
/// let w = BitWidth::new(9)?;
/// assert_eq!(w.get(), 9);
/// assert!(BitWidth::new(23).is_err());
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitWidth(u32);

impl BitWidth {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 22;

    /// Creates a bit width, rejecting out-of-range values.
    pub fn new(width: u32) -> Result<Self, AngleError> {
        if (Self::MIN..=Self::MAX).contains(&width) {
            Ok(Self(width))
        } else {
            Err(AngleError::BitWidthOutOfRange(width))
        }
    }

    /// Creates a bit width, clamping out-of-range values to the nearest
    /// bound. Debug builds assert on the violation.
    pub fn clamping(width: u32) -> Self {
        debug_assert!(
            (Self::MIN..=Self::MAX).contains(&width),
            "bit width {width} out of range {}..={}",
            Self::MIN,
            Self::MAX
        );
        Self(width.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the width in bits.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// `2**width`, the number of representable turn values.
    pub(crate) const fn modulus(self) -> u32 {
        1 << self.0
    }

    /// Mask selecting the significant low bits of a raw turn.
    pub(crate) const fn mask(self) -> u32 {
        self.modulus() - 1
    }
}

/// Minimum digit count after the decimal point, in the range `-2..=5`.
///
/// A zero or negative precision instead names a place before the decimal
/// point: precision `-2` stops at the hundreds digit.
///
/// # Examples
///
/// ```
/// use turn_degrees::Precision;
///
/// let p = Precision::new(3)?;
/// assert_eq!(p.get(), 3);
/// assert!(Precision::new(6).is_err());
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision(i32);

impl Precision {
    pub const MIN: i32 = -2;
    pub const MAX: i32 = 5;

    /// Creates a precision, rejecting out-of-range values.
    pub fn new(precision: i32) -> Result<Self, AngleError> {
        if (Self::MIN..=Self::MAX).contains(&precision) {
            Ok(Self(precision))
        } else {
            Err(AngleError::PrecisionOutOfRange(precision))
        }
    }

    /// Creates a precision, clamping out-of-range values to the nearest
    /// bound. Debug builds assert on the violation.
    pub fn clamping(precision: i32) -> Self {
        debug_assert!(
            (Self::MIN..=Self::MAX).contains(&precision),
            "precision {precision} out of range {}..={}",
            Self::MIN,
            Self::MAX
        );
        Self(precision.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the precision.
    pub const fn get(self) -> i32 {
        self.0
    }

    /// The digit place this precision asks generation to stop at.
    pub(crate) const fn place(self) -> i32 {
        -self.0
    }
}
