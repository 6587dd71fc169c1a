use bytemuck::{Pod, Zeroable};

use crate::params::BitWidth;

/// A fixed-point angle: `bit_width` fractional bits of one full turn.
///
/// The raw integer `t` at width `w` represents `t / 2**w` turns, i.e.
/// `t * 360 / 2**w` degrees, always in `[0, 360)`. Only the low `bit_width`
/// bits are significant; every operation masks before use.
///
/// # Examples
///
/// ```
/// use turn_degrees::{BitWidth, Turn};
///
/// let w = BitWidth::new(3)?;
/// let half = Turn::from_raw(4); // 4/8 turn = 180 degrees
/// assert_eq!(half.masked(w).raw(), 4);
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Turn {
    /// The raw integer representation.
    pub raw: u32,
}

// Safety: Turn is just a wrapper around u32
unsafe impl Zeroable for Turn {}
unsafe impl Pod for Turn {}

impl Turn {
    /// Creates a turn from a raw integer value.
    pub const fn from_raw(raw: u32) -> Self {
        Self { raw }
    }

    /// Returns the raw integer representation.
    pub const fn raw(self) -> u32 {
        self.raw
    }

    /// The zero angle.
    pub const fn zero() -> Self {
        Self { raw: 0 }
    }

    /// Returns the turn reduced to its significant bits at `width`.
    pub const fn masked(self, width: BitWidth) -> Self {
        Self {
            raw: self.raw & width.mask(),
        }
    }
}
