//! Rendering a digit array as decimal-degree text.

use core::fmt;
use core::ops::Deref;

use crate::digits::DigitArray;
use crate::params::{MAX_PLACE, MIN_PLACE, PLACE_COUNT, clamp_place};

/// A serialized degree value: ASCII digits, at most one decimal point,
/// no sign.
///
/// Owns its storage inline, so serialization never allocates and the
/// worst-case length (3 integer digits, the point, 5 fraction digits) is a
/// compile-time capacity. Dereferences to `str`.
///
/// # Examples
///
/// ```
/// use turn_degrees::{BitWidth, Turn, serialize};
///
/// let s = serialize(Turn::from_raw(2), BitWidth::new(3)?);
/// assert_eq!(s.as_str(), "100");
/// assert_eq!(s.len(), 3);
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DegString {
    buf: [u8; Self::CAPACITY],
    len: usize,
}

impl DegString {
    /// The longest possible serialization, in bytes.
    pub const CAPACITY: usize = PLACE_COUNT + 1;

    pub(crate) const fn new() -> Self {
        Self {
            buf: [0; Self::CAPACITY],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, byte: u8) {
        debug_assert!(byte.is_ascii());
        self.buf[self.len] = byte;
        self.len += 1;
    }

    /// The text as a string slice.
    pub fn as_str(&self) -> &str {
        // Safety: push only ever receives ASCII digits and b'.'
        unsafe { core::str::from_utf8_unchecked(&self.buf[..self.len]) }
    }

    /// The length of the text in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if no characters have been produced. Never the case for a
    /// formatted value, which is at least `"0"`.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Deref for DegString {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for DegString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for DegString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for DegString {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for DegString {}

impl PartialEq<&str> for DegString {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<DegString> for &str {
    fn eq(&self, other: &DegString) -> bool {
        *self == other.as_str()
    }
}

/// Renders digits from the hundreds place down to `lowest_place`.
///
/// Leading zeros of the integer part are suppressed down to (but never
/// including) the units place; the decimal point is inserted when crossing
/// from place 0 to place −1. If suppression leaves nothing the result is
/// `"0"`, and a walk that stops above the units place is zero-filled down
/// to it.
pub(crate) fn format(digits: &DigitArray, lowest_place: i32) -> DegString {
    let lowest_place = clamp_place(lowest_place);
    let mut out = DegString::new();

    let mut k = MAX_PLACE;
    while k >= lowest_place {
        if k > 0 && digits.get(k) == 0 && out.is_empty() {
            k -= 1;
            continue;
        }
        if k == -1 {
            out.push(b'.');
        }
        out.push(b'0' + digits.get(k));
        k -= 1;
    }

    if out.is_empty() {
        // only reachable when lowest_place > 0
        out.push(b'0');
    } else {
        while k >= 0 {
            out.push(b'0');
            k -= 1;
        }
    }
    out
}

/// Raises `lowest_place` past trailing fractional zeros of a carried array.
///
/// The caller re-runs [`format`] with the returned place; the result is a
/// prefix of the untrimmed text, shorter only by zero characters and, when
/// the whole tail was zero, the decimal point.
pub(crate) fn trimmed_lowest_place(digits: &DigitArray, mut lowest_place: i32) -> i32 {
    debug_assert!(lowest_place >= MIN_PLACE);
    while lowest_place < 0 && digits.get(lowest_place) == 0 {
        lowest_place += 1;
    }
    lowest_place
}

#[cfg(test)]
mod tests {
    use super::*;

    fn array(places: &[(i32, u8)]) -> DigitArray {
        let mut digits = DigitArray::default();
        for &(place, digit) in places {
            digits.set(place, digit);
        }
        digits
    }

    #[test]
    fn suppresses_leading_zeros() {
        let digits = array(&[(1, 4), (0, 5)]);
        assert_eq!(format(&digits, 0), "45");
    }

    #[test]
    fn units_zero_is_kept() {
        let digits = array(&[]);
        assert_eq!(format(&digits, 0), "0");
    }

    #[test]
    fn inserts_decimal_point() {
        let digits = array(&[(0, 5), (-1, 2), (-2, 5)]);
        assert_eq!(format(&digits, -2), "5.25");
    }

    #[test]
    fn fills_down_to_units() {
        let digits = array(&[(1, 5)]);
        assert_eq!(format(&digits, 1), "50");
        let digits = array(&[(2, 2)]);
        assert_eq!(format(&digits, 2), "200");
    }

    #[test]
    fn all_zero_above_units_formats_as_zero() {
        let digits = array(&[]);
        assert_eq!(format(&digits, 2), "0");
        assert_eq!(format(&digits, 1), "0");
    }

    #[test]
    fn full_width_value() {
        let digits = array(&[
            (2, 3),
            (1, 5),
            (0, 9),
            (-1, 9),
            (-2, 9),
            (-3, 9),
            (-4, 9),
            (-5, 1),
        ]);
        let s = format(&digits, MIN_PLACE);
        assert_eq!(s, "359.99991");
        assert_eq!(s.len(), DegString::CAPACITY);
    }

    #[test]
    fn trim_stops_at_first_nonzero() {
        let digits = array(&[(0, 5), (-1, 2), (-2, 0), (-3, 0)]);
        assert_eq!(trimmed_lowest_place(&digits, -3), -1);
    }

    #[test]
    fn trim_can_remove_the_whole_fraction() {
        let digits = array(&[(0, 5)]);
        assert_eq!(trimmed_lowest_place(&digits, -4), 0);
    }

    #[test]
    fn trim_never_climbs_into_the_integer_part() {
        let digits = array(&[(1, 1)]);
        assert_eq!(trimmed_lowest_place(&digits, 0), 0);
    }
}
