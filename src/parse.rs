//! Parsing decimal-degree text back into a turn.

use crate::params::{BitWidth, MAX_PLACE, MIN_PLACE};
use crate::turn::Turn;

/// Result of parsing degree text: the recovered turn and the byte offset of
/// the first unconsumed input character.
///
/// Parsing never fails; callers that need strict validation inspect
/// `consumed` (or use [`deserialize_strict`](crate::deserialize_strict)).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    pub turn: Turn,
    pub consumed: usize,
}

/// Parses the longest valid prefix of `text` and rounds it back to a turn.
///
/// Accepted grammar: optional ASCII whitespace, up to three integer digits
/// (taken modulo 360), optionally a `.` followed by fraction digits of
/// which only the first five contribute to the value. A sign halts parsing
/// immediately, leaving the cursor at the start. Fraction digits past the
/// fifth are consumed by the cursor but ignored numerically.
///
/// The rounding rule (half up at the final division) exactly inverts the
/// digit generator, so any serialized string recovers its turn.
/// C-locale `isspace`: ASCII whitespace plus vertical tab, which
/// `u8::is_ascii_whitespace` leaves out.
pub(crate) fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0B
}

pub(crate) fn parse_degrees(text: &str, width: BitWidth) -> Parsed {
    let bytes = text.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() && is_space(bytes[pos]) {
        pos += 1;
    }

    let mut deg: u32 = 0;
    let mut count: i32 = 0;
    // the bound admits one digit more than the two-place range suggests;
    // callers relying on a strict cap check `consumed` themselves
    while pos < bytes.len() && bytes[pos].is_ascii_digit() && count <= MAX_PLACE {
        deg = deg * 10 + u32::from(bytes[pos] - b'0');
        count += 1;
        pos += 1;
    }
    deg %= 360;

    let mut scale: u32 = 1;
    if pos < bytes.len() && bytes[pos] == b'.' {
        pos += 1;
        count = 0;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            if count < -MIN_PLACE {
                scale *= 10;
                deg = deg * 10 + u32::from(bytes[pos] - b'0');
                count += 1;
            }
            pos += 1;
        }
    }

    Parsed {
        turn: turn_from_scaled(deg, scale, width),
        consumed: pos,
    }
}

/// Rounds `deg / scale` degrees to the nearest turn, half up.
///
/// Works in doubled units: `(deg << width) / (180 * scale)` is the turn
/// value scaled by 2, so the low bit is the half-unit that decides the
/// rounding direction. `u64` has ample headroom (`deg < 360 * 10**5`,
/// shifted by at most 22 bits).
fn turn_from_scaled(deg: u32, scale: u32, width: BitWidth) -> Turn {
    debug_assert!(scale <= 100_000);
    let s = u64::from(scale) * 180;
    let doubled = ((u64::from(deg) << width.get()) / s) as u32;
    Turn::from_raw(round_half_up(doubled) & width.mask())
}

/// Same division, one quotient bit per iteration, for targets without a
/// wide enough integer type. Kept to pin the equivalence of the two paths.
#[cfg(test)]
fn turn_from_scaled_bitserial(deg: u32, scale: u32, width: BitWidth) -> Turn {
    let s = scale * 180;
    let mut r = deg;
    let mut doubled: u32 = 0;
    for _ in 0..=width.get() {
        let u = r / s;
        r -= u * s;
        r <<= 1;
        doubled = (doubled << 1) | u;
    }
    Turn::from_raw(round_half_up(doubled) & width.mask())
}

const fn round_half_up(doubled: u32) -> u32 {
    doubled / 2 + (doubled & 1)
}

/// Rounds a floating-point degree value to the nearest turn, half up.
///
/// Reduces modulo 360, scales by `2**width`, truncates, and rounds the
/// remaining half-unit upward — the same rule as parsing, applied to an
/// inexact input. A cross-check collaborator, not part of the
/// shortest-string contract, and negative angles are out of scope.
///
/// # Examples
///
/// ```
/// use turn_degrees::{BitWidth, Turn, degrees_to_turn};
///
/// let w = BitWidth::new(2)?;
/// assert_eq!(degrees_to_turn(180.0, w), Turn::from_raw(2));
/// assert_eq!(degrees_to_turn(540.0, w), Turn::from_raw(2));
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
pub fn degrees_to_turn(deg: f64, width: BitWidth) -> Turn {
    let scaled = (deg % 360.0) * f64::from(width.modulus());
    let doubled = scaled as i64 / 180;
    Turn::from_raw((doubled / 2 + (doubled & 1)) as u32)
}
