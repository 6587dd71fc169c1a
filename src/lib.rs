//! # turn_degrees
//!
//! Serialize a fixed-point binary angle (a "turn") to the shortest
//! decimal-degree string that still recovers the exact value, and back.
//!
//! A turn at `bit_width` bits is an unsigned integer `t` representing
//! `t / 2**bit_width` of a full circle, i.e. `[0, 360)` degrees. Digit
//! generation is a fixed-radix variation of (FPP)2 in dragon4, which stops
//! as soon as the emitted digits round-trip — so a 9-bit angle prints as a
//! whole degree, not as `"180.000"`.
//!
//! ## Features
//!
//! - Shortest round-trip serialization, with optional minimum precision
//!   and trailing-zero trimming
//! - Exact inverse parser with a C-style unconsumed-input cursor, plus a
//!   strict variant
//! - Allocation-free output in a fixed-capacity [`DegString`]
//! - A floating-point degree→turn helper for cross-checking
//!
//! Digit places and precisions line up as:
//!
//! ```text
//! Precision   -2  -1   0   1   2   3   4   5
//! Place        2   1   0  -1  -2  -3  -4  -5
//!            +---+---+---+---+---+---+---+---+
//!            | 3 | 5 | 9 | 9 | 9 | 9 | 9 | 1 |
//!            +---+---+---+---+---+---+---+---+
//!                        ^ decimal point
//! ```
//!
//! ## Examples
//!
//! ```
//! use turn_degrees::{BitWidth, Turn, deserialize, serialize};
//!
//! let w = BitWidth::new(9)?;
//! let s = serialize(Turn::from_raw(256), w);
//! assert_eq!(s, "180");
//! assert_eq!(deserialize(&s, w).turn, Turn::from_raw(256));
//! # Ok::<(), turn_degrees::AngleError>(())
//! ```

mod digits;
pub mod error;
pub mod format;
pub mod params;
pub mod parse;
pub mod turn;

pub use error::AngleError;
pub use format::DegString;
pub use params::{BitWidth, Precision};
pub use parse::{Parsed, degrees_to_turn};
pub use turn::Turn;

use digits::{carry_up, generate};
use format::{format, trimmed_lowest_place};
use params::MAX_PLACE;

/// Serializes a turn to the shortest degree string that recovers it.
///
/// No minimum precision: generation starts checking for a stopping place at
/// the hundreds digit, so the coarsest distinguishable rounding wins. The
/// top place never rounds up past 9, so no carry pass is needed.
///
/// # Examples
///
/// ```
/// use turn_degrees::{BitWidth, Turn, serialize};
///
/// let w = BitWidth::new(3)?;
/// assert_eq!(serialize(Turn::from_raw(0), w), "0");
/// assert_eq!(serialize(Turn::from_raw(1), w), "50");
/// assert_eq!(serialize(Turn::from_raw(2), w), "100");
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
pub fn serialize(turn: Turn, width: BitWidth) -> DegString {
    let (digits, lowest_place) = generate(turn, width, MAX_PLACE);
    format(&digits, lowest_place)
}

/// Serializes a turn with at least `min` digits after the decimal point.
///
/// A zero or negative `min` instead names a stopping place before the
/// point. The result is longer than requested when that precision cannot
/// recover the turn.
///
/// # Examples
///
/// ```
/// use turn_degrees::{BitWidth, Precision, Turn, serialize_with_precision};
///
/// let w = BitWidth::new(4)?;
/// let t = Turn::from_raw(2);
/// assert_eq!(serialize_with_precision(t, w, Precision::new(1)?), "45.0");
/// assert_eq!(serialize_with_precision(t, w, Precision::new(-2)?), "50");
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
pub fn serialize_with_precision(turn: Turn, width: BitWidth, min: Precision) -> DegString {
    let (mut digits, lowest_place) = generate(turn, width, min.place());
    carry_up(&mut digits, lowest_place);
    format(&digits, lowest_place)
}

/// Like [`serialize_with_precision`], then trims superfluous trailing zeros
/// from the fraction.
///
/// The output is a prefix of the untrimmed string, shorter only by zero
/// characters and, when the whole fraction was zero, the decimal point.
///
/// # Examples
///
/// ```
/// use turn_degrees::{BitWidth, Precision, Turn, serialize_trimmed};
///
/// let w = BitWidth::new(4)?;
/// let p = Precision::new(1)?;
/// assert_eq!(serialize_trimmed(Turn::from_raw(2), w, p), "45");
/// assert_eq!(serialize_trimmed(Turn::from_raw(1), w, p), "22.5");
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
pub fn serialize_trimmed(turn: Turn, width: BitWidth, min: Precision) -> DegString {
    let (mut digits, lowest_place) = generate(turn, width, min.place());
    carry_up(&mut digits, lowest_place);
    let lowest_place = trimmed_lowest_place(&digits, lowest_place);
    format(&digits, lowest_place)
}

/// Parses the longest valid degree prefix of `text` into a turn.
///
/// Accepted grammar: optional ASCII whitespace, up to three integer digits
/// (taken modulo 360), optionally a `.` followed by fraction digits of
/// which only the first five contribute to the value; a sign halts parsing
/// at the start with turn 0. Never fails; [`Parsed::consumed`] marks the
/// first unconsumed byte so callers can detect trailing garbage or an
/// over-long integer part.
///
/// # Examples
///
/// ```
/// use turn_degrees::{BitWidth, deserialize};
///
/// let parsed = deserialize("90", BitWidth::new(1)?);
/// assert_eq!((parsed.turn.raw(), parsed.consumed), (1, 2));
///
/// // a sign halts parsing at the start
/// let parsed = deserialize("+180.0", BitWidth::new(2)?);
/// assert_eq!((parsed.turn.raw(), parsed.consumed), (0, 0));
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
pub fn deserialize(text: &str, width: BitWidth) -> Parsed {
    parse::parse_degrees(text, width)
}

/// Parses like [`deserialize`] but rejects input with anything other than
/// whitespace after the consumed prefix.
///
/// # Examples
///
/// ```
/// use turn_degrees::{AngleError, BitWidth, Turn, deserialize_strict};
///
/// let w = BitWidth::new(2)?;
/// assert_eq!(deserialize_strict("180.0  ", w)?, Turn::from_raw(2));
/// assert_eq!(
///     deserialize_strict("270.02b", w),
///     Err(AngleError::TrailingInput(6))
/// );
/// # Ok::<(), turn_degrees::AngleError>(())
/// ```
pub fn deserialize_strict(text: &str, width: BitWidth) -> Result<Turn, AngleError> {
    let parsed = parse::parse_degrees(text, width);
    let rest = &text[parsed.consumed..];
    match rest.bytes().position(|b| !parse::is_space(b)) {
        Some(offset) => Err(AngleError::TrailingInput(parsed.consumed + offset)),
        None => Ok(parsed.turn),
    }
}
