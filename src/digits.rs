//! Digit generation for the degree value of a turn.
//!
//! The generator is a fixed-radix variation of (FPP)2 in dragon4
//! (<https://dl.acm.org/doi/10.1145/93548.93559>): the source is a radix-2
//! fixed-point fraction of 360 degrees, the target is radix-10, and
//! generation stops as soon as the un-emitted tail is guaranteed to
//! round-trip, which makes the digit sequence shortest.

use crate::params::{BitWidth, MAX_PLACE, MIN_PLACE, PLACE_COUNT, clamp_place};
use crate::turn::Turn;

/// Digits of a degree value, one slot per place from +2 down to −5.
///
/// A slot may transiently hold 10 when the generator rounds up at its
/// stopping place; [`carry_up`] resolves it. The represented magnitude is
/// always below 360.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct DigitArray {
    digits: [u8; PLACE_COUNT],
}

impl DigitArray {
    fn index(place: i32) -> usize {
        debug_assert!((MIN_PLACE..=MAX_PLACE).contains(&place));
        (MAX_PLACE - place) as usize
    }

    pub(crate) fn get(&self, place: i32) -> u8 {
        self.digits[Self::index(place)]
    }

    pub(crate) fn set(&mut self, place: i32, digit: u8) {
        self.digits[Self::index(place)] = digit;
    }
}

/// Converts a turn into degree digits, stopping at the lowest place that
/// still round-trips.
///
/// `place` is the lowest place the caller wants; the returned lowest place
/// may be lower if that precision is not enough to recover the turn, and
/// the digit at the returned place may be 10 when `place < MAX_PLACE`.
///
/// `R / S` tracks the un-emitted tail of the degree value and `M` is half
/// the value of the turn's last significant bit at the current decimal
/// scale. All three fit in `u32`: the worst intermediate is
/// `R * 10 < 2**22 * 1000`.
pub(crate) fn generate(turn: Turn, width: BitWidth, place: i32) -> (DigitArray, i32) {
    let place = clamp_place(place);
    let turn = turn.masked(width).raw();

    let mut r = turn * 360;
    let s = width.modulus() * 100;
    let mut m: u32 = 180;

    let mut digits = DigitArray::default();
    let mut k = MAX_PLACE + 1;
    loop {
        let mut u = (r / s) as u8;
        k -= 1;
        r -= u32::from(u) * s;

        let mut low = false;
        let mut high = false;
        if k <= place {
            low = r < m;
            // written as r + m > s because r > s - m could underflow
            high = r + m > s;
            if high && (!low || r >= s / 2) {
                // may reach 10; resolved by carry_up
                u += 1;
            }
        }
        digits.set(k, u);

        if low || high {
            break;
        }
        if k == MIN_PLACE {
            debug_assert!(false, "digit generation unresolved at place {MIN_PLACE}");
            break;
        }
        r *= 10;
        m *= 10;
    }
    (digits, k)
}

/// Propagates a 10 at the lowest place upward as 0 / +1 until a place no
/// longer overflows.
///
/// Carrying out of the hundreds place cannot happen for a value below 360.
pub(crate) fn carry_up(digits: &mut DigitArray, lowest_place: i32) {
    let mut k = lowest_place;
    while k < MAX_PLACE && digits.get(k) == 10 {
        digits.set(k, 0);
        digits.set(k + 1, digits.get(k + 1) + 1);
        k += 1;
    }
    if lowest_place < MAX_PLACE {
        debug_assert!(
            !(digits.get(2) == 3 && digits.get(1) == 6),
            "carried value reached 360 degrees"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(w: u32) -> BitWidth {
        BitWidth::new(w).unwrap()
    }

    #[test]
    fn stops_at_coarsest_resolving_place() {
        // 1/8 turn = 45 degrees, but "50" already round-trips at width 3
        let (digits, lowest) = generate(Turn::from_raw(1), width(3), MAX_PLACE);
        assert_eq!(lowest, 1);
        assert_eq!(digits.get(2), 0);
        assert_eq!(digits.get(1), 5);
    }

    #[test]
    fn honors_requested_place() {
        // 45 degrees exactly, down to the units place
        let (digits, lowest) = generate(Turn::from_raw(1), width(3), 0);
        assert_eq!(lowest, 0);
        assert_eq!((digits.get(2), digits.get(1), digits.get(0)), (0, 4, 5));
    }

    #[test]
    fn descends_into_the_fraction() {
        // 22.5 degrees down to the tenths place
        let (digits, lowest) = generate(Turn::from_raw(1), width(4), -1);
        assert_eq!(lowest, -1);
        assert_eq!((digits.get(1), digits.get(0), digits.get(-1)), (2, 2, 5));
    }

    #[test]
    fn rounds_at_the_stopping_place() {
        // 22.5 degrees cut at the units place rounds half up to 23
        let (digits, lowest) = generate(Turn::from_raw(1), width(4), 0);
        assert_eq!(lowest, 0);
        assert_eq!((digits.get(1), digits.get(0)), (2, 3));
    }

    #[test]
    fn rounds_up_to_a_transient_ten() {
        // 199.6875 degrees at the units place rounds up through 9
        let (mut digits, lowest) = generate(Turn::from_raw(71), width(7), 0);
        assert_eq!(lowest, 0);
        assert_eq!((digits.get(2), digits.get(1), digits.get(0)), (1, 9, 10));

        carry_up(&mut digits, lowest);
        assert_eq!((digits.get(2), digits.get(1), digits.get(0)), (2, 0, 0));
    }

    #[test]
    fn carry_propagates_until_a_place_absorbs_it() {
        let mut digits = DigitArray::default();
        digits.set(0, 9);
        digits.set(-1, 10);
        carry_up(&mut digits, -1);
        assert_eq!((digits.get(1), digits.get(0), digits.get(-1)), (1, 0, 0));
    }

    #[test]
    fn carry_leaves_resolved_arrays_alone() {
        let mut digits = DigitArray::default();
        digits.set(1, 4);
        digits.set(0, 5);
        let before = digits;
        carry_up(&mut digits, 0);
        assert_eq!(digits, before);
    }

    #[test]
    fn zero_turn_resolves_immediately() {
        let (digits, lowest) = generate(Turn::zero(), width(4), MAX_PLACE);
        assert_eq!(lowest, MAX_PLACE);
        assert_eq!(digits.get(MAX_PLACE), 0);
    }
}
