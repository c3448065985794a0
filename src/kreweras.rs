//! The Kreweras rewrite: a run-length transform on arbitrary
//! nonnegative integers whose restriction to balanced codes induces the
//! Kreweras bijection on each size class.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::bits::{is_mersenne, odd_part, trailing_zeros};

/// Rewrite `n` by walking its alternating bit runs with two cursors and
/// emitting one output bit per step.
///
/// The "chosen" cursor starts on the odd part of `n`, the "other" on `n`
/// with its trailing 1-run stripped. Each step emits the current bit and
/// then dispatches on the chosen cursor. The exhausted-cursor case is
/// checked before the run-parity cases, and the dispatch order matters:
///
/// 1. chosen is down to its last one or zero: hand over to the other
///    cursor and flip the emitted bit;
/// 2. chosen's run continues but its low two bits agree: swap the
///    cursors, shifting the outgoing one, and flip the bit;
/// 3. a 1-run ends: hop past the following 0-run, bit unchanged;
/// 4. a 0-run ends: hop past the following 1-run, bit unchanged.
///
/// Terminates when both cursors reach zero. Not injective on all of ℕ
/// (`kreweras(2) == kreweras(6)`), but a bijection on every balanced
/// size class, with fixed points 0, 2, 52, 868, 936, …
pub fn kreweras(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }

    let mut chosen = odd_part(n);
    let mut other = n >> trailing_zeros(&(n + 1u32));
    let mut out = BigUint::zero();
    let mut bit = n.bit(0);
    let mut position = 0u64;

    while !chosen.is_zero() || !other.is_zero() {
        let next_bit;
        if chosen.is_one() || is_mersenne(&(&chosen + 1u32)) {
            // Last one or zero at hand.
            chosen = std::mem::take(&mut other);
            next_bit = !bit;
        } else if chosen.bit(0) == chosen.bit(1) {
            // Source run continues, destination changes.
            let outgoing = std::mem::take(&mut other);
            other = &chosen >> 1u32;
            chosen = outgoing;
            next_bit = !bit;
        } else if chosen.bit(0) {
            // A 1-run ends; skip past the zeros that follow.
            chosen = odd_part(&(&chosen - 1u32));
            next_bit = bit;
        } else {
            // A 0-run ends; skip past the ones that follow.
            let hop = trailing_zeros(&(&chosen + 2u32));
            chosen >>= hop;
            next_bit = bit;
        }

        if bit {
            out.set_bit(position, true);
        }
        position += 1;
        bit = next_bit;
    }

    out
}
