//! Integer bit primitives.
//!
//! The balanced-code scans, the Kreweras rewrite, the growth operator
//! and the automaton rules are all built from these few operations on
//! `BigUint`. All of them are pure and total on nonnegative integers;
//! nonnegativity is what `BigUint` already guarantees, so there is no
//! runtime precondition left to check.

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Number of 1-bits in the binary expansion of `n`.
pub fn popcount(n: &BigUint) -> u64 {
    n.count_ones()
}

/// ⌊log₂ n⌋, the position of the highest set bit.
///
/// Returns −1 for n = 0 (−∞ would be correct; −1 keeps the growth
/// operator's shift arithmetic closed over the whole domain).
pub fn bit_length(n: &BigUint) -> i64 {
    n.bits() as i64 - 1
}

/// The number whose decimal digits spell `n`'s binary expansion.
///
/// `binary_digits(44) == 101100`. Useful for eyeballing balanced codes
/// and for sequences defined on the digit form.
pub fn binary_digits(n: &BigUint) -> BigUint {
    let ten = BigUint::from(10u32);
    let mut out = BigUint::zero();
    for i in (0..n.bits()).rev() {
        out = &out * &ten;
        if n.bit(i) {
            out += 1u32;
        }
    }
    out
}

/// Reverse `n`'s binary expansion (trailing zeros are lost).
pub fn bit_reverse(n: &BigUint) -> BigUint {
    let len = n.bits();
    let mut out = BigUint::zero();
    for i in 0..len {
        if n.bit(i) {
            out.set_bit(len - 1 - i, true);
        }
    }
    out
}

/// Reverse and complement `n`'s binary expansion.
///
/// On a totally balanced code this is itself a code: the complement turns
/// every branch bit into a leaf bit and vice versa, and the reversal
/// restores prefix balance. It realizes the reflection of the encoded
/// forest read as general trees, an involution on every size class.
pub fn complement_reverse(n: &BigUint) -> BigUint {
    let len = n.bits();
    let mut out = BigUint::zero();
    for i in 0..len {
        if !n.bit(i) {
            out.set_bit(len - 1 - i, true);
        }
    }
    out
}

/// Largest odd divisor of `n`; 0 for 0.
pub fn odd_part(n: &BigUint) -> BigUint {
    if n.is_zero() {
        return BigUint::zero();
    }
    n >> trailing_zeros(n)
}

/// Exponent of the highest power of 2 dividing `n`; 0 for 0, matching
/// `odd_part`'s convention.
pub fn trailing_zeros(n: &BigUint) -> u64 {
    n.trailing_zeros().unwrap_or(0)
}

/// True iff n = 2^m − 1 for some m ≥ 0 (so 0 qualifies with m = 0).
pub fn is_mersenne(n: &BigUint) -> bool {
    (n & &(n + 1u32)).is_zero()
}

/// Jacobi symbol (p/q) for odd q, via the binary reciprocity recursion.
///
/// Sign flips are accumulated as a single parity: an odd step flips when
/// both p and q are 3 mod 4, an even step flips when q is ±3 mod 8
/// (bit 1 xor bit 2 of q). Returns 0 when gcd(p, q) > 1.
pub fn jacobi(p: &BigUint, q: &BigUint) -> i32 {
    let mut p = p.clone();
    let mut q = q.clone();
    let mut flip = false;
    let one = BigUint::one();
    while p > one {
        if p.bit(0) {
            if p.bit(1) && q.bit(1) {
                flip = !flip;
            }
            let next = &q % &p;
            q = std::mem::replace(&mut p, next);
        } else {
            if q.bit(1) != q.bit(2) {
                flip = !flip;
            }
            p >>= 1u32;
        }
    }
    if p.is_zero() {
        0
    } else if flip {
        -1
    } else {
        1
    }
}
