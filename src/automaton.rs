//! One-dimensional cellular automata as closed bitwise formulas.
//!
//! A row is an integer: bit i is the state of cell i, and a rule maps a
//! row to the next one through shifts of the whole row. There is no
//! neighbor array and no edge handling beyond what the unbounded shift
//! implies. The left shift moves the pattern one cell per generation, so
//! a triangle grows rightward in bit position while staying centered in
//! cell space.

use num_bigint::BigUint;
use num_traits::One;

use crate::sequence::{Orbit, TermStream};

/// Wolfram rule 30: n XOR (2n OR 4n).
pub fn rule30(n: &BigUint) -> BigUint {
    n ^ ((n << 1u32) | (n << 2u32))
}

/// Wolfram rule 86: 4n XOR (2n OR n).
pub fn rule86(n: &BigUint) -> BigUint {
    (n << 2u32) ^ ((n << 1u32) | n)
}

/// Wolfram rule 124: (n OR 2n) AND ((n XOR 2n) OR (n XOR 4n)).
pub fn rule124(n: &BigUint) -> BigUint {
    (n | (n << 1u32)) & ((n ^ (n << 1u32)) | (n ^ (n << 2u32)))
}

/// Wolfram rule 150: n XOR 2n XOR 4n.
pub fn rule150(n: &BigUint) -> BigUint {
    n ^ (n << 1u32) ^ (n << 2u32)
}

/// The orbit of one rule from a small seed row.
pub fn rule_orbit(rule: fn(&BigUint) -> BigUint, seed: u32) -> TermStream {
    Box::new(Orbit::new(seed, move |s| rule(s)))
}

/// Each rule-30 row XORed with the previous row shifted one cell:
/// 5, 23, 93, 335, 1493, …
pub fn rule30_trail_xor() -> TermStream {
    let mut state = BigUint::one();
    Box::new(std::iter::from_fn(move || {
        let next = rule30(&state);
        let out = &next ^ (&state << 1u32);
        state = next;
        Some(out)
    }))
}

/// Each rule-30 row XORed with the rule-86 row one generation behind,
/// shifted one cell: 5, 23, 73, 359, 1233, …
pub fn rule30_rule86_trail_xor() -> TermStream {
    let mut thirty = BigUint::one();
    let mut eighty_six = BigUint::one();
    Box::new(std::iter::from_fn(move || {
        thirty = rule30(&thirty);
        let out = &thirty ^ (&eighty_six << 1u32);
        eighty_six = rule86(&eighty_six);
        Some(out)
    }))
}

/// Each rule-30 row OR-dilated by its own one-cell shift:
/// 3, 15, 59, 255, 947, …
pub fn rule30_dilated() -> TermStream {
    let mut state = BigUint::one();
    Box::new(std::iter::from_fn(move || {
        let out = &state | (&state << 1u32);
        state = rule30(&state);
        Some(out)
    }))
}
