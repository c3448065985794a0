//! Deterministic integer sequences: the growth operator, the lazy orbit
//! iterator, and the named catalog the CLI serves.
//!
//! Every sequence here is first-order Markov: term k+1 is a pure
//! function of term k (or of a pair of lockstep states for the combined
//! streams). Generators are pull-based and hold no state beyond their
//! current term, so rebuilding one from the catalog restarts it from the
//! seed. Terms grow without bound, roughly two bits per step for the
//! tree orbits, which is why everything runs on `BigUint`.

use num_bigint::BigUint;
use num_traits::One;

use crate::automaton;
use crate::bits;
use crate::kreweras::kreweras;
use crate::morph::{reflect_bits, reflect_tree, reflect_zigzag_a, row_shuffle};

/// Graft one node at the root: wrap the code as `1 · bits(n) · 0`.
///
/// Equal to `2 * ((1 << (bit_length(n)+1)) + n)`; adds exactly two bits,
/// is strictly increasing and injective, and sends 0 to 2 (the one-node
/// tree).
pub fn grow(n: &BigUint) -> BigUint {
    ((BigUint::one() << ((bits::bit_length(n) + 1) as u64)) + n) << 1u32
}

/// A lazy infinite orbit: a state and a pure step function.
///
/// Yields the current state, then replaces it with `step(state)`. Emit
/// projections (binary digit form, popcount, …) are ordinary iterator
/// `map`s over the orbit.
pub struct Orbit {
    state: BigUint,
    step: Box<dyn Fn(&BigUint) -> BigUint>,
}

impl Orbit {
    pub fn new(seed: impl Into<BigUint>, step: impl Fn(&BigUint) -> BigUint + 'static) -> Self {
        Orbit {
            state: seed.into(),
            step: Box::new(step),
        }
    }
}

impl Iterator for Orbit {
    type Item = BigUint;

    fn next(&mut self) -> Option<BigUint> {
        let next = (self.step)(&self.state);
        Some(std::mem::replace(&mut self.state, next))
    }
}

/// A boxed term stream; what the catalog hands out.
pub type TermStream = Box<dyn Iterator<Item = BigUint>>;

/// Bitwise XOR of two streams in lockstep.
pub fn xor_stream(a: TermStream, b: TermStream) -> TermStream {
    Box::new(a.zip(b).map(|(x, y)| x ^ y))
}

/// Bitwise OR of two streams in lockstep.
pub fn or_stream(a: TermStream, b: TermStream) -> TermStream {
    Box::new(a.zip(b).map(|(x, y)| x | y))
}

/// The step of the pyramid orbits A080069/A080070: reflect the string,
/// grow, reflect the tree. The two reflections are different operators,
/// which is what makes the orbit nontrivial.
fn pyramid_step(s: &BigUint) -> BigUint {
    reflect_tree(&grow(&reflect_bits(s)))
}

/// XOR of two reflect-zigzag-A orbits started from different seeds.
/// The difference pattern dissipates or persists depending on the seeds,
/// which is the point of watching the pair.
pub fn zigzag_xor(seed_a: u32, seed_b: u32) -> TermStream {
    xor_stream(
        Box::new(Orbit::new(seed_a, |s| grow(&reflect_zigzag_a(s)))),
        Box::new(Orbit::new(seed_b, |s| grow(&reflect_zigzag_a(s)))),
    )
}

/// Rows of Legendre symbols (i/65537) packed as bits: row n covers
/// 2n+1 consecutive symbols starting at i = n², one output bit per
/// symbol equal to (L+1)/2.
pub fn legendre_rows() -> TermStream {
    let modulus = BigUint::from(65537u32);
    let mut n: u64 = 0;
    Box::new(std::iter::from_fn(move || {
        let width = 2 * n + 1;
        let mut i = n * n;
        let mut row = BigUint::default();
        for j in 0..width {
            if bits::jacobi(&BigUint::from(1 + i), &modulus) == 1 {
                row.set_bit(j, true);
            }
            i += 1;
        }
        n += 1;
        Some(row)
    }))
}

/// One catalog entry: a stable name, a one-line summary, and a builder
/// that restarts the sequence from its seed.
pub struct SequenceDef {
    pub name: &'static str,
    pub summary: &'static str,
    build: fn() -> TermStream,
}

impl SequenceDef {
    pub fn build(&self) -> TermStream {
        (self.build)()
    }
}

macro_rules! orbit {
    ($seed:expr, $step:expr) => {
        || Box::new(Orbit::new($seed as u32, $step)) as TermStream
    };
}

/// Every named sequence, tree orbits first, then the automaton streams.
/// Names follow the OEIS entries the orbits belong to.
static CATALOG: &[SequenceDef] = &[
        SequenceDef {
            name: "A080069",
            summary: "pyramid orbit from 2: reflect-tree ∘ grow ∘ reflect-bits",
            build: orbit!(2, pyramid_step),
        },
        SequenceDef {
            name: "A080070",
            summary: "the A080069 orbit in binary-digit form",
            build: || {
                Box::new(Orbit::new(2u32, pyramid_step).map(|s| bits::binary_digits(&s)))
            },
        },
        SequenceDef {
            name: "A122229",
            summary: "grow ∘ row-shuffle from 2",
            build: orbit!(2, |s| grow(&row_shuffle(s))),
        },
        SequenceDef {
            name: "A122232",
            summary: "grow ∘ row-shuffle from 42",
            build: orbit!(42, |s| grow(&row_shuffle(s))),
        },
        SequenceDef {
            name: "A122235",
            summary: "grow ∘ row-shuffle from 44",
            build: orbit!(44, |s| grow(&row_shuffle(s))),
        },
        SequenceDef {
            name: "A122239",
            summary: "grow ∘ row-shuffle from 52",
            build: orbit!(52, |s| grow(&row_shuffle(s))),
        },
        SequenceDef {
            name: "A122242",
            summary: "grow ∘ reflect-zigzag-a from 42",
            build: orbit!(42, |s| grow(&reflect_zigzag_a(s))),
        },
        SequenceDef {
            name: "A122245",
            summary: "grow ∘ reflect-zigzag-a from 44",
            build: orbit!(44, |s| grow(&reflect_zigzag_a(s))),
        },
        SequenceDef {
            name: "A179755",
            summary: "grow ∘ reflect-zigzag-a from 50",
            build: orbit!(50, |s| grow(&reflect_zigzag_a(s))),
        },
        SequenceDef {
            name: "A179757",
            summary: "grow ∘ reflect-zigzag-a from 56",
            build: orbit!(56, |s| grow(&reflect_zigzag_a(s))),
        },
        SequenceDef {
            name: "kreweras-pyramid",
            summary: "grow ∘ kreweras from 2",
            build: orbit!(2, |s| grow(&kreweras(s))),
        },
        SequenceDef {
            name: "A179417",
            summary: "rows of Legendre symbols (i/65537) as bits",
            build: legendre_rows,
        },
        SequenceDef {
            name: "A179418",
            summary: "popcount of the A179417 rows",
            build: || {
                Box::new(legendre_rows().map(|row| BigUint::from(bits::popcount(&row))))
            },
        },
        SequenceDef {
            name: "A110240",
            summary: "rule 30 from a single cell",
            build: || automaton::rule_orbit(automaton::rule30, 1),
        },
        SequenceDef {
            name: "A265281",
            summary: "rule 86 from a single cell",
            build: || automaton::rule_orbit(automaton::rule86, 1),
        },
        SequenceDef {
            name: "A267357",
            summary: "rule 124 from a single cell",
            build: || automaton::rule_orbit(automaton::rule124, 1),
        },
        SequenceDef {
            name: "A038184",
            summary: "rule 150 from a single cell",
            build: || automaton::rule_orbit(automaton::rule150, 1),
        },
        SequenceDef {
            name: "A327971",
            summary: "rule 30 XOR rule 86",
            build: || {
                xor_stream(
                    automaton::rule_orbit(automaton::rule30, 1),
                    automaton::rule_orbit(automaton::rule86, 1),
                )
            },
        },
        SequenceDef {
            name: "A327972",
            summary: "rule 30 XOR rule 150",
            build: || {
                xor_stream(
                    automaton::rule_orbit(automaton::rule30, 1),
                    automaton::rule_orbit(automaton::rule150, 1),
                )
            },
        },
        SequenceDef {
            name: "A327973",
            summary: "rule 30 XOR its own previous row shifted",
            build: automaton::rule30_trail_xor,
        },
        SequenceDef {
            name: "A327976",
            summary: "rule 30 XOR the shifted rule 86 row one step behind",
            build: automaton::rule30_rule86_trail_xor,
        },
        SequenceDef {
            name: "A328103",
            summary: "rule 124 XOR rule 30",
            build: || {
                xor_stream(
                    automaton::rule_orbit(automaton::rule124, 1),
                    automaton::rule_orbit(automaton::rule30, 1),
                )
            },
        },
        SequenceDef {
            name: "A328104",
            summary: "rule 30 rows OR-dilated by their own shift",
            build: automaton::rule30_dilated,
        },
        SequenceDef {
            name: "A328111",
            summary: "rule 124 from a single cell OR the A080069 pyramid from 0",
            build: || {
                or_stream(
                    automaton::rule_orbit(automaton::rule124, 1),
                    Box::new(Orbit::new(0u32, pyramid_step)),
                )
            },
        },
    ];

pub fn catalog() -> &'static [SequenceDef] {
    CATALOG
}

/// Look a sequence up by catalog name.
pub fn by_name(name: &str) -> Option<TermStream> {
    catalog().iter().find(|def| def.name == name).map(|def| def.build())
}
