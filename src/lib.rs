//! Catalan automorphisms and 1-D cellular automata on arbitrary-precision
//! bit-string codes.
//!
//! A rooted binary forest is encoded as a nonnegative integer whose bits
//! form a totally balanced string, and structural rewrites of the forest
//! become bijections on those integers, computed directly on the bit
//! stream without ever materializing a tree:
//! - `bits` — the underlying integer primitives
//! - `codec` — the generic dual-stack decode/rewrite/encode scans
//! - `morph` — the named automorphism family (reflections, zigzag
//!   variants, the row-oriented shuffle)
//! - `kreweras` — the run-length rewrite inducing the Kreweras bijection
//! - `sequence` — the growth operator, lazy orbits, and the named catalog
//! - `automaton` — Wolfram-style rules as closed bitwise formulas
//! - `bfile` — the `<index> <value>` term-list exchange format
//!
//! Everything is pure and single-threaded; the only resource that grows
//! is integer magnitude, which is why `BigUint` carries all values.

pub mod automaton;
pub mod bfile;
pub mod bits;
pub mod codec;
pub mod diagnostic;
pub mod kreweras;
pub mod morph;
pub mod sequence;
pub mod span;

pub use morph::Automorphism;
pub use sequence::{grow, Orbit, TermStream};
