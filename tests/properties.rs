//! Property-based tests over the public API.
//!
//! Uses proptest to exercise the invariants across randomly chosen
//! inputs: involutions stay involutions, size classes never leak, and
//! the growth operator keeps its arithmetic promises.

use num_bigint::BigUint;
use proptest::prelude::*;

use gatomorph::bits;
use gatomorph::codec::{codes_with_branches, is_tree_code};
use gatomorph::morph::Automorphism;
use gatomorph::sequence::grow;

/// A random balanced code: pick a size class, then a member.
fn tree_code() -> impl Strategy<Value = BigUint> {
    (0u64..7).prop_flat_map(|branches| {
        let class = codes_with_branches(branches);
        (0..class.len()).prop_map(move |i| class[i].clone())
    })
}

proptest! {
    /// grow adds exactly two bits.
    #[test]
    fn prop_grow_adds_two_bits(n in any::<u64>()) {
        let n = BigUint::from(n);
        prop_assert_eq!(grow(&n).bits(), n.bits() + 2);
    }

    /// grow is strictly monotone, hence injective.
    #[test]
    fn prop_grow_monotone(a in any::<u64>(), b in any::<u64>()) {
        prop_assume!(a < b);
        prop_assert!(grow(&BigUint::from(a)) < grow(&BigUint::from(b)));
    }

    /// grow sends balanced codes to balanced codes.
    #[test]
    fn prop_grow_preserves_balance(code in tree_code()) {
        prop_assert!(is_tree_code(&grow(&code)));
    }

    /// Both reflections undo themselves on balanced codes.
    #[test]
    fn prop_reflections_are_involutions(code in tree_code()) {
        let structural = gatomorph::morph::reflect_tree(&code);
        prop_assert_eq!(gatomorph::morph::reflect_tree(&structural), code.clone());
        let bitwise = gatomorph::morph::reflect_bits(&code);
        prop_assert_eq!(gatomorph::morph::reflect_bits(&bitwise), code);
    }

    /// Every automorphism keeps branch count and bit width.
    #[test]
    fn prop_size_class_preserved(code in tree_code(), which in 0usize..Automorphism::ALL.len()) {
        let transform = Automorphism::ALL[which];
        let image = transform.apply(&code);
        prop_assert!(is_tree_code(&image));
        prop_assert_eq!(bits::popcount(&image), bits::popcount(&code));
        prop_assert_eq!(image.bits(), code.bits());
    }

    /// bit_reverse undoes itself on odd numbers (trailing zeros never
    /// survive a reversal).
    #[test]
    fn prop_bit_reverse_involution_on_odd(n in any::<u64>()) {
        let n = BigUint::from(n | 1);
        prop_assert_eq!(bits::bit_reverse(&bits::bit_reverse(&n)), n);
    }

    /// The odd part is odd and carries all the popcount.
    #[test]
    fn prop_odd_part(n in 1u64..) {
        let n = BigUint::from(n);
        let odd = bits::odd_part(&n);
        prop_assert!(odd.bit(0));
        prop_assert_eq!(bits::popcount(&odd), bits::popcount(&n));
        prop_assert_eq!(odd << bits::trailing_zeros(&n), n);
    }

    /// The Jacobi symbol is completely multiplicative in its numerator.
    #[test]
    fn prop_jacobi_multiplicative(a in 0u64..2000, b in 0u64..2000, q in 1u64..500) {
        let q = BigUint::from(2 * q + 1);
        let lhs = bits::jacobi(&BigUint::from(a * b), &q);
        let rhs = bits::jacobi(&BigUint::from(a), &q) * bits::jacobi(&BigUint::from(b), &q);
        prop_assert_eq!(lhs, rhs);
    }

    /// Rule 150 is linear over XOR.
    #[test]
    fn prop_rule150_linear(a in any::<u64>(), b in any::<u64>()) {
        let a = BigUint::from(a);
        let b = BigUint::from(b);
        let lhs = gatomorph::automaton::rule150(&(&a ^ &b));
        let rhs = gatomorph::automaton::rule150(&a) ^ gatomorph::automaton::rule150(&b);
        prop_assert_eq!(lhs, rhs);
    }

    /// The Kreweras rewrite never leaves the size class of a code.
    #[test]
    fn prop_kreweras_stays_in_class(code in tree_code()) {
        let image = gatomorph::kreweras::kreweras(&code);
        prop_assert!(is_tree_code(&image));
        prop_assert_eq!(bits::popcount(&image), bits::popcount(&code));
    }
}
