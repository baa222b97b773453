//! Property-based tests for the encoder and its derived views.
//!
//! Values are drawn from `u64`; bases cover the degenerate bases 0 and 1, small
//! bases, and bases large enough that most values are a single digit.

use cantor_canonical::{
    checked_eval_cnf, cnf, cnf_coeff, eval_cnf, BigUint, Cnf, CnfAssoc, CnfRecursion,
    ValueArithmetic,
};
use proptest::prelude::*;

fn any_base() -> impl Strategy<Value = u64> {
    prop_oneof![Just(0u64), Just(1u64), 2u64..=16, 17u64..=1_000_000, any::<u64>()]
}

// =============================================================================
// Encoder invariants
// =============================================================================

proptest! {
    /// eval(cnf(b, o)) = o
    #[test]
    fn prop_round_trip(base in any_base(), value: u64) {
        let form = cnf(&base, &value);
        prop_assert_eq!(eval_cnf(&base, form.entries()), value);
    }

    /// Encoder output always passes validation and never overflows.
    #[test]
    fn prop_encoded_forms_revalidate(base in any_base(), value: u64) {
        let form = cnf(&base, &value);
        prop_assert_eq!(checked_eval_cnf(&base, form.entries()), Some(value));
        prop_assert_eq!(Cnf::from_entries(base, form.entries().to_vec()), Ok(form));
    }

    /// cnf(b, o) is empty iff o = 0
    #[test]
    fn prop_empty_iff_zero(base in any_base(), value: u64) {
        prop_assert_eq!(cnf(&base, &value).is_empty(), value == 0);
    }

    /// Exponents strictly decrease.
    #[test]
    fn prop_exponents_sorted(base in any_base(), value: u64) {
        let form = cnf(&base, &value);
        let exponents: Vec<u64> = form.exponents().copied().collect();
        for pair in exponents.windows(2) {
            prop_assert!(pair[0] > pair[1], "{:?}", exponents);
        }
    }

    /// 0 < c, and c < b when b > 1.
    #[test]
    fn prop_coefficients_bounded(base in any_base(), value: u64) {
        for c in cnf(&base, &value).coefficients() {
            prop_assert!(*c > 0);
            if base > 1 {
                prop_assert!(*c < base);
            }
        }
    }

    /// Every exponent is at most log_b(o), and the leading one equals it.
    #[test]
    fn prop_exponents_bounded_by_log(base in any_base(), value in 1u64..) {
        let form = cnf(&base, &value);
        let log = <u64 as ValueArithmetic>::log(&base, &value);
        prop_assert_eq!(form.leading().map(|e| e.exponent), Some(log));
        for e in form.exponents() {
            prop_assert!(*e <= log);
        }
    }

    /// Bases 0 and 1 give the single term (0, o).
    #[test]
    fn prop_degenerate_collapse(base in 0u64..=1, value in 1u64..) {
        let form = cnf(&base, &value);
        prop_assert_eq!(form.len(), 1);
        prop_assert_eq!(form.entries()[0].exponent, 0);
        prop_assert_eq!(form.entries()[0].coefficient, value);
    }

    /// Base two terms are the set bits.
    #[test]
    fn prop_base_two_is_binary(value: u64) {
        let form = cnf(&2u64, &value);
        prop_assert_eq!(form.len() as u32, value.count_ones());
        for entry in form.iter() {
            prop_assert!(value & (1 << entry.exponent) != 0);
        }
    }
}

// =============================================================================
// Recursion
// =============================================================================

proptest! {
    /// Each remainder is strictly smaller than the value it came from.
    #[test]
    fn prop_remainder_decreases(base in any_base(), value: u64) {
        let recursion = CnfRecursion::new(base);
        for step in recursion.descent(value) {
            let step = step.unwrap();
            prop_assert!(step.remainder < step.value);
        }
    }

    /// The fold built by prepending leading terms equals the encoder output.
    #[test]
    fn prop_fold_matches_encoder(base in any_base(), value: u64) {
        let recursion = CnfRecursion::new(base);
        let folded = recursion
            .fold(value, Vec::new(), |step, mut rest| {
                rest.insert(0, step.entry.clone());
                rest
            })
            .unwrap();
        prop_assert_eq!(folded, cnf(&base, &value).into_entries());
    }
}

// =============================================================================
// Lookup views
// =============================================================================

proptest! {
    /// coeff(e) = c iff (e, c) is a term; zero elsewhere.
    #[test]
    fn prop_lookup_consistency(base in any_base(), value: u64, exponent in 0u64..70) {
        let form = cnf(&base, &value);
        let coeff = cnf_coeff(&base, &value);
        let assoc = CnfAssoc::new(&base, &value);

        for entry in form.iter() {
            prop_assert_eq!(coeff.get(&entry.exponent), entry.coefficient);
            prop_assert_eq!(assoc.lookup(&entry.exponent), Some(&entry.coefficient));
        }
        let is_term = form.exponents().any(|e| *e == exponent);
        prop_assert_eq!(assoc.contains_exponent(&exponent), is_term);
        if !is_term {
            prop_assert_eq!(coeff.get(&exponent), 0);
            prop_assert_eq!(assoc.lookup(&exponent), None);
        }
    }

    /// The support is exactly the exponent set.
    #[test]
    fn prop_support_is_exponent_set(base in any_base(), value: u64) {
        let form = cnf(&base, &value);
        let mut exponents: Vec<u64> = form.exponents().copied().collect();
        exponents.reverse();
        let support: Vec<u64> = cnf_coeff(&base, &value).support().copied().collect();
        prop_assert_eq!(support, exponents);
    }
}

// =============================================================================
// Arbitrary precision agrees with u64
// =============================================================================

proptest! {
    #[test]
    fn prop_bigint_agrees(base in any_base(), value: u64) {
        let narrow = cnf(&base, &value);
        let wide = cnf(&BigUint::from(base), &BigUint::from(value));
        prop_assert_eq!(narrow.len(), wide.len());
        for (n, w) in narrow.iter().zip(wide.iter()) {
            prop_assert_eq!(BigUint::from(n.exponent), w.exponent.clone());
            prop_assert_eq!(BigUint::from(n.coefficient), w.coefficient.clone());
        }
    }
}
