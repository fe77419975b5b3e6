//! Property tests against `num-bigint` as the reference implementation.
//!
//! Every operation is run on `I256` and on the same values as `BigInt`; the
//! results must agree exactly, and wherever the exact result leaves the
//! 256-bit range the checked `I256` operation must say so.

use int256::{I256, U256};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::One;
use proptest::prelude::*;

// -- Strategies --

/// Values spread over the whole range plus a dense band of small ones.
fn any_i256() -> impl Strategy<Value = I256> {
    prop_oneof![
        any::<i64>().prop_map(I256::from),
        (any::<u128>(), any::<bool>()).prop_map(|(v, neg)| I256::from_parts(I256::from(v).magnitude(), neg)),
        (any::<[u64; 4]>(), any::<bool>()).prop_map(|(w, neg)| I256::from_parts(U256(w), neg)),
        (0usize..256, any::<bool>()).prop_map(|(bits, neg)| {
            I256::from_parts(U256::MAX >> bits, neg)
        }),
        Just(I256::ZERO),
    ]
}

fn fit(value: BigInt) -> Option<I256> {
    I256::from_big(&value).ok()
}

fn canonical(value: I256) -> I256 {
    assert!(!(value.is_zero() && value.is_negative()), "negative zero");
    value
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    #[test]
    fn add_matches_reference(a in any_i256(), b in any_i256()) {
        let got = a.checked_add(b).map(canonical);
        prop_assert_eq!(got, fit(a.to_big() + b.to_big()));
    }

    #[test]
    fn sub_matches_reference(a in any_i256(), b in any_i256()) {
        let got = a.checked_sub(b).map(canonical);
        prop_assert_eq!(got, fit(a.to_big() - b.to_big()));
    }

    #[test]
    fn mul_matches_reference(a in any_i256(), b in any_i256()) {
        let got = a.checked_mul(b).map(canonical);
        prop_assert_eq!(got, fit(a.to_big() * b.to_big()));
    }

    #[test]
    fn quo_rem_match_reference(a in any_i256(), b in any_i256()) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.quo_rem(b);
        prop_assert_eq!(canonical(q), fit(a.to_big() / b.to_big()).unwrap());
        prop_assert_eq!(canonical(r), fit(a.to_big() % b.to_big()).unwrap());
        prop_assert_eq!(a / b, q);
        prop_assert_eq!(a % b, r);
    }

    #[test]
    fn shl_matches_reference(a in any_i256(), n in 0usize..300) {
        let got = a.checked_shl(n).map(canonical);
        prop_assert_eq!(got, fit(a.to_big() << n));
    }

    #[test]
    fn shr_matches_reference(a in any_i256(), n in 0usize..300) {
        let got = canonical(a >> n);
        let expected = a.to_big().div_floor(&(BigInt::one() << n));
        prop_assert_eq!(Some(got), fit(expected));
    }

    #[test]
    fn and_matches_twos_complement(a in any_i256(), b in any_i256()) {
        let got = a.checked_and(b).map(canonical);
        prop_assert_eq!(got, fit(a.to_big() & b.to_big()));
    }

    #[test]
    fn or_matches_twos_complement(a in any_i256(), b in any_i256()) {
        let got = canonical(a | b);
        prop_assert_eq!(Some(got), fit(a.to_big() | b.to_big()));
    }

    #[test]
    fn cmp_matches_reference(a in any_i256(), b in any_i256()) {
        prop_assert_eq!(a.cmp(&b), a.to_big().cmp(&b.to_big()));
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn sqrt_is_floor(a in any_i256()) {
        let a = a.abs();
        let r = a.sqrt().to_big();
        let x = a.to_big();
        prop_assert!(&r * &r <= x);
        prop_assert!((&r + 1) * (&r + 1) > x);
    }

    #[test]
    fn modular_exp_matches_reference(a in any_i256(), e in 0u32..1000, m in any_i256()) {
        prop_assume!(!m.is_zero());
        let e = I256::from(e);
        let modulus = BigInt::from(m.to_big().magnitude().clone());
        let expected = a.to_big().modpow(&e.to_big(), &modulus);
        prop_assert_eq!(a.exp(e, Some(m)), Ok(fit(expected).unwrap()));
    }

    #[test]
    fn text_round_trip(a in any_i256()) {
        prop_assert_eq!(a.to_dec_string(), a.to_big().to_string());
        prop_assert_eq!(a.to_hex_string(), format!("{:#x}", a.to_big()));
        prop_assert_eq!(a.to_dec_string().parse::<I256>(), Ok(a));
        prop_assert_eq!(a.to_hex_string().parse::<I256>(), Ok(a));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip(a in any_i256()) {
        let json = serde_json::to_string(&a).unwrap();
        prop_assert_eq!(serde_json::from_str::<I256>(&json).unwrap(), a);

        let bare = a.to_dec_string();
        prop_assert_eq!(serde_json::from_str::<I256>(&bare).unwrap(), a);
    }
}

#[test]
fn one_past_the_boundary_is_rejected() {
    let over = I256::MAX.to_big() + 1;
    assert!(I256::from_big(&over).unwrap_err().is_overflow());
    assert!(I256::from_big(&-over.clone()).unwrap_err().is_overflow());
    assert!(I256::from_dec_str(&over.to_string()).unwrap_err().is_overflow());
    assert!(I256::from_hex_str(&format!("{over:#x}")).unwrap_err().is_overflow());
}

#[test]
fn concrete_scenarios() {
    assert_eq!(I256::from(10) + I256::from(-7), I256::from(3));
    assert_eq!(I256::from(-10) + I256::from(-7), I256::from(-17));
    assert_eq!("-0x0".parse::<I256>(), Ok(I256::ZERO));
    assert!("0x01".parse::<I256>().unwrap_err().is_format());
    assert_eq!(
        I256::from(10).exp(I256::from(3), Some(I256::from(3))),
        Ok(I256::from(1000 % 3))
    );
    assert_eq!(I256::from(-10) >> 4usize, I256::from(-1));
    assert_eq!(I256::from(-32) >> 4usize, I256::from(-2));
    assert_eq!(I256::MIN >> 300usize, I256::MINUS_ONE);
}
