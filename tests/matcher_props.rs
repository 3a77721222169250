//! Property tests for the matcher engine's algebraic guarantees.
//!
//! Generated floats stay finite so a generated value always equals itself;
//! NaN behavior is pinned by unit tests instead.

use proptest::prelude::*;
// proptest's prelude also exports `any`, so the matcher constructors stay
// fully qualified throughout this file.
use standin::{matches, Stub, Value};

/// Arbitrary generator for scalar values.
fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        "[a-zA-Z0-9 _.-]{0,12}".prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(Value::from),
    ]
}

/// Arbitrary generator for value trees a few levels deep.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
            prop::collection::hash_map("[a-z]{1,6}", inner.clone(), 0..4)
                .prop_map(|m| Value::map(m)),
            prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(Value::Record),
        ]
    })
}

/// Arbitrary mapping with unique keys drawn from `[a-y]`, leaving `z` free
/// for superset tests.
fn arb_string_map() -> impl Strategy<Value = Value> {
    prop::collection::hash_map("[a-y]{1,6}", arb_leaf(), 0..5).prop_map(|m| Value::map(m))
}

/// Arbitrary generator for values no pattern matcher should accept.
fn arb_non_textual() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (-1.0e9..1.0e9f64).prop_map(Value::from),
        prop::collection::vec(arb_leaf(), 0..4).prop_map(Value::Seq),
        prop::collection::hash_map("[a-z]{1,6}", arb_leaf(), 0..4).prop_map(|m| Value::map(m)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The wildcard matches every value, null included.
    #[test]
    fn wildcard_matches_everything(v in arb_value()) {
        prop_assert!(matches(&Value::from(standin::any()), &v));
        prop_assert!(standin::any().matches(&v));
    }

    /// With no matcher on the expected side, matching is exactly deep
    /// structural equality.
    #[test]
    fn plain_values_match_by_equality(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(matches(&a, &b), a == b);
        prop_assert!(matches(&a, &a.clone()));
    }

    /// `eq` wraps a literal into an explicit matcher with identical meaning.
    #[test]
    fn eq_matcher_mirrors_equality(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(standin::eq(a.clone()).matches(&b), a == b);
    }

    /// xor of a matcher with itself never matches anything.
    #[test]
    fn xor_with_itself_never_matches(a in arb_value(), b in arb_value()) {
        let m = standin::xor(standin::eq(a.clone()), standin::eq(a));
        prop_assert!(!m.matches(&b));
    }

    /// The empty conjunction is vacuously true; the empty disjunction is
    /// unsatisfiable.
    #[test]
    fn empty_combinator_identities(v in arb_value()) {
        prop_assert!(standin::all_of(vec![]).matches(&v));
        prop_assert!(!standin::any_of(vec![]).matches(&v));
    }

    /// Pattern matchers refuse non-textual candidates outright.
    #[test]
    fn patterns_reject_non_text(pat in "[a-z]{0,5}", v in arb_non_textual()) {
        prop_assert!(!standin::regexp(&pat).matches(&v));
        prop_assert!(!standin::glob(&pat).matches(&v));
    }

    /// `contains` only ever matches sequences.
    #[test]
    fn contains_rejects_non_sequences(v in arb_value(), needle in arb_leaf()) {
        prop_assume!(v.as_sequence().is_none());
        prop_assert!(!standin::contains(needle).matches(&v));
    }

    /// A mapping satisfies its own keys expectation, with or without extra
    /// entries on the candidate side.
    #[test]
    fn keys_matches_self_and_supersets(m in arb_string_map()) {
        let matcher = standin::keys(m.clone());
        prop_assert!(matcher.matches(&m));

        if let Value::Map(mut entries) = m {
            entries.push((Value::from("z9"), Value::Null));
            prop_assert!(matcher.matches(&Value::Map(entries)));
        }
    }

    /// Appending a shadowed duplicate entry changes neither a mapping's
    /// identity nor what its keys expectation accepts.
    #[test]
    fn shadowed_entries_are_inert(m in arb_string_map()) {
        if let Value::Map(entries) = m.clone() {
            if let Some((key, _)) = entries.first().cloned() {
                let mut extended = entries;
                extended.push((key, Value::from("shadow")));
                let extended = Value::Map(extended);
                prop_assert_eq!(&m, &extended);
                prop_assert!(standin::keys(extended).matches(&m));
            }
        }
    }

    /// A recorded call satisfies every prefix of its own argument list, and
    /// nothing longer.
    #[test]
    fn stub_matches_every_prefix_of_a_call(vals in prop::collection::vec(arb_leaf(), 0..6)) {
        let mut stub = Stub::new();
        stub.invoke(vals.clone());
        for cut in 0..=vals.len() {
            prop_assert!(stub.called_with(&vals[..cut]));
        }
        prop_assert!(stub.called_with_exactly(&vals));
        prop_assert!(!stub.called_with(&[vals.clone(), vec![Value::Null]].concat()));
    }

    /// One-shot tuples drain in order before the default tuple takes over.
    #[test]
    fn returns_once_drains_in_order(
        tuples in prop::collection::vec(prop::collection::vec(arb_leaf(), 0..3), 0..5),
        default in prop::collection::vec(arb_leaf(), 0..3),
    ) {
        let mut stub = Stub::new();
        for tuple in &tuples {
            stub.returns_once(tuple.clone());
        }
        stub.returns(default.clone());

        for tuple in &tuples {
            prop_assert_eq!(&stub.invoke(vec![]), tuple);
        }
        prop_assert_eq!(stub.invoke(vec![]), default);
    }
}
