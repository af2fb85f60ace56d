//! Property tests for the wrapper laws

use proptest::prelude::*;
use proptest::test_runner::{TestCaseResult, TestRunner};
use std::ptr;

use vessel::*;

fn run_proptest<S, F>(strategy: S, test: F)
where
    S: Strategy,
    F: Fn(S::Value) -> TestCaseResult,
{
    let mut runner = TestRunner::default();
    runner.run(&strategy, test).unwrap();
}

fn optional_of(
    values: impl Strategy<Value = i64>,
) -> impl Strategy<Value = Optional<Val<i64>>> {
    proptest::option::of(values).prop_map(Optional::<Val<i64>>::from)
}

fn expected_of() -> impl Strategy<Value = Expected<Val<i64>, Val<String>>> {
    prop_oneof![
        any::<i64>().prop_map(Expected::<Val<i64>, Val<String>>::ok),
        "[a-z]{0,8}".prop_map(Expected::<Val<i64>, Val<String>>::from_error),
    ]
}

#[test]
fn holder_round_trip_and_copy() {
    run_proptest(any::<i64>(), |v| {
        let h = Holder::<Val<i64>>::new(v);
        let copy = h;
        prop_assert_eq!(*h, v);
        prop_assert_eq!(copy, h);
        Ok(())
    });
}

#[test]
fn holder_swap_exchanges() {
    run_proptest((any::<String>(), any::<String>()), |(a, b)| {
        let mut x = Holder::<Val<String>>::new(a.clone());
        let mut y = Holder::<Val<String>>::new(b.clone());
        x.swap(&mut y);
        prop_assert_eq!(x.get(), &b);
        prop_assert_eq!(y.get(), &a);
        Ok(())
    });
}

#[test]
fn ref_holder_swap_is_by_address() {
    run_proptest((any::<u32>(), any::<u32>()), |(a, b)| {
        let mut x = Holder::<Ref<'_, u32>>::new(&a);
        let mut y = Holder::<Ref<'_, u32>>::new(&b);
        x.swap(&mut y);
        prop_assert!(ptr::eq(x.as_ptr(), &b));
        prop_assert!(ptr::eq(y.as_ptr(), &a));
        Ok(())
    });
}

#[test]
fn void_holders_ignore_arguments() {
    run_proptest((any::<i32>(), any::<String>()), |args| {
        prop_assert_eq!(Holder::<Void>::discard(args), Holder::<Void>::default());
        Ok(())
    });
}

#[test]
fn array_swap_is_elementwise() {
    run_proptest((any::<[u16; 6]>(), any::<[u16; 6]>()), |(a, b)| {
        let mut x = Holder::<Arr<u16, 6>>::new(a);
        let mut y = Holder::<Arr<u16, 6>>::new(b);
        x.swap(&mut y);
        for i in 0..6 {
            prop_assert_eq!(x[i], b[i]);
            prop_assert_eq!(y[i], a[i]);
        }
        Ok(())
    });
}

proptest! {
    #[test]
    fn optional_mirrors_std_option(raw in proptest::option::of(any::<i64>())) {
        let o = Optional::<Val<i64>>::from(raw);
        prop_assert_eq!(o.has_value(), raw.is_some());
        prop_assert_eq!(o.value().ok(), raw.as_ref());
        prop_assert_eq!(o.transform(|v| v / 2).into_option(), raw.map(|v| v / 2));
        prop_assert_eq!(o.into_option(), raw);
    }

    #[test]
    fn optional_order_matches_std(a in optional_of(-50i64..50), b in optional_of(-50i64..50)) {
        let expected = a.into_option().cmp(&b.into_option());
        prop_assert_eq!(a.cmp(&b), expected);
        prop_assert_eq!(a == b, expected.is_eq());
    }

    #[test]
    fn optional_emplace_then_reset(v in any::<i64>()) {
        let mut o = Optional::<Val<i64>>::none();
        o.emplace(v);
        prop_assert_eq!(o.value(), Ok(&v));
        o.reset();
        prop_assert_eq!(o.value(), Err(BadOptionAccess));
    }

    #[test]
    fn expected_mirrors_std_result(e in expected_of()) {
        let raw = e.clone().into_result();
        prop_assert_eq!(e.has_value(), raw.is_ok());
        prop_assert_eq!(e.get(), raw.as_ref().ok());
        prop_assert_eq!(e.err(), raw.as_ref().err());
        prop_assert_eq!(
            e.clone().transform(|v| v.wrapping_add(1)).into_result(),
            raw.clone().map(|v| v.wrapping_add(1))
        );
        prop_assert_eq!(Expected::<Val<i64>, Val<String>>::from(raw), e);
    }

    #[test]
    fn expected_equality_rule(a in expected_of(), b in expected_of()) {
        let same = match (a.get(), b.get(), a.err(), b.err()) {
            (Some(x), Some(y), _, _) => x == y,
            (None, None, Some(x), Some(y)) => x == y,
            _ => false,
        };
        prop_assert_eq!(a == b, same);
        if same {
            prop_assert_eq!(digest(&a), digest(&b));
        }
    }
}
