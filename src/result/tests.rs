//! Tests for `Expected`.

use super::*;
use crate::error::BadResultAccess;
use crate::foundation::{digest, Unit};
use crate::holder::{Arr, Holder, Mut, Ref, Val, Void};
use core::cell::Cell;
use std::io::ErrorKind;

type Parsed = Expected<Val<i32>, Val<String>>;

#[test]
fn construction_picks_the_state() {
    let ok = Parsed::ok(1);
    assert!(ok.has_value() && !ok.is_error());
    let err = Parsed::from_error("bad".into());
    assert!(err.is_error());
    assert_eq!(err.err().map(String::as_str), Some("bad"));
    assert_eq!(err.get(), None);

    let via_unexpected: Parsed = make_unexpected::<Val<&str>>("worse").into();
    assert!(via_unexpected.contains_error("worse"));
    let via_holder: Parsed = Holder::<Val<u8>>::new(3).into();
    assert!(via_holder.contains(&3));
}

#[test]
fn same_type_on_both_sides_is_unambiguous() {
    let ok = Expected::<Val<i32>, Val<i32>>::ok(4);
    let err = Expected::<Val<i32>, Val<i32>>::from_error(4);
    assert_ne!(ok, err);
    assert_eq!(ok, Holder::<Val<i32>>::new(4));
    assert_eq!(err, make_unexpected::<Val<i32>>(4));
    assert_ne!(ok, make_unexpected::<Val<i32>>(4));
}

#[test]
fn checked_access() {
    let err = Parsed::from_error("x".into());
    assert_eq!(err.value(), Err(BadResultAccess));
    assert_eq!(err.clone().into_value(), Err(BadResultAccess));
    assert_eq!(err.error(), "x");
    assert_eq!(unsafe { err.error_unchecked() }, "x");
    assert_eq!(err.error_or("y"), "x");

    let mut ok = Parsed::ok(5);
    *ok.value_mut().unwrap() += 1;
    assert_eq!(unsafe { *ok.get_unchecked() }, 6);
    assert_eq!(ok.clone().error_or("none"), "none");
    assert_eq!(ok.value_or(0), 6);
}

#[test]
#[should_panic(expected = "OK state")]
fn error_on_value_panics() {
    let ok = Parsed::ok(1);
    let _ = ok.error();
}

#[test]
fn transitions_never_leave_both_or_neither() {
    let mut e = Parsed::ok(1);
    e.assign_error("first".into());
    assert!(e.is_error());
    e.assign_error("second".into());
    assert!(e.contains_error("second"));
    e.assign(2);
    assert!(e.contains(&2));
    e.emplace_error("third".into()).update(|s| s.push('!'));
    assert!(e.contains_error("third!"));
    *e.emplace(7).get_mut() += 1;
    assert!(e.contains(&8));

    e.assign_unexpected(make_unexpected::<Val<&str>>("u"));
    assert!(e.contains_error("u"));
    e.assign_from(Expected::<Val<u8>, Val<&str>>::ok(9));
    assert!(e.contains(&9));
}

#[test]
fn swap_covers_every_state_pair() {
    let mut a = Parsed::ok(1);
    let mut b = Parsed::from_error("e".into());
    swap(&mut a, &mut b);
    assert!(a.contains_error("e") && b.contains(&1));

    let mut c = Parsed::ok(2);
    b.swap(&mut c);
    assert!(b.contains(&2) && c.contains(&1));

    let mut d = Parsed::from_error("f".into());
    a.swap(&mut d);
    assert!(a.contains_error("f") && d.contains_error("e"));
}

#[test]
fn and_then_short_circuits_on_error() {
    let calls = Cell::new(0);
    let step = |v: i32| {
        calls.set(calls.get() + 1);
        Parsed::ok(v + 1)
    };
    assert!(Parsed::ok(1).and_then(step).contains(&2));
    assert!(Parsed::from_error("e".into()).and_then(step).contains_error("e"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn or_else_short_circuits_on_value() {
    let calls = Cell::new(0);
    let recover = |e: String| {
        calls.set(calls.get() + 1);
        Expected::<Val<i32>, Val<usize>>::ok(i32::try_from(e.len()).unwrap_or(i32::MAX))
    };
    assert!(Parsed::from_error("abc".into()).or_else(recover).contains(&3));
    assert!(Parsed::ok(9).or_else(recover).contains(&9));
    assert_eq!(calls.get(), 1);
}

#[test]
fn transform_maps_one_side() {
    let ok = Parsed::ok(2).transform(|v| v * 10).transform_error(|e| e.len());
    assert!(ok.contains(&20));
    let err = Parsed::from_error("four".into())
        .transform(|v| v * 10)
        .transform_error(|e| e.len());
    assert!(err.contains_error(&4usize));
}

#[test]
fn views_borrow_both_sides() {
    let mut e = Expected::<Arr<u8, 2>, Val<ErrorKind>>::ok([1, 2]);
    {
        let view: Expected<Ref<'_, [u8; 2]>, Ref<'_, ErrorKind>> = e.as_ref();
        assert!(view.contains(&[1u8, 2]));
    }
    if let Some(arr) = e.as_mut().get_mut() {
        arr[1] = 5;
    }
    assert!(e.contains(&[1u8, 5]));

    let mut code = ErrorKind::NotFound;
    let mut by_ref = Expected::<Val<u8>, Mut<'_, ErrorKind>>::from_error(&mut code);
    if let Some(kind) = by_ref.err_mut() {
        *kind = ErrorKind::TimedOut;
    }
    assert_eq!(code, ErrorKind::TimedOut);
}

#[test]
fn void_value_side() {
    let done = Expected::<Void>::ok(Unit);
    assert_eq!(done.value(), Ok(&Unit));
    let failed = Expected::<Void>::from_error(ErrorKind::Interrupted);
    assert_eq!(failed.err(), Some(&ErrorKind::Interrupted));
    assert!(done.and_then(|_| Expected::<Val<u8>>::ok(1)).contains(&1u8));
}

#[test]
fn hash_distinguishes_states() {
    let ok = Expected::<Val<u32>, Val<u32>>::ok(1);
    let err = Expected::<Val<u32>, Val<u32>>::from_error(1);
    assert_ne!(digest(&ok), digest(&err));
    assert_eq!(digest(&ok), digest(&ok.clone()));
    assert_eq!(digest(&make_unexpected::<Val<u32>>(1)), digest(&1u32));
}

#[test]
fn conversions() {
    let wide: Expected<Val<i64>, Val<String>> = Parsed::ok(3).convert();
    assert!(wide.contains(&3i64));
    let narrow =
        Expected::<Val<i64>, Val<u8>>::ok(1 << 40).try_convert::<Val<i32>, Val<u16>>();
    assert!(narrow.is_err());
    let kept = Expected::<Val<i64>, Val<u8>>::from_error(7)
        .try_convert::<Val<i32>, Val<u16>>()
        .map(Expected::into_result);
    assert_eq!(kept, Ok(Err(7)));

    let from_result: Parsed = Err::<i32, String>("r".into()).into();
    assert_eq!(from_result.into_result(), Err("r".to_owned()));
    let holders = Parsed::ok(1).into_holders();
    assert!(holders.is_ok());
}

#[test]
fn debug_format() {
    assert_eq!(format!("{:?}", Parsed::ok(1)), "Value(1)");
    assert_eq!(format!("{:?}", Parsed::from_error("e".into())), "Error(\"e\")");
}
