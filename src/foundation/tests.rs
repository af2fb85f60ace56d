use super::*;
use core::mem;

#[test]
fn unit_is_zero_sized_and_always_equal() {
    assert_eq!(mem::size_of::<Unit>(), 0);
    assert_eq!(Unit::discard(vec![1, 2, 3]), Unit::discard("anything"));
    assert_eq!(Unit::discard(()), UNIT);
    assert!(Unit <= UNIT && Unit >= UNIT);
}

#[test]
fn unit_discard_drops_its_arguments() {
    use std::rc::Rc;

    let shared = Rc::new(5);
    let _ = Unit::discard(Rc::clone(&shared));
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn unit_produces_defaults() {
    assert_eq!(UNIT.produce::<u64>(), 0);
    assert_eq!(UNIT.produce::<String>(), "");
    assert_eq!(UNIT.produce::<Option<i8>>(), None);
}

#[test]
fn unit_hashes_identically() {
    assert_eq!(digest(&Unit), digest(&Unit::discard(17)));
}

#[test]
fn null_converts_to_null_pointers() {
    let a: *const String = NULL.into();
    let b: *mut [u8; 4] = NULL.into();
    assert!(a.is_null());
    assert!(b.is_null());
    assert!(Null.ptr::<i32>().is_null());
}

#[test]
fn null_matches_none() {
    assert_eq!(NULL.none::<i32>(), None);
    assert!(NULL == Option::<i32>::None);
    assert!(NULL != Some(3));
    assert!(NULL < Some(3));
}
