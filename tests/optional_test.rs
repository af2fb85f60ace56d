//! Integration tests for `Optional`

use std::cell::Cell;
use std::collections::HashSet;
use std::ptr;

use vessel::*;

#[test]
fn assign_value_then_null() {
    let mut o = Optional::<Val<i32>>::default();
    assert!(!o.has_value());
    o.assign(5);
    assert_eq!(o.value(), Ok(&5));
    o.assign_null(NULL);
    assert!(!o.has_value());
}

#[test]
fn consuming_conversions_are_public() {
    let o = Optional::<Val<u8>>::some(9);
    assert_eq!(o.into_holder().map(Holder::into_inner), Some(9));
    assert_eq!(o.into_option(), Some(9));
    let wide: Optional<Val<u32>> = o.convert();
    assert_eq!(wide.value_or(0u32), 9);
    assert_eq!(Optional::<Val<u8>>::none().into_option(), None);
}

#[test]
fn reset_and_emplace() {
    let mut o = Optional::<Val<Vec<u8>>>::some(vec![1]);
    o.reset();
    assert!(!o.has_value());
    o.emplace(vec![2, 3]).push(4);
    assert!(o.has_value());
    assert_eq!(o.value(), Ok(&vec![2, 3, 4]));
}

#[test]
fn empty_access_is_a_reported_error() -> anyhow::Result<()> {
    fn first_char(o: &Optional<Val<String>>) -> anyhow::Result<char> {
        let text = o.value()?;
        Ok(text.chars().next().unwrap_or(' '))
    }

    assert_eq!(first_char(&Optional::some("hi".to_owned()))?, 'h');
    let err = first_char(&Optional::none()).unwrap_err();
    assert!(err.downcast_ref::<BadOptionAccess>().is_some());
    assert_eq!(err.to_string(), "bad access of empty Optional");
    Ok(())
}

#[test]
fn null_pointer_is_empty() {
    let empty = unsafe { Optional::<Ref<'_, u32>>::from_ptr(ptr::null()) };
    assert!(!empty.has_value());
    assert_eq!(empty, NULL);

    let n = 9u32;
    let p: *const u32 = &n;
    let present = unsafe { Optional::<Ref<'_, u32>>::from_ptr(p) };
    assert!(present.has_value());
    assert!(ptr::eq(present.as_ptr(), p));
    assert_eq!(present, p);
}

#[test]
fn reference_option_rebinds_on_assign() {
    let a = 1;
    let b = 2;
    let mut o = Optional::<Ref<'_, i32>>::from(&a);
    o.assign(&b);
    assert!(ptr::eq(o.as_ptr(), &b));
    assert_eq!((a, b), (1, 2));
}

#[test]
fn and_then_on_empty_short_circuits() {
    let calls = Cell::new(0);
    let out = Optional::<Val<i32>>::none().and_then(|v| {
        calls.set(calls.get() + 1);
        Optional::<Val<i32>>::some(v)
    });
    assert!(out.is_none());
    assert_eq!(calls.get(), 0);
}

#[test]
fn transform_on_present_runs_once() {
    let calls = Cell::new(0);
    let out = Optional::<Val<i32>>::some(4).transform(|v| {
        calls.set(calls.get() + 1);
        v.to_string()
    });
    assert_eq!(out.value().map(String::as_str), Ok("4"));
    assert_eq!(calls.get(), 1);

    let empty = Optional::<Val<i32>>::none().transform(|v| v.to_string());
    assert_eq!(empty, Optional::<Val<String>>::none());
}

#[test]
fn or_else_and_value_or() {
    let fallback = Optional::<Val<&str>>::none().or_else(|| Optional::some("fallback"));
    assert_eq!(fallback.value(), Ok(&"fallback"));
    assert_eq!(Optional::<Val<String>>::none().value_or("d"), "d");
}

#[test]
fn void_option_counts_presence() {
    let mut flag = Optional::<Void>::none();
    assert!(!flag.to_bool());
    flag.emplace(Unit::discard(("any", 1)));
    assert!(bool::from(flag));
}

#[test]
fn usable_as_hash_keys() {
    let mut set = HashSet::new();
    set.insert(Optional::<Val<u8>>::some(1));
    set.insert(Optional::<Val<u8>>::none());
    set.insert(Optional::<Val<u8>>::some(1));
    assert_eq!(set.len(), 2);
    assert!(set.contains(&Optional::none()));
}

#[test]
fn sorting_places_empties_first() {
    let mut v = vec![
        Optional::<Val<i32>>::some(3),
        Optional::none(),
        Optional::some(-1),
        Optional::none(),
    ];
    v.sort();
    let raw: Vec<Option<i32>> = v.into_iter().map(Optional::into_option).collect();
    assert_eq!(raw, vec![None, None, Some(-1), Some(3)]);
}

#[test]
fn array_option_views() {
    let mut o = Optional::<Arr<i32, 3>>::some([1, 2, 3]);
    if let Some(arr) = o.get_mut() {
        arr.reverse();
    }
    let copied = o.as_ref().copied();
    assert_eq!(copied.into_option(), Some([3, 2, 1]));
}
