//! Serialization tests: holders are transparent, optionals are options,
//! expecteds are results

use serde_json::json;

use vessel::*;

#[test]
fn holder_serializes_as_its_payload() -> anyhow::Result<()> {
    let h = Holder::<Val<Vec<u8>>>::new(vec![1, 2]);
    assert_eq!(serde_json::to_value(&h)?, json!([1, 2]));

    let back: Holder<Arr<u8, 2>> = serde_json::from_str("[3, 4]")?;
    assert_eq!(*back, [3, 4]);

    let n = 5;
    let by_ref = Holder::<Ref<'_, i32>>::new(&n);
    assert_eq!(serde_json::to_string(&by_ref)?, "5");
    Ok(())
}

#[test]
fn optional_serializes_as_option() -> anyhow::Result<()> {
    let some = Optional::<Val<String>>::some("x".to_owned());
    assert_eq!(serde_json::to_value(&some)?, json!("x"));
    assert_eq!(serde_json::to_value(Optional::<Val<u8>>::none())?, json!(null));

    let parsed: Optional<Val<u8>> = serde_json::from_str("null")?;
    assert_eq!(parsed, NULL);
    let parsed: Optional<Val<u8>> = serde_json::from_str("7")?;
    assert!(parsed.contains(&7u8));
    Ok(())
}

#[test]
fn expected_serializes_as_result() -> anyhow::Result<()> {
    let ok = Expected::<Val<i32>, Val<String>>::ok(1);
    assert_eq!(serde_json::to_value(&ok)?, json!({ "Ok": 1 }));
    let err = Expected::<Val<i32>, Val<String>>::from_error("no".into());
    assert_eq!(serde_json::to_value(&err)?, json!({ "Err": "no" }));

    let back: Expected<Val<i32>, Val<String>> = serde_json::from_value(json!({ "Err": "no" }))?;
    assert_eq!(back, err);
    Ok(())
}

#[test]
fn markers_round_trip() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_value(UNIT)?, json!(null));
    let unit: Unit = serde_json::from_str("null")?;
    assert_eq!(unit, UNIT);
    let null: Null = serde_json::from_str("null")?;
    assert_eq!(null, NULL);
    let void: Optional<Void> = serde_json::from_str("null")?;
    assert!(!void.to_bool());
    Ok(())
}
