use fixed_bignum::{Number, CAPACITY};
use indoc::indoc;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Debug)]
struct Operands {
    minuend: Number,
    subtrahend: Number,
}

#[test]
fn test_serialize_significant_limbs() {
    let n = Number::from_u128(1 << 64 | 5);
    assert_eq!(serde_json::to_string(&n).unwrap(), "[5,1]");
    assert_eq!(serde_json::to_string(&Number::zero()).unwrap(), "[0]");

    // Limbs beyond len stay out of the output.
    let n = Number::from_raw_parts([7; CAPACITY], 1);
    assert_eq!(serde_json::to_string(&n).unwrap(), "[7]");
}

#[test]
fn test_serialize_invalid_len() {
    let n = Number::from_raw_parts([0; CAPACITY], 0);
    let err = serde_json::to_string(&n).unwrap_err();
    assert!(err.to_string().starts_with("length 0 outside of 1..="), "{}", err);
}

#[test]
fn test_struct() {
    let operands = Operands {
        minuend: Number::from_limbs(&[100, 200]).unwrap(),
        subtrahend: Number::from_u64(18446744073709551615),
    };
    let json = serde_json::to_string_pretty(&operands).unwrap();
    let expected = indoc! {"
        {
          \"minuend\": [
            100,
            200
          ],
          \"subtrahend\": [
            18446744073709551615
          ]
        }"
    };
    assert_eq!(json, expected);

    let back: Operands = serde_json::from_str(&json).unwrap();
    assert_eq!(back, operands);
}

#[test]
fn test_deserialize_normalizes() {
    let n: Number = serde_json::from_str("[9, 0, 0]").unwrap();
    assert_eq!(n.len(), 1);
    assert_eq!(n, Number::from_u64(9));

    let n: Number = serde_json::from_str("[0]").unwrap();
    assert!(n.is_zero());
}

#[test]
fn test_deserialize_rejects_empty() {
    let err = serde_json::from_str::<Number>("[]").unwrap_err();
    assert!(
        err.to_string().starts_with(&format!(
            "invalid length 0, expected a sequence of 1 to {} limbs",
            CAPACITY,
        )),
        "{}",
        err,
    );
}

#[test]
fn test_deserialize_rejects_too_many_limbs() {
    let full = vec![1u64; CAPACITY];
    let n: Number = serde_json::from_str(&serde_json::to_string(&full).unwrap()).unwrap();
    assert_eq!(n.len(), CAPACITY as i32);

    let over = vec![0u64; CAPACITY + 1];
    let err = serde_json::from_str::<Number>(&serde_json::to_string(&over).unwrap()).unwrap_err();
    assert!(
        err.to_string().starts_with(&format!(
            "invalid length {}, expected a sequence of 1 to {} limbs",
            CAPACITY + 1,
            CAPACITY,
        )),
        "{}",
        err,
    );
}

#[test]
fn test_deserialize_rejects_non_limbs() {
    assert!(serde_json::from_str::<Number>("[-1]").is_err());
    assert!(serde_json::from_str::<Number>("[18446744073709551616]").is_err());
    assert!(serde_json::from_str::<Number>("\"0x10\"").is_err());
}
