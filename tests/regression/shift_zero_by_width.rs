use fixed_bignum::{shift_left, ErrorCode, Number, BITS};

// The width check runs before the zero fast path.
#[test]
fn test() {
    let mut zero = Number::zero();
    let err = shift_left(&mut zero, BITS).unwrap_err();
    assert_eq!(*err.code(), ErrorCode::Overflow);
    assert!(zero.is_zero());

    shift_left(&mut zero, BITS - 1).unwrap();
    assert!(zero.is_zero());
}
