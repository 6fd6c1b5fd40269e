use fixed_bignum::{subtract, Number, CAPACITY};

// A subtrahend with a longer declared length than the minuend, padded with
// zero limbs, must not be read past the minuend's length.
#[test]
fn test() {
    let mut words = [0; CAPACITY];
    words[0] = 5;
    let b = Number::from_raw_parts(words, CAPACITY as i32);
    let a = Number::from_u64(12);
    let mut result = Number::zero();
    subtract(&mut result, &a, &b).unwrap();
    assert_eq!(result, Number::from_u64(7));
}
