use fixed_bignum::{subtract, Number, CAPACITY};

// Limbs of the result above the new length are cleared rather than left
// over from the previous value.
#[test]
fn test() {
    let mut result = Number::from_limbs(&[u64::MAX; CAPACITY]).unwrap();
    subtract(&mut result, &Number::from_u64(3), &Number::from_u64(1)).unwrap();
    assert_eq!(result, Number::from_u64(2));
    assert!(result.words()[1..].iter().all(|&w| w == 0));
}
