use fixed_bignum::{shift_left, Number, CAPACITY};

// A carry out of the last limb must not be written past the storage block,
// where it would land on the length field.
#[test]
fn test() {
    let mut words = [0; CAPACITY];
    words[CAPACITY - 1] = 0x4000_0000_0000_0000;
    words[CAPACITY - 2] = 0x8000_0000_0000_0000;
    let mut n = Number::from_limbs(&words).unwrap();
    shift_left(&mut n, 2).unwrap();
    assert_eq!(n.len(), CAPACITY as i32);
    assert_eq!(n.words()[CAPACITY - 1], 2);
    assert_eq!(n.words()[CAPACITY - 2], 0);
}
