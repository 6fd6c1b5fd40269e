#![no_main]

use fixed_bignum::{shift_left, shift_left_checked, ErrorCode, Limb, Number, BITS, CAPACITY};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let amount = usize::from(u16::from_le_bytes([data[0], data[1]])) % (BITS + 2);
    let limbs: Vec<Limb> = data[2..]
        .chunks_exact(8)
        .take(CAPACITY)
        .map(|chunk| Limb::from_le_bytes(chunk.try_into().unwrap()))
        .collect();
    let n = Number::from_limbs(&limbs).unwrap();

    let mut lossy = n;
    let mut strict = n;
    let lossy_result = shift_left(&mut lossy, amount);
    let strict_result = shift_left_checked(&mut strict, amount);

    match (&lossy_result, &strict_result) {
        (Ok(()), Ok(())) => {
            assert!(lossy.is_normalized());
            assert_eq!(lossy, strict);
        }
        (Ok(()), Err(err)) => {
            // Silent truncation: the strict variant sees the dropped bits.
            assert_eq!(*err.code(), ErrorCode::Overflow);
            assert!(lossy.is_normalized());
            assert_eq!(strict, n);
        }
        (Err(err), _) => {
            assert_eq!(*err.code(), ErrorCode::Overflow);
            assert_eq!(lossy, n);
            assert!(strict_result.is_err());
        }
    }
});
