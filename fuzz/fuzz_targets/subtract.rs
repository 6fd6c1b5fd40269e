#![no_main]

use core::cmp::Ordering;
use fixed_bignum::{compare, subtract, ErrorCode, Limb, Number, CAPACITY};
use libfuzzer_sys::fuzz_target;

fn limbs(bytes: &[u8]) -> Vec<Limb> {
    bytes
        .chunks(8)
        .take(CAPACITY)
        .map(|chunk| {
            let mut buf = [0; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            Limb::from_le_bytes(buf)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let (x, y) = rest.split_at((split as usize).min(rest.len()));
    let a = Number::from_limbs(&limbs(x)).unwrap();
    let b = Number::from_limbs(&limbs(y)).unwrap();

    let mut result = Number::from_u64(0xDEAD);
    match subtract(&mut result, &a, &b) {
        Ok(()) => {
            assert!(result.is_normalized());
            assert_ne!(compare(&a, &b).unwrap(), Ordering::Less);
            assert_eq!(a.checked_sub(&result).unwrap(), b);
        }
        Err(err) => {
            assert_eq!(*err.code(), ErrorCode::NegativeResult);
            assert_eq!(compare(&a, &b).unwrap(), Ordering::Less);
            assert_eq!(result, Number::from_u64(0xDEAD));
        }
    }
});
