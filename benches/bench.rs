#![feature(test)]

extern crate test;

use fixed_bignum::{shift_left, subtract, Limb, Number, BITS, CAPACITY};
use test::Bencher;

fn full() -> Number {
    let mut limbs = [0; CAPACITY];
    for (i, limb) in limbs.iter_mut().enumerate() {
        *limb = (i as Limb).wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    }
    limbs[CAPACITY - 1] >>= 1;
    Number::from_limbs(&limbs).unwrap()
}

#[bench]
fn bench_subtract_full(b: &mut Bencher) {
    let x = full();
    let y = Number::from_limbs(&[u64::MAX; CAPACITY / 2]).unwrap();
    let mut result = Number::zero();
    b.bytes = (CAPACITY * 8) as u64;
    b.iter(|| {
        subtract(&mut result, test::black_box(&x), test::black_box(&y)).unwrap();
    });
}

#[bench]
fn bench_subtract_single_limb(b: &mut Bencher) {
    let x = Number::from_u64(1000);
    let y = Number::from_u64(1);
    let mut result = Number::zero();
    b.iter(|| {
        subtract(&mut result, test::black_box(&x), test::black_box(&y)).unwrap();
    });
}

#[bench]
fn bench_subtract_negative(b: &mut Bencher) {
    let x = Number::from_u64(1);
    let y = full();
    let mut result = Number::zero();
    b.iter(|| {
        let _ = subtract(&mut result, test::black_box(&x), test::black_box(&y));
    });
}

#[bench]
fn bench_shift_bits(b: &mut Bencher) {
    let n = Number::from_limbs(&[u64::MAX; CAPACITY / 2]).unwrap();
    b.bytes = (CAPACITY * 8) as u64;
    b.iter(|| {
        let mut n = test::black_box(n);
        shift_left(&mut n, 13).unwrap();
        n
    });
}

#[bench]
fn bench_shift_limbs(b: &mut Bencher) {
    let n = Number::from_limbs(&[u64::MAX; CAPACITY / 2]).unwrap();
    b.bytes = (CAPACITY * 8) as u64;
    b.iter(|| {
        let mut n = test::black_box(n);
        shift_left(&mut n, 64 * (CAPACITY / 4)).unwrap();
        n
    });
}

#[bench]
fn bench_shift_truncating(b: &mut Bencher) {
    let n = full();
    b.iter(|| {
        let mut n = test::black_box(n);
        shift_left(&mut n, BITS / 2 + 1).unwrap();
        n
    });
}
