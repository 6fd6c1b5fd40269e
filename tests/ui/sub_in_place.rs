use fixed_bignum::{subtract, Number};

fn main() {
    let mut a = Number::from_u64(10);
    let b = Number::from_u64(3);
    subtract(&mut a, &a, &b).unwrap();
}
