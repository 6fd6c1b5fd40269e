use std::env;
use std::fs;
use std::path::PathBuf;

const DEFAULT_CAPACITY: usize = 32;
const MIN_CAPACITY: usize = 8;
const MAX_CAPACITY: usize = 4096;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=FIXED_BIGNUM_CAPACITY");

    // Number of 64-bit limbs in every Number. Refer to src/number.rs for the
    // storage layout this feeds into.
    let capacity = match env::var("FIXED_BIGNUM_CAPACITY") {
        Ok(raw) => match raw.trim().parse::<usize>() {
            Ok(n) if (MIN_CAPACITY..=MAX_CAPACITY).contains(&n) => n,
            _ => panic!(
                "FIXED_BIGNUM_CAPACITY must be an integer in {}..={}, got {:?}",
                MIN_CAPACITY, MAX_CAPACITY, raw,
            ),
        },
        Err(_) => DEFAULT_CAPACITY,
    };

    let out_dir = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let generated = format!(
        "/// Number of limbs in the storage block of every [`Number`](crate::Number).\n\
         pub const CAPACITY: usize = {};\n",
        capacity,
    );
    fs::write(out_dir.join("capacity.rs"), generated).expect("failed to write capacity.rs");
}
