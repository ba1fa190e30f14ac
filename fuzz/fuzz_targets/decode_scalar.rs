#![no_main]
use libfuzzer_sys::fuzz_target;

use recoverykit::field::{decode, encode, SpendingScalar, ViewingScalar};

fuzz_target!(|data: &str| {
    if let Ok(element) = decode::<SpendingScalar>(data) {
        assert_eq!(encode(&element), data);
    }
    if let Ok(element) = decode::<ViewingScalar>(data) {
        assert_eq!(encode(&element), data);
    }
});
