#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use recoverykit::{recover, Share};

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub threshold: u8,
    pub shares: Vec<Share>,
}

fuzz_target!(|params: Parameters| {
    let _keys = recover(params.threshold as usize, &params.shares);
});
