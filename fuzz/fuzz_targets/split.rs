#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use recoverykit::split;

#[derive(Debug, Arbitrary)]
struct Parameters {
    pub threshold: u8,
    pub share_count: u8,
    pub spending_key: String,
    pub viewing_key: String,
}

fuzz_target!(|params: Parameters| {
    let _shares = split(
        params.threshold as usize,
        params.share_count as usize,
        &params.spending_key,
        &params.viewing_key,
    );
});
