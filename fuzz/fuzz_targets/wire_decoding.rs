#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    a2dp_fuzzing::oracles::wire_decode(data);
});
