#![no_main]

use a2dp_fuzzing::generators::FeatureMaskInput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: FeatureMaskInput| {
    a2dp_fuzzing::oracles::feature_mask_update(&input);
});
