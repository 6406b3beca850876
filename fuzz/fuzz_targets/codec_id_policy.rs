#![no_main]

use a2dp_fuzzing::generators::CodecIdInput;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: CodecIdInput| {
    a2dp_fuzzing::oracles::codec_id_policy(&input);
});
