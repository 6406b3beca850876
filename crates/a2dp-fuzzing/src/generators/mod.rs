//! Test case generators.
//!
//! Test case generators take raw, unstructured input from a fuzzer
//! (e.g. libFuzzer) and translate that into a structured test case (e.g. a
//! codec identifier and the policy to decode it with).

use a2dp_codec::{Capability, ReservedFieldsPolicy, Role};
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct CodecIdInput {
    pub codec_type: u8,
    pub company_id: u16,
    pub vendor_codec_id: u16,
    pub normalize: bool,
}

impl CodecIdInput {
    pub fn octets(&self) -> [u8; 5] {
        let [company_lo, company_hi] = self.company_id.to_le_bytes();
        let [codec_lo, codec_hi] = self.vendor_codec_id.to_le_bytes();
        [self.codec_type, company_lo, company_hi, codec_lo, codec_hi]
    }

    pub fn policy(&self) -> ReservedFieldsPolicy {
        if self.normalize {
            ReservedFieldsPolicy::Normalize
        } else {
            ReservedFieldsPolicy::Strict
        }
    }
}

#[derive(Arbitrary, Debug)]
pub struct FeatureMaskInput {
    pub bits: u16,
    pub sink: bool,
    pub capability: u8,
}

impl FeatureMaskInput {
    const CAPABILITIES: [Capability; 8] = [
        Capability::Player,
        Capability::Mic,
        Capability::Tuner,
        Capability::Mixer,
        Capability::Headphone,
        Capability::Speaker,
        Capability::Recorder,
        Capability::Amp,
    ];

    pub fn role(&self) -> Role {
        if self.sink {
            Role::Sink
        } else {
            Role::Source
        }
    }

    pub fn capability(&self) -> Capability {
        Self::CAPABILITIES[usize::from(self.capability % 8)]
    }
}
