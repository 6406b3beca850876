//! Oracles.
//!
//! Oracles take a test case and determine whether we have a bug. For example,
//! one of the simplest oracles is to take a codec identifier as our input test case,
//! decode and encode it, and check that the re-encoded octets decode to the same value.
//!
//! When an oracle finds a bug, it should report it to the fuzzing engine by
//! panicking.

use a2dp_codec::{CodecIdDecoder, CodecIdentifier, CodecType, FeatureMask, ReservedFieldsPolicy};
use a2dp_core::{decode, encode_vec};

use crate::generators::{CodecIdInput, FeatureMaskInput};

const RESERVED_FEATURE_BITS: u16 = 0xFFF0;

pub fn wire_decode(data: &[u8]) {
    if let Ok(id) = decode::<CodecIdentifier>(data) {
        let encoded = encode_vec(&id).unwrap();
        assert_eq!(decode::<CodecIdentifier>(&encoded).unwrap(), id);
        assert_eq!(CodecIdentifier::try_from_u64(id.to_u64()).unwrap(), id);
    }

    if let Ok(mask) = decode::<FeatureMask>(data) {
        let encoded = encode_vec(&mask).unwrap();
        assert_eq!(encoded.as_slice(), &data[..FeatureMask::FIXED_PART_SIZE]);
    }
}

pub fn codec_id_policy(input: &CodecIdInput) {
    let octets = input.octets();
    let result = CodecIdDecoder::new().with_policy(input.policy()).decode_octets(&octets);

    let is_standard = CodecType::decode_octet(input.codec_type).standard().is_some();
    let has_vendor_fields = input.company_id != 0 || input.vendor_codec_id != 0;

    match input.policy() {
        ReservedFieldsPolicy::Strict => assert_eq!(result.is_err(), is_standard && has_vendor_fields),
        ReservedFieldsPolicy::Normalize => assert!(result.is_ok()),
    }

    if let Ok(id) = result {
        if is_standard {
            assert_eq!(id.company_id(), 0);
            assert_eq!(id.vendor_codec_id(), 0);
        } else {
            assert_eq!(id.company_id(), input.company_id);
            assert_eq!(id.vendor_codec_id(), input.vendor_codec_id);
        }
    }
}

pub fn feature_mask_update(input: &FeatureMaskInput) {
    let mask = FeatureMask::from_bits(input.bits);
    let role = input.role();
    let capability = input.capability();

    let Ok(set) = mask.set_capability(role, capability) else {
        assert_ne!(capability.role(), role);
        assert!(mask.has_capability(role, capability).is_err());
        assert!(mask.clear_capability(role, capability).is_err());
        return;
    };

    let cleared = set.clear_capability(role, capability).unwrap();

    assert!(set.has_capability(role, capability).unwrap());
    assert!(!cleared.has_capability(role, capability).unwrap());
    assert_eq!(set.set_capability(role, capability).unwrap(), set);
    assert_eq!(set.bits() & RESERVED_FEATURE_BITS, input.bits & RESERVED_FEATURE_BITS);
    assert_eq!(cleared.bits() & RESERVED_FEATURE_BITS, input.bits & RESERVED_FEATURE_BITS);
}
