//! Sample wire data shared by the integration tests.

use a2dp_codec::CodecIdentifier;

pub const SBC_OCTETS: [u8; 5] = [0x00, 0x00, 0x00, 0x00, 0x00];
pub const AAC_OCTETS: [u8; 5] = [0x02, 0x00, 0x00, 0x00, 0x00];
pub const APTX_OCTETS: [u8; 5] = [0xFF, 0x4F, 0x00, 0x01, 0x00];
pub const APTX_HD_OCTETS: [u8; 5] = [0xFF, 0xD7, 0x00, 0x24, 0x00];
pub const LDAC_OCTETS: [u8; 5] = [0xFF, 0x2D, 0x01, 0xAA, 0x00];
pub const OPUS_OCTETS: [u8; 5] = [0xFF, 0xE0, 0x00, 0x01, 0x00];

/// Well-known identifiers along their 40-bit integer form, as listed in the A2DP stack constants.
pub const KNOWN_CODEC_IDS: [(CodecIdentifier, u64); 6] = [
    (CodecIdentifier::SBC, 0x00_0000_0000),
    (CodecIdentifier::AAC, 0x00_0000_0002),
    (CodecIdentifier::APTX, 0x00_0100_4fff),
    (CodecIdentifier::APTX_HD, 0x00_2400_d7ff),
    (CodecIdentifier::LDAC, 0x00_aa01_2dff),
    (CodecIdentifier::OPUS, 0x00_0100_e0ff),
];

/// Compares two byte buffers and panics with a hex diff when they differ.
#[macro_export]
macro_rules! assert_serialization {
    ($left:expr, $right:expr) => {{
        if $left != $right {
            let left = hex::encode(&$left);
            let right = hex::encode(&$right);
            let comparison = pretty_assertions::StrComparison::new(&left, &right);
            panic!(
                "assertion failed: `({} == {})`\n\n{comparison}",
                stringify!($left),
                stringify!($right),
            );
        }
    }};
}
