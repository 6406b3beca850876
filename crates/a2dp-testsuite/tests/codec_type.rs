use a2dp_codec::{CodecType, StandardCodec};
use rstest::rstest;

#[rstest]
#[case(0x00, CodecType::Sbc)]
#[case(0x02, CodecType::Aac)]
#[case(0xFF, CodecType::Vendor)]
#[case::reserved_01(0x01, CodecType::Vendor)]
#[case::mpeg_usac(0x03, CodecType::Vendor)]
#[case::atrac(0x04, CodecType::Vendor)]
#[case::high_bit(0x80, CodecType::Vendor)]
#[case::below_sentinel(0xFE, CodecType::Vendor)]
fn decode_octet(#[case] octet: u8, #[case] expected: CodecType) {
    assert_eq!(CodecType::decode_octet(octet), expected);
    assert_eq!(CodecType::from(octet), expected);
}

#[rstest]
#[case(CodecType::Sbc, 0x00)]
#[case(CodecType::Aac, 0x02)]
#[case(CodecType::Vendor, 0xFF)]
fn encode(#[case] codec_type: CodecType, #[case] expected: u8) {
    assert_eq!(codec_type.encode(), expected);
    assert_eq!(u8::from(codec_type), expected);
}

#[test]
fn decode_octet_is_total() {
    for octet in u8::MIN..=u8::MAX {
        let codec_type = CodecType::decode_octet(octet);

        match octet {
            0x00 | 0x02 => assert_eq!(codec_type.encode(), octet),
            _ => {
                assert!(codec_type.is_vendor());
                assert_eq!(codec_type.encode(), CodecType::VENDOR_OCTET);
            }
        }
    }
}

#[test]
fn exactly_one_sentinel() {
    let vendors = [CodecType::Sbc, CodecType::Aac, CodecType::Vendor]
        .into_iter()
        .filter(|codec_type| codec_type.standard().is_none())
        .count();

    assert_eq!(vendors, 1);
}

#[rstest]
#[case(StandardCodec::Sbc, CodecType::Sbc)]
#[case(StandardCodec::Aac, CodecType::Aac)]
fn standard_codec_mapping(#[case] codec: StandardCodec, #[case] codec_type: CodecType) {
    assert_eq!(CodecType::from(codec), codec_type);
    assert_eq!(codec_type.standard(), Some(codec));
    assert_eq!(codec.octet(), codec_type.encode());
}

#[rstest]
#[case(CodecType::Sbc, "SBC")]
#[case(CodecType::Aac, "AAC")]
#[case(CodecType::Vendor, "Vendor")]
fn display(#[case] codec_type: CodecType, #[case] expected: &str) {
    assert_eq!(codec_type.to_string(), expected);
}
