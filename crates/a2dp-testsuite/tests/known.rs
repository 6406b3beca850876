use a2dp_codec::{CodecIdentifier, KnownCodec};
use a2dp_testsuite::{AAC_OCTETS, APTX_HD_OCTETS, APTX_OCTETS, LDAC_OCTETS, OPUS_OCTETS, SBC_OCTETS};
use rstest::rstest;

#[rstest]
#[case::sbc(SBC_OCTETS, KnownCodec::Sbc)]
#[case::aac(AAC_OCTETS, KnownCodec::Aac)]
#[case::aptx(APTX_OCTETS, KnownCodec::AptX)]
#[case::aptx_hd(APTX_HD_OCTETS, KnownCodec::AptXHd)]
#[case::ldac(LDAC_OCTETS, KnownCodec::Ldac)]
#[case::opus(OPUS_OCTETS, KnownCodec::Opus)]
fn matches_known(#[case] octets: [u8; 5], #[case] expected: KnownCodec) {
    let id = CodecIdentifier::from_octets(&octets).unwrap();

    assert_eq!(id.matches_known(), Some(expected));
    assert_eq!(expected.identifier(), id);
}

#[rstest]
#[case::unassigned_company(CodecIdentifier::vendor(0xFFFE, 0x0001))]
#[case::apt_unknown_codec(CodecIdentifier::vendor(0x004F, 0x0002))]
#[case::byte_swapped_aptx(CodecIdentifier::vendor(0x4F00, 0x0100))]
#[case::sony_unknown_codec(CodecIdentifier::vendor(0x012D, 0x0001))]
#[case::zero_vendor(CodecIdentifier::vendor(0x0000, 0x0000))]
fn unknown_vendor_codec(#[case] id: CodecIdentifier) {
    assert_eq!(id.matches_known(), None);
    assert_eq!(KnownCodec::lookup(&id), None);
}

#[test]
fn every_known_codec_is_found() {
    for codec in KnownCodec::ALL {
        assert_eq!(codec.identifier().matches_known(), Some(codec));
    }
}

#[test]
fn same_vendor_codec_id_under_different_companies() {
    assert_eq!(CodecIdentifier::APTX.vendor_codec_id(), CodecIdentifier::OPUS.vendor_codec_id());
    assert_ne!(CodecIdentifier::APTX, CodecIdentifier::OPUS);
    assert_ne!(CodecIdentifier::APTX.matches_known(), CodecIdentifier::OPUS.matches_known());
}

#[rstest]
#[case(KnownCodec::Sbc, "SBC")]
#[case(KnownCodec::Aac, "AAC")]
#[case(KnownCodec::AptX, "aptX")]
#[case(KnownCodec::AptXHd, "aptX HD")]
#[case(KnownCodec::Ldac, "LDAC")]
#[case(KnownCodec::Opus, "Opus")]
fn display(#[case] codec: KnownCodec, #[case] expected: &str) {
    assert_eq!(codec.to_string(), expected);
    assert_eq!(codec.as_str(), expected);
}
