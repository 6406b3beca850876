use a2dp_codec::{Capability, CodecIdentifier, FeatureMask, Role};
use a2dp_core::{decode, encode, DecodeErrorKind};
use rstest::rstest;
use expect_test::expect;

#[test]
fn reserved_fields_error_display() {
    let error = CodecIdentifier::from_octets(&[0x00, 0x01, 0x00, 0x00, 0x00]).unwrap_err();

    assert_eq!(error.context, "A2DP_CODEC_ID");
    expect!["[A2DP_CODEC_ID] standardized codec with non-zero reserved fields (company id 0x0001, vendor codec id 0x0000)"]
        .assert_eq(&error.to_string());
    assert_eq!(error.report().to_string(), error.to_string());
}

#[test]
fn not_enough_bytes_error_display() {
    let error = decode::<CodecIdentifier>(&[0xFF, 0x4F]).unwrap_err();

    assert!(matches!(error.kind(), DecodeErrorKind::NotEnoughBytes { .. }));
    assert!(error.to_string().starts_with("[A2DP_CODEC_ID]"), "{error}");
}

#[rstest]
#[case::codec_id_decode(decode::<CodecIdentifier>(&[0xFF]).unwrap_err().context, "A2DP_CODEC_ID")]
#[case::codec_id_encode(encode(&CodecIdentifier::LDAC, &mut [0u8; 2]).unwrap_err().context, "A2DP_CODEC_ID")]
#[case::feature_mask_decode(decode::<FeatureMask>(&[]).unwrap_err().context, "A2DP_SUPPORTED_FEATURES")]
#[case::feature_mask_encode(encode(&FeatureMask::EMPTY, &mut [0u8; 1]).unwrap_err().context, "A2DP_SUPPORTED_FEATURES")]
fn wire_errors_carry_value_name(#[case] context: &str, #[case] expected: &str) {
    assert_eq!(context, expected);
}

#[test]
fn invalid_capability_error_display() {
    let error = FeatureMask::EMPTY
        .has_capability(Role::Sink, Capability::Mic)
        .unwrap_err();

    assert_eq!(error.context, "A2DP_SUPPORTED_FEATURES");
    expect!["[A2DP_SUPPORTED_FEATURES] microphone capability is not defined for the sink role (it belongs to the source role)"]
        .assert_eq(&error.to_string());
    assert_eq!(error.report().to_string(), error.to_string());
}

#[test]
fn decode_error_into_io_error() {
    let error = CodecIdentifier::from_octets(&[0x02, 0x00, 0x00, 0x01, 0x00]).unwrap_err();
    let message = error.to_string();

    let io_error = std::io::Error::from(error);

    assert_eq!(io_error.kind(), std::io::ErrorKind::InvalidData);
    assert_eq!(io_error.to_string(), message);
}

#[test]
fn errors_are_std_errors() {
    fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let decode_error = CodecIdentifier::try_from_u64(u64::MAX).unwrap_err();
    assert_std_error(&decode_error);

    let feature_error = FeatureMask::EMPTY
        .set_capability(Role::Source, Capability::Amp)
        .unwrap_err();
    assert_std_error(&feature_error);
}
