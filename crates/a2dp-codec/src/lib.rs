#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

pub mod codec_id;
pub mod codec_type;
pub mod features;
pub mod known;

pub use self::codec_id::{CodecIdDecoder, CodecIdentifier, ReservedFieldsPolicy, VendorCodec};
pub use self::codec_type::{CodecType, StandardCodec};
pub use self::features::{
    Capability, FeatureError, FeatureErrorKind, FeatureMask, FeatureResult, Role, SinkFeatures, SourceFeatures,
};
pub use self::known::KnownCodec;
