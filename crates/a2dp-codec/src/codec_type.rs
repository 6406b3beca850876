//! Media codec type octet (Bluetooth Assigned Numbers, Audio Codec ID).

use core::fmt;

use tracing::debug;

const MEDIA_CT_SBC: u8 = 0x00;
const MEDIA_CT_AAC: u8 = 0x02;
const MEDIA_CT_NON_A2DP: u8 = 0xFF;

/// Codec standardized by the profile, fully identified by its codec type octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardCodec {
    /// Low complexity subband codec.
    Sbc,
    /// MPEG-2/4 Advanced Audio Coding.
    Aac,
}

impl StandardCodec {
    /// Codec type octet of this codec.
    pub const fn octet(self) -> u8 {
        match self {
            Self::Sbc => MEDIA_CT_SBC,
            Self::Aac => MEDIA_CT_AAC,
        }
    }
}

impl fmt::Display for StandardCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sbc => write!(f, "SBC"),
            Self::Aac => write!(f, "AAC"),
        }
    }
}

/// Codec type octet leading every codec identifier.
///
/// `Vendor` is the only sentinel: the codec is then identified by the company id and vendor codec id
/// which follow the octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CodecType {
    /// Low complexity subband codec (`0x00`).
    Sbc,
    /// MPEG-2/4 Advanced Audio Coding (`0x02`).
    Aac,
    /// Vendor-specific codec (`0xFF`).
    Vendor,
}

impl CodecType {
    /// Octet used on the wire for vendor-specific codecs.
    pub const VENDOR_OCTET: u8 = MEDIA_CT_NON_A2DP;

    /// Maps any octet to a codec type.
    ///
    /// Octets without an assigned standardized codec are treated as vendor-specific, so codecs
    /// standardized after this crate was written are read as opaque rather than rejected.
    pub fn decode_octet(octet: u8) -> Self {
        match octet {
            MEDIA_CT_SBC => Self::Sbc,
            MEDIA_CT_AAC => Self::Aac,
            MEDIA_CT_NON_A2DP => Self::Vendor,
            unknown => {
                debug!(octet = unknown, "Unassigned codec type octet read as vendor-specific");
                Self::Vendor
            }
        }
    }

    /// Returns the wire octet of this codec type.
    pub const fn encode(self) -> u8 {
        match self {
            Self::Sbc => MEDIA_CT_SBC,
            Self::Aac => MEDIA_CT_AAC,
            Self::Vendor => MEDIA_CT_NON_A2DP,
        }
    }

    /// Returns `true` for the vendor-specific sentinel.
    pub const fn is_vendor(self) -> bool {
        matches!(self, Self::Vendor)
    }

    /// Returns the standardized codec denoted by this codec type, if any.
    pub const fn standard(self) -> Option<StandardCodec> {
        match self {
            Self::Sbc => Some(StandardCodec::Sbc),
            Self::Aac => Some(StandardCodec::Aac),
            Self::Vendor => None,
        }
    }
}

impl From<u8> for CodecType {
    fn from(octet: u8) -> Self {
        Self::decode_octet(octet)
    }
}

impl From<CodecType> for u8 {
    fn from(codec_type: CodecType) -> Self {
        codec_type.encode()
    }
}

impl From<StandardCodec> for CodecType {
    fn from(codec: StandardCodec) -> Self {
        match codec {
            StandardCodec::Sbc => Self::Sbc,
            StandardCodec::Aac => Self::Aac,
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.standard() {
            Some(codec) => codec.fmt(f),
            None => write!(f, "Vendor"),
        }
    }
}
