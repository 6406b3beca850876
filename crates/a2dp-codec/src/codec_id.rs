//! 40-bit codec identifier.
//!
//! ```text
//!  bits 0-7    codec type octet (0x00 SBC, 0x02 AAC, 0xFF vendor)
//!  bits 8-23   company id, zero unless the codec type octet is 0xFF
//!  bits 24-39  vendor-defined codec id, zero unless the codec type octet is 0xFF
//! ```
//!
//! On the wire the identifier is 5 octets in this exact order, with both 16-bit fields little-endian.

use core::cmp::Ordering;
use core::fmt;

use a2dp_core::{
    ensure_fixed_part_size, ensure_size, invalid_field_err, non_zero_reserved_fields_err, Decode, DecodeResult,
    Encode, EncodeResult, ReadCursor, WriteCursor,
};
use tracing::warn;

use crate::{CodecType, KnownCodec, StandardCodec};

const COMPANY_ID_APT: u16 = 0x004F;
const COMPANY_ID_QUALCOMM: u16 = 0x00D7;
const COMPANY_ID_GOOGLE: u16 = 0x00E0;
const COMPANY_ID_SONY: u16 = 0x012D;

const APTX_CODEC_ID: u16 = 0x0001;
const APTX_HD_CODEC_ID: u16 = 0x0024;
const LDAC_CODEC_ID: u16 = 0x00AA;
const OPUS_CODEC_ID: u16 = 0x0001;

const MAX_CODEC_ID_VALUE: u64 = 0xFF_FFFF_FFFF;

/// Vendor-specific codec, identified by the assigned company number and a company-scoped codec id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VendorCodec {
    /// Bluetooth SIG assigned company identifier.
    pub company_id: u16,
    /// Codec identifier, only unique within the company namespace.
    pub codec_id: u16,
}

/// Codec identifier exchanged during capability negotiation.
///
/// A standardized codec carries no company id nor vendor codec id, which this type cannot represent.
/// Identifiers are ordered by their 40-bit integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecIdentifier {
    /// Codec fully identified by its codec type octet.
    Standard(StandardCodec),
    /// Vendor-specific codec (codec type octet `0xFF`).
    Vendor(VendorCodec),
}

impl CodecIdentifier {
    const NAME: &'static str = "A2DP_CODEC_ID";

    /// Size of the identifier on the wire.
    pub const FIXED_PART_SIZE: usize = 1 /* codecType */ + 2 /* companyId */ + 2 /* vendorCodecId */;

    /// Subband codec.
    pub const SBC: Self = Self::Standard(StandardCodec::Sbc);
    /// Advanced Audio Coding.
    pub const AAC: Self = Self::Standard(StandardCodec::Aac);
    /// aptX, from APT Ltd.
    pub const APTX: Self = Self::vendor(COMPANY_ID_APT, APTX_CODEC_ID);
    /// aptX HD, from Qualcomm.
    pub const APTX_HD: Self = Self::vendor(COMPANY_ID_QUALCOMM, APTX_HD_CODEC_ID);
    /// LDAC, from Sony.
    pub const LDAC: Self = Self::vendor(COMPANY_ID_SONY, LDAC_CODEC_ID);
    /// Opus, from Google.
    pub const OPUS: Self = Self::vendor(COMPANY_ID_GOOGLE, OPUS_CODEC_ID);

    /// Builds a vendor-specific codec identifier.
    pub const fn vendor(company_id: u16, codec_id: u16) -> Self {
        Self::Vendor(VendorCodec { company_id, codec_id })
    }

    /// Codec type octet of this identifier.
    pub const fn codec_type(&self) -> CodecType {
        match self {
            Self::Standard(StandardCodec::Sbc) => CodecType::Sbc,
            Self::Standard(StandardCodec::Aac) => CodecType::Aac,
            Self::Vendor(_) => CodecType::Vendor,
        }
    }

    /// Company id, zero for standardized codecs.
    pub const fn company_id(&self) -> u16 {
        match self {
            Self::Standard(_) => 0,
            Self::Vendor(vendor) => vendor.company_id,
        }
    }

    /// Vendor codec id, zero for standardized codecs.
    pub const fn vendor_codec_id(&self) -> u16 {
        match self {
            Self::Standard(_) => 0,
            Self::Vendor(vendor) => vendor.codec_id,
        }
    }

    /// Decodes the 5 wire octets with the strict reserved fields policy.
    pub fn from_octets(octets: &[u8; 5]) -> DecodeResult<Self> {
        CodecIdDecoder::new().decode_octets(octets)
    }

    /// Encodes this identifier into its 5 wire octets.
    pub fn to_octets(&self) -> [u8; 5] {
        let [company_lo, company_hi] = self.company_id().to_le_bytes();
        let [codec_lo, codec_hi] = self.vendor_codec_id().to_le_bytes();
        [self.codec_type().encode(), company_lo, company_hi, codec_lo, codec_hi]
    }

    /// Packs this identifier into its 40-bit integer form (codec type octet in the low byte).
    pub fn to_u64(&self) -> u64 {
        let [b0, b1, b2, b3, b4] = self.to_octets();
        u64::from_le_bytes([b0, b1, b2, b3, b4, 0, 0, 0])
    }

    /// Unpacks the 40-bit integer form with the strict reserved fields policy.
    pub fn try_from_u64(value: u64) -> DecodeResult<Self> {
        CodecIdDecoder::new().decode_u64(value)
    }

    /// Looks this identifier up in the table of well-known codecs.
    ///
    /// Meant for diagnostics and display, negotiation must not depend on it.
    pub fn matches_known(&self) -> Option<KnownCodec> {
        KnownCodec::lookup(self)
    }
}

impl PartialOrd for CodecIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CodecIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_u64().cmp(&other.to_u64())
    }
}

impl From<StandardCodec> for CodecIdentifier {
    fn from(codec: StandardCodec) -> Self {
        Self::Standard(codec)
    }
}

impl From<VendorCodec> for CodecIdentifier {
    fn from(codec: VendorCodec) -> Self {
        Self::Vendor(codec)
    }
}

impl From<CodecIdentifier> for u64 {
    fn from(id: CodecIdentifier) -> Self {
        id.to_u64()
    }
}

impl TryFrom<u64> for CodecIdentifier {
    type Error = a2dp_core::DecodeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::try_from_u64(value)
    }
}

impl fmt::Display for CodecIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(codec) => codec.fmt(f),
            Self::Vendor(vendor) => {
                match self.matches_known() {
                    Some(known) => write!(f, "{known}")?,
                    None => write!(f, "Vendor")?,
                }
                write!(f, " (company {:#06x}, codec {:#06x})", vendor.company_id, vendor.codec_id)
            }
        }
    }
}

impl Encode for CodecIdentifier {
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()> {
        ensure_fixed_part_size!(in: dst);

        dst.write_u8(self.codec_type().encode());
        dst.write_u16(self.company_id());
        dst.write_u16(self.vendor_codec_id());

        Ok(())
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn size(&self) -> usize {
        Self::FIXED_PART_SIZE
    }
}

impl<'de> Decode<'de> for CodecIdentifier {
    fn decode(src: &mut ReadCursor<'de>) -> DecodeResult<Self> {
        CodecIdDecoder::new().decode(src)
    }
}

/// What to do with a standardized codec identifier carrying a company id or a vendor codec id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReservedFieldsPolicy {
    /// Fail with `NonZeroReservedFields`.
    #[default]
    Strict,
    /// Drop the fields and log a warning.
    Normalize,
}

/// Codec identifier decoder with a configurable reserved fields policy.
///
/// The [`Decode`] implementation of [`CodecIdentifier`] uses the default, strict, policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecIdDecoder {
    policy: ReservedFieldsPolicy,
}

impl CodecIdDecoder {
    /// Creates a decoder with the strict policy.
    pub const fn new() -> Self {
        Self {
            policy: ReservedFieldsPolicy::Strict,
        }
    }

    /// Sets the reserved fields policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: ReservedFieldsPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the reserved fields policy.
    pub const fn policy(&self) -> ReservedFieldsPolicy {
        self.policy
    }

    /// Decodes an identifier from the cursor, consuming 5 octets.
    pub fn decode(&self, src: &mut ReadCursor<'_>) -> DecodeResult<CodecIdentifier> {
        ensure_size!(ctx: CodecIdentifier::NAME, in: src, size: CodecIdentifier::FIXED_PART_SIZE);

        let codec_type = src.read_u8();
        let company_id = src.read_u16();
        let vendor_codec_id = src.read_u16();

        self.assemble(codec_type, company_id, vendor_codec_id)
    }

    /// Decodes an identifier from its 5 wire octets.
    pub fn decode_octets(&self, octets: &[u8; 5]) -> DecodeResult<CodecIdentifier> {
        self.decode(&mut ReadCursor::new(octets))
    }

    /// Decodes an identifier from its 40-bit integer form.
    pub fn decode_u64(&self, value: u64) -> DecodeResult<CodecIdentifier> {
        if value > MAX_CODEC_ID_VALUE {
            return Err(invalid_field_err!(CodecIdentifier::NAME, "codecId", "wider than 40 bits"));
        }

        let [b0, b1, b2, b3, b4, ..] = value.to_le_bytes();
        self.decode_octets(&[b0, b1, b2, b3, b4])
    }

    fn assemble(&self, codec_type: u8, company_id: u16, vendor_codec_id: u16) -> DecodeResult<CodecIdentifier> {
        let Some(codec) = CodecType::decode_octet(codec_type).standard() else {
            return Ok(CodecIdentifier::vendor(company_id, vendor_codec_id));
        };

        if company_id != 0 || vendor_codec_id != 0 {
            match self.policy {
                ReservedFieldsPolicy::Strict => {
                    return Err(non_zero_reserved_fields_err!(
                        CodecIdentifier::NAME,
                        company_id,
                        vendor_codec_id
                    ));
                }
                ReservedFieldsPolicy::Normalize => {
                    warn!(
                        %codec,
                        company_id,
                        vendor_codec_id,
                        "Discarding non-zero company and vendor codec ids of a standardized codec"
                    );
                }
            }
        }

        Ok(CodecIdentifier::Standard(codec))
    }
}
