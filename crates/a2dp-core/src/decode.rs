use core::fmt;

use crate::{InvalidFieldErr, NonZeroReservedFieldsErr, NotEnoughBytesErr, ReadCursor};

/// Result of a decode operation.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Error raised while reading a wire value, see [`DecodeErrorKind`].
pub type DecodeError = a2dp_error::Error<DecodeErrorKind>;

/// Reasons for rejecting wire input.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The input ends before the value does.
    NotEnoughBytes {
        /// Bytes available in the input.
        received: usize,
        /// Bytes the value needs.
        expected: usize,
    },
    /// A field holds a value outside of its domain.
    InvalidField {
        /// Field name, as on the wire.
        field: &'static str,
        /// What is wrong with the value.
        reason: &'static str,
    },
    /// A standardized codec identifier carries a nonzero company id or vendor codec id.
    NonZeroReservedFields {
        /// Company id found on the wire.
        company_id: u16,
        /// Vendor codec id found on the wire.
        vendor_codec_id: u16,
    },
}

#[cfg(feature = "std")]
impl core::error::Error for DecodeErrorKind {}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughBytes { received, expected } => write!(
                f,
                "not enough bytes provided to decode: received {received} bytes, expected {expected} bytes"
            ),
            Self::InvalidField { field, reason } => {
                write!(f, "invalid `{field}`: {reason}")
            }
            Self::NonZeroReservedFields {
                company_id,
                vendor_codec_id,
            } => write!(
                f,
                "standardized codec with non-zero reserved fields (company id {company_id:#06x}, vendor codec id {vendor_codec_id:#06x})"
            ),
        }
    }
}

impl NotEnoughBytesErr for DecodeError {
    fn not_enough_bytes(context: &'static str, received: usize, expected: usize) -> Self {
        Self::new(context, DecodeErrorKind::NotEnoughBytes { received, expected })
    }
}

impl InvalidFieldErr for DecodeError {
    fn invalid_field(context: &'static str, field: &'static str, reason: &'static str) -> Self {
        Self::new(context, DecodeErrorKind::InvalidField { field, reason })
    }
}

impl NonZeroReservedFieldsErr for DecodeError {
    fn non_zero_reserved_fields(context: &'static str, company_id: u16, vendor_codec_id: u16) -> Self {
        Self::new(
            context,
            DecodeErrorKind::NonZeroReservedFields {
                company_id,
                vendor_codec_id,
            },
        )
    }
}

/// Value read from its wire form.
pub trait Decode<'de>: Sized {
    /// Reads `Self` from the cursor, consuming exactly the bytes of its wire form.
    fn decode(src: &mut ReadCursor<'de>) -> DecodeResult<Self>;
}

/// Decodes a `T` from the start of `src`.
///
/// Trailing bytes after the decoded value are ignored.
pub fn decode<'de, T>(src: &'de [u8]) -> DecodeResult<T>
where
    T: Decode<'de>,
{
    let mut cursor = ReadCursor::new(src);
    T::decode(&mut cursor)
}

/// Decodes a `T` at the cursor position, leaving the cursor right after it.
pub fn decode_cursor<'de, T>(src: &mut ReadCursor<'de>) -> DecodeResult<T>
where
    T: Decode<'de>,
{
    T::decode(src)
}
