#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};
use core::fmt;

use crate::{NotEnoughBytesErr, WriteCursor};

/// Result of an encode operation.
pub type EncodeResult<T> = Result<T, EncodeError>;

/// Error raised while writing a wire value, see [`EncodeErrorKind`].
pub type EncodeError = a2dp_error::Error<EncodeErrorKind>;

/// Reasons for failing to write a wire value.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncodeErrorKind {
    /// The destination buffer is smaller than the value.
    NotEnoughBytes {
        /// Bytes available in the buffer.
        received: usize,
        /// Bytes the value needs.
        expected: usize,
    },
}

#[cfg(feature = "std")]
impl core::error::Error for EncodeErrorKind {}

impl fmt::Display for EncodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughBytes { received, expected } => write!(
                f,
                "not enough bytes provided to encode: received {received} bytes, expected {expected} bytes"
            ),
        }
    }
}

impl NotEnoughBytesErr for EncodeError {
    fn not_enough_bytes(context: &'static str, received: usize, expected: usize) -> Self {
        Self::new(context, EncodeErrorKind::NotEnoughBytes { received, expected })
    }
}

/// Value written in its wire form.
///
/// Object-safe, so values of different types can be written through `&dyn Encode`.
pub trait Encode {
    /// Writes this value at the cursor position.
    fn encode(&self, dst: &mut WriteCursor<'_>) -> EncodeResult<()>;

    /// Name used as error context.
    fn name(&self) -> &'static str;

    /// Size of the wire form, in bytes.
    fn size(&self) -> usize;
}

crate::assert_obj_safe!(Encode);

/// Encodes `value` at the start of `dst` and returns the number of bytes written.
pub fn encode<T>(value: &T, dst: &mut [u8]) -> EncodeResult<usize>
where
    T: Encode + ?Sized,
{
    let mut cursor = WriteCursor::new(dst);
    value.encode(&mut cursor)?;
    Ok(cursor.pos())
}

/// Encodes `value` into a freshly allocated buffer of exactly [`Encode::size`] bytes.
#[cfg(feature = "alloc")]
pub fn encode_vec<T>(value: &T) -> EncodeResult<Vec<u8>>
where
    T: Encode + ?Sized,
{
    let size = value.size();
    let mut buf = vec![0; size];
    let written = encode(value, buf.as_mut_slice())?;
    debug_assert_eq!(written, size);
    Ok(buf)
}
