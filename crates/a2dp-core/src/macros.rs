/// Asserts that the traits support dynamic dispatch.
///
/// From <https://docs.rs/static_assertions/1.1.0/src/static_assertions/assert_obj_safe.rs.html#72-76>
#[macro_export]
macro_rules! assert_obj_safe {
    ($($xs:path),+ $(,)?) => {
        $(const _: Option<&dyn $xs> = None;)+
    };
}

/// Creates an "invalid field" error.
///
/// ```
/// use a2dp_core::{invalid_field_err, DecodeError};
///
/// let err: DecodeError = invalid_field_err!("A2DP_CODEC_ID", "codecId", "wider than 40 bits");
/// ```
#[macro_export]
macro_rules! invalid_field_err {
    ( $context:expr, $field:expr , $reason:expr $(,)? ) => {{
        $crate::invalid_field_err($context, $field, $reason)
    }};
}

/// Creates a "non-zero reserved fields" error from the company id and vendor codec id read on the wire.
#[macro_export]
macro_rules! non_zero_reserved_fields_err {
    ( $context:expr, $company_id:expr , $vendor_codec_id:expr $(,)? ) => {{
        $crate::non_zero_reserved_fields_err($context, $company_id, $vendor_codec_id)
    }};
}

/// Returns early with a "not enough bytes" error when the cursor holds fewer than `size` bytes.
#[macro_export]
macro_rules! ensure_size {
    (ctx: $ctx:expr, in: $buf:ident, size: $expected:expr) => {{
        let received = $buf.len();
        let expected = $expected;
        if !(received >= expected) {
            return Err($crate::not_enough_bytes_err($ctx, received, expected));
        }
    }};
}

/// Same as [`ensure_size!`] for the wire value being implemented.
///
/// The current type must define the `NAME` and `FIXED_PART_SIZE` constants; `NAME` becomes the error context.
#[macro_export]
macro_rules! ensure_fixed_part_size {
    (in: $buf:ident) => {{
        $crate::ensure_size!(ctx: Self::NAME, in: $buf, size: Self::FIXED_PART_SIZE)
    }};
}
