/// Error types able to report a short buffer.
pub trait NotEnoughBytesErr {
    /// Creates the error.
    fn not_enough_bytes(context: &'static str, received: usize, expected: usize) -> Self;
}

/// Builds a "not enough bytes" error for either direction.
pub fn not_enough_bytes_err<T: NotEnoughBytesErr>(context: &'static str, received: usize, expected: usize) -> T {
    T::not_enough_bytes(context, received, expected)
}

/// Error types able to report a field holding an invalid value.
pub trait InvalidFieldErr {
    /// Creates the error.
    fn invalid_field(context: &'static str, field: &'static str, reason: &'static str) -> Self;
}

/// Builds an "invalid field" error.
pub fn invalid_field_err<T: InvalidFieldErr>(context: &'static str, field: &'static str, reason: &'static str) -> T {
    T::invalid_field(context, field, reason)
}

/// Raised when a standardized codec identifier carries a company id or a vendor codec id.
pub trait NonZeroReservedFieldsErr {
    /// Creates the error.
    fn non_zero_reserved_fields(context: &'static str, company_id: u16, vendor_codec_id: u16) -> Self;
}

/// Builds a "non-zero reserved fields" error from the values found on the wire.
pub fn non_zero_reserved_fields_err<T: NonZeroReservedFieldsErr>(
    context: &'static str,
    company_id: u16,
    vendor_codec_id: u16,
) -> T {
    T::non_zero_reserved_fields(context, company_id, vendor_codec_id)
}
