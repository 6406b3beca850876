/// Reading side of a wire buffer.
///
/// `read_*` methods panic when the buffer is too short: decoders check the length beforehand
/// with [`ensure_size!`](crate::ensure_size).
#[derive(Clone, Debug)]
pub struct ReadCursor<'a> {
    inner: &'a [u8],
    pos: usize,
}

impl<'a> ReadCursor<'a> {
    /// Starts reading at the beginning of `bytes`.
    #[inline]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { inner: bytes, pos: 0 }
    }

    /// Number of bytes left to read.
    #[inline]
    pub const fn len(&self) -> usize {
        self.inner.len() - self.pos
    }

    /// Returns `true` once every byte was read.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes read so far.
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    #[track_caller]
    fn take<const N: usize>(&mut self) -> [u8; N] {
        let mut bytes = [0; N];
        bytes.copy_from_slice(&self.inner[self.pos..self.pos + N]);
        self.pos += N;
        bytes
    }

    /// Reads one octet.
    #[inline]
    #[track_caller]
    pub fn read_u8(&mut self) -> u8 {
        let [octet] = self.take::<1>();
        octet
    }

    /// Reads a little-endian `u16`.
    #[inline]
    #[track_caller]
    pub fn read_u16(&mut self) -> u16 {
        u16::from_le_bytes(self.take::<2>())
    }
}

/// Writing side of a wire buffer.
///
/// `write_*` methods panic when the buffer is too short: encoders check the length beforehand
/// with [`ensure_fixed_part_size!`](crate::ensure_fixed_part_size).
#[derive(Debug)]
pub struct WriteCursor<'a> {
    inner: &'a mut [u8],
    pos: usize,
}

impl<'a> WriteCursor<'a> {
    /// Starts writing at the beginning of `bytes`.
    #[inline]
    pub fn new(bytes: &'a mut [u8]) -> Self {
        Self { inner: bytes, pos: 0 }
    }

    /// Number of bytes left to write.
    #[inline]
    pub const fn len(&self) -> usize {
        self.inner.len() - self.pos
    }

    /// Returns `true` once the buffer is full.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes written so far.
    #[inline]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    #[track_caller]
    fn put<const N: usize>(&mut self, bytes: [u8; N]) {
        self.inner[self.pos..self.pos + N].copy_from_slice(&bytes);
        self.pos += N;
    }

    /// Writes one octet.
    #[inline]
    #[track_caller]
    pub fn write_u8(&mut self, value: u8) {
        self.put([value]);
    }

    /// Writes a little-endian `u16`.
    #[inline]
    #[track_caller]
    pub fn write_u16(&mut self, value: u16) {
        self.put(value.to_le_bytes());
    }
}
