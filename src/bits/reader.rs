/// Bit-level reader over an in-memory payload
///
/// Reads bits MSB-first, mirroring [`BitWriter`](super::BitWriter). The
/// payload is always a whole number of bytes, so the reader sees the writer's
/// zero padding as ordinary bits; callers decide what a short read means.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index of the next bit to read (0 = MSB of data[0])
    position: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// Read a single bit, or `None` once the payload is exhausted
    #[inline]
    pub fn read_bit(&mut self) -> Option<bool> {
        let byte = *self.data.get(self.position / 8)?;
        let bit = (byte >> (7 - (self.position % 8))) & 1;
        self.position += 1;
        Some(bit != 0)
    }

    /// Read `n` bits (0-32) MSB-first
    ///
    /// Returns `None` without consuming anything if fewer than `n` bits remain.
    pub fn read_bits(&mut self, n: u8) -> Option<u32> {
        debug_assert!(n <= 32, "Cannot read more than 32 bits at once");

        if self.bits_remaining() < n as usize {
            return None;
        }

        let mut value = 0u32;
        for _ in 0..n {
            let bit = self.read_bit()?;
            value = (value << 1) | bit as u32;
        }
        Some(value)
    }

    /// Number of unread bits, padding included
    pub fn bits_remaining(&self) -> usize {
        self.data.len() * 8 - self.position
    }

    /// Whether every bit has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.bits_remaining() == 0
    }

    /// Bits consumed so far
    pub fn position(&self) -> usize {
        self.position
    }
}
