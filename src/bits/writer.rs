/// Bit-level writer for the packed payload
///
/// Writes bits MSB-first: the first bit written lands in bit 7 of the first
/// byte. A trailing partial byte is zero-padded in its low-order bits.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Current byte being built
    current_byte: u8,
    /// Bits written to current byte (0-7)
    bits_in_byte: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self { output: Vec::with_capacity(65536), current_byte: 0, bits_in_byte: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), current_byte: 0, bits_in_byte: 0 }
    }

    /// Write a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current_byte |= (bit as u8) << (7 - self.bits_in_byte);
        self.bits_in_byte += 1;

        if self.bits_in_byte == 8 {
            self.output.push(self.current_byte);
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Write the low `n` bits (0-32) of `value`, most significant first
    pub fn write_bits(&mut self, value: u32, n: u8) {
        debug_assert!(n <= 32);

        for shift in (0..n).rev() {
            self.write_bit((value >> shift) & 1 != 0);
        }
    }

    /// Write a codeword given as binary digits (each 0 or 1)
    pub fn write_digits(&mut self, digits: &[u8]) {
        for &digit in digits {
            debug_assert!(digit < 2, "binary stream cannot carry digit {}", digit);
            self.write_bit(digit != 0);
        }
    }

    /// Pad to byte boundary with zero bits
    pub fn align_to_byte(&mut self) {
        if self.bits_in_byte > 0 {
            self.output.push(self.current_byte);
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Finish and return the output bytes
    pub fn finish(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.output
    }

    /// Total bits written so far
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.bits_in_byte as usize
    }

    /// Get current output length in bytes (including partial byte)
    pub fn len(&self) -> usize {
        self.output.len() + if self.bits_in_byte > 0 { 1 } else { 0 }
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.bits_in_byte == 0
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
