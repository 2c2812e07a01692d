/// Growable, byte-packable sequence of bits. Bits are stored MSB first in each byte,
/// so packing is a no-op: the backing bytes are already the packed form with the
/// unused low bits of the final byte held at zero.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitBuffer {
    bytes: Vec<u8>,
    len: usize,
}

impl BitBuffer {
    /// Create an empty BitBuffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty BitBuffer with room for `bits` bits before reallocating.
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity((bits + 7) / 8),
            len: 0,
        }
    }

    /// Treat every bit of `bytes` as valid. This is the unpacking step used on
    /// payloads, whose true bit length is not stored.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            len: bytes.len() * 8,
        }
    }

    /// Number of valid bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append one bit.
    pub fn push_bit(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    /// Append every bit of `other`, in order.
    pub fn push_bits(&mut self, other: &BitBuffer) {
        // Byte aligned, so whole bytes can be copied
        if self.len % 8 == 0 {
            self.bytes.extend_from_slice(&other.bytes);
            self.len += other.len;
            return;
        }
        other.iter().for_each(|bit| self.push_bit(bit));
    }

    /// Return bit `idx`, or None past the end.
    pub fn get(&self, idx: usize) -> Option<bool> {
        if idx >= self.len {
            return None;
        }
        Some(self.bytes[idx / 8] & (0x80 >> (idx % 8)) != 0)
    }

    /// Iterate over the valid bits.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).filter_map(move |idx| self.get(idx))
    }

    /// True if `self` is a prefix of (or equal to) `other`.
    pub fn is_prefix_of(&self, other: &BitBuffer) -> bool {
        self.len <= other.len && (0..self.len).all(|idx| self.get(idx) == other.get(idx))
    }

    /// How many bits of the final packed byte are valid (0 means the final byte is full).
    pub fn last_bits(&self) -> u8 {
        (self.len % 8) as u8
    }

    /// Packed bytes, final byte zero padded.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the buffer, returning the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Debugging function to return the number of bytes.bits written so far
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.len / 8, self.len % 8)
    }
}

impl std::fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = self.iter().map(|bit| if bit { '1' } else { '0' }).collect();
        write!(f, "BitBuffer({})", bits)
    }
}

impl FromIterator<bool> for BitBuffer {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut buf = BitBuffer::new();
        iter.into_iter().for_each(|bit| buf.push_bit(bit));
        buf
    }
}

#[cfg(test)]
mod test {
    use super::BitBuffer;

    fn bits(s: &str) -> BitBuffer {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn push_bit_test() {
        let mut bb = BitBuffer::new();
        for bit in [true, false, true, true] {
            bb.push_bit(bit);
        }
        assert_eq!(bb.len(), 4);
        assert_eq!(bb.as_bytes(), &[0b1011_0000]);
        assert_eq!(bb.last_bits(), 4);
    }

    #[test]
    fn push_bits_unaligned_test() {
        let mut bb = bits("101");
        bb.push_bits(&bits("11110000"));
        assert_eq!(bb.len(), 11);
        assert_eq!(bb.into_bytes(), vec![0b1011_1110, 0b0000_0000]);
    }

    #[test]
    fn push_bits_aligned_test() {
        let mut bb = bits("00100001");
        bb.push_bits(&bits("001"));
        assert_eq!(bb.len(), 11);
        assert_eq!(bb.as_bytes(), &[33, 0b0010_0000]);
        assert_eq!("[1.3]", &bb.loc());
        // Appending after an aligned copy must land right after the copied bits
        bb.push_bit(true);
        assert_eq!(bb.as_bytes(), &[33, 0b0011_0000]);
    }

    #[test]
    fn full_byte_last_bits_test() {
        let bb = bits("11111111");
        assert_eq!(bb.last_bits(), 0);
        assert_eq!(bb.as_bytes(), &[255]);
    }

    #[test]
    fn from_bytes_test() {
        let bb = BitBuffer::from_bytes(&[0b1000_0001]);
        assert_eq!(bb.len(), 8);
        assert_eq!(bb.get(0), Some(true));
        assert_eq!(bb.get(1), Some(false));
        assert_eq!(bb.get(7), Some(true));
        assert_eq!(bb.get(8), None);
    }

    #[test]
    fn prefix_test() {
        assert!(bits("10").is_prefix_of(&bits("101")));
        assert!(bits("101").is_prefix_of(&bits("101")));
        assert!(!bits("11").is_prefix_of(&bits("101")));
        assert!(!bits("1011").is_prefix_of(&bits("101")));
    }

    #[test]
    fn debug_test() {
        assert_eq!(format!("{:?}", bits("0110")), "BitBuffer(0110)");
    }
}
