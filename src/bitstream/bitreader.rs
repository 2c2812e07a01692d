//! BitReader: reads a packed payload one bit at a time for the tree walk in the decoder.
//!
//! NOTE: The whole payload is in memory, so this reads from a byte slice rather than an I/O source.
//!

const BIT_MASK: u8 = 0xff;

/// Reads bits MSB first from a packed byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a new BitReader positioned at the first bit of `buffer`.
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
        }
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        let byte = *self.buffer.get(self.cursor)?;
        let bit = (byte & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Number of bits consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Number of bits left to read.
    pub fn remaining(&self) -> usize {
        self.buffer.len() * 8 - self.consumed()
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl Iterator for BitReader<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.bool_bit()
    }
}
