use log::{debug, trace};

use crate::error::{HuffError, Result};
use crate::huffman_coding::alphabet::{Alphabet, Symbol};

/// Container signature.
pub const MAGIC: [u8; 4] = *b"HUFF";
/// The alphabet always starts right after the fixed header.
pub const ALPHABET_OFFSET: usize = 10;
/// At most one entry per byte value.
const MAX_SYMBOLS: usize = 256;

/// An encoded buffer: the alphabet needed to rebuild the code tree, the number of bytes
/// the payload decodes to, and the packed payload bits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Container {
    pub alphabet: Alphabet,
    pub original_len: u32,
    pub payload: Vec<u8>,
}

impl Container {
    pub fn new(alphabet: Alphabet, original_len: u32, payload: Vec<u8>) -> Self {
        Self {
            alphabet,
            original_len,
            payload,
        }
    }

    /// Absolute offset of the payload in the serialized container.
    pub fn payload_offset(&self) -> usize {
        ALPHABET_OFFSET + self.alphabet.encoded_len()
    }

    /// Size of the serialized container.
    pub fn encoded_len(&self) -> usize {
        self.payload_offset() + self.payload.len()
    }

    /// Serialize as magic, original length (u32 BE), payload offset (u16 BE), alphabet, payload.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.original_len.to_be_bytes());
        // An alphabet holds at most 256 symbols, so the offset is at most 522
        out.extend_from_slice(&(self.payload_offset() as u16).to_be_bytes());
        self.alphabet
            .iter()
            .for_each(|sym| out.extend_from_slice(&sym.to_bytes()));
        out.extend_from_slice(&self.payload);
        trace!(
            "Serialized container: {} symbols, {} payload bytes, {} total",
            self.alphabet.len(),
            self.payload.len(),
            out.len()
        );
        out
    }

    /// Parse a serialized container, validating the header before reading anything else.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < ALPHABET_OFFSET {
            return Err(HuffError::format(format!(
                "{} bytes is shorter than the {} byte header",
                bytes.len(),
                ALPHABET_OFFSET
            )));
        }
        if bytes[0..4] != MAGIC {
            return Err(HuffError::format(format!(
                "wrong signature {:02x?}, expected \"HUFF\"",
                &bytes[0..4]
            )));
        }
        let original_len = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        let payload_offset = u16::from_be_bytes([bytes[8], bytes[9]]) as usize;

        // An empty input encodes to a bare header
        if payload_offset == ALPHABET_OFFSET && bytes.len() == ALPHABET_OFFSET {
            if original_len != 0 {
                return Err(HuffError::format(format!(
                    "empty alphabet but {} bytes declared",
                    original_len
                )));
            }
            debug!("Found an empty container.");
            return Ok(Self::default());
        }

        if payload_offset <= ALPHABET_OFFSET || payload_offset >= bytes.len() {
            return Err(HuffError::format(format!(
                "payload offset {} outside ({}, {})",
                payload_offset,
                ALPHABET_OFFSET,
                bytes.len()
            )));
        }
        let span = payload_offset - ALPHABET_OFFSET;
        if span % Symbol::ENCODED_LEN != 0 {
            return Err(HuffError::format(format!(
                "alphabet span of {} bytes is not a whole number of symbols",
                span
            )));
        }
        if span / Symbol::ENCODED_LEN > MAX_SYMBOLS {
            return Err(HuffError::format(format!(
                "{} alphabet entries, at most {} allowed",
                span / Symbol::ENCODED_LEN,
                MAX_SYMBOLS
            )));
        }

        let symbols = bytes[ALPHABET_OFFSET..payload_offset]
            .chunks_exact(Symbol::ENCODED_LEN)
            .map(|pair| Symbol::from_bytes([pair[0], pair[1]]))
            .collect();
        let alphabet = Alphabet::from_symbols(symbols)?;
        debug!(
            "Found a valid container: {} symbols, {} bytes declared, {} payload bytes.",
            alphabet.len(),
            original_len,
            bytes.len() - payload_offset
        );
        Ok(Self {
            alphabet,
            original_len,
            payload: bytes[payload_offset..].to_vec(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Container {
        let alphabet = Alphabet::from_symbols(vec![Symbol::new(b'b', 2), Symbol::new(b'a', 2)])
            .unwrap();
        Container::new(alphabet, 4, vec![0b0101_0000])
    }

    #[test]
    fn layout_test() {
        let out = sample().serialize();
        assert_eq!(
            out,
            vec![b'H', b'U', b'F', b'F', 0, 0, 0, 4, 0, 14, b'b', 2, b'a', 2, 0b0101_0000]
        );
        assert_eq!(out.len(), sample().encoded_len());
    }

    #[test]
    fn round_trip_test() {
        let c = sample();
        assert_eq!(Container::deserialize(&c.serialize()).unwrap(), c);
    }

    #[test]
    fn empty_container_test() {
        let c = Container::default();
        let out = c.serialize();
        assert_eq!(out, b"HUFF\0\0\0\0\0\x0a".to_vec());
        assert_eq!(Container::deserialize(&out).unwrap(), c);
    }

    #[test]
    fn empty_container_with_length_test() {
        let result = Container::deserialize(b"HUFF\0\0\0\x05\0\x0a");
        assert!(matches!(result, Err(HuffError::Format(_))));
    }

    #[test]
    fn bad_magic_test() {
        let mut out = sample().serialize();
        out[0..4].copy_from_slice(b"XXXX");
        assert!(matches!(
            Container::deserialize(&out),
            Err(HuffError::Format(_))
        ));
    }

    #[test]
    fn short_header_test() {
        assert!(matches!(
            Container::deserialize(b"HUFF\0\0"),
            Err(HuffError::Format(_))
        ));
    }

    #[test]
    fn offset_out_of_range_test() {
        let mut out = sample().serialize();
        // Offset pointing at the end leaves no payload
        out[9] = out.len() as u8;
        assert!(Container::deserialize(&out).is_err());
        out[9] = 9;
        assert!(Container::deserialize(&out).is_err());
    }

    #[test]
    fn odd_span_test() {
        let mut out = sample().serialize();
        out[9] = 13;
        assert!(matches!(
            Container::deserialize(&out),
            Err(HuffError::Format(_))
        ));
    }

    #[test]
    fn duplicate_symbol_test() {
        let mut out = sample().serialize();
        out[12] = b'b';
        assert!(matches!(
            Container::deserialize(&out),
            Err(HuffError::Format(_))
        ));
    }
}
