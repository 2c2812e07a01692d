use log::debug;

use crate::error::{HuffError, Result};
use crate::tools::freq_count::ordered_freqs;

/// Largest weight a symbol can carry. The container stores each weight in a single byte.
pub const MAX_WEIGHT: u32 = u8::MAX as u32;

/// A byte value and its frequency weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub byte: u8,
    pub freq: u8,
}

impl Symbol {
    /// Bytes used by one symbol in the container.
    pub const ENCODED_LEN: usize = 2;

    pub fn new(byte: u8, freq: u8) -> Self {
        Self { byte, freq }
    }

    /// Container encoding: symbol byte, then weight byte.
    pub fn to_bytes(self) -> [u8; Self::ENCODED_LEN] {
        [self.byte, self.freq]
    }

    pub fn from_bytes(bytes: [u8; Self::ENCODED_LEN]) -> Self {
        Self::new(bytes[0], bytes[1])
    }
}

/// Distinct bytes of an input with their weights, in first-occurrence order.
///
/// The order is part of the container format: the code tree is rebuilt from it on decode
/// and tie-breaking depends on it.
///
/// Weights are limited to one byte (1..=255 for data built here). When any byte occurs more
/// than 255 times, every count is scaled proportionally into that range, rounding to nearest
/// and never below 1. Encoder and decoder then build the tree from the same weights, at the
/// cost of a slightly less tight code on large inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build the alphabet of `data` in a single pass. Empty data gives an empty alphabet.
    pub fn from_data(data: &[u8]) -> Self {
        let counts = ordered_freqs(data);
        let max = counts.iter().map(|&(_, count)| count).max().unwrap_or(0);
        if max > MAX_WEIGHT {
            debug!(
                "Scaling {} symbol counts (max {}) into one byte weights",
                counts.len(),
                max
            );
        }
        let symbols = counts
            .into_iter()
            .map(|(byte, count)| Symbol::new(byte, fit_weight(count, max)))
            .collect();
        Self { symbols }
    }

    /// Wrap symbols read back from a container. Byte values must be distinct.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        let mut seen = [false; 256];
        for sym in &symbols {
            if seen[sym.byte as usize] {
                return Err(HuffError::format(format!(
                    "symbol 0x{:02x} appears twice in the alphabet",
                    sym.byte
                )));
            }
            seen[sym.byte as usize] = true;
        }
        Ok(Self { symbols })
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }

    /// Bytes this alphabet occupies in a container.
    pub fn encoded_len(&self) -> usize {
        self.symbols.len() * Symbol::ENCODED_LEN
    }
}

/// Scale `count` against the largest count so the result fits a one byte weight.
fn fit_weight(count: u32, max: u32) -> u8 {
    if max <= MAX_WEIGHT {
        return count as u8;
    }
    let scaled = (count as u64 * MAX_WEIGHT as u64 + max as u64 / 2) / max as u64;
    scaled.clamp(1, MAX_WEIGHT as u64) as u8
}
