//! The format module defines the huffpack container.
//!
//! Layout (all integers big endian):
//!
//! | offset         | size      | field                                          |
//! |----------------|-----------|------------------------------------------------|
//! | 0              | 4         | signature `HUFF`                               |
//! | 4              | 4         | number of bytes the payload decodes to (u32)   |
//! | 8              | 2         | absolute offset of the payload (u16)           |
//! | 10             | 2 per sym | alphabet: symbol byte, then one byte weight    |
//! | payload offset | rest      | packed code bits, final byte zero padded       |
//!
//! The payload offset must lie strictly between 10 and the container length, and the alphabet
//! span must be a whole number of entries. The one exception is an empty input, which is the
//! bare 10 byte header with a zero length and an offset of 10.
//!

pub mod container;
