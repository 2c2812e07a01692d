//! Static Huffman coder with a small self-describing container.
//!
//! Version 0.1.0
//!
//! A prefix-free code is derived from the byte frequencies of an input buffer, the buffer is
//! packed into a bitstream with that code, and the result is wrapped in a `HUFF` container that
//! holds everything needed to decode it again.
//!
//! ```
//! use huffpack::{decode, encode, Container};
//!
//! let data = b"abracadabra";
//! let bytes = encode(data)?.serialize();
//! let restored = decode(&Container::deserialize(&bytes)?)?;
//! assert_eq!(restored, data);
//! # Ok::<(), huffpack::HuffError>(())
//! ```
//!
//! The command line tool compresses a file with
//!
//! `$> huffpack -z test.txt`
//!
//! creating test.txt.huff. The original file is deleted unless `-k` is given.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod format;
pub mod huffman_coding;
pub mod tools;

pub use compression::compress::encode;
pub use compression::decompress::decode;
pub use error::{HuffError, Result};
pub use format::container::Container;
