//! The bitstream module forms the bit-level I/O subsystem of huffpack.
//!
//! The encoder appends one variable-length code per input byte to a BitBuffer and then takes the
//! packed bytes. The decoder walks the code tree with a BitReader over the packed payload.
//!
//! Bits are MSB first within each byte. The final byte is zero padded; its number of valid bits
//! is not stored anywhere, because the declared byte count tells the decoder when to stop.
//!
pub mod bitbuffer;
pub mod bitreader;
