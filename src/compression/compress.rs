use std::fs;

use log::{debug, info, trace};

use super::{input_name, write_output};
use crate::bitstream::bitbuffer::BitBuffer;
use crate::error::{HuffError, Result};
use crate::format::container::Container;
use crate::huffman_coding::{alphabet::Alphabet, code_map::CodeMap, tree::CodeTree};
use crate::tools::cli::HuffOpts;

/// Suffix added to compressed files.
pub const SUFFIX: &str = ".huff";

/// Encode `data` into a container: alphabet, byte count, and the packed code bits.
/// Empty data gives an empty alphabet and an empty payload.
pub fn encode(data: &[u8]) -> Result<Container> {
    let original_len =
        u32::try_from(data.len()).map_err(|_| HuffError::InputTooLarge(data.len()))?;

    let alphabet = Alphabet::from_data(data);
    let tree = match CodeTree::build(&alphabet) {
        Some(tree) => tree,
        None => {
            debug!("Empty input, nothing to encode.");
            return Ok(Container::default());
        }
    };
    let code_map = CodeMap::from_tree(&tree);
    trace!("Code map: {:?}", code_map);

    let mut bits = BitBuffer::with_capacity(data.len() * 2);
    for &byte in data {
        let code = code_map.get(byte).ok_or_else(|| {
            HuffError::Internal(format!("byte 0x{:02x} has no code", byte))
        })?;
        bits.push_bits(code);
    }
    debug!(
        "Encoded {} bytes over {} symbols into {} bits ({} valid in the last byte)",
        data.len(),
        alphabet.len(),
        bits.len(),
        bits.last_bits()
    );

    Ok(Container::new(alphabet, original_len, bits.into_bytes()))
}

/// Compress the input file defined in opts <HuffOpts> into FILE.huff (or stdout).
pub fn compress_file(opts: &HuffOpts) -> Result<()> {
    let fname = input_name(opts)?;
    let data = fs::read(fname)?;

    let container = encode(&data)?;
    let out = container.serialize();
    info!(
        "{}: {} -> {} bytes ({:.1}%)",
        fname,
        data.len(),
        out.len(),
        ratio(out.len(), data.len())
    );

    write_output(opts, &format!("{}{}", fname, SUFFIX), &out)
}

/// Output size as a percentage of input size. Empty input reports 100%.
pub(crate) fn ratio(out: usize, input: usize) -> f64 {
    if input == 0 {
        return 100.0;
    }
    out as f64 * 100.0 / input as f64
}
