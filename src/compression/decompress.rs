use std::fs;

use log::{debug, info, trace};

use super::compress::SUFFIX;
use super::{input_name, write_output};
use crate::bitstream::bitreader::BitReader;
use crate::error::{HuffError, Result};
use crate::format::container::Container;
use crate::huffman_coding::tree::{CodeTree, Node};
use crate::tools::cli::HuffOpts;

/// Decode a container back into the original bytes.
///
/// The code tree is rebuilt from the alphabet. A single-symbol alphabet needs no payload: the
/// symbol is repeated `original_len` times. Otherwise the payload is walked bit by bit from the
/// root, emitting a byte at every leaf, until `original_len` bytes are out. Padding bits after
/// that are ignored. Running out of bits first is an error.
pub fn decode(container: &Container) -> Result<Vec<u8>> {
    let count = container.original_len as usize;
    let tree = match CodeTree::build(&container.alphabet) {
        Some(tree) => tree,
        None if count == 0 => return Ok(Vec::new()),
        None => {
            return Err(HuffError::decode(format!(
                "{} bytes declared but the alphabet is empty",
                count
            )))
        }
    };

    let root = tree.root();
    if let Node::Leaf { byte, .. } = root {
        debug!("Single symbol alphabet, repeating 0x{:02x} {} times", byte, count);
        return Ok(vec![*byte; count]);
    }

    let mut output = Vec::with_capacity(count);
    let mut br = BitReader::new(&container.payload);
    let mut node = root;
    while output.len() < count {
        let bit = br.bool_bit().ok_or_else(|| {
            HuffError::decode(format!(
                "payload ran out of bits after {} of {} bytes",
                output.len(),
                count
            ))
        })?;
        node = node.child(bit).ok_or_else(|| {
            HuffError::decode(format!("tree walk stuck on a leaf at {}", br.loc()))
        })?;
        if let Node::Leaf { byte, .. } = node {
            output.push(*byte);
            node = root;
        }
    }
    trace!("Decoded {} bytes, {} padding bits left", count, br.remaining());
    Ok(output)
}

/// Decompress the container file defined in opts <HuffOpts>. FILE.huff is written to FILE;
/// any other name gets `.out` appended.
pub fn decompress_file(opts: &HuffOpts) -> Result<()> {
    let fname = input_name(opts)?;
    let bytes = fs::read(fname)?;

    let container = Container::deserialize(&bytes)?;
    let data = decode(&container)?;
    info!("{}: {} -> {} bytes", fname, bytes.len(), data.len());

    let out_name = match fname.strip_suffix(SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", fname),
    };
    write_output(opts, &out_name, &data)
}
