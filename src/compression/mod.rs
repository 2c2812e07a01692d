//! The compression module manages both directions of the huffpack codec.
//!
//! Compression happens in the following steps:
//! - Count byte frequencies in first-occurrence order to build the alphabet.
//! - Reduce the alphabet into a code tree and read a code for every byte off the tree.
//! - Append the code of every input byte to a bit buffer and pack it into bytes.
//! - Wrap the alphabet, the byte count and the packed bits in a container.
//!
//! Decompression reads the container, rebuilds the same tree from the alphabet and walks it one
//! bit at a time until the declared number of bytes has been produced.
//!
//! The file helpers here read whole files into memory and write whole files out.
//!

pub mod compress;
pub mod decompress;

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use log::{error, info, warn};

use crate::error::{HuffError, Result};
use crate::format::container::Container;
use crate::tools::cli::{HuffOpts, Output};
use compress::{encode, ratio};
use decompress::decode;

/// Round-trip the input file in memory and report the compressed size. Nothing is written.
pub fn test_file(opts: &HuffOpts) -> Result<()> {
    let fname = input_name(opts)?;
    let data = fs::read(fname)?;

    let out = encode(&data)?.serialize();
    let restored = decode(&Container::deserialize(&out)?)?;
    if restored != data {
        error!("{}: round trip does not reproduce the input", fname);
        return Err(HuffError::decode("round trip mismatch"));
    }
    info!(
        "{}: ok, {} -> {} bytes ({:.1}%)",
        fname,
        data.len(),
        out.len(),
        ratio(out.len(), data.len())
    );
    if out.len() >= data.len() {
        warn!("{}: container is not smaller than the input", fname);
    }
    Ok(())
}

/// Get the input file name from the options.
fn input_name(opts: &HuffOpts) -> Result<&str> {
    opts.file.as_deref().ok_or_else(|| {
        HuffError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "No input file given.",
        ))
    })
}

/// Write `data` to stdout or to `out_name` as the options ask, then remove the input file
/// unless it is to be kept.
fn write_output(opts: &HuffOpts, out_name: &str, data: &[u8]) -> Result<()> {
    match opts.output {
        Output::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
        Output::File => {
            if Path::new(out_name).exists() && !opts.force_overwrite {
                error!("Output file {} already exists.", out_name);
                return Err(HuffError::Io(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("{} already exists", out_name),
                )));
            }
            let mut f_out = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(out_name)?;
            f_out.write_all(data)?;
            info!("Wrote {} bytes to {}", data.len(), out_name);
        }
    }

    // Stdout output never removes the input
    if !opts.keep_input_files && opts.output == Output::File {
        if let Some(fname) = &opts.file {
            fs::remove_file(fname)?;
            info!("Removed {}", fname);
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_input_test() {
        let opts = HuffOpts::new();
        assert!(matches!(input_name(&opts), Err(HuffError::Io(_))));
        assert!(test_file(&opts).is_err());
    }
}
