use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

/// Compress, decompress, or round-trip test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// All user settable options that control program behavior
#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Name of the file to read for input
    pub file: Option<String>,
    /// Compress/Decompress/Test
    pub op_mode: Mode,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Location where output is sent
    pub output: Output,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            file: None,
            op_mode: Mode::Zip,
            keep_input_files: false,
            force_overwrite: false,
            output: Output::File,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "A static Huffman file compressor",
    long_about = "
    Compresses a file with a static Huffman code built from its byte frequencies. The code
    tree is rebuilt from a small alphabet table stored in the .huff container, so nothing
    beyond the container is needed to decompress."
)]
pub struct Args {
    /// Filename of file to process
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file
    #[clap(short = 'z', long = "zip")]
    compress: bool,

    /// Perform decompression on the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Compress and decompress in memory, then report the result
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Keep input file
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 3)]
    v: u8,
}

impl Args {
    /// Copy parsed command line arguments into a HuffOpts.
    pub fn to_opts(&self) -> HuffOpts {
        let mut opts = HuffOpts::new();
        opts.file = self.filename.clone();
        if self.compress {
            opts.op_mode = Mode::Zip
        };
        if self.decompress {
            opts.op_mode = Mode::Unzip
        };
        if self.test {
            opts.op_mode = Mode::Test
        };
        opts.force_overwrite = self.force;
        opts.keep_input_files = self.keep;
        if self.stdout {
            opts.output = Output::Stdout
        };
        opts
    }

    /// Log level selected with -v.
    pub fn level(&self) -> log::LevelFilter {
        match self.v {
            0 => log::LevelFilter::Off,
            1 => log::LevelFilter::Error,
            2 => log::LevelFilter::Warn,
            3 => log::LevelFilter::Info,
            4 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Parse the command line, set the log level, and return the resulting options.
pub fn init_huff_opts() -> HuffOpts {
    let args = Args::parse();
    log::set_max_level(args.level());
    let opts = args.to_opts();

    // Below we report initialization status to the user
    info!("---- Huffpack Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    match &opts.file {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("No input file given"),
    }
    info!("Output sent to {}", opts.output);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.keep_input_files {
        info!("Keeping input files")
    };
    info!("---- Huffpack Initialization End ----\n");
    opts
}
