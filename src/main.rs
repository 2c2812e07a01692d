//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffpack::compression::{compress::compress_file, decompress::decompress_file, test_file};
use huffpack::tools::cli::{init_huff_opts, Mode};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Log to stderr so stdout stays clean for -c output. The max level is lowered by -v.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = init_huff_opts();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Zip => compress_file(&options),
        Mode::Unzip => decompress_file(&options),
        Mode::Test => test_file(&options),
    };

    match result {
        Ok(()) => info!("Done.\n"),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
