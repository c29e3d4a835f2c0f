use std::path::PathBuf;
use std::{fmt::Display, fmt::Formatter};

use clap::{ArgGroup, Parser};
use log::{info, LevelFilter};

use super::rna_io::swap_extension;
use crate::compression::Format;

/// Compress, Decompress, Xml
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Decompress,
    Xml,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Warnings,
    Info,
    Debug,
    Trace,
}
impl Verbosity {
    fn from_count(count: u64) -> Self {
        match count {
            0 => Verbosity::Warnings,
            1 => Verbosity::Info,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Verbosity::Warnings => LevelFilter::Warn,
            Verbosity::Info => LevelFilter::Info,
            Verbosity::Debug => LevelFilter::Debug,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

/// Everything the program needs to know to do one run. Output paths are already resolved.
#[derive(Debug, Clone)]
pub struct RnacOpts {
    /// Compress/Decompress/Xml
    pub op_mode: Mode,
    /// Wire format of the compressed side
    pub format: Format,
    /// File to read
    pub input: PathBuf,
    /// File to write
    pub output: PathBuf,
    /// Print sizes, rate, time and node counts when done
    pub statistics: bool,
    /// Print the bits, the text or the XML produced
    pub debug: bool,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Compress RNA secondary structures through tree contraction",
    long_about = "
    Reads a text file whose first line is an RNA sequence (A, C, G, U) and whose second line is
    its secondary structure in dot-bracket notation. The pair is turned into a tree, runs of
    unpaired bases and stacked pairs are contracted into single nodes, and the tree shape and
    node labels are written with fixed Huffman codes."
)]
#[clap(group(
    ArgGroup::new("mode")
        .required(true)
        .args(&["compress", "decompress", "xml"]),
))]
pub struct Args {
    /// Compress the input file
    #[clap(short = 'c', long = "compress")]
    compress: bool,

    /// Decompress the input file
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Export the contracted tree of the input file as XML
    #[clap(short = 'x', long = "xml")]
    xml: bool,

    /// Input file path
    #[clap(short = 'i', long = "input", parse(from_os_str))]
    input: PathBuf,

    /// Output file path. Defaults to the input path with the extension of the output type
    #[clap(short = 'o', long = "output", parse(from_os_str))]
    output: Option<PathBuf>,

    /// Use the alternative (interleaved) bitstream format
    #[clap(short = 'a', long = "alternative")]
    alternative: bool,

    /// Print (de-)compression statistics
    #[clap(short = 's', long = "statistics")]
    statistics: bool,

    /// Print the produced bits, text or XML to the terminal
    #[clap(long = "debug")]
    debug: bool,

    /// Sets verbosity. -v shows progress, -vvv is chatty
    #[clap(short = 'v', parse(from_occurrences))]
    v: u64,
}

impl From<Args> for RnacOpts {
    fn from(args: Args) -> Self {
        let op_mode = if args.compress {
            Mode::Compress
        } else if args.decompress {
            Mode::Decompress
        } else {
            Mode::Xml
        };
        let format = if args.alternative {
            Format::Alternative
        } else {
            Format::Standard
        };
        let output = args.output.unwrap_or_else(|| {
            let extension = match op_mode {
                Mode::Compress => format.extension(),
                Mode::Decompress => "txt",
                Mode::Xml => "xml",
            };
            swap_extension(&args.input, extension)
        });
        Self {
            op_mode,
            format,
            input: args.input,
            output,
            statistics: args.statistics,
            debug: args.debug,
            verbose: Verbosity::from_count(args.v),
        }
    }
}

/// Parse the command line, set the log level and report what we are about to do.
pub fn rnac_opts_init() -> RnacOpts {
    let opts = RnacOpts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- RNA Contract Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    if opts.op_mode != Mode::Xml {
        info!("Bitstream format set to {}", opts.format);
    }
    info!("Getting input from the file {}", opts.input.display());
    info!("Sending output to the file {}", opts.output.display());
    info!("---- RNA Contract Initialization End ----\n");
    opts
}
