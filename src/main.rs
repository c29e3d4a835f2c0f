//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]
use std::fs;
use std::process::exit;
use std::time::Instant;

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use rnacontract::compression::compress::{encode_alternative, encode_standard};
use rnacontract::compression::decompress::{decode_alternative, decode_standard};
use rnacontract::compression::{tree_to_rna, Format};
use rnacontract::error::Result;
use rnacontract::tools::cli::{rnac_opts_init, Mode, RnacOpts};
use rnacontract::tools::report::Report;
use rnacontract::tools::rna_io::{read_bits, read_record, write_bits, write_text};
use rnacontract::tools::xml::to_xml;
use rnacontract::tree::{build_contracted_tree, Tree, TreeStats};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = rnac_opts_init();

    //----- Figure how what we need to do and go do it
    let start = Instant::now();
    let result = match options.op_mode {
        Mode::Compress => compress_file(&options),
        Mode::Decompress => decompress_file(&options),
        Mode::Xml => xml_file(&options),
    };
    let elapsed = start.elapsed();

    let stats = match result {
        Ok(stats) => stats,
        Err(e) => {
            error!("{}", e);
            exit(1);
        }
    };
    println!(
        "{} successful. Output file at {}",
        match options.op_mode {
            Mode::Compress => "Compression",
            Mode::Decompress => "Decompression",
            Mode::Xml => "XML generation",
        },
        options.output.display()
    );

    if options.statistics {
        let size = |path: &std::path::Path| fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        let report = Report {
            input_size: size(options.input.as_path()),
            output_size: size(options.output.as_path()),
            elapsed,
            stats,
        };
        println!("{}", report);
    }
    info!("Done.\n");
}

/// Text record in, packed bits out.
fn compress_file(opts: &RnacOpts) -> Result<TreeStats> {
    let rna = read_record(&opts.input)?;
    let tree = build_contracted_tree(&rna.sequence, &rna.structure)?;
    let bits = match opts.format {
        Format::Standard => encode_standard(&tree)?,
        Format::Alternative => encode_alternative(&tree)?,
    };
    if opts.debug {
        println!("{}", bits);
        println!("Number of bits: {}", bits.len());
    }
    write_bits(&opts.output, &bits)?;
    Ok(TreeStats::of(&tree))
}

/// Packed bits in, text record out.
fn decompress_file(opts: &RnacOpts) -> Result<TreeStats> {
    let bits = read_bits(&opts.input)?;
    let tree: Tree<String> = match opts.format {
        Format::Standard => decode_standard(&bits)?,
        Format::Alternative => decode_alternative(&bits)?,
    };
    let text = tree_to_rna(&tree)?.to_string();
    if opts.debug {
        println!("{}", text);
    }
    write_text(&opts.output, &text)?;
    Ok(TreeStats::of(&tree))
}

/// Text record in, XML of its contracted tree out.
fn xml_file(opts: &RnacOpts) -> Result<TreeStats> {
    let rna = read_record(&opts.input)?;
    let tree = build_contracted_tree(&rna.sequence, &rna.structure)?;
    let xml = to_xml(&tree);
    if opts.debug {
        println!("{}", xml);
    }
    write_text(&opts.output, &xml)?;
    Ok(TreeStats::of(&tree))
}
