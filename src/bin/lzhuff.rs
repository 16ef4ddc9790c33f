use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;
use log::info;
use lzhuff::stats::SourceReport;
use lzhuff::{Codec, CodecStats, CompressConfig, Compressor, ContainerHeader, Decompressor, Mode};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "lzhuff")]
#[command(about = "Compress files with LZ77 matching and Huffman coding")]
#[command(version)]
struct Args {
    /// Decompress input instead of compressing it
    #[arg(short = 'u', long)]
    unzip: bool,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,

    /// Pure Huffman coding without LZ77 matching
    #[arg(long)]
    huffman: bool,

    /// Input file
    input: PathBuf,

    /// Output file
    output: PathBuf,
}

const EXIT_FAILURE: u8 = 1;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(EXIT_FAILURE),
            };
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
    // A logger may already be installed when embedded; keep going without ours
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto);
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let input = File::open(&args.input)
        .map_err(|e| format!("Cannot open input file {}: {}", args.input.display(), e))?;
    let input = BufReader::new(input);

    // Everything is produced in memory first so a failed run leaves no output file
    let mut buffer = Vec::new();
    let start = Instant::now();

    let stats = if args.unzip {
        info!("decompressing {} -> {}", args.input.display(), args.output.display());
        Decompressor::new().process(input, &mut buffer)?
    } else {
        let config = CompressConfig {
            mode: if args.huffman { Mode::Huffman } else { Mode::Lz77 },
            ..Default::default()
        };
        info!(
            "compressing {} -> {} ({})",
            args.input.display(),
            args.output.display(),
            config.mode
        );
        Compressor::new(config).process(input, &mut buffer)?
    };

    let elapsed = start.elapsed();
    write_output(&args.output, &buffer)?;

    if args.verbose {
        print_stats(args.unzip, &stats, elapsed);
        if !args.unzip {
            let header = ContainerHeader::parse(&buffer)?;
            eprintln!("Source statistics:");
            eprint!("{}", SourceReport::from_frequencies(&header.frequencies));
        }
    }

    Ok(())
}

fn write_output(path: &Path, data: &[u8]) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)
        .map_err(|e| format!("Cannot open output file {}: {}", path.display(), e))?;
    let mut output = BufWriter::new(file);
    output.write_all(data)?;
    output.flush()?;
    Ok(())
}

fn print_stats(unzip: bool, stats: &CodecStats, elapsed: std::time::Duration) {
    if unzip {
        eprintln!("Decompressed successfully:");
    } else {
        eprintln!("Compression complete:");
    }
    eprintln!("  Mode:             {}", stats.mode);
    eprintln!("  Input bytes:      {}", stats.input_bytes);
    eprintln!("  Output bytes:     {}", stats.output_bytes);
    eprintln!("  Literals:         {}", stats.literals);
    eprintln!("  Back-references:  {}", stats.copies);
    if !unzip && stats.input_bytes > 0 {
        eprintln!(
            "  Ratio:            {:.4}",
            stats.output_bytes as f64 / stats.input_bytes as f64
        );
    }
    eprintln!("  Time:             {:.2?}", elapsed);
    eprintln!(
        "  Throughput:       {:.1} MB/s",
        stats.input_bytes as f64 / elapsed.as_secs_f64().max(1e-9) / 1_000_000.0
    );
}
