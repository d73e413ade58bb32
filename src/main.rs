//! csvdict - Main Entry Point
//!
//! `csvdict compress <input> <output>` and `csvdict decompress <input> <output>`.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use csvdict::{CodecConfig, CompressionStats, Compressor, CsvRowCodec};

#[derive(Parser)]
#[command(name = "csvdict")]
#[command(about = "Dictionary-substitution compression for CSV tables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Show progress logs (honours RUST_LOG)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Print nothing but errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Field delimiter for the table and the compressed rows
    #[arg(short, long, global = true, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compress a CSV file into a conversion map plus coded rows
    Compress {
        /// Path to the CSV file to compress
        input: PathBuf,
        /// Path the compressed file is written to
        output: PathBuf,
    },
    /// Restore a CSV file from a compressed file
    Decompress {
        /// Path to a compressed file
        input: PathBuf,
        /// Path the restored CSV file is written to
        output: PathBuf,
    },
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() && *b != b'&' => Ok(*b),
        _ => Err(format!("delimiter must be a single ASCII character other than '&', got '{}'", s)),
    }
}

fn init_tracing(cli: &Cli) {
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let compressor = Compressor::with_codec(CsvRowCodec::new(
        CodecConfig::default().with_delimiter(cli.delimiter),
    ));

    match cli.command {
        Command::Compress { input, output } => {
            if input == output {
                bail!("input and output must be different files");
            }
            let report = compressor
                .compress_file(&input, &output)
                .with_context(|| format!("compression of {} failed", input.display()))?;

            if !cli.quiet {
                println!("Compression completed.");
                println!("Original file size:   {} Bytes", report.original_size);
                println!("Compressed file size: {} Bytes", report.compressed_size);
                println!("Compression ratio:    {:.1}:1", report.compression_ratio());
                println!("Time elapsed:         {:.3} Seconds", report.elapsed.as_secs_f64());
            }
        }
        Command::Decompress { input, output } => {
            if input == output {
                bail!("input and output must be different files");
            }
            let report = compressor
                .decompress_file(&input, &output)
                .with_context(|| format!("decompression of {} failed", input.display()))?;

            if !cli.quiet {
                println!("Decompression completed.");
                println!("Time elapsed: {:.3} seconds", report.elapsed.as_secs_f64());
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
