use std::path::PathBuf;

use clap::Parser;
use flanktrim::{Config, run};
use log::info;

/// Trim reads to the region bounded by a pair of flanking sequences.
///
/// Each read is searched for both flanks with a substitution allowance; a
/// read matching both is trimmed to the enclosed region (flanks retained)
/// and written to `<input>.trim.fq` in the output directory, the rest are
/// counted and dropped.
#[derive(clap::Parser)]
#[command(author, version, about)]
struct Args {
    /// Comma-separated pair of sequences flanking the region of interest.
    /// The flanking sequences are retained in the output.
    #[arg(short = 'f', long)]
    flank_sequences: String,

    /// Mismatch allowance for matching the flanking sequences.
    #[arg(short = 'e', long, default_value_t = 1)]
    max_mismatches: usize,

    /// Output directory. Created if missing.
    #[arg(short = 'o', long, default_value = ".")]
    output_dir: PathBuf,

    /// Write original read names instead of positional record ids.
    #[arg(long)]
    keep_names: bool,

    /// BAM or FASTQ file to trim. FASTQ may be gzipped.
    input: PathBuf,
}

fn main() {
    let args = Args::parse();
    env_logger::init();

    info!("started trimming {}", args.input.display());
    let config = Config {
        input: args.input,
        flank_sequences: args.flank_sequences,
        max_mismatches: args.max_mismatches,
        output_dir: args.output_dir,
        keep_names: args.keep_names,
    };

    if let Err(err) = run(&config) {
        eprintln!("flanktrim: {err}");
        std::process::exit(1);
    }
    info!("completed");
}
