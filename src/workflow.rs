use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::errors::{Error, Result};
use crate::input::RecordReader;
use crate::pattern::parse_flank_pair;
use crate::trim::{TrimOutcome, TrimReport, Trimmer};

/// Wrapper extensions stripped before the output name is derived, so
/// `sample.fastq.gz` becomes `sample.trim.fq` rather than
/// `sample.fastq.trim.fq`.
const COMPRESSION_EXTS: &[&str] = &["gz", "bz", "bz2"];

/// One run's configuration, assembled from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// BAM or FASTQ file to trim.
    pub input: PathBuf,
    /// Comma-separated `left,right` flank pair.
    pub flank_sequences: String,
    /// Substitutions tolerated per flank match.
    pub max_mismatches: usize,
    /// Directory the trimmed FASTQ is written into.
    pub output_dir: PathBuf,
    /// Emit original read names instead of positional record ids.
    pub keep_names: bool,
}

/// Run the trimming workflow: compile the flank pair, stream the input,
/// write surviving reads as FASTQ, and return the filtered-read tally.
///
/// Configuration errors abort before the first read is fetched. A read
/// missing a flank is not an error: it is dropped, counted, and processing
/// continues.
pub fn run(config: &Config) -> Result<TrimReport> {
    let (left, right) = parse_flank_pair(&config.flank_sequences, config.max_mismatches)?;
    let trimmer = Trimmer::new(left, right);

    fs::create_dir_all(&config.output_dir)
        .map_err(|source| Error::io(&config.output_dir, source))?;
    let output_path = config.output_dir.join(output_file_name(&config.input));
    info!(
        "trimming {} into {}",
        config.input.display(),
        output_path.display()
    );

    let mut reader = RecordReader::open(&config.input)?;
    let file = File::create(&output_path).map_err(|source| Error::io(&output_path, source))?;
    let mut writer = BufWriter::new(file);

    let mut report = TrimReport::new();
    // The positional id counts every input read, filtered ones included.
    for index in 0u64.. {
        let Some(read) = reader.next_read() else {
            break;
        };
        let read = read?;
        match trimmer.trim(&read) {
            TrimOutcome::Trimmed { seq, qual } => {
                let result = if config.keep_names {
                    write_fastq_record(&mut writer, &read.id, &seq, &qual)
                } else {
                    write_fastq_record(&mut writer, &index.to_string(), &seq, &qual)
                };
                result.map_err(|source| Error::io(&output_path, source))?;
            }
            TrimOutcome::Filtered => {
                debug!("no flank pair in read {index} ({})", read.id);
                report.increment();
            }
        }
    }
    writer
        .flush()
        .map_err(|source| Error::io(&output_path, source))?;

    warn!(
        "Filtered out {} reads that did not have matches to both flanking sequences.",
        report.total()
    );
    Ok(report)
}

fn write_fastq_record(
    writer: &mut impl Write,
    id: &str,
    seq: &[u8],
    qual: &[u8],
) -> std::io::Result<()> {
    writeln!(writer, "@{id}")?;
    writer.write_all(seq)?;
    writer.write_all(b"\n+\n")?;
    writer.write_all(qual)?;
    writer.write_all(b"\n")
}

/// Derive the output name from the input basename: `sample.bam` becomes
/// `sample.trim.fq`, with compression wrappers stripped first.
fn output_file_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut stem = name.as_str();
    if let Some((head, ext)) = stem.rsplit_once('.')
        && COMPRESSION_EXTS.contains(&ext)
    {
        stem = head;
    }
    let stem = stem.rsplit_once('.').map(|(head, _)| head).unwrap_or(stem);
    format!("{stem}.trim.fq")
}
