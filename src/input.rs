use std::fs::File;
use std::path::{Path, PathBuf};

use needletail::FastxReader;
use noodles::{bam, sam};

use crate::errors::{Error, Result};

/// Offset between raw Phred scores and their FASTQ encoding.
const PHRED_OFFSET: u8 = 33;

/// One sequencing read: identifier, bases, and Phred+33 quality codes.
///
/// `seq` and `qual` always have equal length; the readers reject records
/// violating that before a read is handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Read {
    pub id: String,
    pub seq: Vec<u8>,
    pub qual: Vec<u8>,
}

type BamReader = bam::io::Reader<noodles::bgzf::io::Reader<File>>;

/// Sequential record source yielding one [`Read`] at a time.
///
/// `.bam` files are decoded with noodles, read straight through without an
/// index or reference sequences. Everything else is handed to needletail,
/// which covers FASTQ and FASTA, gzipped or plain. Records without quality
/// scores (FASTA, or a BAM record with its quality field omitted) are
/// per-record errors: the trimmed output needs a quality slice.
pub struct RecordReader {
    path: PathBuf,
    inner: Inner,
}

enum Inner {
    Bam {
        reader: BamReader,
        header: sam::Header,
    },
    Fastx(Box<dyn FastxReader>),
}

impl RecordReader {
    /// Open `path`, picking the decoder from the file extension.
    pub fn open(path: &Path) -> Result<Self> {
        let inner = match path.extension().and_then(|ext| ext.to_str()) {
            Some("bam") => {
                let file = File::open(path).map_err(|source| Error::io(path, source))?;
                let mut reader = bam::io::Reader::new(file);
                let header = reader
                    .read_header()
                    .map_err(|source| Error::io(path, source))?;
                Inner::Bam { reader, header }
            }
            _ => {
                let reader = needletail::parse_fastx_file(path).map_err(|source| Error::Parse {
                    file: path.to_path_buf(),
                    source,
                })?;
                Inner::Fastx(reader)
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            inner,
        })
    }

    /// Pull the next read, or `None` at end of stream.
    pub fn next_read(&mut self) -> Option<Result<Read>> {
        match &mut self.inner {
            Inner::Bam { reader, header } => next_bam_read(reader, header, &self.path),
            Inner::Fastx(reader) => next_fastx_read(reader.as_mut(), &self.path),
        }
    }
}

fn next_bam_read(
    reader: &mut BamReader,
    header: &sam::Header,
    path: &Path,
) -> Option<Result<Read>> {
    let mut record = bam::Record::default();
    match reader.read_record(&mut record) {
        Ok(0) => None,
        Ok(_) => Some(decode_bam_record(header, &record)),
        Err(source) => Some(Err(Error::io(path, source))),
    }
}

fn decode_bam_record(header: &sam::Header, record: &bam::Record) -> Result<Read> {
    let record = sam::alignment::RecordBuf::try_from_alignment_record(header, record)
        .map_err(|source| Error::BamRecord { source })?;

    let id = record
        .name()
        .map(|name| name.to_string())
        .unwrap_or_else(|| String::from("*"));
    let seq = record.sequence().as_ref().to_vec();
    let qual: Vec<u8> = record
        .quality_scores()
        .as_ref()
        .iter()
        .map(|&score| score + PHRED_OFFSET)
        .collect();

    check_lengths(Read { id, seq, qual })
}

fn next_fastx_read(reader: &mut dyn FastxReader, path: &Path) -> Option<Result<Read>> {
    let record = match reader.next()? {
        Ok(record) => record,
        Err(source) => {
            return Some(Err(Error::Parse {
                file: path.to_path_buf(),
                source,
            }));
        }
    };

    let id = String::from_utf8_lossy(record.id()).into_owned();
    let Some(qual) = record.qual() else {
        return Some(Err(Error::MissingQuality { id }));
    };
    Some(check_lengths(Read {
        id,
        seq: record.seq().into_owned(),
        qual: qual.to_vec(),
    }))
}

fn check_lengths(read: Read) -> Result<Read> {
    if read.qual.is_empty() && !read.seq.is_empty() {
        return Err(Error::MissingQuality { id: read.id });
    }
    if read.seq.len() != read.qual.len() {
        return Err(Error::QualityLength {
            id: read.id,
            seq: read.seq.len(),
            qual: read.qual.len(),
        });
    }
    Ok(read)
}
