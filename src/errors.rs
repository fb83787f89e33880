use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("expected two comma-separated flank sequences, got {count} in \"{input}\"")]
    FlankPair { input: String, count: usize },

    #[error("flank sequences must not be empty")]
    EmptyFlank,

    #[error("error reading or writing \"{}\": {source}", .file.display())]
    FileIo { file: PathBuf, source: io::Error },

    #[error("error parsing \"{}\": {source}", .file.display())]
    Parse {
        file: PathBuf,
        source: needletail::errors::ParseError,
    },

    #[error("error decoding BAM record: {source}")]
    BamRecord { source: io::Error },

    #[error("record \"{id}\" has no quality scores")]
    MissingQuality { id: String },

    #[error("record \"{id}\" has {seq} bases but {qual} quality scores")]
    QualityLength { id: String, seq: usize, qual: usize },
}

impl Error {
    pub(crate) fn io(file: &Path, source: io::Error) -> Self {
        Error::FileIo {
            file: file.to_path_buf(),
            source,
        }
    }
}
