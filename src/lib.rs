//! Flank-based read trimming.
//!
//! # Overview
//! `flanktrim` locates a pair of flanking marker sequences in each read of a
//! BAM or FASTQ file, tolerating a fixed number of substitutions per flank,
//! and extracts the enclosed region together with its quality scores.
//!
//! Matching is substitution-only, so each flank is found with a fixed-width
//! sliding-window Hamming scan ([`find`]) instead of a general
//! approximate-matching engine. [`Trimmer`] turns the two matches into trim
//! coordinates and slices sequence and quality with identical bounds; reads
//! missing either flank are counted in a [`TrimReport`] and dropped.
//!
//! The [`run`] workflow wires these to a [`RecordReader`] and a FASTQ writer
//! for the command-line tool.

pub mod errors;

mod input;
mod pattern;
mod search;
mod trim;
mod workflow;

pub use crate::input::{Read, RecordReader};
pub use crate::pattern::{FlankPattern, parse_flank_pair};
pub use crate::search::{MatchSpan, find};
pub use crate::trim::{TrimOutcome, TrimReport, Trimmer};
pub use crate::workflow::{Config, run};
