use crate::input::Read;
use crate::pattern::FlankPattern;
use crate::search::find;

/// Classification of one read: the extracted region with its quality slice,
/// or a discard signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrimOutcome {
    Trimmed { seq: Vec<u8>, qual: Vec<u8> },
    Filtered,
}

/// Locates both flanks in a read and extracts the enclosed region.
#[derive(Debug, Clone)]
pub struct Trimmer {
    left: FlankPattern,
    right: FlankPattern,
}

impl Trimmer {
    pub fn new(left: FlankPattern, right: FlankPattern) -> Self {
        Self { left, right }
    }

    /// Trim one read.
    ///
    /// Both flanks are searched independently over the full read. The
    /// retained region runs from the start of the left-flank match to the
    /// end of the right-flank match, so both flank occurrences stay in the
    /// output. A read missing either flank is `Filtered`, as is one whose
    /// right-flank match ends at or before the left-flank start (no
    /// enclosed region exists).
    pub fn trim(&self, read: &Read) -> TrimOutcome {
        debug_assert_eq!(read.seq.len(), read.qual.len());

        let Some(left) = find(&self.left, &read.seq) else {
            return TrimOutcome::Filtered;
        };
        let Some(right) = find(&self.right, &read.seq) else {
            return TrimOutcome::Filtered;
        };

        let (start, end) = (left.start, right.end);
        if end <= start {
            return TrimOutcome::Filtered;
        }

        TrimOutcome::Trimmed {
            seq: read.seq[start..end].to_vec(),
            qual: read.qual[start..end].to_vec(),
        }
    }
}

/// Running count of reads discarded for lacking one or both flank matches.
///
/// An explicit accumulator owned by the processing loop: incremented once
/// per `Filtered` outcome and read once after the stream is consumed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrimReport {
    filtered: u64,
}

impl TrimReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.filtered += 1;
    }

    pub fn total(&self) -> u64 {
        self.filtered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_flank_pair;

    fn trimmer(flanks: &str, budget: usize) -> Trimmer {
        let (left, right) = parse_flank_pair(flanks, budget).unwrap();
        Trimmer::new(left, right)
    }

    fn read(seq: &str) -> Read {
        // Distinct quality codes per position so slicing mistakes show up.
        let qual = (0..seq.len()).map(|i| b'!' + (i % 64) as u8).collect();
        Read {
            id: String::from("r"),
            seq: seq.as_bytes().to_vec(),
            qual,
        }
    }

    #[test]
    fn trims_between_flanks() {
        let read = read("AAACGTAAAGGGTTT");
        let outcome = trimmer("CGT,GGG", 0).trim(&read);
        assert_eq!(
            outcome,
            TrimOutcome::Trimmed {
                seq: b"CGTAAAGGG".to_vec(),
                qual: read.qual[3..12].to_vec(),
            }
        );
    }

    #[test]
    fn filters_when_left_flank_absent() {
        let outcome = trimmer("CGA,GGG", 0).trim(&read("AAACGTAAAGGGTTT"));
        assert_eq!(outcome, TrimOutcome::Filtered);
    }

    #[test]
    fn budget_recovers_substituted_flank() {
        // With one substitution allowed, CGA matches the CGT at [3,6) and
        // the trim is identical to the exact-flank case.
        let read = read("AAACGTAAAGGGTTT");
        let outcome = trimmer("CGA,GGG", 1).trim(&read);
        assert_eq!(
            outcome,
            TrimOutcome::Trimmed {
                seq: b"CGTAAAGGG".to_vec(),
                qual: read.qual[3..12].to_vec(),
            }
        );
    }

    #[test]
    fn filters_when_right_flank_precedes_left() {
        // GGG is found at [9,12) and CGT at [3,6): the right-flank window
        // ends before the left-flank start, so no enclosed region exists.
        let outcome = trimmer("GGG,CGT", 0).trim(&read("AAACGTAAAGGGTTT"));
        assert_eq!(outcome, TrimOutcome::Filtered);
    }

    #[test]
    fn degenerate_budget_matches_every_read() {
        // Budgets at least as large as the flanks make both match at 0, so
        // the trim collapses to the first right-flank-sized window.
        let outcome = trimmer("AA,TT", 2).trim(&read("GCGCGCGC"));
        assert_eq!(
            outcome,
            TrimOutcome::Trimmed {
                seq: b"GC".to_vec(),
                qual: b"!\"".to_vec(),
            }
        );
    }

    #[test]
    fn trimming_is_idempotent() {
        let trimmer = trimmer("CGT,GGG", 0);
        let first = trimmer.trim(&read("AAACGTAAAGGGTTT"));
        let TrimOutcome::Trimmed { seq, qual } = first.clone() else {
            panic!("first pass must trim");
        };
        let again = trimmer.trim(&Read {
            id: String::from("r"),
            seq,
            qual,
        });
        assert_eq!(again, first);
    }

    #[test]
    fn report_accumulates_filtered_reads() {
        let mut report = TrimReport::new();
        assert_eq!(report.total(), 0);
        report.increment();
        report.increment();
        assert_eq!(report.total(), 2);
    }
}
