use crate::errors::{Error, Result};

/// A compiled flanking marker: the sequence to look for plus the number of
/// substitutions tolerated when matching it.
///
/// Compiled once per run from user-supplied text and reused across all reads.
/// The sequence is upper-cased on construction; reads are searched as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlankPattern {
    symbols: Vec<u8>,
    max_mismatches: usize,
}

impl FlankPattern {
    /// Compile a flank sequence with its substitution budget.
    ///
    /// An empty sequence is a configuration error. A budget of
    /// `sequence.len()` or more is allowed and makes every window qualify,
    /// so the pattern matches any read at position 0.
    pub fn new(sequence: &str, max_mismatches: usize) -> Result<Self> {
        if sequence.is_empty() {
            return Err(Error::EmptyFlank);
        }
        Ok(Self {
            symbols: sequence.to_ascii_uppercase().into_bytes(),
            max_mismatches,
        })
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn max_mismatches(&self) -> usize {
        self.max_mismatches
    }
}

/// Split the `left,right` flank form into a compiled pattern pair.
///
/// Both flanks share the same mismatch budget. Anything other than exactly
/// two entries is a configuration error, raised before any read is touched.
pub fn parse_flank_pair(
    input: &str,
    max_mismatches: usize,
) -> Result<(FlankPattern, FlankPattern)> {
    let parts: Vec<&str> = input.split(',').collect();
    if parts.len() != 2 {
        return Err(Error::FlankPair {
            input: input.to_owned(),
            count: parts.len(),
        });
    }
    Ok((
        FlankPattern::new(parts[0], max_mismatches)?,
        FlankPattern::new(parts[1], max_mismatches)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_upper_cased() {
        let pattern = FlankPattern::new("acgt", 1).unwrap();
        assert_eq!(pattern.symbols(), b"ACGT");
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.max_mismatches(), 1);
    }

    #[test]
    fn rejects_empty_sequence() {
        assert!(matches!(FlankPattern::new("", 0), Err(Error::EmptyFlank)));
    }

    #[test]
    fn budget_may_exceed_length() {
        let pattern = FlankPattern::new("CGT", 5).unwrap();
        assert_eq!(pattern.max_mismatches(), 5);
    }

    #[test]
    fn splits_flank_pair() {
        let (left, right) = parse_flank_pair("cgt,GGG", 1).unwrap();
        assert_eq!(left.symbols(), b"CGT");
        assert_eq!(right.symbols(), b"GGG");
        assert_eq!(left.max_mismatches(), 1);
        assert_eq!(right.max_mismatches(), 1);
    }

    #[test]
    fn rejects_single_flank() {
        let err = parse_flank_pair("CGT", 0).unwrap_err();
        assert!(matches!(err, Error::FlankPair { count: 1, .. }));
    }

    #[test]
    fn rejects_three_flanks() {
        let err = parse_flank_pair("AAA,CCC,GGG", 0).unwrap_err();
        assert!(matches!(err, Error::FlankPair { count: 3, .. }));
    }

    #[test]
    fn rejects_empty_entry() {
        assert!(matches!(
            parse_flank_pair("CGT,", 0),
            Err(Error::EmptyFlank)
        ));
    }
}
