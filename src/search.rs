use crate::pattern::FlankPattern;

/// A window of a read satisfying a flank pattern's mismatch budget.
///
/// All indices are 0-based; `start` is the first matched position and `end`
/// is one past the last, so the window is `text[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

/// Find the leftmost window of `text` matching `pattern`.
///
/// Tolerated errors are substitutions only, so the search is a fixed-width
/// sliding window: for each start position the Hamming distance between the
/// window and the pattern is compared against the budget, and the first
/// qualifying window wins. A later window with fewer mismatches is never
/// preferred over an earlier qualifying one.
///
/// Returns `None` when no window qualifies, including when the pattern is
/// longer than the text. Performs no mutation and no allocation; one compiled
/// pattern can be reused across any number of reads.
pub fn find(pattern: &FlankPattern, text: &[u8]) -> Option<MatchSpan> {
    let len = pattern.len();
    if len > text.len() {
        return None;
    }
    text.windows(len)
        .position(|window| within_budget(window, pattern.symbols(), pattern.max_mismatches()))
        .map(|start| MatchSpan {
            start,
            end: start + len,
        })
}

/// Hamming distance check, aborting as soon as the budget is exceeded.
fn within_budget(window: &[u8], symbols: &[u8], budget: usize) -> bool {
    let mut mismatches = 0;
    for (&w, &s) in window.iter().zip(symbols) {
        if w != s {
            mismatches += 1;
            if mismatches > budget {
                return false;
            }
        }
    }
    true
}
