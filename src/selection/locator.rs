//! Delimited span location
//!
//! Given flat text, a cursor offset and delimiter pairs in priority order,
//! find the delimited span around the cursor. The first pair with an
//! opening marker before the cursor that is not already closed wins.
//!
//! After a pair is chosen both ends are corrected for same-pair
//! neighbours: a start marker directly preceded by an end marker belongs
//! to a run of adjacent spans, so the search keeps moving left; an end
//! marker directly followed by a start marker keeps the search moving
//! right.

use crate::config::shipped_config;
use crate::models::{DelimiterPair, Span};
use crate::selection::search::{
    contains, find_at_or_after, is_followed_by, is_preceded_by, rfind_at_or_before,
};

/// A delimiter pair encoded as UTF-16
struct Markers {
    start: Vec<u16>,
    end: Vec<u16>,
}

impl Markers {
    fn new(pair: &DelimiterPair) -> Option<Self> {
        if pair.start.is_empty() || pair.end.is_empty() {
            return None;
        }
        Some(Self {
            start: pair.start.encode_utf16().collect(),
            end: pair.end.encode_utf16().collect(),
        })
    }
}

/// How a pair was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Candidate {
    /// Nearest start marker before the cursor, nothing closed in between
    Open(usize),
    /// Nearest start marker was closed before the cursor, but an earlier
    /// unclosed one still encloses it
    Enclosing(usize),
}

/// Locates delimited spans for an ordered list of pairs
#[derive(Debug, Clone, Copy)]
pub struct SpanLocator<'a> {
    pairs: &'a [DelimiterPair],
}

impl<'a> SpanLocator<'a> {
    pub fn new(pairs: &'a [DelimiterPair]) -> Self {
        Self { pairs }
    }

    /// Locator over the shipped delimiter pairs
    pub fn shipped() -> SpanLocator<'static> {
        SpanLocator::new(&shipped_config().delimiters)
    }

    /// Locate the span around `cursor`, a UTF-16 offset into `text`
    pub fn locate(&self, text: &str, cursor: usize) -> Option<Span> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.locate_utf16(&units, cursor)
    }

    /// Same as [`SpanLocator::locate`] on pre-encoded text
    pub fn locate_utf16(&self, text: &[u16], cursor: usize) -> Option<Span> {
        if cursor > text.len() {
            log::debug!("Cursor {} past end of text ({} units)", cursor, text.len());
            return None;
        }

        for pair in self.pairs {
            let Some(markers) = Markers::new(pair) else {
                continue;
            };

            let Some(candidate) = select_candidate(text, cursor, &markers) else {
                continue;
            };

            log::debug!("Delimiter pair '{}'/'{}' selected: {:?}", pair.start, pair.end, candidate);

            match candidate {
                // An open pair decides the outcome
                Candidate::Open(start) => {
                    let start = find_unnested_start(text, start, &markers)?;
                    let end = find_unnested_end(text, cursor, &markers)?;
                    return Some(Span::new(start, end + markers.end.len()));
                }
                // An enclosing pair without a closing end gives way to later pairs
                Candidate::Enclosing(start) => {
                    if let Some(span) = enclosing_span(text, start, cursor, &markers) {
                        return Some(span);
                    }
                    log::debug!("No balanced end for '{}', trying next pair", pair.start);
                }
            }
        }

        None
    }
}

/// Locate with an explicit pair list
pub fn locate(text: &str, cursor: usize, pairs: &[DelimiterPair]) -> Option<Span> {
    SpanLocator::new(pairs).locate(text, cursor)
}

fn select_candidate(text: &[u16], cursor: usize, markers: &Markers) -> Option<Candidate> {
    let start = rfind_at_or_before(text, &markers.start, cursor)?;

    let between = &text[start..cursor.max(start)];
    if !contains(between, &markers.end) {
        return Some(Candidate::Open(start));
    }

    find_balanced_start(text, cursor, markers).map(Candidate::Enclosing)
}

/// Span around an enclosing start marker, with both ends corrected for
/// adjacent spans like an open pair
fn enclosing_span(text: &[u16], start: usize, cursor: usize, markers: &Markers) -> Option<Span> {
    let start = find_unnested_start(text, start, markers)?;
    let end = find_balanced_end(text, cursor, markers)?;
    let end = skip_adjacent_ends(text, end, markers)?;
    Some(Span::new(start, end + markers.end.len()))
}

/// Move `start` left past start markers that directly follow an end marker
///
/// Loop invariant: `start` is the index of a start marker. Each round the
/// next search origin is clamped at 0. Returns `None` when an end marker
/// precedes `start` but no earlier start marker exists.
fn find_unnested_start(text: &[u16], start: usize, markers: &Markers) -> Option<usize> {
    let mut start = start;
    while is_preceded_by(text, start, &markers.end) {
        let origin = start.saturating_sub(markers.end.len());
        start = rfind_at_or_before(text, &markers.start, origin)?;
    }
    Some(start)
}

/// Find the end marker for the span, skipping ends directly followed by a
/// start marker
///
/// Loop invariant: the returned index is an end marker not immediately
/// followed by a start marker.
fn find_unnested_end(text: &[u16], from: usize, markers: &Markers) -> Option<usize> {
    let end = find_at_or_after(text, &markers.end, from)?;
    skip_adjacent_ends(text, end, markers)
}

/// Move `end` right past end markers directly followed by a start marker
fn skip_adjacent_ends(text: &[u16], end: usize, markers: &Markers) -> Option<usize> {
    let mut end = end;
    loop {
        let after_end = end + markers.end.len();
        if !is_followed_by(text, after_end, &markers.start) {
            return Some(end);
        }
        end = find_at_or_after(text, &markers.end, after_end + markers.start.len())?;
    }
}

/// Scan left from `cursor` for a start marker not closed before the cursor
fn find_balanced_start(text: &[u16], cursor: usize, markers: &Markers) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = cursor;
    while pos > 0 {
        if is_preceded_by(text, pos, &markers.end) {
            depth += 1;
            pos -= markers.end.len();
        } else if is_preceded_by(text, pos, &markers.start) {
            pos -= markers.start.len();
            if depth == 0 {
                return Some(pos);
            }
            depth -= 1;
        } else {
            pos -= 1;
        }
    }
    None
}

/// Scan right from `cursor` for the end marker closing the enclosing span
fn find_balanced_end(text: &[u16], cursor: usize, markers: &Markers) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = cursor;
    while pos < text.len() {
        if is_followed_by(text, pos, &markers.end) {
            if depth == 0 {
                return Some(pos);
            }
            depth -= 1;
            pos += markers.end.len();
        } else if is_followed_by(text, pos, &markers.start) {
            depth += 1;
            pos += markers.start.len();
        } else {
            pos += 1;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(start: &str, end: &str) -> DelimiterPair {
        DelimiterPair::new(start, end).unwrap()
    }

    fn markers(start: &str, end: &str) -> Markers {
        Markers::new(&pair(start, end)).unwrap()
    }

    fn u(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_unnested_start_moves_past_adjacent_span() {
        let text = u("<<x>><<y>>");
        let m = markers("<<", ">>");
        assert_eq!(find_unnested_start(&text, 5, &m), Some(0));
        assert_eq!(find_unnested_start(&text, 0, &m), Some(0));
    }

    #[test]
    fn test_unnested_start_clamps_near_text_start() {
        // End marker at the very beginning, no start marker before it
        let text = u(">><<y>>");
        let m = markers("<<", ">>");
        assert_eq!(find_unnested_start(&text, 2, &m), None);
    }

    #[test]
    fn test_unnested_end_moves_past_adjacent_span() {
        let text = u("<<x>><<y>>");
        let m = markers("<<", ">>");
        assert_eq!(find_unnested_end(&text, 2, &m), Some(8));
        assert_eq!(find_unnested_end(&text, 8, &m), Some(8));
    }

    #[test]
    fn test_unnested_end_missing() {
        let text = u("<<x>><<y");
        let m = markers("<<", ">>");
        assert_eq!(find_unnested_end(&text, 2, &m), None);
    }

    #[test]
    fn test_balanced_scans() {
        let text = u("<<a<<b>>c>>");
        let m = markers("<<", ">>");
        assert_eq!(find_balanced_start(&text, 9, &m), Some(0));
        assert_eq!(find_balanced_end(&text, 9, &m), Some(9));
        assert_eq!(find_balanced_end(&text, 2, &m), Some(9));
    }

    #[test]
    fn test_balanced_start_none_when_all_closed() {
        let text = u("<<a>> b");
        let m = markers("<<", ">>");
        assert_eq!(find_balanced_start(&text, 6, &m), None);
    }

    #[test]
    fn test_first_selected_pair_decides() {
        // "<<" is selected but never closed; the "(((" pair is not tried
        let pairs = vec![pair("<<", ">>"), pair("(((", ")))")];
        assert_eq!(locate("(((<<x)))", 6, &pairs), None);
    }

    #[test]
    fn test_unclosed_enclosing_pair_gives_way() {
        // "<<a" encloses the cursor but is never closed, so "(((" is used
        let pairs = vec![pair("<<", ">>"), pair("(((", ")))")];
        assert_eq!(locate("(((<<a <<b>> c)))", 13, &pairs), Some(Span::new(0, 17)));
    }

    #[test]
    fn test_skip_adjacent_ends() {
        let text = u("<<a<<b>>c>><<d>>");
        let m = markers("<<", ">>");
        assert_eq!(skip_adjacent_ends(&text, 9, &m), Some(14));
        assert_eq!(skip_adjacent_ends(&text, 14, &m), Some(14));
        assert_eq!(skip_adjacent_ends(&u("<<a>><<b"), 3, &m), None);
    }

    #[test]
    fn test_cursor_past_end() {
        let pairs = vec![pair("<<", ">>")];
        assert_eq!(locate("<<x>>", 6, &pairs), None);
    }

    #[test]
    fn test_empty_markers_skipped() {
        let pairs = vec![
            DelimiterPair { start: String::new(), end: ">>".to_string() },
            pair("<<", ">>"),
        ];
        assert_eq!(locate("<<x>>", 3, &pairs), Some(Span::new(0, 5)));
    }
}
