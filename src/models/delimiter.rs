//! Delimiter pairs and located spans
//!
//! Offsets are UTF-16 code units, the same unit the DOM uses for
//! `Range` and `Selection` offsets.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A start/end marker pair such as `<<` / `>>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    pub start: String,
    pub end: String,
}

impl DelimiterPair {
    /// Create a pair, rejecting empty markers
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self, ConfigError> {
        let pair = Self {
            start: start.into(),
            end: end.into(),
        };
        pair.validate()?;
        Ok(pair)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start.is_empty() || self.end.is_empty() {
            return Err(ConfigError::EmptyDelimiter {
                start: self.start.clone(),
                end: self.end.clone(),
            });
        }
        Ok(())
    }
}

/// A located span, start inclusive and end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Extract the spanned text from `text`
    pub fn slice(&self, text: &str) -> String {
        let units: Vec<u16> = text.encode_utf16().collect();
        let end = self.end.min(units.len());
        let start = self.start.min(end);
        String::from_utf16_lossy(&units[start..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_markers_rejected() {
        assert!(DelimiterPair::new("", ">>").is_err());
        assert!(DelimiterPair::new("<<", "").is_err());
        assert!(DelimiterPair::new("<<", ">>").is_ok());
    }

    #[test]
    fn test_span_slice_uses_utf16_units() {
        // '😀' is two UTF-16 units
        let text = "😀<<x>>";
        let span = Span::new(2, 7);
        assert_eq!(span.slice(text), "<<x>>");
        assert_eq!(span.len(), 5);
    }
}
