//! Text normalization.
//!
//! OCR output arrives with arbitrary indentation, blank lines and mixed line
//! endings. Every extractor works on the same cleaned view:
//!
//! - `lines`: each line trimmed, empty lines dropped, order preserved.
//! - `full_text_lower`: the whole raw input lower-cased, for document-wide
//!   substring and regex searches.
//!
//! Both views are owned so a `NormalizedText` can outlive the raw input.

/// Cleaned view of one receipt's OCR text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    lines: Vec<String>,
    full_text_lower: String,
}

impl NormalizedText {
    /// Normalize `raw`. Never fails; empty input yields no lines.
    pub fn new(raw: &str) -> Self {
        let lines = raw
            .split(['\n', '\r'])
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        NormalizedText { lines, full_text_lower: raw.to_lowercase() }
    }

    /// Trimmed, non-empty lines in document order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The entire raw text, lower-cased.
    pub fn full_text_lower(&self) -> &str {
        &self.full_text_lower
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<&str> for NormalizedText {
    fn from(raw: &str) -> Self {
        NormalizedText::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_drops_blank_lines() {
        let text = NormalizedText::new("  SWIGGY  \n\n\t\nTotal: 350\r\n  ");
        assert_eq!(text.lines(), &["SWIGGY".to_string(), "Total: 350".to_string()]);
    }

    #[test]
    fn lower_cases_the_whole_input() {
        let text = NormalizedText::new("Grand TOTAL\nRs. 99");
        assert_eq!(text.full_text_lower(), "grand total\nrs. 99");
    }

    #[test]
    fn empty_input_is_empty() {
        let text = NormalizedText::new("");
        assert!(text.is_empty());
        assert_eq!(text.full_text_lower(), "");

        let blank = NormalizedText::new(" \n \r\n\t");
        assert!(blank.is_empty());
    }

    #[test]
    fn preserves_line_order() {
        let text = NormalizedText::new("c\nb\na");
        assert_eq!(text.lines(), &["c", "b", "a"]);
    }
}
