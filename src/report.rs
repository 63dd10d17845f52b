use std::fmt::{self, Display};

use crate::huffman::{HuffmanCoding, Symbol};
use crate::Result;

const FIXED_BITS_PER_SYMBOL: usize = 8;

/// Plain text summary of one built and encoded input.
pub struct Report {
    label: String,
    coding: HuffmanCoding,
    encoded: String,
    show_tree: bool,
}

impl Report {
    pub fn new(label: &str, text: &str, show_tree: bool) -> Result<Self> {
        let coding = HuffmanCoding::build(text);
        let encoded = coding.encode(text)?;
        crate::logger::log_code_table(label, coding.codes());
        Ok(Self {
            label: label.to_owned(),
            coding,
            encoded,
            show_tree,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn coding(&self) -> &HuffmanCoding {
        &self.coding
    }

    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    pub fn symbol_count(&self) -> usize {
        self.coding.frequencies().total()
    }

    pub fn fixed_length_bits(&self) -> usize {
        self.symbol_count() * FIXED_BITS_PER_SYMBOL
    }

    pub fn average_code_length(&self) -> f64 {
        match self.symbol_count() {
            0 => 0.0,
            count => self.encoded.len() as f64 / count as f64,
        }
    }

    fn write_frequencies(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Frequencies:")?;
        for entry in self.coding.frequencies().sorted_by_count_descending() {
            writeln!(f, "  {:<6} {}", display_symbol(entry.symbol), entry.frequency)?;
        }
        Ok(())
    }

    fn write_codes(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Codes:")?;
        for entry in self.coding.codes().sorted_by_code_length() {
            writeln!(f, "  {:<6} {}", display_symbol(entry.symbol), entry.code)?;
        }
        Ok(())
    }

    fn write_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Symbols: {} ({} distinct)",
            self.symbol_count(),
            self.coding.frequencies().len()
        )?;
        writeln!(
            f,
            "Bits: {} encoded, {} at {} bits per symbol",
            self.encoded.len(),
            self.fixed_length_bits(),
            FIXED_BITS_PER_SYMBOL
        )?;
        writeln!(f, "Average code length: {:.3}", self.average_code_length())
    }
}

fn display_symbol(symbol: Symbol) -> String {
    format!("'{}'", symbol.escape_debug())
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== {}", self.label)?;
        self.write_frequencies(f)?;
        self.write_codes(f)?;
        writeln!(f, "Encoded: {}", self.encoded)?;
        self.write_statistics(f)?;
        if self.show_tree {
            if let Some(tree) = self.coding.tree() {
                writeln!(f, "Tree:")?;
                write!(f, "{}", tree)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Report;

    #[test]
    fn test_report_statistics() {
        let report = Report::new("abracadabra", "abracadabra", false).unwrap();
        assert_eq!(report.symbol_count(), 11);
        assert_eq!(report.fixed_length_bits(), 88);
        assert_eq!(report.encoded().len(), 23);
        assert!((report.average_code_length() - 23.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_lists_frequencies_by_count_and_codes_by_length() {
        let report = Report::new("text", "aaab", false).unwrap();
        let expected = "== text\n\
            Frequencies:\n  'a'    3\n  'b'    1\n\
            Codes:\n  'b'    0\n  'a'    1\n\
            Encoded: 1110\n\
            Symbols: 4 (2 distinct)\n\
            Bits: 4 encoded, 32 at 8 bits per symbol\n\
            Average code length: 1.000\n";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_report_with_tree() {
        let report = Report::new("tree", "aaab", true).unwrap();
        let rendered = report.to_string();
        assert!(
            rendered.ends_with("Tree:\n     4\n     ║\n  ╔══╩══╗\n(b:1) (a:3)\n"),
            "Tree diagram missing in\n{}",
            rendered
        );
    }

    #[test]
    fn test_report_for_empty_text() {
        let report = Report::new("empty", "", true).unwrap();
        assert_eq!(report.encoded(), "");
        assert_eq!(report.average_code_length(), 0.0);
        assert!(!report.to_string().contains("Tree:"));
    }

    #[test]
    fn test_report_escapes_whitespace_symbols() {
        let report = Report::new("lines", "a\nb", false).unwrap();
        assert!(report.to_string().contains("'\\n'"));
    }
}
