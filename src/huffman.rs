use crate::Result;

pub use code::CodeTable;
pub use encoder::HuffmanEncoder;
pub use frequency::FrequencyTable;
pub use tree::{HuffmanTree, NodeRef};

pub mod code;
pub mod encoder;
pub mod frequency;
pub mod tree;

pub type Symbol = char;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SymbolFrequency {
    pub symbol: Symbol,
    pub frequency: usize,
}

impl From<(Symbol, usize)> for SymbolFrequency {
    fn from(value: (Symbol, usize)) -> Self {
        Self {
            symbol: value.0,
            frequency: value.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolCode {
    pub symbol: Symbol,
    pub code: String,
}

impl SymbolCode {
    pub fn length(&self) -> usize {
        self.code.len()
    }
}

impl From<(Symbol, &str)> for SymbolCode {
    fn from(value: (Symbol, &str)) -> Self {
        Self {
            symbol: value.0,
            code: value.1.to_owned(),
        }
    }
}

/// Result of a single build step: frequencies, tree and code table of one
/// input text.
///
/// The tree is absent for empty input. Nothing is cached between builds, so
/// two builds of the same text always produce the same codes.
pub struct HuffmanCoding {
    frequencies: FrequencyTable,
    tree: Option<HuffmanTree>,
    codes: CodeTable,
}

impl HuffmanCoding {
    pub fn build(text: &str) -> Self {
        let frequencies = FrequencyTable::count(text);
        let tree = HuffmanTree::build(&frequencies);
        let codes = CodeTable::derive(tree.as_ref());
        log::info!(
            "Built code table for {} symbols ({} distinct)",
            frequencies.total(),
            frequencies.len()
        );
        Self {
            frequencies,
            tree,
            codes,
        }
    }

    /// Encodes `text` with the codes of this build. `text` is expected to be
    /// the text the coding was built from.
    pub fn encode(&self, text: &str) -> Result<String> {
        HuffmanEncoder::new(&self.codes).encode(text)
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn tree(&self) -> Option<&HuffmanTree> {
        self.tree.as_ref()
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }
}
