use std::collections::HashMap;

use super::{FrequencyTable, HuffmanTree, NodeRef, Symbol, SymbolCode};

/// Mapping from symbol to its bit string, '0' for a left and '1' for a right
/// branch on the way from the root to the symbol's leaf.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    // depth first order, left before right
    entries: Vec<SymbolCode>,
    positions: HashMap<Symbol, usize>,
}

impl CodeTable {
    /// Walks the tree depth first. A tree made of a single leaf gives its
    /// symbol the code "0"; an absent tree gives an empty table.
    pub fn derive(tree: Option<&HuffmanTree>) -> Self {
        let mut table = Self::default();
        if let Some(tree) = tree {
            let mut current_pattern = String::new();
            table.fill(tree.root(), &mut current_pattern);
            log::debug!("Derived {} codes", table.len());
        }
        table
    }

    fn fill(&mut self, node: NodeRef, current_pattern: &mut String) {
        match node.children() {
            Some((left, right)) => {
                current_pattern.push('0');
                self.fill(left, current_pattern);
                current_pattern.pop();
                current_pattern.push('1');
                self.fill(right, current_pattern);
                current_pattern.pop();
            }
            None => {
                let Some(symbol) = node.symbol() else {
                    return;
                };
                let code = if current_pattern.is_empty() {
                    "0"
                } else {
                    current_pattern.as_str()
                };
                self.insert(SymbolCode::from((symbol, code)));
            }
        }
    }

    fn insert(&mut self, entry: SymbolCode) {
        self.positions.insert(entry.symbol, self.entries.len());
        self.entries.push(entry);
    }

    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.positions
            .get(&symbol)
            .map(|&position| self.entries[position].code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolCode> {
        self.entries.iter()
    }

    pub fn sorted_by_code_length(&self) -> Vec<&SymbolCode> {
        let mut sorted: Vec<&SymbolCode> = self.entries.iter().collect();
        sorted.sort_by_key(|entry| entry.length());
        sorted
    }

    /// Sum of frequency times code length over all symbols, which is the
    /// length of the encoded text in bits.
    ///
    /// Symbols of `frequencies` without a code are not counted.
    pub fn weighted_length(&self, frequencies: &FrequencyTable) -> usize {
        frequencies
            .iter()
            .filter_map(|entry| {
                self.get(entry.symbol)
                    .map(|code| code.len() * entry.frequency)
            })
            .sum()
    }
}

impl<'a> IntoIterator for &'a CodeTable {
    type Item = &'a SymbolCode;
    type IntoIter = std::slice::Iter<'a, SymbolCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
