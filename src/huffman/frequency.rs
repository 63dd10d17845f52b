use std::collections::HashMap;

use super::{Symbol, SymbolFrequency};

/// Occurrence counts of the symbols of a text.
///
/// Entries keep the order in which their symbols first appear in the text.
/// The tree builder relies on this order to break ties between equally
/// frequent symbols.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<SymbolFrequency>,
    positions: HashMap<Symbol, usize>,
}

impl FrequencyTable {
    pub fn count(text: &str) -> Self {
        text.chars().collect()
    }

    fn increment_symbol(&mut self, symbol: Symbol) {
        match self.positions.get(&symbol) {
            Some(&position) => self.entries[position].frequency += 1,
            None => {
                self.positions.insert(symbol, self.entries.len());
                self.entries.push(SymbolFrequency::from((symbol, 1)));
            }
        }
    }

    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        self.positions
            .get(&symbol)
            .map(|&position| self.entries[position].frequency)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted text in symbols.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.frequency).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolFrequency> {
        self.entries.iter()
    }

    pub fn sorted_by_count_descending(&self) -> Vec<SymbolFrequency> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        sorted
    }
}

impl FromIterator<Symbol> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Symbol>>(symbols: T) -> Self {
        let mut table = Self::default();
        for symbol in symbols {
            table.increment_symbol(symbol);
        }
        table
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a SymbolFrequency;
    type IntoIter = std::slice::Iter<'a, SymbolFrequency>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
