use crate::error::Error;
use crate::Result;

use super::{CodeTable, Symbol};

pub struct HuffmanEncoder<'a> {
    code_table: &'a CodeTable,
}

impl<'a> HuffmanEncoder<'a> {
    pub fn new(code_table: &'a CodeTable) -> Self {
        Self { code_table }
    }

    fn get_code_for_symbol(&self, symbol: Symbol) -> Result<&'a str> {
        self.code_table.get(symbol).ok_or_else(|| {
            log::warn!("Symbol {:?} has no code in the table", symbol);
            Error::UnknownSymbol(symbol)
        })
    }

    /// Concatenates the codes of all symbols of `text` in input order.
    ///
    /// Fails on the first symbol without a code; nothing is skipped.
    pub fn encode(&self, text: &str) -> Result<String> {
        let mut output = String::new();
        self.encode_into(text, &mut output)?;
        Ok(output)
    }

    /// Appends the encoded `text` to `output`. On error `output` holds the
    /// codes of the symbols before the unknown one.
    pub fn encode_into(&self, text: &str, output: &mut String) -> Result<()> {
        for symbol in text.chars() {
            output.push_str(self.get_code_for_symbol(symbol)?);
        }
        Ok(())
    }
}
