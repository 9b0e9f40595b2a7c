//! # Symbol Counter

use crate::{
    alloc::vec::Vec,
    types::{Symbol, VCHashMap, hash_map_with_capacity},
};

/// Counts symbol occurrences, remembering first-seen order.
///
/// First-seen order is the tie-break for [`SymbolCounter::ranked`].
#[derive(Debug, Clone)]
pub struct SymbolCounter {
    /// `{ Symbol -> index into counts }`.
    index: VCHashMap<Symbol, usize>,

    /// `(symbol, count)` in first-seen order.
    counts: Vec<(Symbol, usize)>,
}

impl Default for SymbolCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolCounter {
    /// Create a new, empty counter.
    pub fn new() -> Self {
        Self {
            index: hash_map_with_capacity(8_192),
            counts: Vec::with_capacity(8_192),
        }
    }

    /// Count one symbol.
    pub fn update_from_symbol(
        &mut self,
        symbol: Symbol,
    ) {
        match self.index.get(&symbol) {
            Some(&idx) => self.counts[idx].1 += 1,
            None => {
                self.index.insert(symbol, self.counts.len());
                self.counts.push((symbol, 1));
            }
        }
    }

    /// Count every symbol of a text.
    pub fn update_from_text<S: AsRef<str>>(
        &mut self,
        text: S,
    ) {
        for symbol in text.as_ref().chars() {
            self.update_from_symbol(symbol);
        }
    }

    /// Count every symbol of every sample.
    pub fn update_from_samples<I>(
        &mut self,
        samples: I,
    ) where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for sample in samples {
            self.update_from_text(sample);
        }
    }

    /// The number of distinct symbols seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Has nothing been counted?
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The count for a symbol; `0` if never seen.
    pub fn count(
        &self,
        symbol: Symbol,
    ) -> usize {
        self.index.get(&symbol).map_or(0, |&idx| self.counts[idx].1)
    }

    /// `(symbol, count)` pairs in first-seen order.
    pub fn first_seen(&self) -> &[(Symbol, usize)] {
        &self.counts
    }

    /// `(symbol, count)` pairs by descending count.
    ///
    /// Equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(Symbol, usize)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}
