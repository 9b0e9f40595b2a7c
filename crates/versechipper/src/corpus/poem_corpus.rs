//! # Poem Corpus

use core::slice::Iter;

use crate::{alloc::vec::Vec, corpus::PoemSample, types::Symbol};

/// Summary statistics for a [`PoemCorpus`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CorpusStats {
    /// The number of samples.
    pub sample_count: usize,

    /// The total number of symbols, markers included.
    pub total_symbols: usize,

    /// The shortest sample length.
    pub min_len: usize,

    /// The longest sample length.
    pub max_len: usize,
}

impl CorpusStats {
    /// The mean sample length; `0.0` for an empty corpus.
    pub fn mean_len(&self) -> f64 {
        if self.sample_count == 0 {
            0.0
        } else {
            self.total_symbols as f64 / self.sample_count as f64
        }
    }
}

/// An ordered collection of [`PoemSample`]s.
///
/// Samples are sorted ascending by symbol length; samples of equal
/// length keep their original relative order. Batching consumes this
/// order verbatim, so adjacent samples have similar lengths.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PoemCorpus {
    samples: Vec<PoemSample>,
}

impl PoemCorpus {
    /// Build a corpus, stable-sorting the samples by length.
    pub fn from_samples(mut samples: Vec<PoemSample>) -> Self {
        samples.sort_by_key(PoemSample::len);
        Self { samples }
    }

    /// The samples, in corpus order.
    pub fn samples(&self) -> &[PoemSample] {
        &self.samples
    }

    /// Release the samples.
    pub fn into_samples(self) -> Vec<PoemSample> {
        self.samples
    }

    /// The number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Is the corpus empty?
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate over the samples, in corpus order.
    pub fn iter(&self) -> Iter<'_, PoemSample> {
        self.samples.iter()
    }

    /// Iterate over every symbol of every sample, in corpus order.
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.samples.iter().flat_map(PoemSample::symbols)
    }

    /// Compute summary statistics.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            sample_count: self.samples.len(),
            total_symbols: self.samples.iter().map(PoemSample::len).sum(),
            min_len: self.samples.first().map_or(0, PoemSample::len),
            max_len: self.samples.last().map_or(0, PoemSample::len),
        }
    }
}

impl FromIterator<PoemSample> for PoemCorpus {
    fn from_iter<I: IntoIterator<Item = PoemSample>>(iter: I) -> Self {
        Self::from_samples(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PoemCorpus {
    type Item = &'a PoemSample;
    type IntoIter = Iter<'a, PoemSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
