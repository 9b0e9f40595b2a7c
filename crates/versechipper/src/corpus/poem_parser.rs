//! # Poem Line Parser

use crate::{
    alloc::{string::String, vec::Vec},
    corpus::{CorpusOptions, PoemCorpus, PoemSample},
    types::{Symbol, VCHashSet},
};

/// The classification of a single raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line produced a sample.
    Accepted(PoemSample),

    /// The line did not split into exactly `title` and `body`.
    Malformed,

    /// The body contained an excluded symbol.
    ExcludedSymbol(Symbol),

    /// The body length (in symbols) was at or below the lower bound.
    TooShort(usize),

    /// The body length (in symbols) was at or above the upper bound.
    TooLong(usize),
}

/// Per-reason line counts from a parse pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ParseReport {
    /// Total lines seen.
    pub lines: usize,

    /// Lines which produced a sample.
    pub accepted: usize,

    /// Lines without exactly one delimiter.
    pub malformed: usize,

    /// Bodies rejected for an excluded symbol.
    pub excluded: usize,

    /// Bodies rejected as too short.
    pub too_short: usize,

    /// Bodies rejected as too long.
    pub too_long: usize,
}

impl ParseReport {
    /// Record one line outcome.
    pub fn record(
        &mut self,
        outcome: &LineOutcome,
    ) {
        self.lines += 1;
        match outcome {
            LineOutcome::Accepted(_) => self.accepted += 1,
            LineOutcome::Malformed => self.malformed += 1,
            LineOutcome::ExcludedSymbol(_) => self.excluded += 1,
            LineOutcome::TooShort(_) => self.too_short += 1,
            LineOutcome::TooLong(_) => self.too_long += 1,
        }
    }

    /// The number of lines skipped for any reason.
    pub fn skipped(&self) -> usize {
        self.lines - self.accepted
    }
}

/// Parses `title:body` lines into [`PoemSample`]s.
///
/// Build with [`CorpusOptions::try_init`].
#[derive(Debug, Clone)]
pub struct PoemParser {
    options: CorpusOptions,
    excluded: VCHashSet<Symbol>,
}

impl PoemParser {
    pub(crate) fn new(options: CorpusOptions) -> Self {
        let mut excluded: VCHashSet<Symbol> = options.excluded_symbols.iter().copied().collect();
        excluded.insert(options.start_marker);
        excluded.insert(options.end_marker);
        Self { options, excluded }
    }

    /// The parser options.
    pub fn options(&self) -> &CorpusOptions {
        &self.options
    }

    /// Is `symbol` rejected when found in a body?
    pub fn is_excluded(
        &self,
        symbol: Symbol,
    ) -> bool {
        self.excluded.contains(&symbol)
    }

    /// Extend the exclusion set.
    ///
    /// Used to keep reserved vocabulary symbols out of natural text.
    pub fn exclude_symbol(
        &mut self,
        symbol: Symbol,
    ) {
        self.excluded.insert(symbol);
    }

    /// Classify a single raw line.
    ///
    /// The line is trimmed, split into `title` and `body` on the delimiter,
    /// and the body has all interior spaces removed before filtering.
    pub fn parse_line(
        &self,
        line: &str,
    ) -> LineOutcome {
        let mut parts = line.trim().split(self.options.delimiter);
        let (Some(_title), Some(body), None) = (parts.next(), parts.next(), parts.next()) else {
            return LineOutcome::Malformed;
        };

        let body: String = body.chars().filter(|&c| c != ' ').collect();

        if let Some(symbol) = body.chars().find(|c| self.excluded.contains(c)) {
            return LineOutcome::ExcludedSymbol(symbol);
        }

        let len = body.chars().count();
        if len <= self.options.min_body_len {
            return LineOutcome::TooShort(len);
        }
        if len >= self.options.max_body_len {
            return LineOutcome::TooLong(len);
        }

        LineOutcome::Accepted(PoemSample::wrap(
            self.options.start_marker,
            &body,
            self.options.end_marker,
        ))
    }

    /// Parse a stream of raw lines into a length-sorted [`PoemCorpus`].
    ///
    /// Lines which fail to parse or filter are skipped and counted
    /// in the returned [`ParseReport`]; they never fail the pass.
    pub fn parse_lines<I>(
        &self,
        lines: I,
    ) -> (PoemCorpus, ParseReport)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut report = ParseReport::default();
        let mut samples = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let outcome = self.parse_line(line.as_ref());
            report.record(&outcome);
            match outcome {
                LineOutcome::Accepted(sample) => samples.push(sample),
                skipped => log::debug!("skipping line {idx}: {skipped:?}"),
            }
        }

        (PoemCorpus::from_samples(samples), report)
    }
}
