//! # Vocabulary Builder
//!
//! Turns raw `title:body` lines into a length-sorted corpus, a
//! frequency-ordered [`SymbolVocab`], and one encoded sequence per sample.

use crate::{
    alloc::{format, vec::Vec},
    corpus::{CorpusOptions, ParseReport, PoemCorpus, PoemParser},
    errors::{VCResult, VersechipperError},
    types::{Symbol, TokenType},
    vocab::{
        DEFAULT_PADDING_SYMBOL,
        ReservedSymbolPolicy,
        SampleEncoder,
        SymbolCounter,
        SymbolVocab,
    },
};

/// Options for [`VocabularyBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyBuilderOptions {
    /// Line parsing and sample filtering options.
    pub corpus: CorpusOptions,

    /// The symbol appended to the vocabulary, and used to pad batches.
    pub padding_symbol: Symbol,

    /// What to do when the padding symbol occurs in natural text.
    pub reserved_policy: ReservedSymbolPolicy,

    /// Keep at most this many corpus symbols (most frequent first).
    pub max_symbols: Option<usize>,
}

impl Default for VocabularyBuilderOptions {
    fn default() -> Self {
        Self {
            corpus: CorpusOptions::default(),
            padding_symbol: DEFAULT_PADDING_SYMBOL,
            reserved_policy: ReservedSymbolPolicy::default(),
            max_symbols: None,
        }
    }
}

impl VocabularyBuilderOptions {
    /// Sets the corpus options.
    pub fn with_corpus_options(
        self,
        corpus: CorpusOptions,
    ) -> Self {
        Self { corpus, ..self }
    }

    /// Sets the exclusive body length bounds.
    ///
    /// See [`CorpusOptions::with_body_len_bounds`].
    pub fn with_body_len_bounds(
        self,
        min_body_len: usize,
        max_body_len: usize,
    ) -> Self {
        Self {
            corpus: self
                .corpus
                .with_body_len_bounds(min_body_len, max_body_len),
            ..self
        }
    }

    /// Sets the start and end markers.
    pub fn with_markers(
        self,
        start_marker: Symbol,
        end_marker: Symbol,
    ) -> Self {
        Self {
            corpus: self.corpus.with_markers(start_marker, end_marker),
            ..self
        }
    }

    /// Sets the padding symbol.
    pub fn with_padding_symbol(
        self,
        padding_symbol: Symbol,
    ) -> Self {
        Self {
            padding_symbol,
            ..self
        }
    }

    /// Sets the reserved symbol policy.
    pub fn with_reserved_policy(
        self,
        reserved_policy: ReservedSymbolPolicy,
    ) -> Self {
        Self {
            reserved_policy,
            ..self
        }
    }

    /// Sets the maximum number of corpus symbols.
    pub fn with_max_symbols(
        self,
        max_symbols: Option<usize>,
    ) -> Self {
        Self {
            max_symbols,
            ..self
        }
    }

    /// Check the options for consistency.
    pub fn validate(&self) -> VCResult<()> {
        self.corpus.validate()?;

        let corpus = &self.corpus;
        if self.padding_symbol == corpus.start_marker || self.padding_symbol == corpus.end_marker {
            return Err(VersechipperError::InvalidConfig(format!(
                "padding symbol {:?} must differ from the markers",
                self.padding_symbol
            )));
        }
        if self.max_symbols == Some(0) {
            return Err(VersechipperError::InvalidConfig(
                "max_symbols must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Validates these options and builds a [`VocabularyBuilder`].
    pub fn try_init(self) -> VCResult<VocabularyBuilder> {
        self.validate()?;

        let mut parser = self.corpus.clone().try_init()?;
        if self.reserved_policy == ReservedSymbolPolicy::Exclude {
            parser.exclude_symbol(self.padding_symbol);
        }

        Ok(VocabularyBuilder {
            options: self,
            parser,
        })
    }
}

/// The results of [`VocabularyBuilder::build`].
#[derive(Debug, Clone)]
pub struct VocabBuildResults<T: TokenType> {
    /// The length-sorted samples.
    pub corpus: PoemCorpus,

    /// Per-reason line counts.
    pub report: ParseReport,

    /// The frequency-ordered vocabulary.
    pub vocab: SymbolVocab<T>,

    /// One encoded sequence per sample, in corpus order.
    pub sequences: Vec<Vec<T>>,
}

/// Builds a [`SymbolVocab`] and encoded sequences from raw poem lines.
///
/// Build with [`VocabularyBuilderOptions::try_init`].
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    options: VocabularyBuilderOptions,
    parser: PoemParser,
}

impl VocabularyBuilder {
    /// The builder options.
    pub fn options(&self) -> &VocabularyBuilderOptions {
        &self.options
    }

    /// The line parser.
    pub fn parser(&self) -> &PoemParser {
        &self.parser
    }

    /// Build the corpus, vocabulary, and encoded sequences.
    ///
    /// Malformed and rejected lines are skipped; an empty corpus yields
    /// a vocabulary holding only the padding symbol.
    ///
    /// ## Arguments
    /// * `lines` - the raw `title:body` lines.
    ///
    /// ## Returns
    /// The build results; or an error if the padding symbol collides with
    /// natural text under [`ReservedSymbolPolicy::Error`], or the
    /// vocabulary overflows `T`.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, lines)))]
    pub fn build<T, I>(
        &self,
        lines: I,
    ) -> VCResult<VocabBuildResults<T>>
    where
        T: TokenType,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let (corpus, report) = self.parser.parse_lines(lines);
        log::info!(
            "Parsed {} lines: {} accepted, {} malformed, {} excluded, {} too short, {} too long",
            report.lines,
            report.accepted,
            report.malformed,
            report.excluded,
            report.too_short,
            report.too_long
        );

        let mut counter = SymbolCounter::new();
        counter.update_from_samples(corpus.iter());

        let padding_symbol = self.options.padding_symbol;
        let padding_count = counter.count(padding_symbol);
        if padding_count > 0 {
            match self.options.reserved_policy {
                ReservedSymbolPolicy::Error => {
                    return Err(VersechipperError::ReservedSymbolCollision {
                        symbol: padding_symbol,
                    });
                }
                _ => log::warn!(
                    "padding symbol {padding_symbol:?} occurs {padding_count} times in corpus text; \
                     the padding assignment overrides it"
                ),
            }
        }

        let vocab = SymbolVocab::<T>::from_counter(&counter, padding_symbol, self.options.max_symbols)?;
        log::info!(
            "Vocabulary: {} symbols ({} distinct in corpus)",
            vocab.len(),
            counter.len()
        );

        #[cfg(feature = "rayon")]
        let sequences = crate::rayon::ParallelRayonEncoder::new(&vocab).encode_batch(corpus.samples());
        #[cfg(not(feature = "rayon"))]
        let sequences = vocab.encode_batch(corpus.samples());

        Ok(VocabBuildResults {
            corpus,
            report,
            vocab,
            sequences,
        })
    }

    /// Build from a UTF-8 poem file.
    ///
    /// See [`Self::build`].
    #[cfg(feature = "std")]
    pub fn build_from_path<T, P>(
        &self,
        path: P,
    ) -> VCResult<VocabBuildResults<T>>
    where
        T: TokenType,
        P: AsRef<std::path::Path>,
    {
        let lines = crate::corpus::io::load_poem_lines_path(path)?;
        self.build(lines)
    }
}
