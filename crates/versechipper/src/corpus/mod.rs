//! # Poem Corpus
//!
//! Raw lines are `title:body` pairs. A line becomes a [`PoemSample`] when:
//! * it splits into exactly two fields on the delimiter,
//! * its body (with spaces removed) contains no excluded symbol,
//! * its body length is strictly between the configured bounds.
//!
//! Accepted bodies are wrapped as `start_marker + body + end_marker`,
//! and collected into a length-sorted [`PoemCorpus`].
//!
//! ```rust
//! use versechipper::corpus::CorpusOptions;
//!
//! let parser = CorpusOptions::default()
//!     .with_body_len_bounds(1, 10)
//!     .try_init()
//!     .unwrap();
//!
//! let (corpus, report) = parser.parse_lines(["B:天地之间有秋风", "A:我爱你", "bad line"]);
//! assert_eq!(corpus.samples()[0].as_str(), "G我爱你E");
//! assert_eq!(report.malformed, 1);
//! ```

#[cfg(feature = "std")]
pub mod io;

mod corpus_options;
mod poem_corpus;
mod poem_parser;
mod poem_sample;

#[doc(inline)]
pub use corpus_options::{
    CorpusOptions,
    DEFAULT_DELIMITER,
    DEFAULT_END_MARKER,
    DEFAULT_EXCLUDED_SYMBOLS,
    DEFAULT_MAX_BODY_LEN,
    DEFAULT_MIN_BODY_LEN,
    DEFAULT_START_MARKER,
};
#[doc(inline)]
pub use poem_corpus::{CorpusStats, PoemCorpus};
#[doc(inline)]
pub use poem_parser::{LineOutcome, ParseReport, PoemParser};
#[doc(inline)]
pub use poem_sample::PoemSample;
