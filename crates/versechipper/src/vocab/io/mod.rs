//! # Vocabulary IO
//!
//! Vocabularies are saved as one `{BASE64 SYMBOL} {TOKEN}` line per token,
//! in token order; the final line is the padding symbol.
//!
//! ```rust,no_run
//! use versechipper::vocab::{
//!     SymbolVocab,
//!     io::{load_base64_symbol_vocab_path, save_base64_symbol_vocab_path},
//! };
//!
//! fn round_trip(vocab: &SymbolVocab<u32>) -> versechipper::errors::VCResult<SymbolVocab<u32>> {
//!     save_base64_symbol_vocab_path(vocab, "poems.vocab")?;
//!     load_base64_symbol_vocab_path("poems.vocab")
//! }
//! ```

mod base64_vocab;

#[doc(inline)]
pub use base64_vocab::*;
