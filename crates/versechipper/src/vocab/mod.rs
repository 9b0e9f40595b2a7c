//! # Symbol Vocabulary
//!
//! Vocabularies map each corpus symbol to a dense id, ordered by
//! descending frequency:
//! * [`SymbolCounter`] - counts symbols, remembering first-seen order.
//! * [`SymbolVocab`] - the ranked symbols, the padding symbol, and the
//!   `{ Symbol -> T }` map.
//! * [`ReservedSymbolPolicy`] - what to do when the padding symbol
//!   occurs in natural text.
#[cfg(feature = "std")]
pub mod io;

pub mod validators;

mod reserved_policy;
mod sample_encoder;
mod symbol_counter;
mod symbol_vocab;

#[doc(inline)]
pub use reserved_policy::ReservedSymbolPolicy;
#[doc(inline)]
pub use sample_encoder::SampleEncoder;
#[doc(inline)]
pub use symbol_counter::SymbolCounter;
#[doc(inline)]
pub use symbol_vocab::{DEFAULT_PADDING_SYMBOL, SymbolVocab};
