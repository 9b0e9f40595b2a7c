//! # `versechipper` Poem Training Data Preparation
//!
//! This prepares a corpus of short poems for character-level
//! sequence model training.
//!
//! See:
//! * [`corpus`] to parse and filter `title:body` lines into samples.
//! * [`vocab`] to count symbols and build a frequency-ordered vocabulary.
//! * [`builder`] to run parsing, vocabulary construction, and encoding.
//! * [`batching`] to assemble padded `(inputs, targets)` batches.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``std``
//!
//! #### feature: ``std`` / ``no_std``
//!
//! The "std" feature enables the use of the `std` library;
//! and the "`no_std`" feature enables deps needed when "std" is not enabled.
//! (Negative feature deps are not stable yet.)
//!
//! The poem and vocabulary file io requires "std".
//!
//! #### feature: ``ahash`` / ``foldhash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash`` or ``foldhash``.
//!
//! This is done by the ``types::VCHash{*}`` type alias machinery.
//!
//! #### feature: ``rayon``
//!
//! This encodes samples in parallel using the ``rayon`` crate.
//! Output order is unchanged.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//!
//! ## Preparing Batches
//!
//! ```rust
//! use versechipper::{
//!     batching::BatchAssemblerOptions,
//!     builder::VocabularyBuilderOptions,
//! };
//!
//! let builder = VocabularyBuilderOptions::default()
//!     .with_body_len_bounds(1, 10)
//!     .try_init()
//!     .unwrap();
//!
//! let results = builder
//!     .build::<u32, _>(["A:我爱你", "B:天地之间有秋风"])
//!     .unwrap();
//!
//! let assembler = BatchAssemblerOptions::new(2).try_init().unwrap();
//! let batches = assembler.assemble_with_vocab(&results.sequences, &results.vocab);
//!
//! assert_eq!(batches.len(), 1);
//! assert_eq!(batches[0].inputs.dim(), (2, 9));
//! ```
#![warn(missing_docs, unused)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod batching;
pub mod builder;
pub mod corpus;
pub mod errors;
pub mod types;
pub mod vocab;
