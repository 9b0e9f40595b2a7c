//! # Training Batches
//!
//! [`BatchAssembler`] groups encoded sequences into fixed-size
//! [`TrainingBatch`]es of ``ndarray`` token arrays for next-token prediction:
//! * `inputs` - rows padded to the longest sequence in the batch.
//! * `targets` - `inputs` shifted left by one; the last column repeats.
//!
//! ```rust
//! use versechipper::batching::BatchAssemblerOptions;
//!
//! let assembler = BatchAssemblerOptions::new(2).try_init().unwrap();
//!
//! let sequences: Vec<Vec<u32>> = vec![vec![6, 2, 4], vec![1, 4, 2, 8, 5], vec![3]];
//! let batches = assembler.assemble(&sequences, 0);
//!
//! assert_eq!(batches.len(), 1);
//! assert_eq!(batches[0].inputs.row(0).to_vec(), vec![6, 2, 4, 0, 0]);
//! assert_eq!(batches[0].targets.row(1).to_vec(), vec![4, 2, 8, 5, 5]);
//! ```

mod batch_assembler;

#[doc(inline)]
pub use batch_assembler::{BatchAssembler, BatchAssemblerOptions, TrainingBatch};
