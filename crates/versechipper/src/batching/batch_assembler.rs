//! # Batch Assembler

use ndarray::{Array2, ArrayView1, s};

use crate::{
    alloc::{format, vec::Vec},
    errors::{VCResult, VersechipperError},
    types::TokenType,
    vocab::SymbolVocab,
};

/// One padded `(inputs, targets)` training batch.
///
/// Both arrays have shape `(batch_size, max_len)`, where `max_len` is the
/// longest sequence in the batch. `targets` is `inputs` shifted left by
/// one along each row; its last column repeats the last input column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingBatch<T: TokenType> {
    /// The padded input sequences.
    pub inputs: Array2<T>,

    /// The next-token targets.
    pub targets: Array2<T>,

    /// The unpadded length of each row.
    pub row_lengths: Vec<usize>,
}

impl<T: TokenType> TrainingBatch<T> {
    /// Pad a group of sequences into a batch.
    ///
    /// ## Arguments
    /// * `sequences` - the batch rows, in order.
    /// * `pad_token` - the token filling cells past each row's length.
    pub fn from_sequences<S>(
        sequences: &[S],
        pad_token: T,
    ) -> Self
    where
        S: AsRef<[T]>,
    {
        let max_len = sequences
            .iter()
            .map(|seq| seq.as_ref().len())
            .max()
            .unwrap_or(0);

        let mut inputs = Array2::from_elem((sequences.len(), max_len), pad_token);
        let mut row_lengths = Vec::with_capacity(sequences.len());
        for (row, seq) in sequences.iter().enumerate() {
            let seq = seq.as_ref();
            inputs
                .row_mut(row)
                .slice_mut(s![..seq.len()])
                .assign(&ArrayView1::from(seq));
            row_lengths.push(seq.len());
        }

        let mut targets = inputs.clone();
        if max_len > 1 {
            targets
                .slice_mut(s![.., ..-1])
                .assign(&inputs.slice(s![.., 1..]));
        }

        Self {
            inputs,
            targets,
            row_lengths,
        }
    }

    /// The number of rows.
    pub fn batch_size(&self) -> usize {
        self.inputs.nrows()
    }

    /// The padded row length.
    pub fn max_len(&self) -> usize {
        self.inputs.ncols()
    }

    /// The number of padding cells in `inputs`.
    pub fn padding_cells(&self) -> usize {
        self.batch_size() * self.max_len() - self.row_lengths.iter().sum::<usize>()
    }
}

/// Options for [`BatchAssembler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchAssemblerOptions {
    /// The number of sequences per batch.
    pub batch_size: usize,
}

impl BatchAssemblerOptions {
    /// Create new options.
    ///
    /// ## Arguments
    /// * `batch_size` - the number of sequences per batch; must be > 0.
    pub fn new(batch_size: usize) -> Self {
        Self { batch_size }
    }

    /// Sets the batch size.
    pub fn with_batch_size(
        self,
        batch_size: usize,
    ) -> Self {
        Self { batch_size }
    }

    /// Check the options for consistency.
    pub fn validate(&self) -> VCResult<()> {
        if self.batch_size == 0 {
            return Err(VersechipperError::InvalidConfig(format!(
                "batch_size must be > 0: {}",
                self.batch_size
            )));
        }
        Ok(())
    }

    /// Validates these options and builds a [`BatchAssembler`].
    pub fn try_init(self) -> VCResult<BatchAssembler> {
        self.validate()?;
        Ok(BatchAssembler { options: self })
    }
}

/// Groups encoded sequences into padded [`TrainingBatch`]es.
///
/// Sequences are consumed in the order given, `batch_size` at a time;
/// a trailing remainder shorter than `batch_size` is dropped. Nothing is
/// shuffled: batches drawn from a length-sorted corpus hold sequences of
/// similar length. Callers wanting randomized batches shuffle first.
///
/// Build with [`BatchAssemblerOptions::try_init`].
#[derive(Debug, Clone)]
pub struct BatchAssembler {
    options: BatchAssemblerOptions,
}

impl BatchAssembler {
    /// The assembler options.
    pub fn options(&self) -> &BatchAssemblerOptions {
        &self.options
    }

    /// The number of sequences per batch.
    pub fn batch_size(&self) -> usize {
        self.options.batch_size
    }

    /// The number of full batches in `num_sequences` sequences.
    pub fn batch_count(
        &self,
        num_sequences: usize,
    ) -> usize {
        num_sequences / self.options.batch_size
    }

    /// Lazily assemble batches.
    ///
    /// ## Arguments
    /// * `sequences` - the encoded sequences, in corpus order.
    /// * `pad_token` - the padding token.
    pub fn batches<'a, T, S>(
        &'a self,
        sequences: &'a [S],
        pad_token: T,
    ) -> impl Iterator<Item = TrainingBatch<T>> + 'a
    where
        T: TokenType,
        S: AsRef<[T]>,
    {
        sequences
            .chunks_exact(self.options.batch_size)
            .map(move |chunk| TrainingBatch::from_sequences(chunk, pad_token))
    }

    /// Assemble all full batches.
    ///
    /// ## Arguments
    /// * `sequences` - the encoded sequences, in corpus order.
    /// * `pad_token` - the padding token.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, sequences, pad_token)))]
    pub fn assemble<T, S>(
        &self,
        sequences: &[S],
        pad_token: T,
    ) -> Vec<TrainingBatch<T>>
    where
        T: TokenType,
        S: AsRef<[T]>,
    {
        let batches: Vec<TrainingBatch<T>> = self.batches(sequences, pad_token).collect();

        let dropped = sequences.len() - batches.len() * self.options.batch_size;
        let padding: usize = batches.iter().map(TrainingBatch::padding_cells).sum();
        let cells: usize = batches
            .iter()
            .map(|b| b.batch_size() * b.max_len())
            .sum();
        log::info!(
            "Assembled {} batches of {} ({} sequences dropped; {} of {} cells are padding)",
            batches.len(),
            self.options.batch_size,
            dropped,
            padding,
            cells
        );

        batches
    }

    /// Assemble all full batches, padding with the vocabulary's padding token.
    ///
    /// See [`Self::assemble`].
    pub fn assemble_with_vocab<T, S>(
        &self,
        sequences: &[S],
        vocab: &SymbolVocab<T>,
    ) -> Vec<TrainingBatch<T>>
    where
        T: TokenType,
        S: AsRef<[T]>,
    {
        self.assemble(sequences, vocab.padding_token())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use proptest::prelude::*;

    use super::*;
    use crate::alloc::{vec, vec::Vec};

    const PAD: u32 = 99;

    fn assembler(batch_size: usize) -> BatchAssembler {
        BatchAssemblerOptions::new(batch_size).try_init().unwrap()
    }

    #[test]
    fn test_zero_batch_size() {
        assert!(matches!(
            BatchAssemblerOptions::new(0).try_init(),
            Err(VersechipperError::InvalidConfig(_))
        ));
        assert!(
            BatchAssemblerOptions::new(0)
                .with_batch_size(2)
                .try_init()
                .is_ok()
        );
    }

    #[test]
    fn test_pad_and_shift() {
        let sequences: Vec<Vec<u32>> = vec![vec![6, 2, 4], vec![1, 4, 2, 8, 5]];

        let batch = TrainingBatch::from_sequences(&sequences, PAD);

        assert_eq!(batch.inputs.dim(), (2, 5));
        assert_eq!(batch.targets.dim(), (2, 5));
        assert_eq!(batch.inputs, array![[6, 2, 4, PAD, PAD], [1, 4, 2, 8, 5]]);
        assert_eq!(batch.targets, array![[2, 4, PAD, PAD, PAD], [4, 2, 8, 5, 5]]);
        assert_eq!(batch.row_lengths, vec![3, 5]);
        assert_eq!(batch.padding_cells(), 2);
    }

    #[test]
    fn test_single_column() {
        let sequences: Vec<Vec<u32>> = vec![vec![7], vec![3]];
        let batch = TrainingBatch::from_sequences(&sequences, PAD);
        assert_eq!(batch.inputs, array![[7], [3]]);
        assert_eq!(batch.targets, array![[7], [3]]);
    }

    #[test]
    fn test_empty_rows() {
        let sequences: Vec<Vec<u32>> = vec![vec![], vec![]];
        let batch = TrainingBatch::from_sequences(&sequences, PAD);
        assert_eq!(batch.inputs.dim(), (2, 0));
        assert_eq!(batch.targets.dim(), (2, 0));
        assert_eq!(batch.padding_cells(), 0);
    }

    #[test]
    fn test_remainder_dropped() {
        let sequences: Vec<Vec<u32>> = (0..7u32).map(|i| vec![i; (i + 1) as usize]).collect();

        let batches = assembler(3).assemble(&sequences, PAD);
        assert_eq!(batches.len(), 2);
        assert_eq!(assembler(3).batch_count(sequences.len()), 2);

        // Batches consume sequences in order; the 7th never appears.
        assert_eq!(batches[0].inputs.column(0).to_vec(), vec![0, 1, 2]);
        assert_eq!(batches[1].inputs.column(0).to_vec(), vec![3, 4, 5]);
        assert_eq!(batches[1].max_len(), 6);
        assert!(batches.iter().all(|b| !b.inputs.iter().any(|&t| t == 6)));
    }

    #[test]
    fn test_batch_size_larger_than_corpus() {
        let sequences: Vec<Vec<u32>> = vec![vec![1, 2], vec![3]];
        assert!(assembler(3).assemble(&sequences, PAD).is_empty());
        assert!(assembler(3).assemble::<u32, Vec<u32>>(&[], PAD).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let sequences: Vec<Vec<u32>> = vec![vec![1, 2, 3], vec![4], vec![5, 6], vec![7, 8, 9, 10]];
        let a = assembler(2).assemble(&sequences, PAD);
        let b = assembler(2).assemble(&sequences, PAD);
        assert_eq!(a, b);
    }

    #[test]
    fn test_assemble_with_vocab() {
        let vocab: SymbolVocab<u32> =
            SymbolVocab::from_ranked_symbols(['G', 'E', 'a', 'b'], ' ').unwrap();
        let sequences: Vec<Vec<u32>> = vec![vec![0, 2, 1], vec![0, 2, 3, 3, 1]];

        let batches = assembler(2).assemble_with_vocab(&sequences, &vocab);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].inputs.row(0).to_vec(), vec![0, 2, 1, 4, 4]);
    }

    fn sequences_strategy() -> impl Strategy<Value = Vec<Vec<u32>>> {
        proptest::collection::vec(proptest::collection::vec(0u32..50, 0..12), 0..40)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn batch_invariants(sequences in sequences_strategy(), batch_size in 1usize..8) {
            let batches = assembler(batch_size).assemble(&sequences, PAD);

            prop_assert_eq!(batches.len(), sequences.len() / batch_size);

            for (idx, batch) in batches.iter().enumerate() {
                let chunk = &sequences[idx * batch_size..(idx + 1) * batch_size];
                let max_len = chunk.iter().map(Vec::len).max().unwrap_or(0);

                prop_assert_eq!(batch.inputs.dim(), (batch_size, max_len));
                prop_assert_eq!(batch.targets.dim(), (batch_size, max_len));

                for (row, seq) in chunk.iter().enumerate() {
                    let inputs = batch.inputs.row(row).to_vec();
                    let targets = batch.targets.row(row).to_vec();

                    prop_assert_eq!(&inputs[..seq.len()], seq.as_slice());
                    prop_assert!(inputs[seq.len()..].iter().all(|&t| t == PAD));

                    if max_len > 0 {
                        prop_assert_eq!(&targets[..max_len - 1], &inputs[1..]);
                        prop_assert_eq!(targets[max_len - 1], inputs[max_len - 1]);
                    }
                }
            }
        }
    }
}
