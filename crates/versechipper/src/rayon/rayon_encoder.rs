//! # Parallel Encoder

use crate::{types::TokenType, vocab::SampleEncoder};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Encodes the samples of a batch on the ``rayon`` pool;
/// the output keeps batch order.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: TokenType, D: SampleEncoder<T>> {
    /// Inner encoder.
    pub inner: D,

    _marker: std::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: SampleEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The sample encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, D> SampleEncoder<T> for ParallelRayonEncoder<T, D>
where
    T: TokenType,
    D: SampleEncoder<T>,
{
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        self.inner.encode_append(text, tokens)
    }

    fn encode_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;
        batch
            .par_iter()
            .map(|text| self.inner.encode(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{SymbolCounter, SymbolVocab};

    #[test]
    fn test_encoder() {
        type T = u16;

        let samples = vec!["G床前明月光E", "G疑是地上霜E", "G举头望明月E", "G低头思故乡E"];

        let mut counter = SymbolCounter::new();
        counter.update_from_samples(&samples);
        let vocab: SymbolVocab<T> = SymbolVocab::from_counter(&counter, ' ', None).unwrap();

        let encoder = ParallelRayonEncoder::new(&vocab);

        let expected: Vec<Vec<T>> = samples.iter().map(|s| vocab.encode(s)).collect();
        assert_eq!(encoder.encode_batch(&samples), expected);

        for (sample, tokens) in samples.iter().zip(&expected) {
            assert_eq!(vocab.try_decode_to_string(tokens).unwrap(), *sample);
        }
    }
}
