//! # Sample Encoder Trait

use crate::{alloc::vec::Vec, types::TokenType};

/// Encodes sample text into token sequences.
pub trait SampleEncoder<T: TokenType>: Send + Sync {
    /// Encode text, appending tokens to the buffer.
    ///
    /// ## Arguments
    /// * `text` - the text to encode.
    /// * `tokens` - the target token buffer.
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    );

    /// Encode text into a new token sequence.
    fn encode(
        &self,
        text: &str,
    ) -> Vec<T> {
        let mut tokens = Vec::with_capacity(text.len());
        self.encode_append(text, &mut tokens);
        tokens
    }

    /// Encode a batch of texts, preserving batch order.
    fn encode_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>>
    where
        S: AsRef<str> + Sync,
    {
        batch.iter().map(|text| self.encode(text.as_ref())).collect()
    }
}

impl<T, E> SampleEncoder<T> for &E
where
    T: TokenType,
    E: SampleEncoder<T>,
{
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        (**self).encode_append(text, tokens)
    }

    fn encode_batch<S>(
        &self,
        batch: &[S],
    ) -> Vec<Vec<T>>
    where
        S: AsRef<str> + Sync,
    {
        (**self).encode_batch(batch)
    }
}
