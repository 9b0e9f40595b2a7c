//! # Symbol Vocabulary

use crate::{
    alloc::{string::String, vec::Vec},
    errors::{VCResult, VersechipperError},
    types::{Symbol, SymbolTokenMap, TokenType, hash_map_with_capacity},
    vocab::{SampleEncoder, SymbolCounter, validators::try_embedding_size},
};

/// The default padding symbol.
pub const DEFAULT_PADDING_SYMBOL: Symbol = ' ';

/// A frequency-ordered `{ Symbol <-> T }` vocabulary.
///
/// `symbols()` holds the corpus symbols by descending frequency,
/// followed by the padding symbol. Token ids are positions in `symbols()`.
///
/// Symbols absent from the vocabulary encode to [`Self::unknown_token`],
/// which is `len()`; one past the last symbol. Embedding tables consuming
/// these ids need [`Self::embedding_size`] rows.
///
/// If the padding symbol also occurs among the corpus symbols, the later
/// (padding) position wins in `symbol_map()`; and `symbol_map().len()`
/// is one less than `len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolVocab<T: TokenType> {
    symbols: Vec<Symbol>,
    symbol_map: SymbolTokenMap<T>,
}

impl<T: TokenType> SymbolVocab<T> {
    /// Build a vocabulary from ranked symbols.
    ///
    /// ## Arguments
    /// * `ranked` - the corpus symbols, most frequent first.
    /// * `padding_symbol` - appended after the ranked symbols.
    ///
    /// ## Returns
    /// The vocabulary, or `VocabSizeOverflow` if the unknown token is not
    /// representable as `T`.
    pub fn from_ranked_symbols<I>(
        ranked: I,
        padding_symbol: Symbol,
    ) -> VCResult<Self>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut symbols: Vec<Symbol> = ranked.into_iter().collect();
        symbols.push(padding_symbol);

        try_embedding_size::<T>(symbols.len() + 1)?;

        let mut symbol_map: SymbolTokenMap<T> = hash_map_with_capacity(symbols.len());
        for (idx, &symbol) in symbols.iter().enumerate() {
            // Checked by `try_embedding_size`.
            let token = T::from_usize(idx).ok_or(VersechipperError::TokenOutOfRange)?;
            symbol_map.insert(symbol, token);
        }

        Ok(Self {
            symbols,
            symbol_map,
        })
    }

    /// Build a vocabulary from symbol counts.
    ///
    /// ## Arguments
    /// * `counter` - the corpus symbol counts.
    /// * `padding_symbol` - appended after the ranked symbols.
    /// * `max_symbols` - keep at most this many of the most frequent
    ///   corpus symbols; the rest encode as unknown.
    pub fn from_counter(
        counter: &SymbolCounter,
        padding_symbol: Symbol,
        max_symbols: Option<usize>,
    ) -> VCResult<Self> {
        let ranked = counter.ranked();
        let keep = max_symbols.unwrap_or(ranked.len());
        Self::from_ranked_symbols(
            ranked.into_iter().take(keep).map(|(symbol, _)| symbol),
            padding_symbol,
        )
    }

    /// The vocabulary order: ranked symbols, then the padding symbol.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The `{ Symbol -> T }` map.
    pub fn symbol_map(&self) -> &SymbolTokenMap<T> {
        &self.symbol_map
    }

    /// The number of symbols, the padding symbol included.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; the padding symbol is always present.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The size of an embedding table covering every token,
    /// [`Self::unknown_token`] included.
    pub fn embedding_size(&self) -> usize {
        self.len() + 1
    }

    /// Does any symbol appear more than once in `symbols()`?
    pub fn has_collisions(&self) -> bool {
        self.symbol_map.len() != self.symbols.len()
    }

    /// The padding symbol.
    pub fn padding_symbol(&self) -> Symbol {
        self.symbols[self.symbols.len() - 1]
    }

    /// The padding token.
    pub fn padding_token(&self) -> T {
        // The padding symbol is always the last insert.
        T::from_usize(self.symbols.len() - 1).unwrap()
    }

    /// The token assigned to symbols outside the vocabulary.
    pub fn unknown_token(&self) -> T {
        // Checked by `try_embedding_size` at construction.
        T::from_usize(self.symbols.len()).unwrap()
    }

    /// Look up the token for a symbol.
    pub fn token_for(
        &self,
        symbol: Symbol,
    ) -> Option<T> {
        self.symbol_map.get(&symbol).copied()
    }

    /// Look up the symbol for a token.
    pub fn symbol_for(
        &self,
        token: T,
    ) -> Option<Symbol> {
        token
            .to_usize()
            .and_then(|idx| self.symbols.get(idx).copied())
    }

    /// Encode a sequence of symbols.
    pub fn encode_symbols<I>(
        &self,
        symbols: I,
    ) -> Vec<T>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let unknown = self.unknown_token();
        symbols
            .into_iter()
            .map(|symbol| self.token_for(symbol).unwrap_or(unknown))
            .collect()
    }

    /// Decode tokens to a string.
    ///
    /// ## Returns
    /// The decoded string, or `UnknownToken` for a token without a symbol.
    pub fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> VCResult<String> {
        tokens
            .iter()
            .map(|&token| {
                self.symbol_for(token)
                    .ok_or_else(|| VersechipperError::UnknownToken {
                        token: token.to_u64().unwrap_or(u64::MAX),
                    })
            })
            .collect()
    }
}

impl<T: TokenType> SampleEncoder<T> for SymbolVocab<T> {
    fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) {
        let unknown = self.unknown_token();
        tokens.extend(
            text.chars()
                .map(|symbol| self.token_for(symbol).unwrap_or(unknown)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::vec;

    fn test_vocab() -> SymbolVocab<u16> {
        let mut counter = SymbolCounter::new();
        counter.update_from_samples(["GabE", "GbcbE"]);
        SymbolVocab::from_counter(&counter, DEFAULT_PADDING_SYMBOL, None).unwrap()
    }

    #[test]
    fn test_order_and_ids() {
        let vocab = test_vocab();
        assert_eq!(vocab.symbols(), &['b', 'G', 'E', 'a', 'c', ' ']);
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.symbol_map().len(), 6);
        assert!(!vocab.has_collisions());

        for (idx, &symbol) in vocab.symbols().iter().enumerate() {
            assert_eq!(vocab.token_for(symbol), Some(idx as u16));
            assert_eq!(vocab.symbol_for(idx as u16), Some(symbol));
        }

        assert_eq!(vocab.padding_symbol(), ' ');
        assert_eq!(vocab.padding_token(), 5);
        assert_eq!(vocab.unknown_token(), 6);
        assert_eq!(vocab.embedding_size(), 7);
    }

    #[test]
    fn test_encode_unknown() {
        let vocab = test_vocab();
        assert_eq!(vocab.encode("GbazE"), vec![1, 0, 3, 6, 2]);
        assert_eq!(vocab.encode_symbols("c ".chars()), vec![4, 5]);
        assert_eq!(vocab.symbol_for(6), None);
    }

    #[test]
    fn test_decode() {
        let vocab = test_vocab();
        let tokens = vocab.encode("GbcbE");
        assert_eq!(vocab.try_decode_to_string(&tokens).unwrap(), "GbcbE");

        assert!(matches!(
            vocab.try_decode_to_string(&[0, 6]),
            Err(VersechipperError::UnknownToken { token: 6 })
        ));
    }

    #[test]
    fn test_padding_collision_overrides() {
        let vocab: SymbolVocab<u32> =
            SymbolVocab::from_ranked_symbols(['G', ' ', 'E'], ' ').unwrap();

        assert_eq!(vocab.symbols(), &['G', ' ', 'E', ' ']);
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.symbol_map().len(), 3);
        assert!(vocab.has_collisions());

        // The later (padding) assignment wins.
        assert_eq!(vocab.token_for(' '), Some(3));
        assert_eq!(vocab.padding_token(), 3);
        assert_eq!(vocab.token_for('E'), Some(2));
        assert_eq!(vocab.unknown_token(), 4);
    }

    #[test]
    fn test_empty_counter() {
        let vocab: SymbolVocab<u16> =
            SymbolVocab::from_counter(&SymbolCounter::new(), '_', None).unwrap();
        assert_eq!(vocab.symbols(), &['_']);
        assert_eq!(vocab.padding_token(), 0);
        assert_eq!(vocab.unknown_token(), 1);
    }

    #[test]
    fn test_max_symbols() {
        let mut counter = SymbolCounter::new();
        counter.update_from_samples(["GabE", "GbcbE"]);
        let vocab: SymbolVocab<u16> =
            SymbolVocab::from_counter(&counter, DEFAULT_PADDING_SYMBOL, Some(3)).unwrap();

        assert_eq!(vocab.symbols(), &['b', 'G', 'E', ' ']);
        assert_eq!(vocab.encode("Ga"), vec![1, 4]);
    }

    #[test]
    fn test_overflow() {
        let symbols = (0..255u32).filter_map(char::from_u32);
        assert!(SymbolVocab::<u8>::from_ranked_symbols(symbols.clone().take(254), '\u{3000}').is_ok());
        assert!(matches!(
            SymbolVocab::<u8>::from_ranked_symbols(symbols.take(255), '\u{3000}'),
            Err(VersechipperError::VocabSizeOverflow { size: 257 })
        ));
    }
}
