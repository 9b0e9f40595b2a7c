//! # Reserved Symbol Policy

/// What to do when the padding symbol occurs in natural corpus text.
///
/// The padding symbol is always appended to the end of the vocabulary
/// order. If it also occurs in the corpus, it holds two positions, and
/// the later (padding) assignment wins in the symbol map.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ReservedSymbolPolicy {
    /// Reject samples whose body contains the padding symbol.
    ///
    /// The symbol map is then a bijection over the vocabulary order.
    #[default]
    Exclude,

    /// Keep such samples; the padding assignment overrides the natural one.
    Override,

    /// Fail the build with `ReservedSymbolCollision`.
    Error,
}
