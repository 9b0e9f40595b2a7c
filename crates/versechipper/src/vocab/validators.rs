//! Validators for vocabulary sizes.
use crate::{
    errors::{VCResult, VersechipperError},
    types::TokenType,
};

/// Validates and returns an embedding table size.
///
/// The largest token in a table of `embedding_size` rows is
/// `embedding_size - 1`; it must be representable as `T`.
pub fn try_embedding_size<T: TokenType>(embedding_size: usize) -> VCResult<usize> {
    match embedding_size.checked_sub(1) {
        Some(max_token) if T::from_usize(max_token).is_some() => Ok(embedding_size),
        _ => Err(VersechipperError::VocabSizeOverflow {
            size: embedding_size,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_size() {
        assert_eq!(try_embedding_size::<u8>(1).unwrap(), 1);
        assert_eq!(try_embedding_size::<u8>(256).unwrap(), 256);
        assert!(try_embedding_size::<u8>(257).is_err());
        assert!(try_embedding_size::<u8>(0).is_err());

        assert_eq!(
            try_embedding_size::<u16>(u16::MAX as usize + 1).unwrap(),
            u16::MAX as usize + 1
        );
        assert!(try_embedding_size::<u16>(u16::MAX as usize + 2).is_err());
    }
}
