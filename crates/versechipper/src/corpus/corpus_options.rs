//! # Corpus Options

use crate::{
    alloc::{format, vec::Vec},
    corpus::PoemParser,
    errors::{VCResult, VersechipperError},
    types::Symbol,
};

/// The default `title:body` delimiter.
pub const DEFAULT_DELIMITER: char = ':';

/// The default (exclusive) lower bound on body length, in symbols.
pub const DEFAULT_MIN_BODY_LEN: usize = 5;

/// The default (exclusive) upper bound on body length, in symbols.
pub const DEFAULT_MAX_BODY_LEN: usize = 79;

/// The default sample start marker.
pub const DEFAULT_START_MARKER: Symbol = 'G';

/// The default sample end marker.
pub const DEFAULT_END_MARKER: Symbol = 'E';

/// Symbols which cause a body to be rejected.
///
/// Both sides of each bracket pair are listed; a stray closing bracket
/// marks an annotation as surely as an opening one.
/// The start and end markers are always excluded in addition to these.
pub const DEFAULT_EXCLUDED_SYMBOLS: &[Symbol] =
    &['_', '(', ')', '（', '）', '《', '》', '[', ']'];

/// Options for [`PoemParser`].
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusOptions {
    /// The `title:body` field delimiter.
    pub delimiter: char,

    /// Bodies with `len <= min_body_len` are rejected.
    pub min_body_len: usize,

    /// Bodies with `len >= max_body_len` are rejected.
    pub max_body_len: usize,

    /// The symbol prepended to every accepted body.
    pub start_marker: Symbol,

    /// The symbol appended to every accepted body.
    pub end_marker: Symbol,

    /// Bodies containing any of these symbols are rejected.
    pub excluded_symbols: Vec<Symbol>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            min_body_len: DEFAULT_MIN_BODY_LEN,
            max_body_len: DEFAULT_MAX_BODY_LEN,
            start_marker: DEFAULT_START_MARKER,
            end_marker: DEFAULT_END_MARKER,
            excluded_symbols: DEFAULT_EXCLUDED_SYMBOLS.to_vec(),
        }
    }
}

impl CorpusOptions {
    /// Sets the `title:body` delimiter.
    pub fn with_delimiter(
        self,
        delimiter: char,
    ) -> Self {
        Self { delimiter, ..self }
    }

    /// Sets the exclusive body length bounds.
    ///
    /// ## Arguments
    /// * `min_body_len` - bodies of this length or shorter are rejected.
    /// * `max_body_len` - bodies of this length or longer are rejected.
    pub fn with_body_len_bounds(
        self,
        min_body_len: usize,
        max_body_len: usize,
    ) -> Self {
        Self {
            min_body_len,
            max_body_len,
            ..self
        }
    }

    /// Sets the start and end markers.
    pub fn with_markers(
        self,
        start_marker: Symbol,
        end_marker: Symbol,
    ) -> Self {
        Self {
            start_marker,
            end_marker,
            ..self
        }
    }

    /// Replaces the excluded symbol set.
    pub fn with_excluded_symbols<I>(
        self,
        excluded_symbols: I,
    ) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        Self {
            excluded_symbols: excluded_symbols.into_iter().collect(),
            ..self
        }
    }

    /// Check the options for consistency.
    pub fn validate(&self) -> VCResult<()> {
        if self.min_body_len == 0 {
            return Err(VersechipperError::InvalidConfig(
                "min_body_len must be > 0".into(),
            ));
        }
        if self.max_body_len == 0 {
            return Err(VersechipperError::InvalidConfig(
                "max_body_len must be > 0".into(),
            ));
        }
        if self.min_body_len >= self.max_body_len {
            return Err(VersechipperError::InvalidConfig(format!(
                "min_body_len ({}) must be < max_body_len ({})",
                self.min_body_len, self.max_body_len
            )));
        }
        if self.start_marker == self.end_marker {
            return Err(VersechipperError::InvalidConfig(format!(
                "start and end markers must differ: {:?}",
                self.start_marker
            )));
        }
        if self.start_marker == self.delimiter || self.end_marker == self.delimiter {
            return Err(VersechipperError::InvalidConfig(format!(
                "markers must differ from the delimiter {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }

    /// Validates these options and builds a [`PoemParser`].
    pub fn try_init(self) -> VCResult<PoemParser> {
        self.validate()?;
        Ok(PoemParser::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CorpusOptions::default();
        assert_eq!(options.delimiter, ':');
        assert_eq!(options.min_body_len, 5);
        assert_eq!(options.max_body_len, 79);
        assert_eq!(options.start_marker, 'G');
        assert_eq!(options.end_marker, 'E');
        assert!(options.excluded_symbols.contains(&'《'));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_invalid_bounds() {
        assert!(
            CorpusOptions::default()
                .with_body_len_bounds(0, 10)
                .try_init()
                .is_err()
        );
        assert!(
            CorpusOptions::default()
                .with_body_len_bounds(3, 0)
                .try_init()
                .is_err()
        );
        assert!(
            CorpusOptions::default()
                .with_body_len_bounds(10, 10)
                .try_init()
                .is_err()
        );
        assert!(
            CorpusOptions::default()
                .with_body_len_bounds(11, 10)
                .try_init()
                .is_err()
        );
        assert!(
            CorpusOptions::default()
                .with_body_len_bounds(1, 10)
                .try_init()
                .is_ok()
        );
    }

    #[test]
    fn test_invalid_markers() {
        assert!(
            CorpusOptions::default()
                .with_markers('^', '^')
                .try_init()
                .is_err()
        );
        assert!(
            CorpusOptions::default()
                .with_markers(':', '$')
                .try_init()
                .is_err()
        );
        assert!(
            CorpusOptions::default()
                .with_markers('^', '$')
                .try_init()
                .is_ok()
        );
    }
}
