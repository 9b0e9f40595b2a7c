//! # Poem Sample

use core::{fmt, str::Chars};

use crate::{alloc::string::String, types::Symbol};

/// One cleaned, accepted poem: `start_marker + body + end_marker`.
///
/// Lengths are measured in symbols (`char`s), never bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoemSample {
    text: String,
    len: usize,
}

impl PoemSample {
    /// Wrap a cleaned body with the start and end markers.
    ///
    /// ## Arguments
    /// * `start_marker` - the symbol prepended to the body.
    /// * `body` - the cleaned body text.
    /// * `end_marker` - the symbol appended to the body.
    pub fn wrap(
        start_marker: Symbol,
        body: &str,
        end_marker: Symbol,
    ) -> Self {
        let mut text =
            String::with_capacity(body.len() + start_marker.len_utf8() + end_marker.len_utf8());
        text.push(start_marker);
        text.push_str(body);
        text.push(end_marker);

        let len = body.chars().count() + 2;
        Self { text, len }
    }

    /// The full sample text, markers included.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The body text, markers excluded.
    pub fn body(&self) -> &str {
        let mut chars = self.text.chars();
        chars.next();
        chars.next_back();
        chars.as_str()
    }

    /// The sample length in symbols, markers included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a sample holds at least its two markers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over the sample's symbols, markers included.
    pub fn symbols(&self) -> Chars<'_> {
        self.text.chars()
    }
}

impl AsRef<str> for PoemSample {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PoemSample {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        let sample = PoemSample::wrap('G', "我爱你", 'E');
        assert_eq!(sample.as_str(), "G我爱你E");
        assert_eq!(sample.body(), "我爱你");
        assert_eq!(sample.len(), 5);
        assert!(!sample.is_empty());
        assert_eq!(sample.symbols().next(), Some('G'));
        assert_eq!(sample.symbols().last(), Some('E'));
    }

    #[test]
    fn test_multibyte_markers() {
        let sample = PoemSample::wrap('«', "春风", '»');
        assert_eq!(sample.len(), 4);
        assert_eq!(sample.body(), "春风");
        assert_eq!(sample.as_str().len(), 2 + 6 + 2);
    }
}
