//! # Base64 Symbol Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    errors::{VCResult, VersechipperError},
    types::{Symbol, TokenType},
    vocab::SymbolVocab,
};

/// Load a [`SymbolVocab`] from a base64 vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SYMBOL} {TOKEN}
/// ```
///
/// # Arguments
/// * `path` - the path to the vocabulary file.
pub fn load_base64_symbol_vocab_path<T, P>(path: P) -> VCResult<SymbolVocab<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let reader = BufReader::new(File::open(path)?);
    read_base64_symbol_vocab(reader)
}

/// Read a [`SymbolVocab`] from a base64 vocab line reader.
///
/// Tokens must be listed in order, starting at `0`;
/// the last line holds the padding symbol.
///
/// # Arguments
/// * `reader` - the line reader.
pub fn read_base64_symbol_vocab<T, R>(reader: R) -> VCResult<SymbolVocab<T>>
where
    T: TokenType,
    R: BufRead,
{
    let mut symbols: Vec<Symbol> = Vec::new();

    for line in reader.lines() {
        let line = line?;

        let Some((encoded, id)) = line.split_once(' ') else {
            return Err(VersechipperError::Parse(format!(
                "expected '{{BASE64 SYMBOL}} {{TOKEN}}': {line:?}"
            )));
        };

        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| VersechipperError::Parse(e.to_string()))?;
        let text = String::from_utf8(bytes).map_err(|e| VersechipperError::Parse(e.to_string()))?;

        let mut chars = text.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Err(VersechipperError::Parse(format!(
                "expected a single symbol: {text:?}"
            )));
        };

        let id: usize = id
            .parse()
            .map_err(|e: core::num::ParseIntError| VersechipperError::Parse(e.to_string()))?;
        if id != symbols.len() {
            return Err(VersechipperError::Parse(format!(
                "expected token {}, found {id}",
                symbols.len()
            )));
        }

        symbols.push(symbol);
    }

    let Some(padding_symbol) = symbols.pop() else {
        return Err(VersechipperError::Parse(
            "empty vocabulary; missing padding symbol".into(),
        ));
    };

    SymbolVocab::from_ranked_symbols(symbols, padding_symbol)
}

/// Save a [`SymbolVocab`] to a base64 vocab file.
///
/// Lines are:
/// ```terminaloutput
/// {BASE64 SYMBOL} {TOKEN}
/// ```
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
pub fn save_base64_symbol_vocab_path<T: TokenType, P: AsRef<Path>>(
    vocab: &SymbolVocab<T>,
    path: P,
) -> VCResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_base64_symbol_vocab(vocab, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`SymbolVocab`] to a [`Write`] writer.
///
/// Every position of [`SymbolVocab::symbols`] is written, in token order.
///
/// # Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
pub fn write_base64_symbol_vocab<T, W>(
    vocab: &SymbolVocab<T>,
    writer: &mut W,
) -> VCResult<()>
where
    T: TokenType,
    W: Write,
{
    let mut buf = [0u8; 4];
    for (token, symbol) in vocab.symbols().iter().enumerate() {
        let encoded = symbol.encode_utf8(&mut buf);
        writeln!(
            writer,
            "{} {}",
            BASE64_STANDARD.encode(encoded.as_bytes()),
            token
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::SymbolCounter;

    #[test]
    fn test_save_load_symbol_vocab() {
        type T = u32;

        let mut counter = SymbolCounter::new();
        counter.update_from_samples(["G床前明月光E", "G疑是地上霜E"]);
        let vocab: SymbolVocab<T> = SymbolVocab::from_counter(&counter, ' ', None).unwrap();

        tempdir::TempDir::new("vocab_test")
            .and_then(|dir| {
                let path = dir.path().join("symbols.vocab");

                save_base64_symbol_vocab_path(&vocab, &path).expect("Failed to save vocab");

                let loaded: SymbolVocab<T> =
                    load_base64_symbol_vocab_path(&path).expect("Failed to load vocab");

                assert_eq!(&loaded, &vocab);

                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn test_write_format() {
        let vocab: SymbolVocab<u16> = SymbolVocab::from_ranked_symbols(['G', '风'], ' ').unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_base64_symbol_vocab(&vocab, &mut buf).unwrap();

        assert_eq!(String::from_utf8(buf).unwrap(), "Rw== 0\n6aOO 1\nIA== 2\n");
    }

    #[test]
    fn test_collisions_round_trip() {
        let vocab: SymbolVocab<u16> =
            SymbolVocab::from_ranked_symbols(['G', ' ', 'E'], ' ').unwrap();

        let mut buf: Vec<u8> = Vec::new();
        write_base64_symbol_vocab(&vocab, &mut buf).unwrap();
        let loaded: SymbolVocab<u16> = read_base64_symbol_vocab(buf.as_slice()).unwrap();

        assert_eq!(loaded.symbols(), vocab.symbols());
        assert_eq!(loaded.padding_token(), 3);
    }

    #[test]
    fn test_read_errors() {
        let read = |data: &str| read_base64_symbol_vocab::<u16, _>(data.as_bytes());

        assert!(read("").is_err());
        assert!(read("Rw==\n").is_err());
        assert!(read("Rw== 1\n").is_err());
        assert!(read("R 0\n").is_err());
        assert!(read("6aOO6aOO 0\n").is_err());
        assert!(read("Rw== 0\nIA== 1\n").is_ok());
    }
}
