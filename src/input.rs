//! Reads the input file into memory. A missing file is the one failure the
//! caller handles rather than aborts on, so it comes back as `None` instead
//! of an error.
use anyhow::{Context, Result};
use std::{fs, io::ErrorKind, path::Path};

/// Returns the contents of the file at `path` as a `Vec<u8>`, or `None` if no
/// such file exists. Any other I/O failure is an error naming the path.
pub fn contents_of(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(decode_if_utf16(contents))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => {
            Err(err).with_context(|| format!("Can't read file: {}", path.display()))
        }
    }
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning
/// of `candidate`. Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // Translate UTF16 to UTF8
    // Note: `decode_without_bom_handling` will change malformed sequences to the
    // Unicode REPLACEMENT CHARACTER. Should we report an error instead?
    //
    // "with BOM handling" means that the UTF-16 BOM is translated to a UTF-8 BOM
    //
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    return candidate;
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use assert_fs::{prelude::*, TempDir};

    const UTF8_BOM: &str = "\u{FEFF}";

    fn abominate(expected: &str) -> String {
        UTF8_BOM.to_string() + expected
    }

    fn to_utf_16le(source: &str) -> Vec<u8> {
        let mut result = b"\xff\xfe".to_vec();
        for b in source.as_bytes().iter() {
            result.push(*b);
            result.push(0);
        }
        result
    }

    fn to_utf_16be(source: &str) -> Vec<u8> {
        let mut result = b"\xfe\xff".to_vec();
        for b in source.as_bytes().iter() {
            result.push(0);
            result.push(*b);
        }
        result
    }

    #[test]
    fn utf_16le_is_translated_to_utf8() {
        let expected = "The cute red crab\n jumps over the lazy blue gopher\n";
        assert_eq!(decode_if_utf16(to_utf_16le(expected)), abominate(expected).as_bytes());
    }

    #[test]
    fn utf_16be_is_translated_to_utf8() {
        let expected = "The cute red crab\n jumps over the lazy blue gopher\n";
        assert_eq!(decode_if_utf16(to_utf_16be(expected)), abominate(expected).as_bytes());
    }

    #[test]
    fn plain_utf8_passes_through_unchanged() {
        let contents = b"first\nsecond\n".to_vec();
        assert_eq!(decode_if_utf16(contents.clone()), contents);
    }

    #[test]
    fn missing_file_is_none_not_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.child("no-such-file.txt");
        assert!(contents_of(path.path()).unwrap().is_none());
    }

    #[test]
    fn existing_file_contents_are_returned() {
        let temp = TempDir::new().unwrap();
        let file = temp.child("data.txt");
        file.write_str("a\nb\n").unwrap();
        assert_eq!(contents_of(file.path()).unwrap().unwrap(), b"a\nb\n");
    }
}
