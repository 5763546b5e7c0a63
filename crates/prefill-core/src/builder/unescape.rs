//! Strict query-string unescaping for the display URL.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnescapeError {
    /// `%` not followed by two hex digits.
    #[error("malformed escape {sequence:?} at byte {offset}")]
    MalformedEscape { offset: usize, sequence: String },
    #[error("unescaped query is not valid UTF-8")]
    InvalidUtf8,
}

/// Turns `%XX` into the byte it names and `+` into a space.
///
/// Unlike lossy form decoding this rejects truncated or non-hex escapes and
/// byte sequences that are not UTF-8.
pub fn unescape_query(input: &str) -> Result<String, UnescapeError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let h = bytes.get(i + 1).copied().and_then(hex_digit);
                let l = bytes.get(i + 2).copied().and_then(hex_digit);
                match (h, l) {
                    (Some(high), Some(low)) => out.push(high << 4 | low),
                    _ => {
                        let end = (i + 3).min(bytes.len());
                        return Err(UnescapeError::MalformedEscape {
                            offset: i,
                            sequence: String::from_utf8_lossy(&bytes[i..end]).into_owned(),
                        });
                    }
                }
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|_| UnescapeError::InvalidUtf8)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
