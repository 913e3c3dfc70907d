//! Character classification and escape decoding helpers.
//!
//! Names are ASCII only (`[_A-Za-z][_0-9A-Za-z]*`), so every predicate here
//! works on single bytes. The hex helpers back `\uXXXX` escapes.

/// Checks if a byte can start a name.
///
/// # Examples
///
/// ```
/// use gqlc_lex::chars::is_name_start;
///
/// assert!(is_name_start(b'a'));
/// assert!(is_name_start(b'_'));
/// assert!(!is_name_start(b'1'));
/// ```
#[inline]
pub fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Checks if a byte can continue a name.
#[inline]
pub fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Checks if a byte is a decimal digit.
#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Control characters below U+0020 that may appear in source text.
#[inline]
pub fn is_allowed_control(byte: u8) -> bool {
    matches!(byte, b'\t' | b'\n' | b'\r')
}

/// Converts a hex digit to its value.
///
/// # Examples
///
/// ```
/// use gqlc_lex::chars::hex_digit_value;
///
/// assert_eq!(hex_digit_value(b'7'), Some(7));
/// assert_eq!(hex_digit_value(b'f'), Some(15));
/// assert_eq!(hex_digit_value(b'F'), Some(15));
/// assert_eq!(hex_digit_value(b'g'), None);
/// ```
#[inline]
pub fn hex_digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u32),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u32),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u32),
        _ => None,
    }
}

/// Result of reading the four digits of a `\u` escape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HexQuad {
    /// All four digits were hex; the decoded 16-bit value.
    Value(u32),
    /// A non-hex byte was found.
    Invalid,
    /// The input ended before four digits were read.
    Truncated,
}

/// Decodes four hex digits, most significant first.
///
/// Each digit contributes four bits. The first offending byte decides the
/// outcome, so `"12"` followed by end of input is [`HexQuad::Truncated`]
/// while `"1Z"` is [`HexQuad::Invalid`] regardless of what follows.
///
/// ```
/// use gqlc_lex::chars::{decode_hex_quad, HexQuad};
///
/// assert_eq!(decode_hex_quad(b"0041"), HexQuad::Value(0x41));
/// assert_eq!(decode_hex_quad(b"00"), HexQuad::Truncated);
/// assert_eq!(decode_hex_quad(b"ZZZZ"), HexQuad::Invalid);
/// ```
pub fn decode_hex_quad(bytes: &[u8]) -> HexQuad {
    let mut value = 0u32;
    for i in 0..4 {
        let Some(&byte) = bytes.get(i) else {
            return HexQuad::Truncated;
        };
        match hex_digit_value(byte) {
            Some(digit) => value = (value << 4) | digit,
            None => return HexQuad::Invalid,
        }
    }
    HexQuad::Value(value)
}

/// Checks for a UTF-16 high (leading) surrogate.
#[inline]
pub fn is_leading_surrogate(code: u32) -> bool {
    (0xD800..=0xDBFF).contains(&code)
}

/// Checks for a UTF-16 low (trailing) surrogate.
#[inline]
pub fn is_trailing_surrogate(code: u32) -> bool {
    (0xDC00..=0xDFFF).contains(&code)
}

/// Combines a surrogate pair into the supplementary code point it encodes.
pub fn combine_surrogates(leading: u32, trailing: u32) -> Option<char> {
    debug_assert!(is_leading_surrogate(leading) && is_trailing_surrogate(trailing));
    char::from_u32(0x10000 + ((leading - 0xD800) << 10) + (trailing - 0xDC00))
}

/// Describes a character for an error message.
///
/// Printable ASCII is quoted as is, anything else is written as a `\u`
/// escape, and a missing character (end of input) is `<EOF>`.
///
/// ```
/// use gqlc_lex::chars::describe_char;
///
/// assert_eq!(describe_char(Some('?')), "\"?\"");
/// assert_eq!(describe_char(Some('\u{7}')), "\"\\u0007\"");
/// assert_eq!(describe_char(None), "<EOF>");
/// ```
pub fn describe_char(ch: Option<char>) -> String {
    match ch {
        None => "<EOF>".to_string(),
        Some('"') => "'\"'".to_string(),
        Some(c) if (' '..='~').contains(&c) => format!("\"{}\"", c),
        Some(c) => format!("\"\\u{:04X}\"", c as u32),
    }
}
