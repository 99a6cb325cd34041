//! Decoding of string literal tokens into their values.

use super::syntax_kind::SyntaxKind;
use crate::base::LiteralError;

/// Decode the value of a string literal token.
///
/// Text blocks are rejected: they are never valid import arguments.
pub fn decode(kind: SyntaxKind, text: &str) -> Result<String, LiteralError> {
    match kind {
        SyntaxKind::DOUBLE_STRING | SyntaxKind::SINGLE_STRING => {
            let body = text
                .get(1..text.len().saturating_sub(1))
                .ok_or(LiteralError::Unterminated)?;
            unescape(body)
        }
        SyntaxKind::VERBATIM_DOUBLE => verbatim(text, '"'),
        SyntaxKind::VERBATIM_SINGLE => verbatim(text, '\''),
        SyntaxKind::TEXT_BLOCK => Err(LiteralError::TextBlock),
        _ => Err(LiteralError::Unterminated),
    }
}

/// `@"a""b"` decodes to `a"b`.
fn verbatim(text: &str, quote: char) -> Result<String, LiteralError> {
    let body = text
        .strip_prefix('@')
        .and_then(|t| t.strip_prefix(quote))
        .and_then(|t| t.strip_suffix(quote))
        .ok_or(LiteralError::Unterminated)?;
    let doubled = format!("{quote}{quote}");
    Ok(body.replace(&doubled, &quote.to_string()))
}

fn unescape(body: &str) -> Result<String, LiteralError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next().ok_or(LiteralError::InvalidEscape)? {
            '"' => '"',
            '\'' => '\'',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{0008}',
            'f' => '\u{000C}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => unicode_escape(&mut chars)?,
            _ => return Err(LiteralError::InvalidEscape),
        };
        out.push(escaped);
    }
    Ok(out)
}

/// Decode the `XXXX` of a `\uXXXX` escape, joining UTF-16 surrogate pairs.
fn unicode_escape(chars: &mut std::str::Chars<'_>) -> Result<char, LiteralError> {
    let high = hex4(chars)?;
    if !(0xD800..0xDC00).contains(&high) {
        return char::from_u32(high).ok_or(LiteralError::InvalidEscape);
    }
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(LiteralError::InvalidEscape);
    }
    let low = hex4(chars)?;
    if !(0xDC00..0xE000).contains(&low) {
        return Err(LiteralError::InvalidEscape);
    }
    char::from_u32(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00))
        .ok_or(LiteralError::InvalidEscape)
}

fn hex4(chars: &mut std::str::Chars<'_>) -> Result<u32, LiteralError> {
    let mut value = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or(LiteralError::InvalidEscape)?;
        value = value * 16 + digit;
    }
    Ok(value)
}
