// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Escape decoding ahead of tokenizing, and whitespace escaping for display.

use crate::error::{CharsetError, GrammarReason};

/// Decodes every known escape form, scanning left to right.
///
/// Backslash sequences that match no form, `\-` in particular, are copied
/// through untouched for the tokenizer.
pub(crate) fn unescape(input: &str) -> Result<String, CharsetError> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < chars.len() {
        if chars[pos] == '\\' {
            if let Some((decoded, consumed)) = decode_escape(&chars[pos..])? {
                out.push(decoded);
                pos += consumed;
                continue;
            }
        }

        out.push(chars[pos]);
        pos += 1;
    }

    Ok(out)
}

/// Decodes the escape at the start of `rest` (which begins with `\`).
///
/// Returns the character and the number of chars consumed, or `None` when no
/// escape form matches.
fn decode_escape(rest: &[char]) -> Result<Option<(char, usize)>, CharsetError> {
    let Some(&kind) = rest.get(1) else {
        return Ok(None);
    };

    match kind {
        'U' => decode_hex(rest, 8),
        'u' => decode_hex(rest, 4),
        'x' => decode_hex(rest, 2),
        '0'..='7' => Ok(Some(decode_octal(rest))),
        'N' => decode_name(rest),
        _ => Ok(single_escape(kind).map(|c| (c, 2))),
    }
}

fn decode_hex(rest: &[char], digits: usize) -> Result<Option<(char, usize)>, CharsetError> {
    let consumed = 2 + digits;
    let Some(hex) = rest.get(2..consumed) else {
        return Ok(None);
    };

    let mut value = 0u32;
    for digit in hex {
        match digit.to_digit(16) {
            Some(d) => value = (value << 4) | d,
            None => return Ok(None),
        }
    }

    match char::from_u32(value) {
        Some(c) => Ok(Some((c, consumed))),
        None => Err(CharsetError::grammar(
            rest[..consumed].iter().collect::<String>(),
            GrammarReason::InvalidCodepoint,
        )),
    }
}

/// One to three octal digits; at most 0o777, always a valid scalar value.
fn decode_octal(rest: &[char]) -> (char, usize) {
    let mut value = 0u32;
    let mut consumed = 1;

    for digit in rest[1..].iter().take(3) {
        match digit.to_digit(8) {
            Some(d) => {
                value = (value << 3) | d;
                consumed += 1;
            }
            None => break,
        }
    }

    // 0o777 < 0xD800
    (char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER), consumed)
}

fn decode_name(rest: &[char]) -> Result<Option<(char, usize)>, CharsetError> {
    if rest.get(2) != Some(&'{') {
        return Ok(None);
    }

    let Some(close) = rest.iter().skip(3).position(|c| *c == '}').map(|i| i + 3) else {
        return Ok(None);
    };
    if close == 3 {
        return Ok(None);
    }

    let name: String = rest[3..close].iter().collect();
    match unicode_names2::character(&name.to_ascii_uppercase()) {
        Some(c) => Ok(Some((c, close + 1))),
        None => Err(CharsetError::grammar(
            rest[..=close].iter().collect::<String>(),
            GrammarReason::UnknownName,
        )),
    }
}

fn single_escape(kind: char) -> Option<char> {
    let c = match kind {
        '\\' => '\\',
        '"' => '"',
        '\'' => '\'',
        'a' => '\u{07}',
        'b' => '\u{08}',
        'f' => '\u{0C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{0B}',
        _ => return None,
    };

    Some(c)
}

/// Renders whitespace other than a plain space as escapes (`\t`, `\x0b`,
/// `\u2003`, ...), leaving every other character as is. U+001C..U+001F are
/// treated as whitespace.
pub(crate) fn escape_whitespace(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        let code = c as u32;
        match c {
            ' ' => out.push(' '),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            // Information separators count as whitespace too
            c if !c.is_whitespace() && !('\u{1C}'..='\u{1F}').contains(&c) => out.push(c),
            _ if code < 0x100 => out.push_str(&format!("\\x{:02x}", code)),
            _ if code < 0x1_0000 => out.push_str(&format!("\\u{:04x}", code)),
            _ => out.push_str(&format!("\\U{:08x}", code)),
        }
    }

    out
}
