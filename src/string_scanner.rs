use crate::classify::is_quotation_mark;
use crate::cursor::Cursor;
use crate::error::{Error, Result};
use crate::literal::advance_encoded_char;
use crate::policy::ParsePolicy;

/// Consumes a grammar-conformant JSON string, pushing decoded characters
/// into `output`.
///
/// Returns `Ok(false)` without advancing `cursor` if the input does not
/// begin with a quotation mark permitted by `policy` — this is a
/// recoverable mismatch, not an error, so callers can try another
/// alternative. Returns `Ok(true)` on a fully-scanned string. Returns
/// `Err` for a malformed string once the opening quote has committed us to
/// this alternative.
pub fn advance_string(
    cursor: &mut Cursor,
    policy: ParsePolicy,
    output: &mut impl Extend<char>,
) -> Result<bool> {
    let mut probe = *cursor;

    let Some(quote) = probe.peek() else {
        return Ok(false);
    };
    if !is_quotation_mark(quote, policy) {
        return Ok(false);
    }
    probe.bump();

    loop {
        let Some(c) = probe.peek() else {
            return Err(Error::UnbalancedQuote);
        };

        if c == quote {
            probe.bump();
            break;
        }

        if c == '\\' {
            probe.bump();
            let Some(escape_type) = probe.bump() else {
                return Err(Error::UnbalancedQuote);
            };

            match escape_type {
                '"' | '\\' | '/' => output.extend([escape_type]),
                'b' => output.extend(['\u{0008}']),
                'f' => output.extend(['\u{000C}']),
                'n' => output.extend(['\n']),
                'r' => output.extend(['\r']),
                't' => output.extend(['\t']),
                '\'' if quote == '\'' => output.extend(['\'']),
                'u' => {
                    let Some(unit) = advance_encoded_char(&mut probe) else {
                        return Err(Error::BadEncodedChar);
                    };
                    output.extend([decode_code_unit(unit, &mut probe)]);
                }
                _ => {
                    if policy.contains(ParsePolicy::ALLOW_ANY_CHAR_ESCAPED) {
                        output.extend([escape_type]);
                    } else {
                        return Err(Error::BadEscapedChar);
                    }
                }
            }
        } else {
            probe.bump();
            output.extend([c]);
        }
    }

    *cursor = probe;
    Ok(true)
}

/// Turns a decoded `\uXXXX` code unit into a `char`.
///
/// A lone high surrogate looks ahead (consuming from `probe` on success)
/// for a matching low surrogate to combine into one scalar value; an
/// unpaired surrogate of either kind becomes U+FFFD, since `char` cannot
/// represent it directly.
fn decode_code_unit(unit: u32, probe: &mut Cursor) -> char {
    const REPLACEMENT: char = '\u{FFFD}';

    if !(0xD800..=0xDBFF).contains(&unit) {
        return char::from_u32(unit).unwrap_or(REPLACEMENT);
    }

    let mut lookahead = *probe;
    if lookahead.eat_str("\\u") {
        if let Some(low) = advance_encoded_char(&mut lookahead) {
            if (0xDC00..=0xDFFF).contains(&low) {
                let scalar = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                if let Some(c) = char::from_u32(scalar) {
                    *probe = lookahead;
                    return c;
                }
            }
        }
    }

    REPLACEMENT
}
