use crate::classify::is_hexdigit;
use crate::cursor::Cursor;

/// Consumes the four-character lowercase literal `null`.
pub fn advance_null(cursor: &mut Cursor) -> bool {
    advance_literal(cursor, "null")
}

/// Consumes the four-character lowercase literal `true`.
pub fn advance_true(cursor: &mut Cursor) -> bool {
    advance_literal(cursor, "true")
}

/// Consumes the five-character lowercase literal `false`.
pub fn advance_false(cursor: &mut Cursor) -> bool {
    advance_literal(cursor, "false")
}

fn advance_literal(cursor: &mut Cursor, literal: &str) -> bool {
    let mut probe = *cursor;
    if probe.eat_str(literal) {
        *cursor = probe;
        true
    } else {
        false
    }
}

/// Reads exactly four hex digits and returns their value in `[0, 0x10000)`.
///
/// Fails without advancing `cursor` if fewer than four hex digits are
/// available or a non-hex character appears within the first four.
pub fn advance_encoded_char(cursor: &mut Cursor) -> Option<u32> {
    let mut probe = *cursor;
    let mut value: u32 = 0;

    for _ in 0..4 {
        let c = probe.bump()?;
        if !is_hexdigit(c) {
            return None;
        }
        value = value * 16 + c.to_digit(16).unwrap();
    }

    *cursor = probe;
    Some(value)
}
