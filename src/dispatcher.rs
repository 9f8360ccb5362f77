//! Top-level grammar dispatch: tries each alternative of `value` in turn
//! and, at the root, cross-checks the matched alternative against the
//! active [`ParsePolicy`] before accepting it.

use crate::callbacks::ParseCallbacks;
use crate::classify::is_whitespace;
use crate::cursor::Cursor;
use crate::error::Error;
use crate::literal::{advance_false, advance_null, advance_true};
use crate::number_scanner::advance_number;
use crate::policy::ParsePolicy;
use crate::string_scanner::advance_string;
use crate::structural::{advance_array, advance_object};

fn skip_whitespace(cursor: &mut Cursor) {
    while cursor.peek().is_some_and(is_whitespace) {
        cursor.bump();
    }
}

/// `value = false / null / true / object / array / number / string`
///
/// Tries every alternative at the cursor's position. A structural
/// alternative (`[` or `{`) that starts but fails to complete is a hard
/// stop: the opening delimiter commits the grammar to that branch. Any
/// other mismatch just falls through to the next alternative; if none
/// match, reports `Error::BadJsonSequence`.
pub fn advance_value(
    cursor: &mut Cursor,
    policy: ParsePolicy,
    callbacks: &mut impl ParseCallbacks,
) -> bool {
    let mut probe = *cursor;
    skip_whitespace(&mut probe);

    let matched = loop {
        if probe.peek() == Some('[') {
            break advance_array(&mut probe, policy, callbacks);
        }

        if probe.peek() == Some('{') {
            break advance_object(&mut probe, policy, callbacks);
        }

        if advance_null(&mut probe) {
            callbacks.on_null();
            break true;
        }

        if advance_true(&mut probe) {
            callbacks.on_true();
            break true;
        }

        if advance_false(&mut probe) {
            callbacks.on_false();
            break true;
        }

        if let Some(num) = advance_number(&mut probe, policy) {
            callbacks.on_number(num);
            break true;
        }

        let mut s = String::new();
        match advance_string(&mut probe, policy, &mut s) {
            Ok(true) => {
                callbacks.on_string(s);
                break true;
            }
            Ok(false) => {}
            Err(err) => {
                callbacks.on_error(err);
                return false;
            }
        }

        callbacks.on_error(Error::BadJsonSequence);
        return false;
    };

    if !matched {
        return false;
    }

    skip_whitespace(&mut probe);
    *cursor = probe;
    true
}

/// Re-scans a string, this time keeping its decoded contents, for the
/// alternative [`advance_value`] only probed for a match.
fn advance_value_string(
    cursor: &mut Cursor,
    policy: ParsePolicy,
    callbacks: &mut impl ParseCallbacks,
) -> bool {
    let mut probe = *cursor;
    let mut s = String::new();
    match advance_string(&mut probe, policy, &mut s) {
        Ok(true) => {
            callbacks.on_string(s);
            *cursor = probe;
            true
        }
        Ok(false) => false,
        Err(err) => {
            callbacks.on_error(err);
            false
        }
    }
}

/// `value`, but additionally checking the matched alternative against the
/// root-element bits of `policy`. This is the entry point `parse` drives.
pub fn advance_json(
    cursor: &mut Cursor,
    policy: ParsePolicy,
    callbacks: &mut impl ParseCallbacks,
) -> bool {
    let mut probe = *cursor;
    skip_whitespace(&mut probe);

    let matched = loop {
        if probe.peek() == Some('[') {
            if !policy.contains(ParsePolicy::ALLOW_ARRAY_ROOT_ELEMENT) {
                callbacks.on_error(Error::ForbiddenRootElement);
                return false;
            }
            break advance_array(&mut probe, policy, callbacks);
        }

        if probe.peek() == Some('{') {
            if !policy.contains(ParsePolicy::ALLOW_OBJECT_ROOT_ELEMENT) {
                callbacks.on_error(Error::ForbiddenRootElement);
                return false;
            }
            break advance_object(&mut probe, policy, callbacks);
        }

        if advance_null(&mut probe) {
            if !policy.contains(ParsePolicy::ALLOW_NULL_ROOT_ELEMENT) {
                callbacks.on_error(Error::ForbiddenRootElement);
                return false;
            }
            callbacks.on_null();
            break true;
        }

        if advance_true(&mut probe) {
            if !policy.contains(ParsePolicy::ALLOW_BOOLEAN_ROOT_ELEMENT) {
                callbacks.on_error(Error::ForbiddenRootElement);
                return false;
            }
            callbacks.on_true();
            break true;
        }

        if advance_false(&mut probe) {
            if !policy.contains(ParsePolicy::ALLOW_BOOLEAN_ROOT_ELEMENT) {
                callbacks.on_error(Error::ForbiddenRootElement);
                return false;
            }
            callbacks.on_false();
            break true;
        }

        if let Some(num) = advance_number(&mut probe, policy) {
            if !policy.contains(ParsePolicy::ALLOW_NUMBER_ROOT_ELEMENT) {
                callbacks.on_error(Error::ForbiddenRootElement);
                return false;
            }
            callbacks.on_number(num);
            break true;
        }

        // advance_value_string both matches and reports a string's
        // own scan errors; ALLOW_STRING_ROOT_ELEMENT is cross-checked
        // before trusting a match.
        let mut lookahead = probe;
        let mut discard = String::new();
        match advance_string(&mut lookahead, policy, &mut discard) {
            Ok(true) => {
                if !policy.contains(ParsePolicy::ALLOW_STRING_ROOT_ELEMENT) {
                    callbacks.on_error(Error::ForbiddenRootElement);
                    return false;
                }
                break advance_value_string(&mut probe, policy, callbacks);
            }
            Ok(false) => {}
            Err(err) => {
                callbacks.on_error(err);
                return false;
            }
        }

        callbacks.on_error(Error::BadJsonSequence);
        return false;
    };

    if !matched {
        return false;
    }

    skip_whitespace(&mut probe);
    *cursor = probe;
    true
}

/// Parses `input` under `policy`, driving `callbacks` with the recognized
/// events. Returns the number of bytes consumed from the start of `input`
/// on success, or `0` if no valid JSON text was recognized — the caller's
/// `callbacks` will already have seen the error via `on_error`.
pub fn parse(input: &str, policy: ParsePolicy, callbacks: &mut impl ParseCallbacks) -> usize {
    let mut cursor = Cursor::new(input);
    if advance_json(&mut cursor, policy, callbacks) {
        let consumed = cursor.pos();
        log::trace!("parsed {consumed} of {} input bytes", input.len());
        consumed
    } else {
        0
    }
}
