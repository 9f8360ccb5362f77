use crate::callbacks::ParseCallbacks;
use crate::classify::is_whitespace;
use crate::cursor::Cursor;
use crate::dispatcher::advance_value;
use crate::error::Error;
use crate::policy::ParsePolicy;
use crate::string_scanner::advance_string;

fn skip_whitespace(cursor: &mut Cursor) {
    while cursor.peek().is_some_and(is_whitespace) {
        cursor.bump();
    }
}

/// Consumes optional whitespace, one delimiter character, and optional
/// whitespace. Succeeds iff the delimiter is present.
fn advance_delimiter(cursor: &mut Cursor, delimiter: char) -> bool {
    let mut probe = *cursor;
    skip_whitespace(&mut probe);
    if !probe.eat_char(delimiter) {
        return false;
    }
    skip_whitespace(&mut probe);
    *cursor = probe;
    true
}

pub fn advance_begin_array(cursor: &mut Cursor) -> bool {
    advance_delimiter(cursor, '[')
}

pub fn advance_end_array(cursor: &mut Cursor) -> bool {
    advance_delimiter(cursor, ']')
}

pub fn advance_begin_object(cursor: &mut Cursor) -> bool {
    advance_delimiter(cursor, '{')
}

pub fn advance_end_object(cursor: &mut Cursor) -> bool {
    advance_delimiter(cursor, '}')
}

pub fn advance_name_separator(cursor: &mut Cursor) -> bool {
    advance_delimiter(cursor, ':')
}

pub fn advance_value_separator(cursor: &mut Cursor) -> bool {
    advance_delimiter(cursor, ',')
}

/// `array = begin-array [ value *( value-separator value ) ] end-array`
///
/// Like the rest of the recognizer, failure is reported to `callbacks` at
/// the point it is detected and this function simply returns `false`; the
/// caller (`advance_value`) decides whether a failed array is a hard stop
/// or just a reason to try the next alternative.
pub fn advance_array(
    cursor: &mut Cursor,
    policy: ParsePolicy,
    callbacks: &mut impl ParseCallbacks,
) -> bool {
    let mut probe = *cursor;
    if !advance_begin_array(&mut probe) {
        return false;
    }

    callbacks.on_begin_array();

    if advance_end_array(&mut probe) {
        callbacks.on_end_array();
    } else {
        loop {
            if !advance_value(&mut probe, policy, callbacks) {
                return false;
            }
            if !advance_value_separator(&mut probe) {
                break;
            }
        }

        if !advance_end_array(&mut probe) {
            callbacks.on_error(Error::UnbalancedArrayBracket);
            return false;
        }

        callbacks.on_end_array();
    }

    *cursor = probe;
    true
}

/// `member = string name-separator value`, emitting `on_member_name`
/// after the name and separator are accepted and before the value.
fn advance_member(
    cursor: &mut Cursor,
    policy: ParsePolicy,
    callbacks: &mut impl ParseCallbacks,
) -> bool {
    let mut probe = *cursor;
    let mut name = String::new();

    match advance_string(&mut probe, policy, &mut name) {
        Ok(true) => {}
        Ok(false) => {
            callbacks.on_error(Error::BadMemberName);
            return false;
        }
        Err(err) => {
            callbacks.on_error(err);
            return false;
        }
    }

    if name.is_empty() {
        callbacks.on_error(Error::BadMemberName);
        return false;
    }

    if !advance_name_separator(&mut probe) {
        return false;
    }

    callbacks.on_member_name(name);

    if !advance_value(&mut probe, policy, callbacks) {
        return false;
    }

    *cursor = probe;
    true
}

/// `object = begin-object [ member *( value-separator member ) ] end-object`
pub fn advance_object(
    cursor: &mut Cursor,
    policy: ParsePolicy,
    callbacks: &mut impl ParseCallbacks,
) -> bool {
    let mut probe = *cursor;
    if !advance_begin_object(&mut probe) {
        return false;
    }

    callbacks.on_begin_object();

    if advance_end_object(&mut probe) {
        callbacks.on_end_object();
    } else {
        loop {
            if !advance_member(&mut probe, policy, callbacks) {
                return false;
            }
            if !advance_value_separator(&mut probe) {
                break;
            }
        }

        if !advance_end_object(&mut probe) {
            callbacks.on_error(Error::UnbalancedObjectBracket);
            return false;
        }

        callbacks.on_end_object();
    }

    *cursor = probe;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use crate::value_builder::ValueBuilder;

    fn parse_array_into_value(input: &str) -> Result<Value, Error> {
        let mut cursor = Cursor::new(input);
        let mut builder = ValueBuilder::new();
        advance_array(&mut cursor, ParsePolicy::STRICT, &mut builder);
        builder.finish()
    }

    #[test]
    fn empty_array_round_trips() {
        assert_eq!(parse_array_into_value("[]").unwrap(), Value::empty_array());
    }

    #[test]
    fn missing_end_bracket_is_unbalanced_array_bracket() {
        assert_eq!(
            parse_array_into_value("[1,2"),
            Err(Error::UnbalancedArrayBracket)
        );
    }

    #[test]
    fn empty_member_name_is_bad_member_name() {
        let mut cursor = Cursor::new(r#"{"":1}"#);
        let mut builder = ValueBuilder::new();
        advance_object(&mut cursor, ParsePolicy::STRICT, &mut builder);
        assert_eq!(builder.finish(), Err(Error::BadMemberName));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let mut cursor = Cursor::new(r#"{"a":1,"a":2}"#);
        let mut builder = ValueBuilder::new();
        advance_object(&mut cursor, ParsePolicy::STRICT, &mut builder);
        let v = builder.finish().unwrap();
        assert_eq!(v["a"], Value::from(2i64));
    }

    #[test]
    fn missing_end_brace_is_unbalanced_object_bracket() {
        let mut cursor = Cursor::new(r#"{"a":1"#);
        let mut builder = ValueBuilder::new();
        advance_object(&mut cursor, ParsePolicy::STRICT, &mut builder);
        assert_eq!(builder.finish(), Err(Error::UnbalancedObjectBracket));
    }
}
