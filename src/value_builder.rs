use std::collections::HashMap;

use crate::callbacks::ParseCallbacks;
use crate::error::Error;
use crate::number_scanner::Number;
use crate::value::Value;

enum Frame {
    Array(Vec<Value>),
    Object {
        map: HashMap<String, Value>,
        pending_key: Option<String>,
    },
}

/// A [`ParseCallbacks`] sink that materializes the recognizer's events into
/// a [`Value`] tree.
///
/// Structural events are strictly nested by construction (the recognizer
/// only emits `on_end_array`/`on_end_object` for the frame most recently
/// opened), so a plain stack of in-progress containers is enough — no
/// cross-checking of begin/end kinds is needed.
#[derive(Default)]
pub struct ValueBuilder {
    stack: Vec<Frame>,
    root: Option<Value>,
    error: Option<Error>,
}

impl ValueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_value(&mut self, value: Value) {
        match self.stack.last_mut() {
            None => self.root = Some(value),
            Some(Frame::Array(values)) => values.push(value),
            Some(Frame::Object { map, pending_key }) => {
                let key = pending_key.take().expect("member name precedes its value");
                map.insert(key, value);
            }
        }
    }

    /// Consumes the builder, returning the parsed root value or the first
    /// error reported to it.
    pub fn finish(self) -> Result<Value, Error> {
        match self.error {
            Some(err) => Err(err),
            None => self.root.ok_or(Error::BadJsonSequence),
        }
    }
}

impl ParseCallbacks for ValueBuilder {
    fn on_error(&mut self, err: Error) {
        if self.error.is_none() {
            log::debug!("json parse failed: {err}");
        }
        self.error.get_or_insert(err);
    }

    fn on_null(&mut self) {
        self.push_value(Value::Null);
    }

    fn on_true(&mut self) {
        self.push_value(Value::Bool(true));
    }

    fn on_false(&mut self) {
        self.push_value(Value::Bool(false));
    }

    fn on_number(&mut self, num: Number) {
        let value = match num {
            Number::Integer(n) => Value::Integer(n),
            Number::UInteger(n) => Value::UInteger(n),
            Number::Real(n) => Value::Real(n),
        };
        self.push_value(value);
    }

    fn on_string(&mut self, s: String) {
        self.push_value(Value::String(s));
    }

    fn on_member_name(&mut self, s: String) {
        match self.stack.last_mut() {
            Some(Frame::Object { pending_key, .. }) => *pending_key = Some(s),
            _ => unreachable!("on_member_name fired outside of an object frame"),
        }
    }

    fn on_begin_array(&mut self) {
        self.stack.push(Frame::Array(Vec::new()));
    }

    fn on_end_array(&mut self) {
        match self.stack.pop() {
            Some(Frame::Array(values)) => self.push_value(Value::Array(values)),
            _ => unreachable!("on_end_array without a matching on_begin_array"),
        }
    }

    fn on_begin_object(&mut self) {
        self.stack.push(Frame::Object {
            map: HashMap::new(),
            pending_key: None,
        });
    }

    fn on_end_object(&mut self) {
        match self.stack.pop() {
            Some(Frame::Object { map, .. }) => self.push_value(Value::Object(map)),
            _ => unreachable!("on_end_object without a matching on_begin_object"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::advance_json;
    use crate::policy::ParsePolicy;

    fn parse(input: &str) -> Result<Value, Error> {
        let mut builder = ValueBuilder::new();
        crate::dispatcher::parse(input, ParsePolicy::default(), &mut builder);
        builder.finish()
    }

    #[test]
    fn builds_nested_structures_from_events() {
        let v = parse(r#"{"a":[1,2,{"b":true}],"c":null}"#).unwrap();
        assert_eq!(v["a"][0], Value::from(1i64));
        assert_eq!(v["a"][2]["b"], Value::from(true));
        assert_eq!(v["c"], Value::Null);
    }

    #[test]
    fn reports_the_first_error() {
        let mut cursor = crate::cursor::Cursor::new("[1,2");
        let mut builder = ValueBuilder::new();
        let _ = advance_json(&mut cursor, ParsePolicy::default(), &mut builder);
        assert_eq!(builder.finish(), Err(Error::UnbalancedArrayBracket));
    }
}
