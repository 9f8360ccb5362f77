use std::collections::HashMap;
use std::fmt::Write;

use crate::value::Value;

/// Layout knobs for [`Stringifier::run`]. The default (`indent: None`,
/// `space_after_colon: false`) produces the most compact rendering.
#[derive(Debug, Default, Clone)]
pub struct StringifyOptions {
    pub indent: Option<String>,
    pub space_after_colon: bool,
}

/// Single-pass `Value -> String` renderer; the textual inverse of the
/// recognizer's string scanner and number scanner.
pub struct Stringifier {
    output: String,
    options: StringifyOptions,
    current_indent_level: usize,
}

impl Stringifier {
    pub fn new(options: StringifyOptions) -> Self {
        Self {
            output: String::new(),
            options,
            current_indent_level: 0,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn run(value: &Value, options: StringifyOptions) -> String {
        let mut inst = Self::new(options);
        inst.add_value(value);
        inst.finish()
    }

    fn add_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.add_null(),
            Value::Bool(v) => self.add_bool(*v),
            Value::Integer(v) => self.add_integer(*v),
            Value::UInteger(v) => self.add_uinteger(*v),
            Value::Real(v) => self.add_real(*v),
            Value::String(s) => self.add_string(s.as_str()),
            Value::Object(obj) => self.add_object(obj),
            Value::Array(values) => self.add_array(values),
        }
    }

    fn add_indent(&mut self) {
        if let Some(i) = self.options.indent.as_ref() {
            self.output.push('\n');
            for _ in 0..self.current_indent_level {
                self.output.push_str(i.as_str());
            }
        }
    }

    fn add_null(&mut self) {
        self.output.push_str("null");
    }

    fn add_bool(&mut self, v: bool) {
        self.output.push_str(if v { "true" } else { "false" });
    }

    fn add_integer(&mut self, v: i64) {
        write!(self.output, "{v}").unwrap();
    }

    fn add_uinteger(&mut self, v: u64) {
        write!(self.output, "{v}").unwrap();
    }

    fn add_real(&mut self, v: f64) {
        write!(self.output, "{v}").unwrap();
    }

    /// The exact inverse of the recognizer's string-escape table, plus
    /// `\u00XX` escaping of any other control character.
    fn add_string(&mut self, s: &str) {
        self.output.reserve(s.len() + 2);
        self.output.push('"');

        for c in s.chars() {
            if (c as u32) >= 0x20 && c != '"' && c != '\\' {
                self.output.push(c);
            } else {
                match c {
                    '"' | '\\' => {
                        self.output.push('\\');
                        self.output.push(c);
                    }
                    '\u{0008}' => self.output.push_str("\\b"),
                    '\u{000C}' => self.output.push_str("\\f"),
                    '\n' => self.output.push_str("\\n"),
                    '\r' => self.output.push_str("\\r"),
                    '\t' => self.output.push_str("\\t"),
                    _ => write!(self.output, "\\u00{:02X}", c as u32 as u8).unwrap(),
                }
            }
        }

        self.output.push('"');
    }

    fn add_object_start(&mut self) {
        self.output.push('{');
        self.current_indent_level += 1;
    }

    fn add_object_field_key(&mut self, key: &str, first: bool) {
        if !first {
            self.output.push(',');
        }

        self.add_indent();
        self.add_string(key);
        self.output.push(':');
        if self.options.space_after_colon {
            self.output.push(' ');
        }
    }

    fn add_object_end(&mut self, was_empty: bool) {
        self.current_indent_level -= 1;
        if !was_empty {
            self.add_indent();
        }

        self.output.push('}');
    }

    fn add_object(&mut self, obj: &HashMap<String, Value>) {
        self.add_object_start();

        let mut first = true;
        for (key, value) in obj.iter() {
            self.add_object_field_key(key.as_str(), first);
            self.add_value(value);
            first = false;
        }

        self.add_object_end(obj.is_empty());
    }

    fn add_array_start(&mut self) {
        self.output.push('[');
        self.current_indent_level += 1;
    }

    fn add_array_before_element(&mut self, first: bool) {
        if !first {
            self.output.push(',');
        }

        self.add_indent();
    }

    fn add_array_end(&mut self, was_empty: bool) {
        self.current_indent_level -= 1;
        if !was_empty {
            self.add_indent();
        }

        self.output.push(']');
    }

    fn add_array(&mut self, values: &[Value]) {
        self.add_array_start();

        let mut first = true;
        for value in values {
            self.add_array_before_element(first);
            self.add_value(value);
            first = false;
        }

        self.add_array_end(values.is_empty());
    }
}

/// Renders `value` with a two-space indent and a space after each `:`.
pub fn pretty_stringify(value: &Value) -> String {
    Stringifier::run(
        value,
        StringifyOptions {
            indent: Some("  ".to_string()),
            space_after_colon: true,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_rendering_has_no_whitespace() {
        let v = Value::Array(vec![Value::from(1i64), Value::from(true), Value::Null]);
        assert_eq!(
            Stringifier::run(&v, StringifyOptions::default()),
            "[1,true,null]"
        );
    }

    #[test]
    fn pretty_rendering_indents_nested_containers() {
        let mut v = Value::empty_object();
        v["a"] = Value::from(1i64);
        let rendered = pretty_stringify(&v);
        assert_eq!(rendered, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn empty_containers_render_without_interior_whitespace() {
        assert_eq!(pretty_stringify(&Value::empty_array()), "[]");
        assert_eq!(pretty_stringify(&Value::empty_object()), "{}");
    }

    #[test]
    fn string_escaping_round_trips_through_the_scanner() {
        let mut s = String::new();
        s.push('"');
        s.push('\\');
        s.push('\n');
        s.push('\u{0008}');
        let v = Value::String(s);
        let rendered = Stringifier::run(&v, StringifyOptions::default());
        assert_eq!(rendered, r#""\"\\\n\b""#);
    }

    #[test]
    fn control_character_without_a_short_escape_uses_u00xx() {
        let v = Value::String("\u{0001}".to_string());
        assert_eq!(
            Stringifier::run(&v, StringifyOptions::default()),
            "\"\\u0001\""
        );
    }
}
