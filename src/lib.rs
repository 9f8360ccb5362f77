//! A policy-driven JSON grammar recognizer paired with a typed value model.
//!
//! [`parse`] drives a [`ParseCallbacks`] sink over a JSON text; [`ValueBuilder`]
//! is the sink that materializes a [`Value`] tree, and [`parse_value`] wires
//! the two together as the common case. [`parse_array`] and [`parse_object`]
//! skip the `Value` tree entirely when the caller already knows the element
//! type. [`Stringifier`] renders a `Value` back to text.

mod callbacks;
mod classify;
mod cursor;
mod dispatcher;
mod error;
mod iter;
mod literal;
mod number_scanner;
mod policy;
mod string_scanner;
mod stringifier;
mod structural;
mod typed;
mod value;
mod value_builder;

pub use callbacks::{NullCallbacks, ParseCallbacks};
pub use cursor::Cursor;
pub use dispatcher::{advance_json, advance_value, parse};
pub use error::{Error, Result};
pub use iter::ValueIter;
pub use number_scanner::{advance_number, Number};
pub use policy::ParsePolicy;
pub use stringifier::{pretty_stringify, Stringifier, StringifyOptions};
pub use typed::{parse_array, parse_object, FromParsedValue};
pub use value::{Coerce, Value};
pub use value_builder::ValueBuilder;

/// Parses `input` under `policy` into a single [`Value`] tree.
///
/// This is [`parse`] driving a [`ValueBuilder`], surfaced as a `Result` for
/// ordinary `?`-based call sites.
pub fn parse_value(input: &str, policy: ParsePolicy) -> Result<Value> {
    let mut builder = ValueBuilder::new();
    parse(input, policy, &mut builder);
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_round_trips_through_the_stringifier() {
        let v = parse_value(r#"{"a":[1,2,3]}"#, ParsePolicy::default()).unwrap();
        let rendered = Stringifier::run(&v, StringifyOptions::default());
        let reparsed = parse_value(&rendered, ParsePolicy::default()).unwrap();
        assert_eq!(v, reparsed);
    }
}
