//! Typed convenience front-ends over the recognizer: `parse_array` and
//! `parse_object` fill an ordinary Rust collection directly, without the
//! caller building a [`crate::value::Value`] tree first.

use crate::callbacks::ParseCallbacks;
use crate::dispatcher::parse as advance_parse;
use crate::error::{Error, Result};
use crate::number_scanner::Number;
use crate::policy::ParsePolicy;

/// A type an array/object element can be filled from, covering the two
/// element kinds the front-ends support: the arithmetic family (via
/// [`Number`]) and `String`. Unmatched events are silently dropped, per
/// the front-ends' documented behavior.
pub trait FromParsedValue: Sized {
    fn from_bool(_b: bool) -> Option<Self> {
        None
    }

    fn from_number(_n: Number) -> Option<Self> {
        None
    }

    fn from_string(_s: String) -> Option<Self> {
        None
    }
}

macro_rules! impl_from_parsed_value_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl FromParsedValue for $t {
                fn from_bool(b: bool) -> Option<Self> {
                    Some(if b { 1 as $t } else { 0 as $t })
                }

                fn from_number(n: Number) -> Option<Self> {
                    Some(match n {
                        Number::Integer(v) => v as $t,
                        Number::UInteger(v) => v as $t,
                        Number::Real(v) => v as $t,
                    })
                }
            }
        )*
    };
}

impl_from_parsed_value_numeric!(i64, u64, i32, u32, i16, u16, i8, u8, f64, f32);

impl FromParsedValue for String {
    fn from_string(s: String) -> Option<Self> {
        Some(s)
    }
}

struct ArrayCollector<'a, T, C> {
    out: &'a mut C,
    error: Option<Error>,
    _marker: std::marker::PhantomData<T>,
}

impl<T: FromParsedValue, C: Extend<T>> ParseCallbacks for ArrayCollector<'_, T, C> {
    fn on_error(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }

    fn on_true(&mut self) {
        if let Some(v) = T::from_bool(true) {
            self.out.extend(std::iter::once(v));
        }
    }

    fn on_false(&mut self) {
        if let Some(v) = T::from_bool(false) {
            self.out.extend(std::iter::once(v));
        }
    }

    fn on_number(&mut self, num: Number) {
        if let Some(v) = T::from_number(num) {
            self.out.extend(std::iter::once(v));
        }
    }

    fn on_string(&mut self, s: String) {
        if let Some(v) = T::from_string(s) {
            self.out.extend(std::iter::once(v));
        }
    }
}

/// Parses a JSON array at the root, pushing each element coerced to `T`
/// into `out`. Elements whose kind doesn't match `T` (e.g. a string inside
/// a numeric array) are silently dropped, matching the source's "no matter
/// the other type" front-end behavior.
pub fn parse_array<T: FromParsedValue>(
    input: &str,
    policy: ParsePolicy,
    out: &mut impl Extend<T>,
) -> Result<usize> {
    let mut collector = ArrayCollector {
        out,
        error: None,
        _marker: std::marker::PhantomData,
    };
    let consumed = advance_parse(input, policy, &mut collector);
    match collector.error {
        Some(err) => Err(err),
        None if consumed == 0 => Err(Error::BadJsonSequence),
        None => Ok(consumed),
    }
}

struct ObjectCollector<'a, T, C> {
    out: &'a mut C,
    pending_key: Option<String>,
    error: Option<Error>,
    _marker: std::marker::PhantomData<T>,
}

impl<T: FromParsedValue, C: Extend<(String, T)>> ParseCallbacks for ObjectCollector<'_, T, C> {
    fn on_error(&mut self, err: Error) {
        self.error.get_or_insert(err);
    }

    fn on_member_name(&mut self, s: String) {
        self.pending_key = Some(s);
    }

    fn on_true(&mut self) {
        if let (Some(key), Some(v)) = (self.pending_key.take(), T::from_bool(true)) {
            self.out.extend(std::iter::once((key, v)));
        }
    }

    fn on_false(&mut self) {
        if let (Some(key), Some(v)) = (self.pending_key.take(), T::from_bool(false)) {
            self.out.extend(std::iter::once((key, v)));
        }
    }

    fn on_number(&mut self, num: Number) {
        if let (Some(key), Some(v)) = (self.pending_key.take(), T::from_number(num)) {
            self.out.extend(std::iter::once((key, v)));
        }
    }

    fn on_string(&mut self, s: String) {
        if let Some(key) = self.pending_key.take() {
            if let Some(v) = T::from_string(s) {
                self.out.extend(std::iter::once((key, v)));
            }
        }
    }
}

/// Parses a JSON object at the root, inserting each `(key, value)` pair
/// coerced to `T` into `out`. Members whose value kind doesn't match `T`
/// are silently dropped.
pub fn parse_object<T: FromParsedValue>(
    input: &str,
    policy: ParsePolicy,
    out: &mut impl Extend<(String, T)>,
) -> Result<usize> {
    let mut collector = ObjectCollector {
        out,
        pending_key: None,
        error: None,
        _marker: std::marker::PhantomData,
    };
    let consumed = advance_parse(input, policy, &mut collector);
    match collector.error {
        Some(err) => Err(err),
        None if consumed == 0 => Err(Error::BadJsonSequence),
        None => Ok(consumed),
    }
}
