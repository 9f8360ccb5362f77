use std::collections::HashMap;
use std::ops::{AddAssign, Index, IndexMut};

use crate::error::{Error, Result};
use crate::iter::ValueIter;

/// The eight-valued JSON type ladder, owning its payload inline.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    UInteger(u64),
    Real(f64),
    String(String),
    Array(Vec<Value>),
    Object(HashMap<String, Value>),
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl Value {
    pub fn empty_array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn empty_object() -> Self {
        Value::Object(HashMap::new())
    }

    /// Builds a string value from raw bytes, preserving embedded NULs.
    /// Fails if the bytes are not valid UTF-8.
    pub fn string_from_bytes(bytes: &[u8]) -> Result<Self> {
        std::str::from_utf8(bytes)
            .map(|s| Value::String(s.to_string()))
            .map_err(|_| Error::InvalidArgument)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_uinteger(&self) -> bool {
        matches!(self, Value::UInteger(_))
    }

    pub fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// 0 for null, 1 for any scalar, the element count for array/object.
    pub fn size(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Array(v) => v.len(),
            Value::Object(v) => v.len(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// 0 for null, 1 for any scalar, the backing container's capacity for
    /// array/object.
    pub fn max_size(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Array(_) | Value::Object(_) => usize::MAX,
            _ => 1,
        }
    }

    /// Resets scalars to their zero value and empties aggregates; never
    /// changes the value's kind, including for `Null`.
    pub fn clear(&mut self) {
        match self {
            Value::Null => {}
            Value::Bool(v) => *v = false,
            Value::Integer(v) => *v = 0,
            Value::UInteger(v) => *v = 0,
            Value::Real(v) => *v = 0.0,
            Value::String(v) => v.clear(),
            Value::Array(v) => v.clear(),
            Value::Object(v) => v.clear(),
        }
    }

    /// Appends `v` to an array, promoting a null value to an empty array
    /// first. Fails with `IncompatibleType` against any other kind.
    pub fn try_push_back(&mut self, v: Value) -> Result<()> {
        if self.is_null() {
            *self = Value::empty_array();
        }
        match self {
            Value::Array(arr) => {
                arr.push(v);
                Ok(())
            }
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Panicking form of [`Value::try_push_back`], kept for parity with the
    /// ergonomic indexing operators below.
    pub fn push_back(&mut self, v: Value) {
        self.try_push_back(v).expect("push_back on a non-array, non-null value");
    }

    /// Checked element access; `None` if `self` is not an array or `index`
    /// is out of range.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    /// Checked key access; `None` if `self` is not an object or the key is
    /// absent.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Mutable indexed access that promotes `Null` to an array and grows
    /// it with trailing nulls until `index` is addressable.
    pub fn get_index_mut_promoting(&mut self, index: usize) -> Result<&mut Value> {
        if self.is_null() {
            *self = Value::empty_array();
        }
        match self {
            Value::Array(arr) => {
                if index >= arr.len() {
                    arr.resize_with(index + 1, || Value::Null);
                }
                Ok(&mut arr[index])
            }
            _ => Err(Error::IncompatibleType),
        }
    }

    /// Mutable keyed access that promotes `Null` to an object and inserts
    /// a null placeholder if the key is absent.
    pub fn get_key_mut_promoting(&mut self, key: &str) -> Result<&mut Value> {
        if self.is_null() {
            *self = Value::empty_object();
        }
        match self {
            Value::Object(map) => Ok(map.entry(key.to_string()).or_insert(Value::Null)),
            _ => Err(Error::IncompatibleType),
        }
    }

    pub fn iter(&self) -> ValueIter<'_> {
        ValueIter::new(self)
    }
}

/// `get<T>()`: documented cross-type coercions, per §4.10.
pub trait Coerce<T> {
    fn get(&self) -> Result<T>;
}

impl Coerce<bool> for Value {
    fn get(&self) -> Result<bool> {
        match self {
            Value::Bool(v) => Ok(*v),
            Value::Integer(v) => Ok(*v != 0),
            Value::UInteger(v) => Ok(*v != 0),
            Value::Real(v) => Ok(*v != 0.0),
            _ => Err(Error::TypeCast),
        }
    }
}

macro_rules! impl_coerce_numeric {
    ($t:ty) => {
        impl Coerce<$t> for Value {
            fn get(&self) -> Result<$t> {
                match self {
                    Value::Bool(v) => Ok(if *v { 1 as $t } else { 0 as $t }),
                    Value::Integer(v) => Ok(*v as $t),
                    Value::UInteger(v) => Ok(*v as $t),
                    Value::Real(v) => Ok(*v as $t),
                    _ => Err(Error::TypeCast),
                }
            }
        }
    };
}

impl_coerce_numeric!(i64);
impl_coerce_numeric!(u64);
impl_coerce_numeric!(i32);
impl_coerce_numeric!(u32);
impl_coerce_numeric!(f64);
impl_coerce_numeric!(f32);

impl Coerce<String> for Value {
    fn get(&self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s.clone()),
            Value::Bool(v) => Ok(if *v { "true".to_string() } else { "false".to_string() }),
            Value::Integer(v) => Ok(v.to_string()),
            Value::UInteger(v) => Ok(v.to_string()),
            Value::Real(v) => Ok(v.to_string()),
            _ => Err(Error::TypeCast),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInteger(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Panics (documented, not UB) if `self` is not an array or `index`
    /// is out of range; use [`Value::get_index`] to check first.
    fn index(&self, index: usize) -> &Value {
        self.get_index(index)
            .expect("index out of range or value is not an array")
    }
}

impl IndexMut<usize> for Value {
    fn index_mut(&mut self, index: usize) -> &mut Value {
        self.get_index_mut_promoting(index)
            .expect("incompatible type: value is neither null nor an array")
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Panics (documented, not UB) if `self` is not an object or the key
    /// is absent; use [`Value::get_key`] to check first.
    fn index(&self, key: &str) -> &Value {
        self.get_key(key).expect("key absent or value is not an object")
    }
}

impl IndexMut<&str> for Value {
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.get_key_mut_promoting(key)
            .expect("incompatible type: value is neither null nor an object")
    }
}

impl AddAssign<Value> for Value {
    fn add_assign(&mut self, rhs: Value) {
        self.push_back(rhs);
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (String(a), String(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Object(a), Object(b)) => a == b,

            (Integer(a), Integer(b)) => a == b,
            (UInteger(a), UInteger(b)) => a == b,
            (Real(a), Real(b)) => a == b,

            (Integer(a), UInteger(b)) | (UInteger(b), Integer(a)) => {
                *a >= 0 && (*a as u64) == *b
            }
            (Integer(a), Real(b)) | (Real(b), Integer(a)) => (*a as f64) == *b,
            (UInteger(a), Real(b)) | (Real(b), UInteger(a)) => (*a as f64) == *b,

            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_value_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn promoting_index_write_builds_array_from_null() {
        let mut v = Value::Null;
        v[0] = Value::from(1i64);
        assert!(v.is_array());
        assert_eq!(v[0], Value::from(1i64));
    }

    #[test]
    fn promoting_key_write_builds_object_from_null() {
        let mut v = Value::Null;
        v["a"] = Value::from("hi");
        assert!(v.is_object());
        assert_eq!(v["a"], Value::from("hi"));
    }

    #[test]
    fn mixed_writes_build_nested_structures() {
        let mut v = Value::Null;
        v["list"][2] = Value::from(true);
        assert_eq!(v["list"].size(), 3);
        assert_eq!(v["list"][0], Value::Null);
        assert_eq!(v["list"][2], Value::from(true));
    }

    #[test]
    fn clear_resets_scalars_but_keeps_kind() {
        let mut v = Value::from(5i64);
        v.clear();
        assert!(v.is_integer());
        assert_eq!(v, Value::from(0i64));

        let mut s = Value::from("hi");
        s.clear();
        assert_eq!(s, Value::from(""));
    }

    #[test]
    fn size_matches_kind_dependent_rules() {
        assert_eq!(Value::Null.size(), 0);
        assert_eq!(Value::from(1i64).size(), 1);
        assert_eq!(Value::Array(vec![Value::Null, Value::Null]).size(), 2);
    }

    #[test]
    fn get_string_of_numeric_matches_to_string() {
        let v = Value::from(42i64);
        let s: String = v.get().unwrap();
        assert_eq!(s, "42");
    }

    #[test]
    fn get_bool_of_string_is_type_cast_error() {
        let v = Value::from("nope");
        let r: Result<bool> = v.get();
        assert_eq!(r, Err(Error::TypeCast));
    }

    #[test]
    fn numeric_equality_crosses_kind_boundaries() {
        assert_eq!(Value::from(1i64), Value::from(1u64));
        assert_eq!(Value::from(1i64), Value::from(1.0f64));
        assert_ne!(Value::from(-1i64), Value::from(1u64));
        assert_eq!(Value::Null, Value::Null);
    }

    #[test]
    fn deep_equality_for_arrays_and_objects() {
        let mut a = Value::empty_object();
        a["x"] = Value::Array(vec![Value::from(1i64), Value::from(2i64)]);
        let mut b = Value::empty_object();
        b["x"] = Value::Array(vec![Value::from(1i64), Value::from(2i64)]);
        assert_eq!(a, b);
    }

    #[test]
    fn push_back_and_add_assign_append_to_array() {
        let mut v = Value::empty_array();
        v.push_back(Value::from(1i64));
        v += Value::from(2i64);
        assert_eq!(v, Value::Array(vec![Value::from(1i64), Value::from(2i64)]));
    }

    #[test]
    #[should_panic]
    fn push_back_on_a_string_panics() {
        let mut v = Value::from("x");
        v.push_back(Value::Null);
    }
}
