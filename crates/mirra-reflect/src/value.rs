//! Dynamic property values
//!
//! Reflective extraction erases the static type of each property into a
//! tagged [`Value`]. The common primitive shapes get dedicated variants;
//! everything else rides in [`Value::Opaque`] with a safe downcast. The
//! boundary is inherently type-unsafe; callers that need static typing
//! should read fields directly instead of going through a map.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::ser::{Serialize, Serializer};

/// A dynamically typed property value.
///
/// `Null` doubles as the representation of an absent value: `Option::None`
/// converts to `Null`, and the not-null map variants drop `Null` entries.
#[derive(Clone)]
pub enum Value {
    /// Absent value
    Null,

    /// Boolean
    Bool(bool),

    /// Signed integer (all integer widths widen to i64)
    Int(i64),

    /// Floating point number
    Float(f64),

    /// Owned string
    Str(String),

    /// Any other value, reachable via [`Value::downcast_ref`]
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl Value {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a null value
    pub const fn null() -> Self {
        Value::Null
    }

    /// Create a boolean value
    pub const fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub const fn int(i: i64) -> Self {
        Value::Int(i)
    }

    /// Create a float value
    pub const fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Wrap an arbitrary value
    pub fn opaque<T: Any + Send + Sync>(v: T) -> Self {
        Value::Opaque(Arc::new(v))
    }

    // ========================================================================
    // Type checks
    // ========================================================================

    /// Check if the value is null
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if the value is a boolean
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Check if the value is an integer
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Check if the value is a float
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Check if the value is a string
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Check if the value is an opaque wrapper
    pub const fn is_opaque(&self) -> bool {
        matches!(self, Value::Opaque(_))
    }

    // ========================================================================
    // Extractors
    // ========================================================================

    /// Extract a boolean
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract an integer
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract a float
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Downcast an opaque value to a concrete type
    pub fn downcast_ref<T: Any + Send + Sync>(&self) -> Option<&T> {
        match self {
            Value::Opaque(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Get the variant name for diagnostics
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Lower to a `serde_json::Value`.
    ///
    /// Non-finite floats and opaque values lower to JSON null.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::Str(s) => serde_json::Value::String(s.clone()),
            Value::Opaque(_) => serde_json::Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            // Opaque values compare by identity of the wrapped allocation
            (Value::Opaque(a), Value::Opaque(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

// Manual impl: the opaque payload has no Debug bound.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Value::Null"),
            Value::Bool(b) => write!(f, "Value::Bool({})", b),
            Value::Int(i) => write!(f, "Value::Int({})", i),
            Value::Float(x) => write!(f, "Value::Float({})", x),
            Value::Str(s) => write!(f, "Value::Str({:?})", s),
            Value::Opaque(_) => write!(f, "Value::Opaque(..)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => write!(f, "{}", s),
            Value::Opaque(_) => write!(f, "<opaque>"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            // No portable representation; serialized as null
            Value::Opaque(_) => serializer.serialize_unit(),
        }
    }
}

/// Conversion of a field value into a [`Value`].
///
/// Implemented for the primitive shapes, strings, `char`, and `Option`.
/// Custom field types opt in by implementing this trait; the usual escape
/// hatch is `Value::opaque(self)`.
pub trait IntoValue {
    /// Consume self and produce the erased value
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! impl_into_value_int {
    ($($t:ty),* $(,)?) => {$(
        impl IntoValue for $t {
            fn into_value(self) -> Value {
                Value::Int(self as i64)
            }
        }
    )*};
}

impl_into_value_int!(i8, i16, i32, i64, isize, u8, u16, u32);

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::Float(self as f64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::Str(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::Str(self.to_string())
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null() {
        let v = Value::null();
        assert!(v.is_null());
        assert!(!v.is_int());
        assert_eq!(v, Value::default());
    }

    #[test]
    fn test_bool() {
        let t = Value::bool(true);
        assert_eq!(t.as_bool(), Some(true));
        assert!(t.is_bool());
        assert!(!t.is_null());
    }

    #[test]
    fn test_int() {
        let v = Value::int(42);
        assert_eq!(v.as_int(), Some(42));
        assert_eq!(v.as_float(), None);
        assert_eq!(v.type_name(), "int");
    }

    #[test]
    fn test_string() {
        let v = Value::string("ann");
        assert_eq!(v.as_str(), Some("ann"));
        assert_eq!(v.to_string(), "ann");
    }

    #[test]
    fn test_opaque_downcast() {
        #[derive(Debug, PartialEq)]
        struct Marker(u32);

        let v = Value::opaque(Marker(7));
        assert!(v.is_opaque());
        assert_eq!(v.downcast_ref::<Marker>(), Some(&Marker(7)));
        assert!(v.downcast_ref::<String>().is_none());
    }

    #[test]
    fn test_opaque_identity_equality() {
        let a = Value::opaque(vec![1u8, 2, 3]);
        let b = a.clone();
        let c = Value::opaque(vec![1u8, 2, 3]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_into_value_widths() {
        assert_eq!(7u8.into_value(), Value::Int(7));
        assert_eq!((-7i32).into_value(), Value::Int(-7));
        assert_eq!(1.5f32.into_value(), Value::Float(1.5));
        assert_eq!('x'.into_value(), Value::string("x"));
    }

    #[test]
    fn test_option_into_value() {
        let some: Option<i32> = Some(3);
        let none: Option<i32> = None;
        assert_eq!(some.into_value(), Value::Int(3));
        assert!(none.into_value().is_null());
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Value::null().to_json(), serde_json::Value::Null);
        assert_eq!(Value::int(1).to_json(), serde_json::json!(1));
        assert_eq!(Value::string("a").to_json(), serde_json::json!("a"));
        assert_eq!(Value::float(f64::NAN).to_json(), serde_json::Value::Null);
        assert_eq!(Value::opaque(()).to_json(), serde_json::Value::Null);
    }
}
