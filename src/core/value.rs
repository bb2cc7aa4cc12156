//

use crate::core::error::{Error, Result};
use crate::core::method::Method;
use crate::core::object::SharedObject;

#[derive(Clone, Debug)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<Value>),
    Method(Method),
    Object(SharedObject),
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Method(_) => "method",
            Value::Object(_) => "object",
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(i) => *i != 0,
            Value::Str(s) => !s.is_empty(),
            Value::List(_) | Value::Method(_) | Value::Object(_) => true,
        }
    }

    pub fn is_callable(&self) -> bool {
        match self {
            Value::Method(_) => true,
            _ => false,
        }
    }

    pub fn is_undefined(&self) -> bool {
        match self {
            Value::Undefined => true,
            _ => false,
        }
    }

    pub fn as_int(&self) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            other => Err(other.mismatch("int")),
        }
    }

    pub fn as_str(&self) -> Result<&str> {
        match self {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch("string")),
        }
    }

    pub fn as_method(&self) -> Option<&Method> {
        match self {
            Value::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Result<&SharedObject> {
        match self {
            Value::Object(object) => Ok(object),
            other => Err(other.mismatch("object")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            actual: self.type_name(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Undefined
    }
}

// methods and objects compare by identity
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Method(a), Value::Method(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Method> for Value {
    fn from(method: Method) -> Self {
        Value::Method(method)
    }
}

impl From<SharedObject> for Value {
    fn from(object: SharedObject) -> Self {
        Value::Object(object)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Undefined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::object::Object;

    #[test]
    fn falsy_values() {
        let falsy = vec![
            Value::Undefined,
            Value::Null,
            Value::from(false),
            Value::from(0),
            Value::from(""),
        ];
        for value in falsy {
            assert!(!value.is_truthy(), "{:?} should be falsy", value);
        }
        assert!(Value::from(1).is_truthy());
        assert!(Value::from("true").is_truthy());
        assert!(Value::List(Vec::new()).is_truthy());
    }

    #[test]
    fn accessor_reports_mismatch() {
        match Value::from("42").as_int() {
            Err(Error::TypeMismatch { expected, actual }) => {
                assert_eq!(expected, "int");
                assert_eq!(actual, "string");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(Value::from(42).as_int().unwrap(), 42);
    }

    #[test]
    fn objects_compare_by_identity() {
        let o0 = SharedObject::new(Object::new());
        let o1 = SharedObject::new(Object::new());
        assert_eq!(Value::from(o0.share()), Value::from(o0));
        assert_ne!(
            Value::from(o1),
            Value::from(SharedObject::new(Object::new()))
        );
    }
}
