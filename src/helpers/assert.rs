//

use crate::core::error::{Error, Result};
use crate::core::value::Value;

// only `true` itself passes
pub fn assert<V: Into<Value>>(message: &str, condition: V) -> Result<()> {
    match condition.into() {
        Value::Bool(true) => Ok(()),
        _ => Err(Error::AssertionFailure(message.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_passes() {
        assert!(assert("never shown", true).is_ok());
        assert!(assert("never shown", Value::Bool(true)).is_ok());
    }

    #[test]
    fn anything_else_fails_with_message() {
        let values = vec![
            Value::from(false),
            Value::from(0),
            Value::from(""),
            Value::Null,
            Value::Undefined,
            Value::from(1),
            Value::from("true"),
        ];
        for value in values {
            match assert("expected true", value.clone()) {
                Err(Error::AssertionFailure(message)) => assert_eq!(message, "expected true"),
                other => panic!("{:?} gave {:?}", value, other),
            }
        }
    }
}
