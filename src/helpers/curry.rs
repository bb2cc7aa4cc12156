//

use crate::core::method::{Call, Method};
use crate::core::value::Value;

// prefix is copied per call, parent passes through
pub fn curry(method: Method, context: Value, prefix: Vec<Value>) -> Method {
    Method::new(move |call| {
        let parent = call.parent();
        let mut args = prefix.clone();
        args.extend(call.into_args());
        method.run(Call::new(&context, args, parent))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::core::method::noop;
    use crate::core::object::{Object, SharedObject};

    // returns [this, ...args]
    fn echo() -> Method {
        Method::new(|call| {
            let mut seen = vec![call.this().clone()];
            seen.extend(call.into_args());
            Ok(Value::List(seen))
        })
    }

    fn strs(items: &[&str]) -> Vec<Value> {
        items.iter().map(|s| Value::from(*s)).collect()
    }

    #[test]
    fn prefix_then_suffix_with_bound_context() {
        let context = Value::from(SharedObject::new(Object::new()));
        let curried = curry(echo(), context.clone(), strs(&["a", "b"]));
        let returned = curried.call(&Value::Null, strs(&["c", "d"])).unwrap();

        let mut expected = vec![context];
        expected.extend(strs(&["a", "b", "c", "d"]));
        assert_eq!(returned, Value::List(expected));
    }

    #[test]
    fn arguments_do_not_accumulate() {
        let curried = curry(echo(), Value::Null, strs(&["a"]));
        assert_eq!(
            curried.call(&Value::Undefined, strs(&["x"])).unwrap(),
            Value::List(vec![Value::Null, Value::from("a"), Value::from("x")])
        );
        assert_eq!(
            curried.call(&Value::Undefined, strs(&["y"])).unwrap(),
            Value::List(vec![Value::Null, Value::from("a"), Value::from("y")])
        );
    }

    #[test]
    fn empty_prefix_and_suffix() {
        let curried = curry(echo(), Value::from(7), Vec::new());
        assert_eq!(
            curried.call(&Value::Null, Vec::new()).unwrap(),
            Value::List(vec![Value::from(7)])
        );
    }

    #[test]
    fn parent_is_forwarded() {
        let method = Method::new(|call| {
            assert!(!call.parent().ptr_eq(&noop()));
            call.call_super(Vec::new())
        });
        let parent = Method::new(|_| Ok(Value::from("parent")));
        let curried = curry(method, Value::Null, Vec::new());
        let returned = curried
            .run(Call::new(&Value::Null, Vec::new(), &parent))
            .unwrap();
        assert_eq!(returned, Value::from("parent"));
    }

    #[test]
    fn failure_propagates_unchanged() {
        let failing = Method::new(|call| Err(Error::Raised(call.arg(0).as_str()?.to_string())));
        let curried = curry(failing, Value::Null, strs(&["prefix"]));
        match curried.call(&Value::Null, Vec::new()) {
            Err(Error::Raised(message)) => assert_eq!(message, "prefix"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
