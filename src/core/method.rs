//

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::core::error::Result;
use crate::core::value::Value;

type Body = dyn Fn(Call) -> Result<Value>;

#[derive(Clone)]
pub struct Method(Rc<Body>);

// this, arguments and the method to delegate to
pub struct Call<'a> {
    this: &'a Value,
    args: Vec<Value>,
    parent: &'a Method,
}

thread_local! {
    static NOOP: Method = Method::new(|_| Ok(Value::Undefined));
}

pub fn noop() -> Method {
    NOOP.with(Method::clone)
}

impl Method {
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(Call) -> Result<Value> + 'static,
    {
        Method(Rc::new(body))
    }

    // parent is noop
    pub fn call(&self, this: &Value, args: Vec<Value>) -> Result<Value> {
        let parent = noop();
        self.run(Call::new(this, args, &parent))
    }

    pub fn run(&self, call: Call) -> Result<Value> {
        let Self(body) = self;
        body(call)
    }

    pub fn ptr_eq(&self, other: &Method) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Method {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "Method({:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

impl<'a> Call<'a> {
    pub fn new(this: &'a Value, args: Vec<Value>, parent: &'a Method) -> Self {
        Call { this, args, parent }
    }

    pub fn this(&self) -> &'a Value {
        self.this
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    // missing arguments read as undefined
    pub fn arg(&self, index: usize) -> Value {
        self.args.get(index).cloned().unwrap_or_default()
    }

    pub fn into_args(self) -> Vec<Value> {
        self.args
    }

    pub fn parent(&self) -> &'a Method {
        self.parent
    }

    pub fn call_super(&self, args: Vec<Value>) -> Result<Value> {
        self.parent.call(self.this, args)
    }

    pub fn with_parent<'b>(self, parent: &'b Method) -> Call<'b>
    where
        'a: 'b,
    {
        Call {
            this: self.this,
            args: self.args,
            parent,
        }
    }
}
