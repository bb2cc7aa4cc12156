//

use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::core::error::{Error, Result};
use crate::core::value::Value;

pub trait Prop {
    fn get_prop(&self, key: &str) -> Result<Option<Value>>;
    fn set_prop(&mut self, key: &str, value: Value) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct Object {
    props: HashMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Object {
            props: HashMap::new(),
        }
    }

    pub fn with_props<K, V, I>(props: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Object {
            props: props
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        self.props.insert(key.to_string(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.props.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(String::as_str)
    }
}

impl Prop for Object {
    fn get_prop(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.get(key).cloned())
    }

    fn set_prop(&mut self, key: &str, value: Value) -> Result<()> {
        self.insert(key, value);
        Ok(())
    }
}

// handle used as `this`
pub struct SharedObject(Rc<RefCell<Object>>);

impl SharedObject {
    pub fn new(content: Object) -> Self {
        SharedObject(Rc::new(RefCell::new(content)))
    }

    pub fn read(&self) -> Result<Ref<Object>> {
        self.0.try_borrow().map_err(|_| Error::AccessConflict)
    }

    pub fn write(&self) -> Result<RefMut<Object>> {
        self.0.try_borrow_mut().map_err(|_| Error::AccessConflict)
    }

    pub fn share(&self) -> SharedObject {
        SharedObject(Rc::clone(&self.0))
    }

    pub fn ptr_eq(&self, other: &SharedObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn get(&self, key: &str) -> Result<Value> {
        self.read()?
            .get(key)
            .cloned()
            .ok_or_else(|| Error::NoSuchProp(key.to_string()))
    }

    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        self.write()?.insert(key, value);
        Ok(())
    }

    // <name>(args) with this = self
    pub fn invoke(&self, name: &str, args: Vec<Value>) -> Result<Value> {
        // the borrow ends here so the method may touch this object again
        let method = match self.get(name)? {
            Value::Method(method) => method,
            _ => return Err(Error::NotCallable(name.to_string())),
        };
        method.call(&Value::Object(self.share()), args)
    }
}

impl Clone for SharedObject {
    fn clone(&self) -> Self {
        self.share()
    }
}

impl Debug for SharedObject {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "SharedObject({:p})", Rc::as_ptr(&self.0))
    }
}

impl Prop for SharedObject {
    fn get_prop(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read()?.get(key).cloned())
    }

    fn set_prop(&mut self, key: &str, value: Value) -> Result<()> {
        self.set(key, value)
    }
}
