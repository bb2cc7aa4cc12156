//

use log::{debug, trace};

use crate::core::error::{Error, Result};
use crate::core::method::{noop, Method};
use crate::core::object::Prop;
use crate::core::value::Value;
use crate::helpers::assert::assert;

pub const DECORATION_NOT_CALLABLE: &str = "decoration value must be callable";

// absent or falsy previous value -> noop
pub fn decorate_method<T>(target: &mut T, name: &str, replacement: Method) -> Result<()>
where
    T: Prop + ?Sized,
{
    let previous = match target.get_prop(name)? {
        Some(Value::Method(method)) => method,
        Some(ref value) if value.is_truthy() => not_callable(name),
        _ => noop(),
    };
    debug!("decorate method '{}'", name);

    let method_name = name.to_string();
    let wrapper = Method::new(move |call| {
        trace!("dispatch decorated method '{}'", method_name);
        replacement.run(call.with_parent(&previous))
    });
    target.set_prop(name, Value::Method(wrapper))
}

fn not_callable(name: &str) -> Method {
    let name = name.to_string();
    Method::new(move |_| Err(Error::NotCallable(name.clone())))
}

#[derive(Debug, Clone)]
pub struct Decoration {
    group: String,
    name: String,
    value: Value,
}

impl Decoration {
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}

// (group, name, value) in insertion order
#[derive(Debug, Clone, Default)]
pub struct Decorations {
    entries: Vec<Decoration>,
}

impl Decorations {
    pub fn new() -> Self {
        Decorations {
            entries: Vec::new(),
        }
    }

    pub fn group<N, V, I>(mut self, group: &str, methods: I) -> Self
    where
        N: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (N, V)>,
    {
        for (name, value) in methods {
            self.push(group, name, value);
        }
        self
    }

    pub fn push<N, V>(&mut self, group: &str, name: N, value: V)
    where
        N: Into<String>,
        V: Into<Value>,
    {
        self.entries.push(Decoration {
            group: group.to_string(),
            name: name.into(),
            value: value.into(),
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decoration> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// entries before a rejected one stay installed
pub fn decorate_object<'a, T>(target: &'a mut T, decorations: &Decorations) -> Result<&'a mut T>
where
    T: Prop + ?Sized,
{
    debug!("decorate object with {} entries", decorations.len());
    for decoration in decorations.iter() {
        let value = decoration.value();
        assert(DECORATION_NOT_CALLABLE, value.is_callable())?;
        if let Some(method) = value.as_method() {
            trace!(
                "apply '{}' from group '{}'",
                decoration.name(),
                decoration.group()
            );
            decorate_method(&mut *target, decoration.name(), method.clone())?;
        }
    }
    Ok(target)
}
