//

pub mod core;
pub mod helpers;

pub use crate::core::error::{Error, Result};
pub use crate::core::method::{Call, Method};
pub use crate::core::object::{Object, Prop, SharedObject};
pub use crate::core::value::Value;
pub use crate::helpers::{
    assert, curry, decorate_method, decorate_object, noop, Decorations,
};
