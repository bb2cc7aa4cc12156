//

pub mod assert;
pub mod curry;
pub mod decorate;

pub use crate::core::method::noop;
pub use assert::assert;
pub use curry::curry;
pub use decorate::{decorate_method, decorate_object, Decorations, DECORATION_NOT_CALLABLE};
