//

use failure_derive::Fail;

#[derive(Debug, Fail)]
pub enum Error {
    #[fail(display = "{}", _0)]
    AssertionFailure(String),
    #[fail(display = "attempt to call non-callable property '{}'", _0)]
    NotCallable(String),
    #[fail(display = "object don't have property '{}'", _0)]
    NoSuchProp(String),
    #[fail(display = "object is borrowed by another access")]
    AccessConflict,
    #[fail(display = "expected {}, found {}", expected, actual)]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[fail(display = "{}", _0)]
    Raised(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assertion_failure_displays_bare_message() {
        let err = Error::AssertionFailure("must be positive".to_string());
        assert_eq!(err.to_string(), "must be positive");
    }

    #[test]
    fn type_mismatch_names_both_sides() {
        let err = Error::TypeMismatch {
            expected: "int",
            actual: "string",
        };
        assert_eq!(err.to_string(), "expected int, found string");
    }
}
