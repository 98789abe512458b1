//! Checked conversion from dynamically typed values.

use std::any::Any;

use thiserror::Error;

#[derive(Debug, Error)]
#[error("value is not a string")]
pub struct NotAString;

/// Extracts the string out of a `dyn Any` value, accepting both `String`
/// and `&str`. Anything else is a contract violation reported as an error
/// rather than a panic.
pub fn expect_string(value: &dyn Any) -> Result<&str, NotAString> {
    if let Some(s) = value.downcast_ref::<String>() {
        return Ok(s.as_str());
    }
    if let Some(s) = value.downcast_ref::<&str>() {
        return Ok(s);
    }
    Err(NotAString)
}
