use crate::error::Error;
use std::result::Result as StdResult;

/// The result of every fallible stream operation.
pub type Result<T, E = Error> = StdResult<T, E>;
