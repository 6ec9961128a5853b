use std::error::Error;

/// Result with a boxed error, `()` by default
pub type Fallible<T = ()> = Result<T, Box<dyn Error>>;
