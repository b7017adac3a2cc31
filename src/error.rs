use failure::Fail;

/// Failures raised by the resolver itself.
///
/// Storage faults are not listed here: they travel as [`failure::Error`]
/// exactly as the storage client reported them.
#[derive(Debug, Fail, PartialEq)]
pub enum Error {
    #[fail(display = "Missing configuration value {}", _0)]
    MissingConfig(&'static str),
    #[fail(display = "Missing argument {}", _0)]
    MissingArgument(&'static str),
    #[fail(display = "Malformed item attribute {}", _0)]
    MalformedItem(&'static str),
}
