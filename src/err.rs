use std::{error::Error, fmt};

/// Trait for specifying getting exit codes from errors.
pub trait GetCode {
    fn get_code(&self) -> i32 {
        1
    }
}

impl GetCode for std::io::Error {
    #[must_use]
    #[inline]
    fn get_code(&self) -> i32 {
        self.raw_os_error().unwrap_or(1)
    }
}

/// Trait for providing more graceful [`expect()`](std::result::Result::expect)
/// behavior but with a status code provided by [`GetCode`].
pub trait OrFail<T> {
    fn unwrap_or_fail(self) -> T;
    fn unwrap_or_die(self, msg: &str) -> T;
}

impl<T, E> OrFail<T> for Result<T, E>
where
    E: GetCode + fmt::Display,
{
    fn unwrap_or_fail(self) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(e.get_code());
            }
        }
    }

    fn unwrap_or_die(self, msg: &str) -> T {
        match self {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {msg}\n\n{e}");
                std::process::exit(e.get_code());
            }
        }
    }
}

/// The single error kind produced by the matchers and table builders. Each
/// variant names the precondition that was violated. Errors are always
/// raised before any searching takes place.
#[non_exhaustive]
#[derive(Clone, Copy, Eq, PartialEq, Hash)]
pub enum InvalidArgument {
    /// No pattern was supplied
    MissingPattern,
    /// The pattern was empty, which is not searchable
    EmptyPattern,
    /// No text was supplied
    MissingText,
    /// No comparator was supplied
    MissingComparator,
}

impl fmt::Display for InvalidArgument {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidArgument::MissingPattern => write!(f, "The pattern was not provided"),
            InvalidArgument::EmptyPattern => write!(f, "The pattern must contain at least one symbol"),
            InvalidArgument::MissingText => write!(f, "The text was not provided"),
            InvalidArgument::MissingComparator => write!(f, "The symbol comparator was not provided"),
        }
    }
}

impl fmt::Debug for InvalidArgument {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgument: {self}")
    }
}

impl Error for InvalidArgument {}

impl GetCode for InvalidArgument {
    #[inline]
    fn get_code(&self) -> i32 {
        2
    }
}

/// Returned when an [`Algorithm`](crate::search::Algorithm) name cannot be
/// parsed.
#[derive(Clone, Eq, PartialEq)]
pub struct ParseAlgorithmError(pub(crate) String);

impl fmt::Display for ParseAlgorithmError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Unknown algorithm '{}', expected one of: brute-force, kmp, boyer-moore, galil",
            self.0
        )
    }
}

impl fmt::Debug for ParseAlgorithmError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Error for ParseAlgorithmError {}

impl GetCode for ParseAlgorithmError {
    #[inline]
    fn get_code(&self) -> i32 {
        2
    }
}
