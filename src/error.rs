//! When arithmetic, conversion or rendering of a `BigInt` goes wrong.

use crate::LOG_TARGET;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::{error, io};

/// This type represents all possible errors that can occur while operating
/// on a [`BigInt`](crate::BigInt).
///
/// Constructing an `Error` never allocates, so an allocation failure can be
/// reported through it.
pub struct Error {
    code: ErrorCode,
}

/// Alias for a `Result` with the error type `twos_bigint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Alloc` - limb or text storage could not be allocated
    /// - `Category::Precision` - a narrowing conversion lost precision
    /// - `Category::Io` - the output sink rejected rendered text
    pub fn classify(&self) -> Category {
        match self.code {
            ErrorCode::AllocationFailure => Category::Alloc,
            ErrorCode::PrecisionOverflow(_) => Category::Precision,
            #[cfg(feature = "std")]
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::Fmt => Category::Io,
        }
    }

    /// Returns true if this error was caused by a failed storage request.
    pub fn is_alloc(&self) -> bool {
        self.classify() == Category::Alloc
    }

    /// Returns true if this error was caused by converting a value into a
    /// type too narrow to hold it.
    pub fn is_precision(&self) -> bool {
        self.classify() == Category::Precision
    }

    /// Returns true if this error was caused by a failure to write rendered
    /// text to a sink.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }
}

/// Categorizes the cause of a `twos_bigint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// Storage for limbs or rendered text could not be allocated.
    Alloc,

    /// The value needs more bits than the requested target type has.
    Precision,

    /// The writer receiving rendered text failed.
    Io,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for io::Error {
    /// Convert a `twos_bigint::Error` into an `io::Error`.
    ///
    /// Allocation failures become `OutOfMemory` IO errors and precision
    /// errors become `InvalidData` IO errors.
    fn from(err: Error) -> Self {
        let kind = match err.code {
            ErrorCode::Io(err) => return err,
            ErrorCode::AllocationFailure => io::ErrorKind::OutOfMemory,
            ErrorCode::PrecisionOverflow(_) => io::ErrorKind::InvalidData,
            ErrorCode::Fmt => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}

/// This type describes all possible errors that can occur while operating on
/// a `BigInt`.
#[derive(Debug)]
pub enum ErrorCode {
    /// A storage request could not be satisfied.
    AllocationFailure,

    /// The value does not fit in the named target type.
    PrecisionOverflow(&'static str),

    /// Some IO error occurred while writing rendered text.
    #[cfg(feature = "std")]
    Io(io::Error),

    /// A `fmt::Write` sink returned an error.
    Fmt,
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ErrorCode::PrecisionOverflow(l0), ErrorCode::PrecisionOverflow(r0)) => l0 == r0,
            #[cfg(feature = "std")]
            (ErrorCode::Io(_), ErrorCode::Io(_)) => true,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Error {
    #[cold]
    pub(crate) fn alloc() -> Self {
        tracing::debug!(target: LOG_TARGET, "limb storage allocation failed");
        Error {
            code: ErrorCode::AllocationFailure,
        }
    }

    #[cold]
    pub(crate) fn precision(target: &'static str) -> Self {
        tracing::debug!(target: LOG_TARGET, type_name = target, "value does not fit target type");
        Error {
            code: ErrorCode::PrecisionOverflow(target),
        }
    }

    #[cfg(feature = "std")]
    #[cold]
    pub(crate) fn io(error: io::Error) -> Self {
        Error {
            code: ErrorCode::Io(error),
        }
    }

    #[cold]
    pub(crate) fn fmt() -> Self {
        Error {
            code: ErrorCode::Fmt,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::AllocationFailure => f.write_str("memory allocation failed"),
            ErrorCode::PrecisionOverflow(target) => {
                f.write_fmt(format_args!("value does not fit in {}", target))
            }
            #[cfg(feature = "std")]
            ErrorCode::Io(ref err) => Display::fmt(err, f),
            ErrorCode::Fmt => f.write_str("formatter error"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.code {
            ErrorCode::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.code, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.code.to_string())
    }
}
