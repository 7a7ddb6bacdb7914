//! Errors reported to callers. Internal invariant violations (borrow
//! underflow, out-of-range storage positions) are asserts, not error values.

use std::error;
use std::fmt::{self, Display};

/// Returned when constructing a [`BigInteger`](crate::BigInteger) from a
/// decimal string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBigIntegerError {
    kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParseErrorKind {
    Empty,
    InvalidDigit(char),
}

impl ParseBigIntegerError {
    pub(crate) fn empty() -> ParseBigIntegerError {
        ParseBigIntegerError {
            kind: ParseErrorKind::Empty,
        }
    }

    pub(crate) fn invalid_digit(found: char) -> ParseBigIntegerError {
        ParseBigIntegerError {
            kind: ParseErrorKind::InvalidDigit(found),
        }
    }
}

impl Display for ParseBigIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => f.write_str("cannot parse integer from empty string"),
            ParseErrorKind::InvalidDigit(found) => {
                write!(f, "invalid digit found in string: {:?}", found)
            }
        }
    }
}

impl error::Error for ParseBigIntegerError {}

/// Returned by [`BigInteger::div_rem`](crate::BigInteger::div_rem) when the
/// divisor is zero. The division operators panic in this case instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivisionByZeroError;

impl Display for DivisionByZeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("attempt to divide by zero")
    }
}

impl error::Error for DivisionByZeroError {}
