//! Evaluation of command-line arguments: each argument is parsed as an `isize` and, if it
//! is a non-negative integer, its factorial is computed by the supplied engine.

use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;

use strum_macros::IntoStaticStr;
use thiserror::Error;
use tracing::debug;

use crate::factorial::{Factorial, FactorialError};
use crate::integral::Integral;

#[derive(Debug, Error, Clone, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ArgError {
    #[error("Argument {position} = `{arg}` isn't an integer.")]
    NotInteger { position: usize, arg: String },

    #[error("Argument {position} = {arg} is out of the 'isize' range.")]
    OutOfRange { position: usize, arg: String },

    #[error("Argument {position} = {arg} is negative")]
    Negative { position: usize, arg: String },

    #[error("Argument {position} = {n} forced the factorial function to overflow")]
    Overflow { position: usize, n: isize },
}
impl ArgError {
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computed<O> {
    pub n: isize,
    pub value: O,
}

impl<O: Display> Display for Computed<O> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "The factorial of {} is {}", self.n, self.value)
    }
}

/// The outcome of evaluating the argument at a given (1-based) `position`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation<O> {
    pub position: usize,
    pub arg: String,
    pub outcome: Result<Computed<O>, ArgError>,
}

/// Parses an argument as an `isize`. Surrounding whitespace is ignored, but the rest of the
/// argument must be an integer in its entirety: `12abc` and `1.5` are rejected rather than
/// read as 12 and 1.
pub fn parse(position: usize, arg: &str) -> Result<isize, ArgError> {
    arg.trim().parse::<isize>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ArgError::OutOfRange {
            position,
            arg: arg.to_string(),
        },
        _ => ArgError::NotInteger {
            position,
            arg: arg.to_string(),
        },
    })
}

/// Evaluates a single argument. Failures are confined to the returned [`Evaluation`].
pub fn evaluate<O: Integral>(
    position: usize,
    arg: &str,
    factorial: &mut impl Factorial<O>,
) -> Evaluation<O> {
    let outcome = compute(position, arg, factorial);
    match &outcome {
        Ok(computed) => debug!("argument {position} ({arg:?}): {}", computed.value),
        Err(err) => debug!(kind = err.kind(), "argument {position} ({arg:?}) rejected"),
    }
    Evaluation {
        position,
        arg: arg.to_string(),
        outcome,
    }
}

fn compute<O: Integral>(
    position: usize,
    arg: &str,
    factorial: &mut impl Factorial<O>,
) -> Result<Computed<O>, ArgError> {
    let n = parse(position, arg)?;
    if n < 0 {
        return Err(ArgError::Negative {
            position,
            arg: arg.to_string(),
        });
    }
    match factorial.compute(n) {
        Ok(value) => Ok(Computed { n, value }),
        Err(FactorialError::Negative) => Err(ArgError::Negative {
            position,
            arg: arg.to_string(),
        }),
        Err(FactorialError::Overflow) => Err(ArgError::Overflow { position, n }),
    }
}

/// Evaluates every argument in turn, numbering them from 1.
pub fn evaluate_all<O: Integral, S: AsRef<str>>(
    args: impl IntoIterator<Item = S>,
    factorial: &mut impl Factorial<O>,
) -> Vec<Evaluation<O>> {
    args.into_iter()
        .enumerate()
        .map(|(index, arg)| evaluate(index + 1, arg.as_ref(), factorial))
        .collect()
}
