//! A memoizing factorial engine with overflow and negative-input detection, generic over
//! the primitive integer types. Factorials computed once are retained, so queries for
//! increasing or repeated `n` run in amortized constant time.

pub mod args;
pub mod factorial;
pub mod integral;
pub mod print;
pub mod shared;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}
