//! Factorial computation over arbitrary primitive integer types, with negative-input and
//! overflow detection.
//!
//! [`Memo`] is the memoizing engine: it retains every factorial it has computed, so a
//! sequence of queries for increasing (or repeated) `n` costs amortized constant time per
//! query. [`Calculator`] recomputes from scratch on each call.

use thiserror::Error;
use tracing::trace;

use crate::integral::Integral;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FactorialError {
    #[error("factorial of a negative number is undefined")]
    Negative,

    #[error("factorial overflows the output type")]
    Overflow,
}

pub trait Factorial<O: Integral> {
    /// Computes `n!` as an `O`.
    fn compute<I: Integral>(&mut self, n: I) -> Result<O, FactorialError>;
}

/// Multiplies `last` (which must be `(index - 1)!`) by `index`, verifying that the product
/// did not wrap by dividing it back out.
#[inline]
fn next_product<O: Integral>(last: O, index: usize) -> Result<O, FactorialError> {
    let multiplier = O::from_usize(index).ok_or(FactorialError::Overflow)?;
    let product = last.wrapping_mul(multiplier);
    if product.checked_div(last) == Some(multiplier) {
        Ok(product)
    } else {
        Err(FactorialError::Overflow)
    }
}

#[inline]
fn to_index<I: Integral>(n: I) -> Result<usize, FactorialError> {
    if n.is_negative() {
        return Err(FactorialError::Negative);
    }
    n.to_usize().ok_or(FactorialError::Overflow)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl<O: Integral> Factorial<O> for Calculator {
    fn compute<I: Integral>(&mut self, n: I) -> Result<O, FactorialError> {
        let n = to_index(n)?;
        let mut product = O::ONE;
        for index in 2..=n {
            product = next_product(product, index)?;
        }
        Ok(product)
    }
}

/// Memoizing factorial engine. `entries[n]` holds `n!`; the entries only ever grow, and an
/// entry is appended only once its product has been verified not to overflow.
#[derive(Debug, Clone)]
pub struct Memo<O> {
    entries: Vec<O>,
}
impl<O: Integral> Memo<O> {
    /// Number of cached entries. Never less than 2, as `0!` and `1!` are seeded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The largest `n` for which `n!` is cached.
    pub fn max_cached(&self) -> usize {
        self.entries.len() - 1
    }

    /// Looks up `n!` without extending the cache.
    pub fn cached<I: Integral>(&self, n: I) -> Option<O> {
        n.to_usize()
            .and_then(|index| self.entries.get(index))
            .copied()
    }

    pub fn entries(&self) -> &[O] {
        &self.entries
    }

    fn extend_to(&mut self, n: usize) -> Result<(), FactorialError> {
        while self.entries.len() <= n {
            let index = self.entries.len();
            let last = self.entries[index - 1];
            match next_product(last, index) {
                Ok(product) => {
                    trace!("cached {index}! = {product}");
                    self.entries.push(product);
                }
                Err(err) => {
                    trace!("{index}! overflows; cache remains at {} entries", self.entries.len());
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

impl<O: Integral> Default for Memo<O> {
    fn default() -> Self {
        Self {
            entries: vec![O::ONE, O::ONE],
        }
    }
}

impl<O: Integral> Factorial<O> for Memo<O> {
    fn compute<I: Integral>(&mut self, n: I) -> Result<O, FactorialError> {
        let n = to_index(n)?;
        self.extend_to(n)?;
        Ok(self.entries[n])
    }
}
