//! A [`Memo`] that may be shared among threads.
//!
//! Queries for factorials that are already cached proceed concurrently under a read lock.
//! Extending the cache requires the write lock, so each entry is appended exactly once and
//! no reader observes a partially extended cache.

use std::sync::{PoisonError, RwLock};

use tracing::trace;

use crate::factorial::{Factorial, FactorialError, Memo};
use crate::integral::Integral;

#[derive(Debug)]
pub struct SharedMemo<O> {
    memo: RwLock<Memo<O>>,
}
impl<O: Integral> SharedMemo<O> {
    /// Computes `n!`, extending the shared cache if necessary.
    pub fn compute<I: Integral>(&self, n: I) -> Result<O, FactorialError> {
        if n.is_negative() {
            return Err(FactorialError::Negative);
        }
        {
            let memo = self.memo.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(value) = memo.cached(n) {
                return Ok(value);
            }
        }

        // another writer may have extended the cache between the locks; Memo::compute
        // only appends what is still missing
        let mut memo = self.memo.write().unwrap_or_else(PoisonError::into_inner);
        trace!("extending shared cache from {} entries", memo.len());
        memo.compute(n)
    }

    pub fn len(&self) -> usize {
        self.memo.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the shared wrapper, yielding the underlying engine.
    pub fn into_inner(self) -> Memo<O> {
        self.memo.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O: Integral> Default for SharedMemo<O> {
    fn default() -> Self {
        Self::from(Memo::default())
    }
}

impl<O: Integral> From<Memo<O>> for SharedMemo<O> {
    fn from(memo: Memo<O>) -> Self {
        Self {
            memo: RwLock::new(memo),
        }
    }
}

impl<O: Integral> Factorial<O> for SharedMemo<O> {
    fn compute<I: Integral>(&mut self, n: I) -> Result<O, FactorialError> {
        SharedMemo::compute(self, n)
    }
}
