//! Growable integer sequence with an explicit length/capacity split.

use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Construction errors for [`GrowableSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("initial length {length} exceeds initial capacity {capacity}")]
    LengthExceedsCapacity { length: usize, capacity: usize },
}

/// Rule for computing the next capacity when an append overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the current capacity.
    pub factor: usize,
    /// Lower bound for any reallocated capacity.
    pub min_capacity: usize,
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            factor: 2,
            min_capacity: 0,
        }
    }
}

impl GrowthPolicy {
    /// Capacity to allocate so that `required` elements fit.
    ///
    /// Never smaller than `current` and always at least `required`.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        current
            .saturating_mul(self.factor)
            .max(required)
            .max(self.min_capacity)
    }
}

/// Ordered sequence of `i64` values.
///
/// `cap()` reports the tracked logical capacity, which follows the
/// [`GrowthPolicy`] exactly. It is bookkeeping only: the backing `Vec` grows
/// on demand, so a large policy never forces a large allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrowableSequence {
    items: Vec<i64>,
    capacity: usize,
    policy: GrowthPolicy,
}

impl GrowableSequence {
    /// `initial_length` zero-valued elements with room for `initial_capacity`.
    pub fn new(initial_length: usize, initial_capacity: usize) -> Result<Self, SequenceError> {
        Self::with_growth(initial_length, initial_capacity, GrowthPolicy::default())
    }

    pub fn with_growth(
        initial_length: usize,
        initial_capacity: usize,
        policy: GrowthPolicy,
    ) -> Result<Self, SequenceError> {
        if initial_length > initial_capacity {
            return Err(SequenceError::LengthExceedsCapacity {
                length: initial_length,
                capacity: initial_capacity,
            });
        }
        Ok(Self {
            items: vec![0; initial_length],
            capacity: initial_capacity,
            policy,
        })
    }

    /// Append `value` as the new last element.
    pub fn append(&mut self, value: i64) {
        let required = self.items.len() + 1;
        if required > self.capacity {
            self.grow(required);
        }
        self.items.push(value);
    }

    /// Append every value in order.
    pub fn extend_from_slice(&mut self, values: &[i64]) {
        for value in values {
            self.append(*value);
        }
    }

    fn grow(&mut self, required: usize) {
        let new_capacity = self.policy.next_capacity(self.capacity, required);
        debug!(
            old_capacity = self.capacity,
            new_capacity,
            length = self.items.len(),
            "growing sequence capacity"
        );
        self.capacity = new_capacity;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn cap(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i64> {
        self.items.get(index).copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.items.iter().copied()
    }
}

impl fmt::Display for GrowableSequence {
    /// Space-separated elements in brackets, e.g. `[0 0 0 10]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, value) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}
