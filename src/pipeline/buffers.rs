//! Fixed-capacity numeric storage owned by the orchestrator for one run.

use log::{debug, error};

use crate::error::PipelineError;
use crate::utils::config::BUFFER_GROWTH_MIN;

/// Growable storage with a hard upper bound on its logical length.
///
/// `limit` is the bound every write is checked against. `min(reserve, limit)` elements are
/// acquired up front; beyond that the buffer grows in steps, never past `limit`. All
/// acquisition is fallible, so an oversized request surfaces as
/// [`PipelineError::Allocation`] instead of an abort.
#[derive(Clone, Debug)]
pub struct BoundedBuffer<T> {
    name: &'static str,
    data: Vec<T>,
    limit: usize,
}

impl<T> BoundedBuffer<T> {
    /// Acquire a buffer bounded by `limit` with room for `reserve` elements (clamped to `limit`).
    /// `name` labels the buffer in the allocation error.
    pub fn try_with_capacity(
        name: &'static str,
        limit: usize,
        reserve: usize,
    ) -> Result<Self, PipelineError> {
        let mut buf = Self {
            name,
            data: Vec::new(),
            limit,
        };
        buf.reserve(reserve.min(limit))?;
        Ok(buf)
    }

    fn reserve(&mut self, additional: usize) -> Result<(), PipelineError> {
        self.data.try_reserve_exact(additional).map_err(|e| {
            error!("Memory allocation failed for {} buffer: {}", self.name, e);
            PipelineError::Allocation {
                buffer: self.name,
                requested: self.data.len().saturating_add(additional),
            }
        })
    }

    /// Elements the current allocation holds without growing.
    pub fn reserved(&self) -> usize {
        self.data.capacity()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.limit
    }

    /// Slots left before the bound is hit.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.data.len())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Reset the logical length to zero. Keeps the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Append one value. Fails without writing when the buffer is full.
    pub fn push(&mut self, value: T) -> Result<(), PipelineError> {
        if self.is_full() {
            return Err(PipelineError::CapacityExceeded {
                len: self.data.len() + 1,
                capacity: self.limit,
            });
        }
        if self.data.len() == self.data.capacity() {
            let step = self.data.len().max(BUFFER_GROWTH_MIN).min(self.remaining());
            self.reserve(step)?;
        }
        self.data.push(value);
        Ok(())
    }

    /// Append every item from `iter`. Stops with `CapacityExceeded` at the first item that does
    /// not fit; items appended before that point stay in the buffer.
    pub fn extend_bounded<I>(&mut self, iter: I) -> Result<usize, PipelineError>
    where
        I: IntoIterator<Item = T>,
    {
        let start = self.data.len();
        for value in iter {
            self.push(value)?;
        }
        Ok(self.data.len() - start)
    }

    /// Release the storage and hand back the inner vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Stage outputs for one run: the filtered sequence and its widened squares.
///
/// Both buffers share the same bound. Dropping the workspace releases everything it holds,
/// including on early-return paths.
#[derive(Debug)]
pub struct Workspace {
    capacity: usize,
    filtered: BoundedBuffer<u32>,
    squared: BoundedBuffer<u64>,
}

impl Workspace {
    /// Acquire both stage buffers, bounded by `capacity`, with room for `expected_len` elements.
    /// If the squared buffer cannot be acquired, the filtered one is dropped before returning.
    pub fn allocate(capacity: usize, expected_len: usize) -> Result<Self, PipelineError> {
        let filtered = BoundedBuffer::try_with_capacity("filtered", capacity, expected_len)?;
        let squared = BoundedBuffer::try_with_capacity("squared", capacity, expected_len)?;
        debug!(
            "Workspace allocated: capacity {}, reserved {}",
            capacity,
            expected_len.min(capacity)
        );
        Ok(Self {
            capacity,
            filtered,
            squared,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn filtered(&self) -> &[u32] {
        self.filtered.as_slice()
    }

    pub fn squared(&self) -> &[u64] {
        self.squared.as_slice()
    }

    /// Mutable access to both stage outputs at once.
    pub(crate) fn stage_buffers(&mut self) -> (&mut BoundedBuffer<u32>, &mut BoundedBuffer<u64>) {
        (&mut self.filtered, &mut self.squared)
    }
}
