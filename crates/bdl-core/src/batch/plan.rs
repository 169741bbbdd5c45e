//! Partition of a URL list into contiguous batches.

use std::ops::Range;

/// Number of batches needed for `len` items: `ceil(len / batch_size)`.
pub fn batch_count(len: usize, batch_size: usize) -> usize {
    len.div_ceil(batch_size.max(1))
}

/// Splits `0..len` into `[skip, min(skip + batch_size, len))` ranges.
/// Every range is non-empty, and concatenating them yields `0..len` exactly.
pub fn plan_batches(len: usize, batch_size: usize) -> Vec<Range<usize>> {
    let batch_size = batch_size.max(1);
    (0..batch_count(len, batch_size))
        .map(|i| {
            let start = i * batch_size;
            start..(start + batch_size).min(len)
        })
        .collect()
}
