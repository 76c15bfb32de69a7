use std::num::NonZeroU64;
use std::ops::Range;

/// Consecutive half-open index ranges covering `[0, total)`.
///
/// Every range has `batch_size` indices except possibly the last.
#[must_use]
pub const fn batch_ranges(total: u64, batch_size: NonZeroU64) -> BatchRanges {
    BatchRanges {
        next_start: 0,
        total,
        batch_size,
    }
}

#[derive(Debug, Clone)]
pub struct BatchRanges {
    next_start: u64,
    total: u64,
    batch_size: NonZeroU64,
}

impl Iterator for BatchRanges {
    type Item = Range<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_start >= self.total {
            return None;
        }
        let start = self.next_start;
        let end = start
            .saturating_add(self.batch_size.get())
            .min(self.total);
        self.next_start = end;
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total.saturating_sub(self.next_start);
        let batches = remaining.div_ceil(self.batch_size.get());
        usize::try_from(batches).map_or((0, None), |batches| (batches, Some(batches)))
    }
}
