//! Sub-range views over a parent strip
//!
//! A [`Segment`] is only an index mapping. Borrowing it against a parent
//! with [`Segment::view`] gives a [`SegmentView`] whose writes land in the
//! parent directly; the borrow keeps the view from outliving the parent.

use core::marker::PhantomData;

use crate::strip::LedStrip;

/// Contiguous range of parent cells, optionally addressed back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub reversed: bool,
}

impl Segment {
    /// Cells `start..end` in parent order
    pub const fn forward(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            reversed: false,
        }
    }

    /// Cells `start..end` with local index 0 mapped to `end - 1`
    pub const fn reversed(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            reversed: true,
        }
    }

    /// Number of cells in the segment
    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Map a local index to the parent index
    ///
    /// Returns `None` if `local` is outside the segment.
    pub const fn parent_index(self, local: usize) -> Option<usize> {
        if local >= self.len() {
            return None;
        }
        if self.reversed {
            Some(self.end - 1 - local)
        } else {
            Some(self.start + local)
        }
    }

    /// Borrow the segment as a strip over `parent`
    pub fn view<'a, C: Copy, S: LedStrip<C> + ?Sized>(
        self,
        parent: &'a mut S,
    ) -> SegmentView<'a, C, S> {
        SegmentView {
            parent,
            segment: self,
            _color: PhantomData,
        }
    }
}

/// A [`Segment`] borrowed against its parent strip
///
/// Flushing the view flushes the whole parent.
pub struct SegmentView<'a, C, S: ?Sized> {
    parent: &'a mut S,
    segment: Segment,
    _color: PhantomData<C>,
}

impl<C: Copy, S: LedStrip<C> + ?Sized> LedStrip<C> for SegmentView<'_, C, S> {
    fn len(&self) -> usize {
        self.segment.len()
    }

    fn get(&self, index: usize) -> Option<C> {
        self.segment
            .parent_index(index)
            .and_then(|index| self.parent.get(index))
    }

    fn set(&mut self, index: usize, color: C) {
        if let Some(index) = self.segment.parent_index(index) {
            self.parent.set(index, color);
        }
    }

    fn show(&mut self) {
        self.parent.show();
    }
}
