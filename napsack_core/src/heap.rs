use num_traits::Float;
use core::marker::PhantomData;

//

/// Heap polarity: decides which of two key values sits closer to the root.
pub trait Polarity
{
    fn precedes<F: Float>(a: F, b: F) -> bool;
}

/// The largest key wins. Polarity of the decreasing ([`crate::napdown`]) search.
pub struct MaxFirst;

impl Polarity for MaxFirst
{
    fn precedes<F: Float>(a: F, b: F) -> bool
    {
        a > b
    }
}

/// The smallest key wins. Polarity of the increasing ([`crate::napup`]) search.
pub struct MinFirst;

impl Polarity for MinFirst
{
    fn precedes<F: Float>(a: F, b: F) -> bool
    {
        a < b
    }
}

//

/// Binary heap of indices into an external key slice.
///
/// The heap stores indices only and never touches key storage: every
/// comparison looks the two keys up in a caller-supplied slice passed to the
/// operation. This lets the two heaps of one projection call (free set and
/// bound set) share a single breakpoint slice, and lets a key be rewritten
/// while its index sits in neither heap.
///
/// Storage is 0-based with an explicit length; `parent = (i-1)/2`,
/// `left = 2i+1`, `right = 2i+2`.
pub struct IndirectHeap<'a, O: Polarity>
{
    ph_o: PhantomData<O>,
    slot: &'a mut [usize],
    len: usize,
}

impl<'a, O: Polarity> IndirectHeap<'a, O>
{
    /// Wraps a caller-owned index slice. The heap starts empty.
    pub fn new(slot: &'a mut [usize]) -> Self
    {
        IndirectHeap {
            ph_o: PhantomData,
            slot,
            len: 0,
        }
    }

    pub fn len(&self) -> usize
    {
        self.len
    }

    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// Index currently at the root, without removing it.
    pub fn root(&self) -> Option<usize>
    {
        if self.len == 0 {
            None
        }
        else {
            Some(self.slot[0])
        }
    }

    /// Appends an index with no regard to heap order.
    ///
    /// [`IndirectHeap::build`] must run before any ordered operation.
    pub fn stage(&mut self, i: usize)
    {
        self.slot[self.len] = i;
        self.len += 1;
    }

    /// Arranges the staged indices into heap order, bottom-up. O(len).
    pub fn build<F: Float>(&mut self, keys: &[F])
    {
        for start in (0.. self.len / 2).rev() {
            self.sift_down(start, keys);
        }
    }

    // Restores heap order rooted at `start`, both subtrees assumed valid.
    fn sift_down<F: Float>(&mut self, start: usize, keys: &[F])
    {
        let mut p = start;
        loop {
            let l = 2 * p + 1;
            if l >= self.len {
                break;
            }
            let mut c = l;
            let r = l + 1;
            if r < self.len && O::precedes(keys[self.slot[r]], keys[self.slot[l]]) {
                c = r;
            }
            if O::precedes(keys[self.slot[c]], keys[self.slot[p]]) {
                self.slot.swap(p, c);
                p = c;
            }
            else {
                break;
            }
        }
    }

    /// Removes the root element, replacing it with the last leaf.
    ///
    /// Calling this on an empty heap is a contract violation.
    pub fn delete_root<F: Float>(&mut self, keys: &[F])
    {
        assert!(self.len >= 1);

        self.len -= 1;
        if self.len > 0 {
            self.slot[0] = self.slot[self.len];
            self.sift_down(0, keys);
        }
    }

    /// Inserts `i` as a new leaf and sifts it upward.
    ///
    /// The backing slice must already have room for one more element.
    pub fn add_leaf<F: Float>(&mut self, i: usize, keys: &[F])
    {
        debug_assert!(self.len < self.slot.len());

        let mut p = self.len;
        self.slot[p] = i;
        self.len += 1;
        while p > 0 {
            let up = (p - 1) / 2;
            if O::precedes(keys[self.slot[p]], keys[self.slot[up]]) {
                self.slot.swap(p, up);
                p = up;
            }
            else {
                break;
            }
        }
    }

    /// Asserts heap order and the `[0, n)` range of stored indices, walking
    /// positions from `start` on. Test-suite use only.
    pub fn validate<F: Float>(&self, keys: &[F], n: usize, start: usize)
    {
        for p in start.. self.len {
            assert!(self.slot[p] < n);
            if p > 0 {
                let up = (p - 1) / 2;
                assert!(!O::precedes(keys[self.slot[p]], keys[self.slot[up]]));
            }
        }
    }
}
