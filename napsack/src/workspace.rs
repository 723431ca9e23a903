use num_traits::Float;

/// Reusable workspace of one projection call.
///
/// Holds the breakpoint slice (length `n`) and the two heap index slices
/// (length `n + 1`) that [`crate::Napsack::project`] hands to the core
/// searches. Allocate once, outside the refinement loop; the contents carry
/// no state between calls.
pub struct NapWorkspace<F>
{
    breakpts: Vec<F>,
    bound_heap: Vec<usize>,
    free_heap: Vec<usize>,
}

impl<F: Float> NapWorkspace<F>
{
    /// Creates a workspace for problems of size up to `n`.
    ///
    /// Returns [`NapWorkspace`] instance.
    pub fn new(n: usize) -> Self
    {
        NapWorkspace {
            breakpts: vec![F::zero(); n],
            bound_heap: vec![0; n + 1],
            free_heap: vec![0; n + 1],
        }
    }

    /// Largest problem size the workspace currently accommodates.
    pub fn capacity(&self) -> usize
    {
        self.breakpts.len()
    }

    /// Grows the workspace to accommodate size `n`. Never shrinks.
    pub fn reserve(&mut self, n: usize)
    {
        if n > self.capacity() {
            self.breakpts.resize(n, F::zero());
            self.bound_heap.resize(n + 1, 0);
            self.free_heap.resize(n + 1, 0);
        }
    }

    pub(crate) fn split_mut(&mut self) -> (&mut [F], &mut [usize], &mut [usize])
    {
        (&mut self.breakpts, &mut self.bound_heap, &mut self.free_heap)
    }
}
