use num_traits::Float;
use crate::heap::{IndirectHeap, MinFirst};
use crate::nap_error::NapError;

/// Knapsack projection breakpoint search, increasing direction.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Mirror image of [`crate::napdown`]: the starting guess `lambda` is
/// \\(\le\\) the true multiplier, so \\(\lambda\\) only increases; the heaps
/// order breakpoints ascending, and bound coordinates that can turn free
/// while \\(\lambda\\) increases are those clamped at 1. Free coordinates
/// crossing zero are dropped from the running sums and never revisited.
/// The signature and contract are those of [`crate::napdown`], with only the
/// promised estimation direction of `lambda` reversed.
pub fn napup<F: Float>(
    x: &[F],
    lambda: F,
    a: Option<&[F]>,
    b: F,
    breakpts: &mut [F],
    bound_heap: &mut [usize],
    free_heap: &mut [usize],
) -> Result<F, NapError>
{
    let n = x.len();

    if breakpts.len() < n || bound_heap.len() < n + 1 || free_heap.len() < n + 1 {
        return Err(NapError::WorkShortage);
    }
    if let Some(a) = a {
        assert_eq!(a.len(), n);
    }

    let f0 = F::zero();
    let f1 = F::one();
    let inf = F::infinity();

    let mut lambda = lambda;
    let mut bound = IndirectHeap::<MinFirst>::new(bound_heap);
    let mut free = IndirectHeap::<MinFirst>::new(free_heap);

    // Classify every index under the starting lambda. Coordinates at or
    // below zero contribute nothing and are never tracked.
    let mut asum = f0;
    let mut a2sum = f0;
    let mut minbound = inf;
    let mut minfree = inf;

    match a {
        None => {
            for i in 0.. n {
                let xi = x[i] - lambda;
                if xi > f1 {
                    let t = x[i] - f1;
                    bound.stage(i);
                    asum = asum + f1;
                    minbound = minbound.min(t);
                    breakpts[i] = t;
                }
                else if xi > f0 {
                    let t = x[i];
                    free.stage(i);
                    asum = asum + x[i];
                    a2sum = a2sum + f1;
                    minfree = minfree.min(t);
                    breakpts[i] = t;
                }
            }
        }
        Some(a) => {
            for i in 0.. n {
                let ai = a[i];
                let xi = x[i] - ai * lambda;
                if xi > f1 {
                    let t = (x[i] - f1) / ai;
                    bound.stage(i);
                    asum = asum + ai;
                    minbound = minbound.min(t);
                    breakpts[i] = t;
                }
                else if xi > f0 {
                    let t = x[i] / ai;
                    free.stage(i);
                    asum = asum + x[i] * ai;
                    a2sum = a2sum + ai * ai;
                    minfree = minfree.min(t);
                    breakpts[i] = t;
                }
            }
        }
    }

    let maxsteps = 2 * n + 1;
    for k in 1..= maxsteps {
        // The slope falls as lambda rises; the root is bracketed once it
        // drops to b, or when no breakpoints remain.
        let new_break = minfree.min(minbound);
        let s = asum - new_break * a2sum;
        if s <= b || new_break == inf {
            if a2sum != f0 {
                lambda = (asum - b) / a2sum;
            }
            return Ok(lambda);
        }
        lambda = new_break;

        if k == 1 {
            free.build(breakpts);
            bound.build(breakpts);
        }

        // Free coordinates crossing zero leave for good.
        match a {
            None => {
                while let Some(e) = free.root() {
                    if breakpts[e] > lambda {
                        break;
                    }
                    a2sum = a2sum - f1;
                    asum = asum - x[e];
                    free.delete_root(breakpts);
                }
            }
            Some(a) => {
                while let Some(e) = free.root() {
                    if breakpts[e] > lambda {
                        break;
                    }
                    let ai = a[e];
                    a2sum = a2sum - ai * ai;
                    asum = asum - x[e] * ai;
                    free.delete_root(breakpts);
                    if free.is_empty() {
                        a2sum = f0;
                        break;
                    }
                }
            }
        }

        // Coordinates leaving their upper bound turn free: they get a fresh
        // lower-bound breakpoint and migrate into the free heap.
        match a {
            None => {
                while let Some(e) = bound.root() {
                    if breakpts[e] > lambda {
                        break;
                    }
                    bound.delete_root(breakpts);
                    a2sum = a2sum + f1;
                    asum = asum + (x[e] - f1);
                    breakpts[e] = x[e];
                    free.add_leaf(e, breakpts);
                }
            }
            Some(a) => {
                while let Some(e) = bound.root() {
                    if breakpts[e] > lambda {
                        break;
                    }
                    bound.delete_root(breakpts);
                    let ai = a[e];
                    a2sum = a2sum + ai * ai;
                    asum = asum + ai * (x[e] - f1);
                    breakpts[e] = x[e] / ai;
                    free.add_leaf(e, breakpts);
                }
            }
        }

        minfree = match free.root() {
            Some(e) => breakpts[e],
            None => inf,
        };
        minbound = match bound.root() {
            Some(e) => breakpts[e],
            None => inf,
        };
    }

    Err(NapError::ExcessIter)
}
