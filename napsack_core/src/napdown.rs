use num_traits::Float;
use crate::heap::{IndirectHeap, MaxFirst};
use crate::nap_error::NapError;

/// Knapsack projection breakpoint search, decreasing direction.
///
/// <script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
/// <script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>
///
/// Finds the multiplier \\(\lambda\\) of the projection of \\(x\\) onto
/// \\(\\{0 \le z \le 1,\ a^T z = b\\}\\), assuming the starting guess
/// `lambda` is \\(\ge\\) the true multiplier, so that \\(\lambda\\) only
/// decreases. The weights must be nonnegative; then each coordinate
/// \\(z_i(\lambda) = {\rm clamp}(x_i - a_i \lambda, 0, 1)\\) is nonincreasing
/// in \\(\lambda\\), and the only bound coordinates that can turn free while
/// \\(\lambda\\) decreases are those clamped at 0.
///
/// Returns `Ok` with the multiplier, or `Err` with [`NapError`] type.
/// * `x` is the target point, read-only (`a^T x` generally differs from `b`).
///   The caller recovers the projected point from the returned multiplier.
/// * `lambda` is the starting guess, an overestimate of the true multiplier.
/// * `a` is the weight vector; `None` means all weights equal one.
/// * `b` is the constraint scalar.
/// * `breakpts` is workspace of length `x.len()` at least.
/// * `bound_heap` and `free_heap` are workspace of length `x.len() + 1` at
///   least. All workspace contents are undefined on return.
pub fn napdown<F: Float>(
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
    let ninf = F::neg_infinity();

    let mut lambda = lambda;
    let mut bound = IndirectHeap::<MaxFirst>::new(bound_heap);
    let mut free = IndirectHeap::<MaxFirst>::new(free_heap);

    // Classify every index under the starting lambda. Coordinates already at
    // their upper bound are folded into asum at once and never tracked again.
    let mut asum = f0;
    let mut a2sum = f0;
    let mut maxbound = ninf;
    let mut maxfree = ninf;

    match a {
        None => {
            for i in 0.. n {
                let xi = x[i] - lambda;
                if xi < f0 {
                    let t = x[i];
                    bound.stage(i);
                    maxbound = maxbound.max(t);
                    breakpts[i] = t;
                }
                else if xi < f1 {
                    let t = x[i] - f1;
                    free.stage(i);
                    asum = asum + x[i];
                    a2sum = a2sum + f1;
                    maxfree = maxfree.max(t);
                    breakpts[i] = t;
                }
                else {
                    asum = asum + f1;
                }
            }
        }
        Some(a) => {
            for i in 0.. n {
                let ai = a[i];
                let xi = x[i] - ai * lambda;
                if xi < f0 {
                    let t = x[i] / ai;
                    bound.stage(i);
                    maxbound = maxbound.max(t);
                    breakpts[i] = t;
                }
                else if xi < f1 {
                    let t = (x[i] - f1) / ai;
                    free.stage(i);
                    asum = asum + x[i] * ai;
                    a2sum = a2sum + ai * ai;
                    maxfree = maxfree.max(t);
                    breakpts[i] = t;
                }
                else {
                    asum = asum + ai;
                }
            }
        }
    }

    let maxsteps = 2 * n + 1;
    for k in 1..= maxsteps {
        // Constraint slope at the next candidate breakpoint; the root is
        // bracketed once it reaches b, or when no breakpoints remain.
        let new_break = maxfree.max(maxbound);
        let s = asum - new_break * a2sum;
        if s >= b || new_break == ninf {
            if a2sum != f0 {
                lambda = (asum - b) / a2sum;
            }
            return Ok(lambda);
        }
        lambda = new_break;

        // Heap order is not needed until the first crossing; most calls
        // return above without one.
        if k == 1 {
            free.build(breakpts);
            bound.build(breakpts);
        }

        // Free coordinates reaching their upper bound leave for good.
        match a {
            None => {
                while let Some(e) = free.root() {
                    if breakpts[e] < lambda {
                        break;
                    }
                    a2sum = a2sum - f1;
                    asum = asum + (f1 - x[e]);
                    free.delete_root(breakpts);
                }
            }
            Some(a) => {
                while let Some(e) = free.root() {
                    if breakpts[e] < lambda {
                        break;
                    }
                    let ai = a[e];
                    a2sum = a2sum - ai * ai;
                    asum = asum + ai * (f1 - x[e]);
                    free.delete_root(breakpts);
                    if free.is_empty() {
                        a2sum = f0;
                        break;
                    }
                }
            }
        }

        // Bound coordinates crossing zero turn free: they get a fresh
        // upper-bound breakpoint and migrate into the free heap.
        match a {
            None => {
                while let Some(e) = bound.root() {
                    if breakpts[e] < lambda {
                        break;
                    }
                    bound.delete_root(breakpts);
                    a2sum = a2sum + f1;
                    asum = asum + x[e];
                    breakpts[e] = x[e] - f1;
                    free.add_leaf(e, breakpts);
                }
            }
            Some(a) => {
                while let Some(e) = bound.root() {
                    if breakpts[e] < lambda {
                        break;
                    }
                    bound.delete_root(breakpts);
                    let ai = a[e];
                    a2sum = a2sum + ai * ai;
                    asum = asum + ai * x[e];
                    breakpts[e] = (x[e] - f1) / ai;
                    free.add_leaf(e, breakpts);
                }
            }
        }

        maxfree = match free.root() {
            Some(e) => breakpts[e],
            None => ninf,
        };
        maxbound = match bound.root() {
            Some(e) => breakpts[e],
            None => ninf,
        };
    }

    Err(NapError::ExcessIter)
}
