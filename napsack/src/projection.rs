use core::fmt::Debug;
use core::marker::PhantomData;
use num_traits::Float;
use napsack_core::{napdown, napup, NapError};
use crate::NapWorkspace;

//

/// Recovers the projected point from the dual multiplier.
///
/// Applies \\(x_i = {\rm clamp}(y_i - a_i \lambda, 0, 1)\\), with
/// \\(a_i = 1\\) when `a` is `None`. `x` and `y` shall have the same length.
pub fn recover<F: Float>(x: &mut [F], y: &[F], a: Option<&[F]>, lambda: F)
{
    assert_eq!(x.len(), y.len());

    let f0 = F::zero();
    let f1 = F::one();

    match a {
        None => {
            for (v, &yi) in x.iter_mut().zip(y) {
                *v = (yi - lambda).max(f0).min(f1);
            }
        }
        Some(a) => {
            assert_eq!(a.len(), y.len());
            for (i, v) in x.iter_mut().enumerate() {
                *v = (y[i] - a[i] * lambda).max(f0).min(f1);
            }
        }
    }
}

/// Signed constraint residual \\(a^T {\rm clamp}(y - a \lambda, 0, 1) - b\\)
/// at a given multiplier.
///
/// Nonincreasing in `lambda`; zero at the true multiplier. The refinement
/// loop uses it to judge the quality of a carried-over guess, and
/// [`Napsack::project`] uses its sign to pick the search direction.
pub fn residual<F: Float>(y: &[F], a: Option<&[F]>, b: F, lambda: F) -> F
{
    let f0 = F::zero();
    let f1 = F::one();

    let mut s = f0;
    match a {
        None => {
            for &yi in y {
                s = s + (yi - lambda).max(f0).min(f1);
            }
        }
        Some(a) => {
            assert_eq!(a.len(), y.len());
            for (&yi, &ai) in y.iter().zip(a) {
                s = s + ai * (yi - ai * lambda).max(f0).min(f1);
            }
        }
    }
    s - b
}

//

/// Continuous knapsack projection driver.
///
/// Measures the estimation direction of the caller's multiplier guess and
/// dispatches to [`napdown`] (guess too high) or [`napup`] (guess too low),
/// so no caller-side promise about the guess is needed. Callers that do know
/// the direction may invoke the core searches directly and skip one residual
/// evaluation.
pub struct Napsack<F>
{
    ph_f: PhantomData<F>,
}

impl<F: Float + Debug> Napsack<F>
{
    /// Creates an instance.
    ///
    /// Returns [`Napsack`] instance.
    pub fn new() -> Self
    {
        Napsack {
            ph_f: PhantomData,
        }
    }

    /// Solves one projection, returning the dual multiplier.
    ///
    /// Returns `Ok` with the multiplier \\(\lambda\\) such that
    /// \\({\rm clamp}(y - a \lambda, 0, 1)\\) is the projection of `y`,
    /// or `Err` with [`NapError`] type.
    /// * `y` is the point being projected, not modified.
    /// * `a` is the weight vector, all entries nonnegative; `None` means all
    ///   weights equal one.
    /// * `b` is the constraint scalar.
    /// * `lambda` is the multiplier guess to start the search from.
    /// * `ws` is the reusable workspace, grown on demand.
    pub fn project(
        &self,
        y: &[F],
        a: Option<&[F]>,
        b: F,
        lambda: F,
        ws: &mut NapWorkspace<F>,
    ) -> Result<F, NapError>
    {
        let n = y.len();
        let f0 = F::zero();

        if let Some(a) = a {
            assert_eq!(a.len(), n);
            for (i, &ai) in a.iter().enumerate() {
                if !(ai >= f0) {
                    log::error!("weight [{}] = {:?} must be nonnegative", i, ai);
                    return Err(NapError::BadWeight);
                }
            }
        }

        ws.reserve(n);
        let (breakpts, bound_heap, free_heap) = ws.split_mut();

        let r = residual(y, a, b, lambda);
        let rslt = if r > f0 {
            log::debug!("residual {:?} > 0 at guess {:?}: napup", r, lambda);
            napup(y, lambda, a, b, breakpts, bound_heap, free_heap)
        }
        else if r < f0 {
            log::debug!("residual {:?} < 0 at guess {:?}: napdown", r, lambda);
            napdown(y, lambda, a, b, breakpts, bound_heap, free_heap)
        }
        else {
            // The guess already satisfies the constraint.
            Ok(lambda)
        };

        match rslt {
            Ok(lambda) => {
                log::debug!("lambda = {:?}", lambda);
                Ok(lambda)
            }
            Err(e) => {
                log::error!("projection failed: {}", e);
                Err(e)
            }
        }
    }
}
