/*!
Continuous knapsack projection: the Euclidean projection of a point onto
the box-constrained, singly-weighted simplex.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

This crate drives the breakpoint searches of [`napsack_core`] to solve
\\[
\begin{array}{ll}
{\rm minimize} & \\|x - y\\|^2 \\\\
{\rm subject \ to} & 0 \le x \le 1, \quad a^T x = b,
\end{array}
\\]
the per-pass bottleneck of quadratic-programming boundary refinement in
graph partitioning. The projected point is fully determined by the dual
multiplier \\(\lambda\\) of the equality constraint through
\\(x_i = {\rm clamp}(y_i - a_i \lambda, 0, 1)\\), so the solver returns
nothing but that scalar; [`recover`] applies the clamp formula.

# General usage

1. Allocate a [`NapWorkspace`] once, sized to the largest expected `n`.
1. Create a [`Napsack`] instance.
1. Call [`Napsack::project`] with the target point, optional weights, the
   constraint scalar and a multiplier guess (any value works; a guess
   carried over from the previous refinement pass converges fastest).
1. Recover the projected point with [`recover`], reusing the workspace for
   every subsequent call.

# Examples

```
use float_eq::assert_float_eq;
use napsack::prelude::*;
use napsack::recover;

//env_logger::init(); // Use any logger crate as `napsack` uses `log` crate.

let y = [0.9, 0.5, 0.2];
let b = 1.0;

let mut ws = NapWorkspace::new(y.len());
let lambda = Napsack::new().project(&y, None, b, 1.0, &mut ws).unwrap();

let mut x = [0.0; 3];
recover(&mut x, &y, None, lambda);

assert_float_eq!(x.iter().sum::<f64>(), b, abs <= 1e-9);
```
*/

mod workspace;

pub use workspace::*;

//

mod projection;

pub use projection::*;

//

/// Prelude
pub mod prelude
{
    pub use napsack_core::{napdown, napup, NapError};
    pub use crate::{Napsack, NapWorkspace};
}
