/*!
Algorithmic core of the continuous knapsack projection.

<script src="https://polyfill.io/v3/polyfill.min.js?features=es6"></script>
<script id="MathJax-script" async src="https://cdn.jsdelivr.net/npm/mathjax@3/es5/tex-mml-chtml.js"></script>

Given a target point \\(y \in \mathbb{R}^n\\), a weight vector
\\(a \ge 0\\) and a scalar \\(b\\), the projection problem is
\\[
\begin{array}{ll}
{\rm minimize} & \\|x - y\\|^2 \\\\
{\rm subject \ to} & 0 \le x \le 1, \quad a^T x = b.
\end{array}
\\]
Its solution has the closed form \\(x_i = {\rm clamp}(y_i - a_i \lambda, 0, 1)\\)
where \\(\lambda\\) is the Lagrange multiplier of the equality constraint.
[`napdown`] and [`napup`] find \\(\lambda\\) by a dual breakpoint search,
given a starting guess known to over- or under-estimate it respectively.

This crate is `no_std`: it performs no allocation, no I/O and no logging.
All working storage is caller-supplied ([`IndirectHeap`] index slices and a
breakpoint slice), so one set of buffers can serve many solver calls.

# Examples

```
use float_eq::assert_float_eq;
use napsack_core::{napdown, NapError};

let y = [0.9, 0.5, 0.2];

let mut breakpts = [0.0; 3];
let mut bound_heap = [0; 4];
let mut free_heap = [0; 4];

// 1.0 overestimates the true multiplier, so the decreasing search applies.
let lambda = napdown(&y, 1.0, None, 1.0,
                     &mut breakpts, &mut bound_heap, &mut free_heap)?;

assert_float_eq!(lambda, 0.2, abs <= 1e-9);
# Ok::<(), NapError>(())
```
*/

#![no_std]

mod heap;

pub use heap::*;

//

mod nap_error;

pub use nap_error::*;

//

mod napdown;

pub use napdown::*;

//

mod napup;

pub use napup::*;
