use float_eq::assert_float_eq;
use napsack::prelude::*;
use napsack::{recover, residual};

//

// Small deterministic LCG so the tests stay reproducible without an RNG crate.
struct Lcg(u64);

impl Lcg
{
    fn next_f64(&mut self) -> f64
    {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((self.0 >> 11) as f64) / ((1u64 << 53) as f64)
    }
}

// Brute-force reference: bisection directly on the residual, which is
// nonincreasing in lambda.
fn bisect(y: &[f64], a: Option<&[f64]>, b: f64) -> f64
{
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for i in 0.. y.len() {
        let ai = a.map_or(1.0, |a| a[i]);
        if ai > 0.0 {
            lo = lo.min((y[i] - 1.0) / ai);
            hi = hi.max(y[i] / ai);
        }
    }
    if !lo.is_finite() {
        return 0.0;
    }

    let mut lo = lo - 1.0;
    let mut hi = hi + 1.0;
    for _ in 0.. 200 {
        let mid = 0.5 * (lo + hi);
        if residual(y, a, b, mid) > 0.0 {
            lo = mid;
        }
        else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}

fn compare_with_bisect(y: &[f64], a: Option<&[f64]>, b: f64, guess: f64, ws: &mut NapWorkspace<f64>)
{
    let lambda = Napsack::new().project(y, a, b, guess, ws).unwrap();
    let lambda_ref = bisect(y, a, b);

    let mut x = vec![0.0; y.len()];
    let mut x_ref = vec![0.0; y.len()];
    recover(&mut x, y, a, lambda);
    recover(&mut x_ref, y, a, lambda_ref);

    assert_float_eq!(x.as_slice(), x_ref.as_slice(), abs_all <= 1e-9);
}

//

#[test]
fn test_napsack1()
{
    let _ = env_logger::builder().is_test(true).try_init();

    let y = [0.9, 0.5, 0.2];
    let b = 1.0;

    let mut ws = NapWorkspace::new(y.len());
    let lambda = Napsack::new().project(&y, None, b, 1.0, &mut ws).unwrap();

    let mut x = [0.0; 3];
    recover(&mut x, &y, None, lambda);

    assert_float_eq!(x.iter().sum::<f64>(), b, abs <= 1e-9);
    for v in x {
        assert!((0.0..= 1.0).contains(&v));
    }
    assert_float_eq!(x.as_ref(), [0.7, 0.3, 0.0].as_ref(), abs_all <= 1e-9);
}

#[test]
fn test_napsack_single_element()
{
    let y = [0.5];
    let a = [1.0];

    let mut ws = NapWorkspace::new(1);
    let lambda = Napsack::new().project(&y, Some(&a), 0.5, 1.0, &mut ws).unwrap();

    let mut x = [0.0];
    recover(&mut x, &y, Some(&a), lambda);
    assert_float_eq!(x[0], 0.5, abs <= 1e-9);
    assert_float_eq!(lambda, 0.0, abs <= 1e-9);
}

#[test]
fn test_napsack_idempotent_on_feasible_point()
{
    let y = [0.25, 0.5, 0.75];
    let b = 1.5;
    assert_float_eq!(residual(&y, None, b, 0.0), 0.0, abs <= 1e-15);

    let mut ws = NapWorkspace::new(y.len());
    let s = Napsack::new();
    for guess in [-0.8, 0.0, 0.7] {
        let lambda = s.project(&y, None, b, guess, &mut ws).unwrap();

        let mut x = [0.0; 3];
        recover(&mut x, &y, None, lambda);
        assert_float_eq!(x.as_ref(), y.as_ref(), abs_all <= 1e-9);
    }
}

#[test]
fn test_napsack_both_directions_agree()
{
    let y = [0.9, 0.1, 0.4, 0.8, 0.3];
    let a = [1.5, 0.5, 1.0, 2.0, 0.25];
    let b = 2.0;

    let mut ws = NapWorkspace::new(y.len());
    let s = Napsack::new();

    // An overestimating and an underestimating guess dispatch to opposite
    // searches; the projected point must come out the same.
    let lambda_dn = s.project(&y, Some(&a), b, 5.0, &mut ws).unwrap();
    let lambda_up = s.project(&y, Some(&a), b, -5.0, &mut ws).unwrap();

    let mut x_dn = [0.0; 5];
    let mut x_up = [0.0; 5];
    recover(&mut x_dn, &y, Some(&a), lambda_dn);
    recover(&mut x_up, &y, Some(&a), lambda_up);
    assert_float_eq!(x_dn.as_ref(), x_up.as_ref(), abs_all <= 1e-9);
    assert_float_eq!(residual(&y, Some(&a), b, lambda_dn), 0.0, abs <= 1e-9);
}

#[test]
fn test_napsack_random_unweighted()
{
    let _ = env_logger::builder().is_test(true).try_init();
    let mut rng = Lcg(11);

    let mut ws = NapWorkspace::new(3000);
    for n in [1, 2, 7, 100, 1000, 3000] {
        for _ in 0.. 8 {
            let y: Vec<f64> = (0.. n).map(|_| rng.next_f64() * 4.0 - 2.0).collect();
            let b = rng.next_f64() * n as f64;
            let guess = rng.next_f64() * 4.0 - 2.0;
            compare_with_bisect(&y, None, b, guess, &mut ws);
        }
    }
}

#[test]
fn test_napsack_random_weighted()
{
    let mut rng = Lcg(13);

    let mut ws = NapWorkspace::new(3000);
    for n in [1, 2, 7, 100, 1000, 3000] {
        for _ in 0.. 8 {
            let y: Vec<f64> = (0.. n).map(|_| rng.next_f64() * 4.0 - 2.0).collect();
            let a: Vec<f64> = (0.. n).map(|_| rng.next_f64() * 3.0).collect();
            let asum: f64 = a.iter().sum();
            let b = rng.next_f64() * asum;
            let guess = rng.next_f64() * 4.0 - 2.0;
            compare_with_bisect(&y, Some(&a), b, guess, &mut ws);
        }
    }
}

#[test]
fn test_napsack_workspace_reuse_and_growth()
{
    let mut rng = Lcg(17);

    // Deliberately undersized; project grows it on demand.
    let mut ws = NapWorkspace::new(0);
    for n in [3, 1, 50, 20, 200] {
        let y: Vec<f64> = (0.. n).map(|_| rng.next_f64() * 4.0 - 2.0).collect();
        let b = rng.next_f64() * n as f64;
        compare_with_bisect(&y, None, b, 0.0, &mut ws);
        assert!(ws.capacity() >= n);
    }
}

#[test]
fn test_napsack_bad_weight()
{
    let y = [0.5, 0.5];
    let a = [1.0, -0.25];

    let mut ws = NapWorkspace::new(2);
    let rslt = Napsack::new().project(&y, Some(&a), 0.5, 0.0, &mut ws);
    assert_eq!(rslt, Err(NapError::BadWeight));
}

#[test]
fn test_core_work_shortage()
{
    let y = [0.5, 0.5];
    let mut breakpts = [0.0; 1]; // one short
    let mut bound_heap = [0; 3];
    let mut free_heap = [0; 3];

    let rslt = napdown(&y, 1.0, None, 0.5, &mut breakpts, &mut bound_heap, &mut free_heap);
    assert_eq!(rslt, Err(NapError::WorkShortage));

    let rslt = napup(&y, -1.0, None, 0.5, &mut breakpts, &mut bound_heap, &mut free_heap);
    assert_eq!(rslt, Err(NapError::WorkShortage));
}

// When the free set is (or becomes) empty with a vanishing quadratic sum,
// the search leaves lambda at the last candidate breakpoint instead of
// recomputing it. Both searches pin that behavior.

#[test]
fn test_napdown_zero_quadratic_sum_keeps_guess()
{
    let y = [2.0, -1.0];
    let b = 1.0;

    let mut breakpts = [0.0; 2];
    let mut bound_heap = [0; 3];
    let mut free_heap = [0; 3];

    // Index 0 starts fixed at 1, index 1 bound at 0; the slope already
    // brackets b with nothing free, so the guess comes back untouched.
    let lambda = napdown(&y, 0.5, None, b, &mut breakpts, &mut bound_heap, &mut free_heap).unwrap();
    assert_eq!(lambda, 0.5);

    let mut x = [0.0; 2];
    recover(&mut x, &y, None, lambda);
    assert_float_eq!(x.iter().sum::<f64>(), b, abs <= 1e-9);
}

#[test]
fn test_napdown_zero_quadratic_sum_keeps_last_breakpoint()
{
    // b exceeds the feasible maximum; every coordinate drains to its upper
    // bound and the last breakpoint is returned as-is.
    let y = [0.3];
    let b = 2.0;

    let mut breakpts = [0.0; 1];
    let mut bound_heap = [0; 2];
    let mut free_heap = [0; 2];

    let lambda = napdown(&y, 0.0, None, b, &mut breakpts, &mut bound_heap, &mut free_heap).unwrap();
    assert_eq!(lambda, y[0] - 1.0);

    let mut x = [0.0];
    recover(&mut x, &y, None, lambda);
    assert_eq!(x[0], 1.0);
}

#[test]
fn test_napup_zero_quadratic_sum_keeps_last_breakpoint()
{
    // b below the feasible minimum; the mirror case of the napdown test.
    let y = [0.5];
    let b = -1.0;

    let mut breakpts = [0.0; 1];
    let mut bound_heap = [0; 2];
    let mut free_heap = [0; 2];

    let lambda = napup(&y, -2.0, None, b, &mut breakpts, &mut bound_heap, &mut free_heap).unwrap();
    assert_eq!(lambda, y[0]);

    let mut x = [0.0];
    recover(&mut x, &y, None, lambda);
    assert_eq!(x[0], 0.0);
}

#[test]
fn test_napsack_empty()
{
    let y: [f64; 0] = [];

    let mut ws = NapWorkspace::new(0);
    let lambda = Napsack::new().project(&y, None, 0.0, 0.7, &mut ws).unwrap();
    assert_eq!(lambda, 0.7);
}
