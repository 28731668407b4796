//! Combinatorial core: factorials, permutations and combinations.
//!
//! All exact results are computed in `u128`. Anything past that range fails
//! with [`MathError::Overflow`] rather than wrapping or saturating, so a
//! widget never displays a silently wrong count. For a rough magnitude of
//! larger factorials use [`factorial_approx`].

use tracing::debug;

use crate::error::{MathError, Result};

/// Largest `n` whose factorial fits in a `u128` (34! ≈ 2.95e38).
pub const MAX_EXACT_FACTORIAL: i64 = 34;

/// Largest `n` whose factorial is finite as an `f64` (170! ≈ 7.26e306).
pub const MAX_APPROX_FACTORIAL: i64 = 170;

/// Compute `n!` exactly.
///
/// # Errors
///
/// Returns `Domain` for negative `n` and `Overflow` for `n > 34`.
///
/// # Examples
///
/// ```
/// use snakemath::combinatorics::factorial;
///
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(MathError::domain(format!(
            "factorial is undefined for negative numbers (got {})",
            n
        )));
    }

    if n > MAX_EXACT_FACTORIAL {
        debug!(n, "factorial beyond exact range");
        return Err(overflow(format!("{}!", n)));
    }

    let mut result: u128 = 1;
    for i in 2..=n as u128 {
        result = result
            .checked_mul(i)
            .ok_or_else(|| overflow(format!("{}!", n)))?;
    }

    Ok(result)
}

/// Best-effort floating point `n!`.
///
/// Exact only while the value stays below 2^53; past 170! the result is
/// `f64::INFINITY`. Use this for display of magnitudes, never for counts.
///
/// # Errors
///
/// Returns `Domain` for negative `n`.
pub fn factorial_approx(n: i64) -> Result<f64> {
    if n < 0 {
        return Err(MathError::domain(format!(
            "factorial is undefined for negative numbers (got {})",
            n
        )));
    }

    if n > MAX_APPROX_FACTORIAL {
        return Ok(f64::INFINITY);
    }

    Ok((2..=n).fold(1.0, |acc, i| acc * i as f64))
}

/// Number of ordered arrangements of `r` items drawn from `n`: `n!/(n-r)!`.
///
/// Computed as the falling product `n·(n-1)···(n-r+1)`, never through two
/// full factorials. Returns 0 when `r < 0` or `r > n`.
///
/// # Errors
///
/// Returns `Overflow` when the count does not fit in a `u128`.
pub fn permutations(n: i64, r: i64) -> Result<u128> {
    if r < 0 || r > n {
        return Ok(0);
    }

    let mut result: u128 = 1;
    for i in 0..r {
        let factor = (n - i) as u128;
        result = result.checked_mul(factor).ok_or_else(|| {
            debug!(n, r, "permutation count overflowed");
            overflow(format!("P({}, {})", n, r))
        })?;
    }

    Ok(result)
}

/// Number of unordered selections of `r` items from `n`: `n!/(r!(n-r)!)`.
///
/// Uses the multiplicative formula over `k = min(r, n-r)` terms. Each step
/// divides out the common factor before multiplying, so intermediates stay
/// no larger than the final answer times `k`. Returns 0 when `r < 0` or
/// `r > n`.
///
/// # Errors
///
/// Returns `Overflow` when the count does not fit in a `u128`.
pub fn combinations(n: i64, r: i64) -> Result<u128> {
    if r < 0 || r > n {
        return Ok(0);
    }

    let k = r.min(n - r);
    let mut result: u128 = 1;
    for i in 0..k {
        // result * (n - i) / (i + 1) is always an integer: it equals C(n, i + 1).
        let numerator = (n - i) as u128;
        let denominator = (i + 1) as u128;
        let g = gcd(result, denominator);
        let reduced = result / g;
        let divisor = denominator / g;
        result = reduced
            .checked_mul(numerator / divisor)
            .ok_or_else(|| {
                debug!(n, r, "combination count overflowed");
                overflow(format!("C({}, {})", n, r))
            })?;
    }

    Ok(result)
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn overflow(operation: String) -> MathError {
    MathError::Overflow {
        operation,
        limit: format!("u128 max ({}! is the largest exact factorial)", MAX_EXACT_FACTORIAL),
    }
}
