//! Near-miss evaluation of a single `(x, y)` pair.

use num::{BigInt, BigRational, BigUint, FromPrimitive, ToPrimitive};
use tracing::trace;

use crate::domain::{Candidate, RootMethod};

/// Integer estimate of `S^(1/n)`.
///
/// `RootMethod::Float` truncates the floating-point power and may be off by one or
/// more near exact powers; `RootMethod::Exact` returns the true floor root.
pub fn integer_root(sum: &BigUint, n: u32, method: RootMethod) -> BigUint {
    match method {
        RootMethod::Exact => sum.nth_root(n),
        RootMethod::Float => float_root(sum, n).unwrap_or_else(|| {
            trace!("float root unavailable for {} bits, using exact", sum.bits());
            sum.nth_root(n)
        }),
    }
}

fn float_root(sum: &BigUint, n: u32) -> Option<BigUint> {
    let value = sum.to_f64().filter(|v| v.is_finite())?;
    let root = value.powf(1.0 / f64::from(n));
    BigUint::from_f64(root.trunc())
}

fn distance(a: &BigUint, b: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

/// Compute the near-miss metrics of `x^n + y^n`.
///
/// Callers keep `x, y >= 10` and `n` within `[3, 11]`; all power and difference
/// arithmetic is exact.
pub fn evaluate(x: u64, y: u64, n: u32, method: RootMethod) -> Candidate {
    let sum = BigUint::from(x).pow(n) + BigUint::from(y).pow(n);
    let z = integer_root(&sum, n, method);

    let below = distance(&sum, &z.pow(n));
    let above = distance(&(&z + 1u32).pow(n), &sum);
    let absolute_miss = below.min(above);

    // one correctly rounded division of the exact ratio
    let relative_miss = BigRational::new(
        BigInt::from(absolute_miss.clone()),
        BigInt::from(sum.clone()),
    )
    .to_f64()
    .unwrap_or(0.0);

    Candidate {
        x,
        y,
        exponent: n,
        z,
        sum,
        absolute_miss,
        relative_miss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_ten_ten_cubed_when_evaluating_then_matches_hand_computation() {
        let c = evaluate(10, 10, 3, RootMethod::Float);
        assert_eq!(c.sum, BigUint::from(2000u32));
        assert_eq!(c.z, BigUint::from(12u32));
        assert_eq!(c.absolute_miss, BigUint::from(197u32));
        assert!((c.relative_miss - 0.0985).abs() < 1e-15);
    }

    #[test]
    fn given_perfect_cube_when_float_root_then_underestimates_by_one() {
        let sum = BigUint::from(1000u32);
        assert_eq!(integer_root(&sum, 3, RootMethod::Float), BigUint::from(9u32));
        assert_eq!(integer_root(&sum, 3, RootMethod::Exact), BigUint::from(10u32));
    }

    #[test]
    fn given_exact_root_when_evaluating_then_brackets_sum() {
        let c = evaluate(123, 77, 7, RootMethod::Exact);
        assert!(c.z.pow(7) <= c.sum);
        assert!((&c.z + 1u32).pow(7) > c.sum);
    }

    #[test]
    fn given_sum_beyond_f64_mantissa_when_evaluating_then_relative_miss_rounds_once() {
        // 66823956173293 / 9551703763611155; dividing the two rounded operands
        // lands one ulp low at 0.006996024774959024
        let c = evaluate(148, 187, 7, RootMethod::Float);
        assert_eq!(c.absolute_miss, BigUint::from(66_823_956_173_293u64));
        assert_eq!(c.sum, BigUint::from(9_551_703_763_611_155u64));
        assert_eq!(c.relative_miss, 0.006996024774959025);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = BigUint::from(5u32);
        let b = BigUint::from(12u32);
        assert_eq!(distance(&a, &b), BigUint::from(7u32));
        assert_eq!(distance(&b, &a), BigUint::from(7u32));
    }
}
