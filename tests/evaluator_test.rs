//! Properties of the near-miss evaluator.

use num::BigUint;
use rstest::rstest;

use nearmiss::domain::{evaluate, integer_root, RootMethod};
use nearmiss::util::testing;

fn distance(a: &BigUint, b: &BigUint) -> BigUint {
    if a >= b {
        a - b
    } else {
        b - a
    }
}

#[rstest]
#[case(10, 10, 3)]
#[case(10, 11, 3)]
#[case(64, 95, 5)]
#[case(123, 456, 7)]
#[case(999, 1000, 11)]
#[case(10_000, 9_999, 11)]
fn given_pair_when_evaluating_then_metrics_follow_definition(
    #[case] x: u64,
    #[case] y: u64,
    #[case] n: u32,
    #[values(RootMethod::Float, RootMethod::Exact)] method: RootMethod,
) {
    testing::init_test_setup();
    let c = evaluate(x, y, n, method);

    let expected_sum = BigUint::from(x).pow(n) + BigUint::from(y).pow(n);
    assert_eq!(c.sum, expected_sum);

    let below = distance(&c.sum, &c.z.pow(n));
    let above = distance(&(&c.z + 1u32).pow(n), &c.sum);
    assert_eq!(c.absolute_miss, below.min(above));

    assert!(c.relative_miss >= 0.0 && c.relative_miss < 1.0);
}

#[rstest]
#[case(10, 37, 3)]
#[case(48, 11, 6)]
#[case(250, 1200, 11)]
fn given_swapped_pair_when_evaluating_then_identical_metrics(
    #[case] x: u64,
    #[case] y: u64,
    #[case] n: u32,
) {
    let a = evaluate(x, y, n, RootMethod::Float);
    let b = evaluate(y, x, n, RootMethod::Float);
    assert_eq!(a.sum, b.sum);
    assert_eq!(a.z, b.z);
    assert_eq!(a.absolute_miss, b.absolute_miss);
    assert_eq!(a.relative_miss, b.relative_miss);
}

#[test]
fn given_hand_computed_cube_when_evaluating_then_matches() {
    let c = evaluate(10, 10, 3, RootMethod::Float);
    assert_eq!(c.sum, BigUint::from(2000u32));
    assert_eq!(c.z, BigUint::from(12u32));
    assert_eq!(c.absolute_miss, BigUint::from(197u32));
    assert_eq!(c.relative_miss, 0.0985);
}

#[test]
fn given_huge_bound_when_evaluating_then_no_overflow() {
    let c = evaluate(10_000, 10_000, 11, RootMethod::Float);
    // 2 * 10^44
    let expected = BigUint::from(2u32) * BigUint::from(10u32).pow(44);
    assert_eq!(c.sum, expected);
    assert!(c.sum > BigUint::from(u128::MAX));
    assert!(c.relative_miss < 1.0);
}

#[test]
fn given_float_and_exact_methods_when_scanning_small_range_then_agree() {
    for n in 3..=11u32 {
        for x in 10..=40u64 {
            for y in x..=40u64 {
                let float = evaluate(x, y, n, RootMethod::Float);
                let exact = evaluate(x, y, n, RootMethod::Exact);
                assert_eq!(
                    float.absolute_miss, exact.absolute_miss,
                    "x={x} y={y} n={n}"
                );
            }
        }
    }
}

#[rstest]
#[case(8, 3, 2)]
#[case(1_000_000, 3, 100)]
#[case(1_000_001, 3, 100)]
#[case(999_999, 3, 99)]
fn given_exact_method_when_taking_root_then_floor_root(
    #[case] sum: u64,
    #[case] n: u32,
    #[case] expected: u32,
) {
    assert_eq!(
        integer_root(&BigUint::from(sum), n, RootMethod::Exact),
        BigUint::from(expected)
    );
}
