use super::*;

#[test]
fn test_to_decimal_precision() {
    // 0.1 + 0.2 != 0.3 in f64
    let sum_f64 = 0.1_f64 + 0.2_f64;
    assert_ne!(sum_f64, 0.3);

    let sum_dec = to_decimal(0.1) + to_decimal(0.2);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_accumulation_precision() {
    let mut total = Decimal::ZERO;
    for _ in 0..1000 {
        total += to_decimal(0.01);
    }
    assert_eq!(to_f64(total), 10.0);
}

#[test]
fn test_round_price_half_away_from_zero() {
    assert_eq!(round_price(9.995), 10.0);
    assert_eq!(round_price(-9.995), -10.0);
    assert_eq!(round_price(2.345), 2.35);
    assert_eq!(round_price(2.344), 2.34);
    assert_eq!(round_price(3.5), 3.5);
    assert_eq!(round_price(0.0), 0.0);
}

#[test]
fn test_round_price_non_finite() {
    assert_eq!(round_price(f64::NAN), 0.0);
    assert_eq!(round_price(f64::INFINITY), 0.0);
}

#[test]
fn test_sum_amounts() {
    assert_eq!(sum_amounts([Some(4.5), Some(10.0)]), 14.5);
    assert_eq!(sum_amounts([Some(4.5), None, Some(0.25)]), 4.75);
    assert_eq!(sum_amounts(Vec::<Option<f64>>::new()), 0.0);
    assert_eq!(sum_amounts([Some(0.1), Some(0.2)]), 0.3);
}
