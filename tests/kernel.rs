use kalkulacka::kernel::{
    DomainError,
    arith::{div, factorial, floor_div_rem, round_to},
    constants::{arctan, e, pi},
    logarithm::{ln, log},
    power::{exp, power},
    roots::{cbrt, nthroot, sqrt},
    stats::{mean, sample_std_dev, sum},
    trig::{cos, cotg, sin, tg},
};

const TOLERANCE: f64 = 1e-12;

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < TOLERANCE,
            "expected {expected}, got {actual}");
}

#[test]
fn constants_match_their_known_values() {
    assert_close(e(), std::f64::consts::E);
    assert_close(pi(), std::f64::consts::PI);
}

#[test]
fn arctangent_reflects_large_arguments() {
    assert_eq!(arctan(0.0), 0.0);
    assert_close(arctan(1.0), std::f64::consts::FRAC_PI_4);
    assert_close(arctan(0.5), 0.463_647_609_000_806_1);
    assert_close(arctan(2.0), 1.107_148_717_794_090_4);
    assert_close(arctan(-2.0), -1.107_148_717_794_090_4);
}

#[test]
fn logarithms() {
    assert_eq!(ln(1.0), Ok(0.0));
    assert_close(ln(2.0).unwrap(), std::f64::consts::LN_2);
    assert_close(ln(e()).unwrap(), 1.0);
    assert_close(ln(0.5).unwrap(), -std::f64::consts::LN_2);
    assert_close(log(8.0, 2.0).unwrap(), 3.0);
    assert_close(log(1000.0, 10.0).unwrap(), 3.0);

    assert_eq!(ln(0.0), Err(DomainError::NonPositiveLogarithm));
    assert_eq!(ln(-1.0), Err(DomainError::NonPositiveLogarithm));
    assert!((ln(1e-310).unwrap() / (-310.0 * std::f64::consts::LN_10) - 1.0).abs() < 1e-14);
    assert_close(ln(f64::from_bits(1)).unwrap(), -744.440_071_921_381_3);

    assert_eq!(log(8.0, 1.0), Err(DomainError::InvalidLogarithmBase));
    assert_eq!(log(8.0, -2.0), Err(DomainError::InvalidLogarithmBase));
}

#[test]
fn exponentials_and_powers() {
    assert_eq!(exp(0.0), Ok(1.0));
    assert_close(exp(1.0).unwrap(), std::f64::consts::E);
    assert_close(exp(-1.0).unwrap(), 1.0 / std::f64::consts::E);

    assert_eq!(power(2.0, 10.0), Ok(1024.0));
    assert_eq!(power(-2.0, 3.0), Ok(-8.0));
    assert_eq!(power(5.0, 0.0), Ok(1.0));
    assert_close(power(2.0, 0.5).unwrap(), std::f64::consts::SQRT_2);
    assert_close(power(9.0, 0.5).unwrap(), 3.0);

    assert_eq!(power(0.0, -1.0), Err(DomainError::DivisionByZero));
    assert_eq!(power(-8.0, 1.0 / 3.0), Err(DomainError::ComplexResult));
    assert_eq!(power(10.0, 400.0), Err(DomainError::Overflow));
    assert_eq!(exp(1000.0), Err(DomainError::Overflow));
}

#[test]
fn extreme_integral_exponents() {
    assert_eq!(power(10.0, -400.0), Ok(0.0));
    assert_eq!(power(2.0, -1074.0), Ok(f64::from_bits(1)));
    assert!(power(10.0, -309.0).unwrap() > 0.0);
    assert_eq!(power(0.5, 1074.0), Ok(f64::from_bits(1)));
    assert_eq!(power(1e-300, -2.0), Err(DomainError::Overflow));

    assert_eq!(power(-1.0, 1e17), Ok(1.0));
    assert_eq!(power(-0.5, 1e17), Ok(0.0));
    assert_eq!(power(0.0, 1e17), Ok(0.0));
    assert_eq!(power(-2.0, 1e17), Err(DomainError::Overflow));
    assert_eq!(power(0.0, -1e17), Err(DomainError::DivisionByZero));
}

#[test]
fn roots_snap_to_integers() {
    assert_eq!(sqrt(16.0), Ok(4.0));
    assert_eq!(sqrt(0.0), Ok(0.0));
    assert_eq!(sqrt(0.25), Ok(0.5));
    assert_eq!(sqrt(2.0), Ok(1.414_213_562_4));
    assert_eq!(nthroot(27.0, 3.0), Ok(3.0));
    assert_eq!(nthroot(16.0, 4.0), Ok(2.0));
    assert_eq!(nthroot(-8.0, 3.0), Ok(-2.0));
    assert_eq!(cbrt(-27.0), Ok(-3.0));

    assert!((sqrt(200_000_000_000_000.0).unwrap() - 14_142_135.623_730_95).abs() < 1e-8);
    assert!((sqrt(123_456_789.0).unwrap() - 11_111.111_060_555_6).abs() < 1e-10);
    assert!((nthroot(2e15, 3.0).unwrap() - 125_992.104_989_487_3).abs() < 1e-9);
    assert!((cbrt(-2e15).unwrap() + 125_992.104_989_487_3).abs() < 1e-9);

    assert_eq!(sqrt(-1.0), Err(DomainError::NegativeSquareRoot));
    assert_eq!(nthroot(-16.0, 4.0), Err(DomainError::EvenRootOfNegative));
    assert_eq!(nthroot(2.0, 0.0), Err(DomainError::DivisionByZero));
}

#[test]
fn trigonometry_in_degrees() {
    assert_eq!(sin(0.0), Ok(0.0));
    assert_eq!(sin(90.0), Ok(1.0));
    assert_eq!(sin(270.0), Ok(-1.0));
    assert_eq!(sin(-90.0), Ok(-1.0));
    assert_eq!(cos(0.0), Ok(1.0));
    assert_eq!(cos(180.0), Ok(-1.0));
    assert_eq!(cos(-360.0), Ok(1.0));
    assert_close(sin(30.0).unwrap(), 0.5);
    assert_close(cos(60.0).unwrap(), 0.5);
    assert_close(sin(45.0).unwrap(), std::f64::consts::FRAC_1_SQRT_2);
    assert_close(tg(45.0).unwrap(), 1.0);
    assert_close(cotg(45.0).unwrap(), 1.0);

    assert_eq!(tg(90.0), Err(DomainError::UndefinedTangent));
    assert_eq!(tg(-270.0), Err(DomainError::UndefinedTangent));
    assert_eq!(cotg(0.0), Err(DomainError::UndefinedCotangent));
    assert_eq!(cotg(180.0), Err(DomainError::UndefinedCotangent));
}

#[test]
fn factorials() {
    assert_eq!(factorial(0.0), Ok(1.0));
    assert_eq!(factorial(10.0), Ok(3_628_800.0));
    assert_eq!(factorial(20.0), Ok(2_432_902_008_176_640_000.0));

    assert_eq!(factorial(-3.0), Err(DomainError::NegativeFactorial));
    assert_eq!(factorial(2.5), Err(DomainError::FractionalFactorial));
    assert_eq!(factorial(171.0), Err(DomainError::Overflow));
}

#[test]
fn division() {
    assert_eq!(div(7.0, 2.0), Ok(3.5));
    assert_eq!(div(1.0, 0.0), Err(DomainError::DivisionByZero));

    assert_eq!(floor_div_rem(7, 2), Ok((3, 1)));
    assert_eq!(floor_div_rem(-7, 2), Ok((-4, 1)));
    assert_eq!(floor_div_rem(7, -2), Ok((-4, -1)));
    assert_eq!(floor_div_rem(-7, -2), Ok((3, -1)));
    assert_eq!(floor_div_rem(1, 0), Err(DomainError::DivisionByZero));
    assert_eq!(floor_div_rem(i64::MIN, -1), Err(DomainError::Overflow));
}

#[test]
fn rounding() {
    assert_eq!(round_to(0.1 + 0.2, 10), 0.3);
    assert_eq!(round_to(2.5, 0), 3.0);
    assert_eq!(round_to(-2.5, 0), -3.0);
}

#[test]
fn statistics() {
    assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
    assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
    assert_eq!(sample_std_dev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), Ok(2.138_089_935_3));
    assert_eq!(sample_std_dev(&[3.0, 3.0, 3.0]), Ok(0.0));

    assert_eq!(mean(&[]), Err(DomainError::InsufficientData));
    assert_eq!(sample_std_dev(&[1.0]), Err(DomainError::InsufficientData));
}
