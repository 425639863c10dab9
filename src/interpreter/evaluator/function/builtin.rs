//! The table only calls `-` and `/` with at least one argument. Called
//! directly with none, they fall back to the identities of `+` and `*`.
//!
//! Division by zero is not an error: it yields an infinity or `NaN` exactly as
//! IEEE 754 arithmetic does.

/// Sums all arguments, starting from `0`.
///
/// # Example
/// ```
/// use gleam::interpreter::evaluator::function::builtin::add;
///
/// assert_eq!(add(&[1.0, 2.0, 3.5]), 6.5);
/// assert_eq!(add(&[]), 0.0);
/// ```
#[must_use]
pub fn add(args: &[f64]) -> f64 {
    args.iter().fold(0.0, |acc, x| acc + x)
}

/// Negates a single argument, or subtracts the remaining arguments from the
/// first, left to right.
///
/// # Example
/// ```
/// use gleam::interpreter::evaluator::function::builtin::sub;
///
/// assert_eq!(sub(&[5.0]), -5.0);
/// assert_eq!(sub(&[10.0, 3.0, 2.0]), 5.0);
/// assert_eq!(sub(&[]), 0.0);
/// ```
#[must_use]
pub fn sub(args: &[f64]) -> f64 {
    match args {
        [] => 0.0,
        [only] => -only,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, x| acc - x),
    }
}

/// Multiplies all arguments, starting from `1`.
#[must_use]
pub fn mul(args: &[f64]) -> f64 {
    args.iter().fold(1.0, |acc, x| acc * x)
}

/// Divides the first argument by each of the remaining ones, left to right.
///
/// A single argument is returned unchanged.
///
/// # Example
/// ```
/// use gleam::interpreter::evaluator::function::builtin::div;
///
/// assert_eq!(div(&[8.0]), 8.0);
/// assert_eq!(div(&[100.0, 5.0, 2.0]), 10.0);
/// assert!(div(&[1.0, 0.0]).is_infinite());
/// assert!(div(&[0.0, 0.0]).is_nan());
/// assert_eq!(div(&[]), 1.0);
/// ```
#[must_use]
pub fn div(args: &[f64]) -> f64 {
    let Some((first, rest)) = args.split_first() else {
        return 1.0;
    };
    rest.iter().fold(*first, |acc, x| acc / x)
}
