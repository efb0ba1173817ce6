//! Numeric helpers shared by the summary components

use crate::error::{PersonanceError, PersonanceResult};
use crate::models::{Money, Record};

/// Validate a record and convert its amount to cents.
///
/// Fails on a blank category or an amount that is NaN, infinite, or too
/// large to represent. Nothing is coerced.
pub fn validated_amount(record: &Record) -> PersonanceResult<Money> {
    if record.category.trim().is_empty() {
        return Err(PersonanceError::invalid_record(
            record.id,
            "category is empty",
        ));
    }

    if !record.amount.is_finite() {
        return Err(PersonanceError::invalid_record(
            record.id,
            format!("amount is not finite ({})", record.amount),
        ));
    }

    Money::from_amount(record.amount).ok_or_else(|| {
        PersonanceError::invalid_record(
            record.id,
            format!("amount {} is out of range", record.amount),
        )
    })
}

/// `part / whole`, or `None` when `whole` is zero
pub fn ratio(part: Money, whole: Money) -> Option<f64> {
    if whole.is_zero() {
        None
    } else {
        Some(part.cents() as f64 / whole.cents() as f64)
    }
}

/// `part / whole * 100` rounded half-up to an integer, 0 when `whole` is zero.
///
/// Computed on integer cents so halves are exact.
pub fn percent_half_up(part: Money, whole: Money) -> i64 {
    if whole.is_zero() {
        return 0;
    }

    let (mut num, mut den) = (part.cents() as i128 * 100, whole.cents() as i128);
    if den < 0 {
        num = -num;
        den = -den;
    }

    // floor(num/den + 1/2)
    (2 * num + den).div_euclid(2 * den) as i64
}

/// Round to a number of decimal places
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10_f64.powi(digits);
    (value * factor).round() / factor
}
